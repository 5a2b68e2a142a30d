use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created: i64,
}

impl Customer {
    /// Contact values are stored trimmed so later lookups compare equal
    pub fn new(contact: ContactDetails, created: i64) -> Self {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());
        Self {
            id: Default::default(),
            name: contact.name,
            email: trimmed(contact.email),
            phone: trimmed(contact.phone),
            created,
        }
    }
}

impl Entity for Customer {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Contact fields given with a booking request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// How an existing `Customer` matched some `ContactDetails`.
///
/// Ordered by priority: a phone match wins over an email match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactMatch {
    Phone,
    Email,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ContactDetails {
    /// Phone to look customers up by, blank values never match
    pub fn lookup_phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    /// Email to look customers up by, blank values never match
    pub fn lookup_email(&self) -> Option<&str> {
        non_blank(&self.email)
    }

    pub fn has_lookup_key(&self) -> bool {
        self.lookup_phone().is_some() || self.lookup_email().is_some()
    }

    pub fn match_against(&self, customer: &Customer) -> Option<ContactMatch> {
        let phone = self.lookup_phone();
        if phone.is_some() && phone == non_blank(&customer.phone) {
            return Some(ContactMatch::Phone);
        }
        let email = self.lookup_email();
        if email.is_some() && email == non_blank(&customer.email) {
            return Some(ContactMatch::Email);
        }
        None
    }
}
