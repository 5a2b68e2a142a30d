use super::ICustomerRepo;
use crate::repos::shared::inmemory_repo::*;
use barber_booking_domain::{ContactDetails, Customer};
use std::sync::Mutex;

pub struct InMemoryCustomerRepo {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepo {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for InMemoryCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        insert(customer, &self.customers)
    }

    async fn find_by_contact(&self, contact: &ContactDetails) -> anyhow::Result<Option<Customer>> {
        let customers = lock(&self.customers)?;
        Ok(customers
            .iter()
            .filter_map(|c| contact.match_against(c).map(|m| (m, c)))
            .min_by_key(|(m, c)| (*m, c.created))
            .map(|(_, c)| c.clone()))
    }
}
