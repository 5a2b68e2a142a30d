use crate::{booking::Booking, shared::entity::ResourceId};
use serde::{Deserialize, Serialize};

/// Role carried in the bearer token of a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees every booking of the tenant
    Superuser,
    Admin,
    Staff,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Only the elevated role gets the tenant wide view of bookings
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Superuser)
    }

    /// Roles that are allowed to read bookings at all
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Superuser | Self::Admin | Self::Staff)
    }
}

/// The authenticated caller of a protected route
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub user_id: ResourceId,
    pub role: Role,
}

/// Which bookings a `Requester` is allowed to see
#[derive(Debug, Clone, PartialEq)]
pub enum BookingScope {
    All,
    Resource(ResourceId),
}

impl Requester {
    pub fn booking_scope(&self) -> BookingScope {
        if self.role.is_elevated() {
            BookingScope::All
        } else {
            BookingScope::Resource(self.user_id.clone())
        }
    }

    pub fn can_view(&self, booking: &Booking) -> bool {
        match self.booking_scope() {
            BookingScope::All => true,
            BookingScope::Resource(resource_id) => booking.is_assigned_to(&resource_id),
        }
    }
}
