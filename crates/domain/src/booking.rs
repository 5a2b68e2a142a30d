use crate::{
    duration::total_minutes,
    schedule::ScheduleSlot,
    service_line::ServiceLines,
    shared::entity::{Entity, ResourceId, ID},
};
use serde_json::Value;

/// An appointment with a resource for one or more services.
///
/// `schedule` holds date and time together so a `Booking` can never have
/// only one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    /// The provider the booking is assigned to
    pub resource_id: Option<ResourceId>,
    pub services: ServiceLines,
    pub schedule: Option<ScheduleSlot>,
    pub customer_id: ID,
    /// Opaque payload supplied by the client
    pub validation: Value,
    pub total_price: Option<f64>,
    pub created: i64,
}

impl Booking {
    pub fn new(
        resource_id: Option<ResourceId>,
        services: ServiceLines,
        schedule: ScheduleSlot,
        customer_id: ID,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            resource_id,
            services,
            schedule: Some(schedule),
            customer_id,
            validation: Value::Null,
            total_price: None,
            created,
        }
    }

    /// Minutes this booking keeps its resource busy
    pub fn occupied_minutes(&self) -> i64 {
        total_minutes(&self.services)
    }

    pub fn is_assigned_to(&self, resource_id: &ResourceId) -> bool {
        self.resource_id.as_ref() == Some(resource_id)
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}
