use barber_booking_domain::{Booking, BookingScope, ResourceId};

/// Equality filters on stored bookings, all given filters must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingQuery {
    pub resource_id: Option<ResourceId>,
    pub booking_date: Option<String>,
}

impl BookingQuery {
    pub fn scoped(scope: BookingScope) -> Self {
        match scope {
            BookingScope::All => Self::default(),
            BookingScope::Resource(resource_id) => Self {
                resource_id: Some(resource_id),
                ..Default::default()
            },
        }
    }

    pub fn on_date<T: Into<String>>(mut self, date: T) -> Self {
        self.booking_date = Some(date.into());
        self
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(resource_id) = &self.resource_id {
            if !booking.is_assigned_to(resource_id) {
                return false;
            }
        }
        if let Some(date) = &self.booking_date {
            match &booking.schedule {
                Some(schedule) if schedule.date == *date => {}
                _ => return false,
            }
        }
        true
    }
}
