use barber_booking_domain::{AvailabilitySlot, Booking, ResourceId, ServiceLines, ID};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A booking as stored, with the column names clients already know
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BookingDTO {
    pub id: ID,
    pub barber: Option<ResourceId>,
    pub services: ServiceLines,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub customer_id: ID,
    pub validation: Value,
    #[serde(rename = "totalPrice")]
    pub total_price: Option<f64>,
    pub created_at: i64,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        let (booking_date, booking_time) = match booking.schedule {
            Some(schedule) => (Some(schedule.date), Some(schedule.time)),
            None => (None, None),
        };
        Self {
            id: booking.id,
            barber: booking.resource_id,
            services: booking.services,
            booking_date,
            booking_time,
            customer_id: booking.customer_id,
            validation: booking.validation,
            total_price: booking.total_price,
            created_at: booking.created,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AvailabilitySlotDTO {
    pub date: String,
    pub time: String,
    pub occupied_minutes: i64,
    pub resource: String,
}

impl AvailabilitySlotDTO {
    pub fn new(slot: AvailabilitySlot) -> Self {
        Self {
            date: slot.date,
            time: slot.time,
            occupied_minutes: slot.occupied_minutes,
            resource: slot.resource_id,
        }
    }
}
