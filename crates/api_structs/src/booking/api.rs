use crate::dtos::{AvailabilitySlotDTO, BookingDTO, CustomerDTO};
use barber_booking_domain::{AvailabilitySlot, Booking, Customer, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingDTO>,
}

impl BookingsResponse {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: bookings.into_iter().map(BookingDTO::new).collect(),
        }
    }
}

pub mod create_booking {
    use super::*;
    use barber_booking_domain::{ContactDetails, ResourceId};
    use serde_json::Value;

    /// `services` and `datetime` are kept untyped, their shape is checked
    /// by the usecase so it can report what exactly is wrong.
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub barber: Option<ResourceId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub services: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub datetime: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub customer: Option<ContactDetails>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub validation: Option<Value>,
        #[serde(
            default,
            rename = "totalPrice",
            skip_serializing_if = "Option::is_none"
        )]
        pub total_price: Option<f64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub booking: BookingDTO,
        pub customer: CustomerDTO,
    }

    impl APIResponse {
        pub fn new(booking: Booking, customer: Customer) -> Self {
            Self {
                booking: BookingDTO::new(booking),
                customer: CustomerDTO::new(customer),
            }
        }
    }
}

pub mod get_bookings {
    use super::*;

    pub type APIResponse = BookingsResponse;
}

pub mod get_bookings_by_date {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    pub type APIResponse = BookingsResponse;
}

pub mod get_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_availability {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub slots: Vec<AvailabilitySlotDTO>,
    }

    impl APIResponse {
        pub fn new(slots: Vec<AvailabilitySlot>) -> Self {
            Self {
                slots: slots.into_iter().map(AvailabilitySlotDTO::new).collect(),
            }
        }
    }
}
