use barber_booking_sdk::{ContactDetails, CreateBookingInput, ResourceId};
use serde_json::{json, Value};

pub fn contact(name: &str, phone: &str, email: &str) -> ContactDetails {
    ContactDetails {
        name: Some(name.into()),
        phone: Some(phone.into()),
        email: Some(email.into()),
    }
}

pub fn booking_input(barber: &str, services: Value, datetime: &str) -> CreateBookingInput {
    CreateBookingInput {
        barber: Some(ResourceId::new(barber)),
        services: Some(services),
        datetime: Some(json!(datetime)),
        customer: Some(contact("A", "123", "a@x.com")),
        validation: None,
        total_price: Some(20.0),
    }
}
