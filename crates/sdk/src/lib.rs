mod base;
mod booking;
mod status;

use booking::BookingClient;
use status::StatusClient;
use std::sync::Arc;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use booking::CreateBookingInput;

pub use barber_booking_api_structs::dtos::*;
pub use barber_booking_api_structs::APIErrorBody;
pub use barber_booking_domain::{ContactDetails, ResourceId, ID};

/// Barber Booking SDK
///
/// Typed client for the booking service API. Staff routes need an access
/// token, the others do not.
#[derive(Clone)]
pub struct BookingSDK {
    pub booking: BookingClient,
    pub status: StatusClient,
}

impl BookingSDK {
    pub fn new(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    pub fn with_access_token<T: Into<String>>(address: String, access_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_access_token(access_token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let booking = BookingClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { booking, status }
    }
}
