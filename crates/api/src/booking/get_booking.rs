use crate::{
    error::BookingServiceError,
    shared::{
        auth::protect_staff_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use barber_booking_api_structs::get_booking::*;
use barber_booking_domain::{Booking, Requester, ID};
use barber_booking_infra::BookingContext;

pub async fn get_booking_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BookingContext>,
) -> Result<HttpResponse, BookingServiceError> {
    let requester = protect_staff_route(&http_req, &ctx)?;

    let usecase = GetBookingUseCase {
        requester,
        booking_id: path.booking_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(BookingServiceError::from)
}

#[derive(Debug)]
pub struct GetBookingUseCase {
    pub requester: Requester,
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(String),
}

impl From<UseCaseError> for BookingServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(booking_id) => Self::NotFound(format!(
                "The booking with id: {}, was not found.",
                booking_id
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBooking";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        // Bookings of other resources are hidden, not forbidden
        match booking {
            Some(booking) if self.requester.can_view(&booking) => Ok(booking),
            _ => Err(UseCaseError::NotFound(self.booking_id)),
        }
    }
}
