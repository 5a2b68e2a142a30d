use crate::{
    error::BookingServiceError,
    shared::{
        auth::protect_staff_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use barber_booking_api_structs::get_bookings::*;
use barber_booking_domain::{Booking, Requester};
use barber_booking_infra::{BookingContext, BookingQuery};

pub async fn get_bookings_controller(
    http_req: HttpRequest,
    ctx: web::Data<BookingContext>,
) -> Result<HttpResponse, BookingServiceError> {
    let requester = protect_staff_route(&http_req, &ctx)?;

    let usecase = GetBookingsUseCase { requester };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(BookingServiceError::from)
}

/// Lists every booking the requester is allowed to see, oldest first
#[derive(Debug)]
pub struct GetBookingsUseCase {
    pub requester: Requester,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for BookingServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBookings";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let query = BookingQuery::scoped(self.requester.booking_scope());
        ctx.repos
            .bookings
            .find_by_query(query)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
