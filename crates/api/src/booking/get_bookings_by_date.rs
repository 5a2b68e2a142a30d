use crate::{
    error::BookingServiceError,
    shared::{
        auth::protect_staff_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use barber_booking_api_structs::get_bookings_by_date::*;
use barber_booking_domain::{Booking, Requester};
use barber_booking_infra::{BookingContext, BookingQuery};

pub async fn get_bookings_by_date_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BookingContext>,
) -> Result<HttpResponse, BookingServiceError> {
    let requester = protect_staff_route(&http_req, &ctx)?;

    let usecase = GetBookingsByDateUseCase {
        requester,
        date: path.into_inner().date,
    };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(BookingServiceError::from)
}

/// Bookings of one day, compared on the stored date text
#[derive(Debug)]
pub struct GetBookingsByDateUseCase {
    pub requester: Requester,
    pub date: String,
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
impl UseCase for GetBookingsByDateUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBookingsByDate";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let query = BookingQuery::scoped(self.requester.booking_scope()).on_date(self.date.clone());
        ctx.repos
            .bookings
            .find_by_query(query)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
