use crate::{
    error::BookingServiceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barber_booking_api_structs::get_availability::*;
use barber_booking_domain::AvailabilitySlot;
use barber_booking_infra::BookingContext;
use tracing::warn;

pub async fn get_availability_controller(
    ctx: web::Data<BookingContext>,
) -> Result<HttpResponse, BookingServiceError> {
    execute(GetAvailabilityUseCase, &ctx)
        .await
        .map(|slots| HttpResponse::Ok().json(APIResponse::new(slots)))
        .map_err(BookingServiceError::from)
}

/// Projects every stored booking into the slot it occupies.
///
/// Returns exactly one slot per stored booking, ordered by date and then time.
/// A booking that can not be projected is replaced by a sentinel slot.
#[derive(Debug)]
pub struct GetAvailabilityUseCase;

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
impl UseCase for GetAvailabilityUseCase {
    type Response = Vec<AvailabilitySlot>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAvailability";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let records = ctx
            .repos
            .bookings
            .find_schedule_records()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        let slots = records
            .iter()
            .map(|record| match AvailabilitySlot::project(record) {
                Ok(slot) => slot,
                Err(fault) => {
                    warn!(
                        "Unable to project booking record: {:?} into a slot: {}",
                        record, fault
                    );
                    AvailabilitySlot::sentinel(record.resource_id.as_deref())
                }
            })
            .collect();

        Ok(slots)
    }
}
