use crate::{APIResponse, BaseClient};
use barber_booking_api_structs::*;
use barber_booking_domain::{ContactDetails, ResourceId, ID};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default)]
pub struct CreateBookingInput {
    pub barber: Option<ResourceId>,
    pub services: Option<Value>,
    pub datetime: Option<Value>,
    pub customer: Option<ContactDetails>,
    pub validation: Option<Value>,
    pub total_price: Option<f64>,
}

impl BookingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateBookingInput,
    ) -> APIResponse<create_booking::APIResponse> {
        let body = create_booking::RequestBody {
            barber: input.barber,
            services: input.services,
            datetime: input.datetime,
            customer: input.customer,
            validation: input.validation,
            total_price: input.total_price,
        };

        self.base
            .post(body, "api/orders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_bookings::APIResponse> {
        self.base.get("api/orders".into(), StatusCode::OK).await
    }

    pub async fn get_by_date(&self, date: &str) -> APIResponse<get_bookings_by_date::APIResponse> {
        self.base
            .get(format!("api/orders/{}", date), StatusCode::OK)
            .await
    }

    pub async fn get(&self, booking_id: ID) -> APIResponse<get_booking::APIResponse> {
        self.base
            .get(format!("api/orders/booking/{}", booking_id), StatusCode::OK)
            .await
    }

    pub async fn get_availability(&self) -> APIResponse<get_availability::APIResponse> {
        self.base
            .get("api/orders/availability".into(), StatusCode::OK)
            .await
    }
}
