use crate::{
    customer::{ResolveCustomerError, ResolveCustomerUseCase},
    error::BookingServiceError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barber_booking_api_structs::create_booking::*;
use barber_booking_domain::{
    normalize_schedule, Booking, ContactDetails, Customer, InvalidSchedule, ResourceId,
    ScheduleInput, ServiceLineItem, ServiceLines,
};
use barber_booking_infra::BookingContext;
use serde_json::Value;

pub async fn create_booking_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BookingContext>,
) -> Result<HttpResponse, BookingServiceError> {
    let body = body.0;
    let usecase = CreateBookingUseCase {
        resource_id: body.barber,
        services: body.services,
        datetime: body.datetime,
        contact: body.customer,
        validation: body.validation,
        total_price: body.total_price,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.booking, res.customer)))
        .map_err(BookingServiceError::from)
}

/// Admits a new booking. Overlapping bookings for the same resource are
/// accepted, availability is only advisory.
#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub resource_id: Option<ResourceId>,
    pub services: Option<Value>,
    pub datetime: Option<Value>,
    pub contact: Option<ContactDetails>,
    pub validation: Option<Value>,
    pub total_price: Option<f64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingServices,
    /// Line items without a service id, as they were sent
    InvalidServices(Vec<Value>),
    MissingSchedule,
    InvalidSchedule(InvalidSchedule),
    MissingCustomer,
    StorageError(String),
}

impl From<UseCaseError> for BookingServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingServices => {
                Self::BadClientData("Services are required and must be a non empty list".into())
            }
            UseCaseError::InvalidServices(services) => Self::InvalidServices(services),
            UseCaseError::MissingSchedule => {
                Self::BadClientData("Date and time of the booking are required".into())
            }
            UseCaseError::InvalidSchedule(e) => {
                Self::BadClientData(format!("Invalid datetime: {}", e))
            }
            UseCaseError::MissingCustomer => {
                Self::BadClientData("Customer details are required".into())
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

impl From<ResolveCustomerError> for UseCaseError {
    fn from(e: ResolveCustomerError) -> Self {
        match e {
            ResolveCustomerError::StorageError(msg) => Self::StorageError(msg),
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub booking: Booking,
    pub customer: Customer,
}

/// Reads the line items, reporting every item that does not reference a
/// service
fn parse_service_lines(services: Option<Value>) -> Result<Vec<ServiceLineItem>, UseCaseError> {
    let services = match services {
        Some(Value::Array(services)) if !services.is_empty() => services,
        _ => return Err(UseCaseError::MissingServices),
    };

    let mut items = Vec::with_capacity(services.len());
    let mut invalid = Vec::new();
    for service in services {
        match ServiceLineItem::from_value(service) {
            Ok(item) if item.has_identity() => items.push(item),
            Ok(item) => invalid.push(item.to_value()),
            Err(value) => invalid.push(value),
        }
    }

    if !invalid.is_empty() {
        return Err(UseCaseError::InvalidServices(invalid));
    }
    Ok(items)
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let items = parse_service_lines(self.services.take())?;

        let input = match self.datetime.take() {
            None | Some(Value::Null) => return Err(UseCaseError::MissingSchedule),
            Some(value) => ScheduleInput::try_from(value).map_err(UseCaseError::InvalidSchedule)?,
        };
        let schedule = normalize_schedule(Some(&input))
            .map_err(UseCaseError::InvalidSchedule)?
            .ok_or(UseCaseError::MissingSchedule)?;

        let contact = self.contact.take().ok_or(UseCaseError::MissingCustomer)?;

        // Nothing is written before this point
        let customer = execute(ResolveCustomerUseCase { contact }, ctx).await?;

        let mut booking = Booking::new(
            self.resource_id.take(),
            ServiceLines::Items(items),
            schedule,
            customer.id,
            ctx.sys.get_timestamp_millis(),
        );
        booking.validation = self.validation.take().unwrap_or(Value::Null);
        booking.total_price = self.total_price;

        ctx.repos
            .bookings
            .insert(&booking)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(UseCaseRes { booking, customer })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use barber_booking_domain::{BookingScheduleRecord, ScheduleSlot, ID};
    use barber_booking_infra::{BookingQuery, IBookingRepo};
    use serde_json::json;
    use std::sync::Arc;

    fn new_usecase(services: Value, datetime: Value) -> CreateBookingUseCase {
        CreateBookingUseCase {
            resource_id: Some(ResourceId::new("b1")),
            services: Some(services),
            datetime: Some(datetime),
            contact: Some(ContactDetails {
                name: Some("A".into()),
                email: Some("a@x.com".into()),
                phone: Some("123".into()),
            }),
            validation: Some(json!({ "token": "abc" })),
            total_price: Some(20.0),
        }
    }

    async fn stored_bookings(ctx: &BookingContext) -> Vec<Booking> {
        ctx.repos
            .bookings
            .find_by_query(BookingQuery::default())
            .await
            .unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn it_admits_a_booking() {
        let ctx = BookingContext::create_inmemory();

        let mut usecase = new_usecase(
            json!([{ "id": "s1", "duration": "30 mins" }]),
            json!("2025-08-17T09:00:00"),
        );
        let res = usecase.execute(&ctx).await.unwrap();

        assert_eq!(
            res.booking.schedule,
            Some(ScheduleSlot::new("2025-08-17", "09:00"))
        );
        assert_eq!(res.booking.customer_id, res.customer.id);
        assert_eq!(res.booking.validation, json!({ "token": "abc" }));
        assert_eq!(res.booking.total_price, Some(20.0));
        assert_eq!(res.booking.occupied_minutes(), 30);
        assert_eq!(
            res.booking.services.to_value(),
            json!([{ "id": "s1", "duration": "30 mins" }])
        );
        assert_eq!(stored_bookings(&ctx).await, vec![res.booking]);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_missing_or_empty_services_before_writing() {
        let ctx = BookingContext::create_inmemory();

        for services in [json!([]), json!("Haircut"), json!({ "id": "s1" })] {
            let mut usecase = new_usecase(services, json!("2025-08-17T09:00:00"));
            assert!(matches!(
                usecase.execute(&ctx).await,
                Err(UseCaseError::MissingServices)
            ));
        }
        let mut usecase = new_usecase(json!([]), json!("2025-08-17"));
        usecase.services = None;
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::MissingServices)
        ));

        assert!(stored_bookings(&ctx).await.is_empty());
        assert!(ctx
            .repos
            .customers
            .find_by_contact(&ContactDetails {
                phone: Some("123".into()),
                ..Default::default()
            })
            .await
            .unwrap()
            .is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_enumerates_services_without_id() {
        let ctx = BookingContext::create_inmemory();

        let mut usecase = new_usecase(
            json!([
                { "id": "s1" },
                { "name": "Beard trim" },
                { "id": "", "name": "Wash" },
                "s4"
            ]),
            json!("2025-08-17T09:00:00"),
        );
        match usecase.execute(&ctx).await {
            Err(UseCaseError::InvalidServices(invalid)) => assert_eq!(
                invalid,
                vec![
                    json!({ "name": "Beard trim" }),
                    json!({ "id": "", "name": "Wash" }),
                    json!("s4"),
                ]
            ),
            other => panic!("Expected invalid services, got: {:?}", other),
        }
        assert!(stored_bookings(&ctx).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_requires_a_schedule_and_a_customer() {
        let ctx = BookingContext::create_inmemory();

        let mut usecase = new_usecase(json!([{ "id": "s1" }]), Value::Null);
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::MissingSchedule)
        ));

        let mut usecase = new_usecase(json!([{ "id": "s1" }]), json!(true));
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidSchedule(_))
        ));

        let mut usecase = new_usecase(
            json!([{ "id": "s1" }]),
            json!({ "year": 2025, "month": 13, "day": 1 }),
        );
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidSchedule(_))
        ));

        let mut usecase = new_usecase(json!([{ "id": "s1" }]), json!("2025-08-17"));
        usecase.contact = None;
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::MissingCustomer)
        ));

        assert!(stored_bookings(&ctx).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_accepts_bare_dates_and_timestamps() {
        let ctx = BookingContext::create_inmemory();

        let mut usecase = new_usecase(json!([{ "id": "s1" }]), json!("2025-08-17"));
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            res.booking.schedule,
            Some(ScheduleSlot::new("2025-08-17", "00:00"))
        );

        // 2025-08-17T09:30:00Z
        let mut usecase = new_usecase(json!([{ "id": "s1" }]), json!(1755423000000_i64));
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            res.booking.schedule,
            Some(ScheduleSlot::new("2025-08-17", "09:30"))
        );
    }

    #[actix_web::main]
    #[test]
    async fn double_booking_is_allowed() {
        let ctx = BookingContext::create_inmemory();

        let mut first = new_usecase(json!([{ "id": "s1" }]), json!("2025-08-17T09:00:00"));
        let mut second = new_usecase(json!([{ "id": "s2" }]), json!("2025-08-17T09:00:00"));
        let first = first.execute(&ctx).await.unwrap();
        let second = second.execute(&ctx).await.unwrap();

        assert_ne!(first.booking.id, second.booking.id);
        assert_eq!(first.customer.id, second.customer.id);
        assert_eq!(stored_bookings(&ctx).await.len(), 2);
    }

    struct FailingBookingRepo;

    #[async_trait::async_trait]
    impl IBookingRepo for FailingBookingRepo {
        async fn insert(&self, _booking: &Booking) -> anyhow::Result<()> {
            Err(anyhow::Error::msg("disk full"))
        }

        async fn find(&self, _booking_id: &ID) -> anyhow::Result<Option<Booking>> {
            Err(anyhow::Error::msg("disk full"))
        }

        async fn find_by_query(&self, _query: BookingQuery) -> anyhow::Result<Vec<Booking>> {
            Err(anyhow::Error::msg("disk full"))
        }

        async fn find_schedule_records(&self) -> anyhow::Result<Vec<BookingScheduleRecord>> {
            Err(anyhow::Error::msg("disk full"))
        }
    }

    #[actix_web::main]
    #[test]
    async fn storage_errors_are_reported_and_leave_the_customer_behind() {
        let mut ctx = BookingContext::create_inmemory();
        ctx.repos.bookings = Arc::new(FailingBookingRepo);

        let mut usecase = new_usecase(json!([{ "id": "s1" }]), json!("2025-08-17T09:00:00"));
        assert!(
            matches!(usecase.execute(&ctx).await, Err(UseCaseError::StorageError(msg)) if msg == "disk full")
        );

        let orphan = ctx
            .repos
            .customers
            .find_by_contact(&ContactDetails {
                phone: Some("123".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(orphan.is_some());
    }
}
