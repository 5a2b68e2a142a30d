use super::IBookingRepo;
use crate::repos::shared::query_structs::BookingQuery;
use barber_booking_domain::{
    Booking, BookingScheduleRecord, ResourceId, ScheduleSlot, ServiceLines, ID,
};
use serde_json::Value;
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::{error, warn};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    id: Uuid,
    barber: Option<String>,
    services: Option<Value>,
    booking_date: Option<String>,
    booking_time: Option<String>,
    customer_id: Uuid,
    validation: Option<Value>,
    #[sqlx(rename = "totalPrice")]
    total_price: Option<f64>,
    created_at: i64,
}

#[derive(Debug, FromRow)]
struct BookingScheduleRaw {
    barber: Option<String>,
    booking_date: Option<String>,
    booking_time: Option<String>,
    services: Option<Value>,
}

impl From<BookingRaw> for Booking {
    fn from(e: BookingRaw) -> Self {
        let schedule = match (e.booking_date, e.booking_time) {
            (Some(date), Some(time)) => Some(ScheduleSlot { date, time }),
            (None, None) => None,
            (date, time) => {
                warn!(
                    "Booking {} has a partial schedule (date: {:?}, time: {:?}), ignoring it",
                    e.id, date, time
                );
                None
            }
        };
        Self {
            id: e.id.into(),
            resource_id: e.barber.map(ResourceId::new),
            services: ServiceLines::from_stored(e.services.unwrap_or(Value::Null)),
            schedule,
            customer_id: e.customer_id.into(),
            validation: e.validation.unwrap_or(Value::Null),
            total_price: e.total_price,
            created: e.created_at,
        }
    }
}

impl From<BookingScheduleRaw> for BookingScheduleRecord {
    fn from(e: BookingScheduleRaw) -> Self {
        Self {
            resource_id: e.barber,
            booking_date: e.booking_date,
            booking_time: e.booking_time,
            services: e.services.unwrap_or(Value::Null),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings(
                id,
                barber,
                services,
                booking_date,
                booking_time,
                customer_id,
                validation,
                "totalPrice",
                created_at
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id.inner())
        .bind(booking.resource_id.as_ref().map(|r| r.to_string()))
        .bind(Json(booking.services.to_value()))
        .bind(booking.schedule.as_ref().map(|s| s.date.clone()))
        .bind(booking.schedule.as_ref().map(|s| s.time.clone()))
        .bind(booking.customer_id.inner())
        .bind(Json(booking.validation.clone()))
        .bind(booking.total_price)
        .bind(booking.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert booking: {:?}. DB returned error: {:?}",
                booking, e
            );
            e
        })?;

        Ok(())
    }

    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>> {
        let res: Option<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.id = $1
            "#,
        )
        .bind(booking_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find booking with id: {:?} failed. DB returned error: {:?}",
                booking_id, e
            );
            e
        })?;

        Ok(res.map(|booking| booking.into()))
    }

    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings AS b
            WHERE ($1::text IS NULL OR b.barber = $1)
            AND ($2::text IS NULL OR b.booking_date = $2)
            ORDER BY b.created_at ASC
            "#,
        )
        .bind(query.resource_id.as_ref().map(|r| r.to_string()))
        .bind(query.booking_date.clone())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find bookings by query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    async fn find_schedule_records(&self) -> anyhow::Result<Vec<BookingScheduleRecord>> {
        let records: Vec<BookingScheduleRaw> = sqlx::query_as(
            r#"
            SELECT b.barber, b.booking_date, b.booking_time, b.services FROM bookings AS b
            ORDER BY b.booking_date ASC, b.booking_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find booking schedules failed. DB returned error: {:?}",
                e
            );
            e
        })?;

        Ok(records.into_iter().map(|r| r.into()).collect())
    }
}
