mod booking;
mod customer;
mod shared;

pub use booking::IBookingRepo;
use booking::{InMemoryBookingRepo, PostgresBookingRepo};
pub use customer::ICustomerRepo;
use customer::{InMemoryCustomerRepo, PostgresCustomerRepo};
pub use shared::query_structs::BookingQuery;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub bookings: Arc<dyn IBookingRepo>,
    pub customers: Arc<dyn ICustomerRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            customers: Arc::new(PostgresCustomerRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepo::new()),
            customers: Arc::new(InMemoryCustomerRepo::new()),
        }
    }
}
