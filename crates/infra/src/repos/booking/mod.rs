mod inmemory;
mod postgres;

use super::shared::query_structs::BookingQuery;
use barber_booking_domain::{Booking, BookingScheduleRecord, ID};
pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>>;
    /// Bookings matching the query in creation order
    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>>;
    /// Schedule columns of every stored booking ordered by date and then
    /// time ascending. Rows without a date or time come last.
    async fn find_schedule_records(&self) -> anyhow::Result<Vec<BookingScheduleRecord>>;
}
