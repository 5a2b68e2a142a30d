use super::IBookingRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::BookingQuery};
use barber_booking_domain::{Booking, BookingScheduleRecord, ID};
use std::sync::Mutex;

pub struct InMemoryBookingRepo {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(vec![]),
        }
    }
}

fn to_schedule_record(booking: &Booking) -> BookingScheduleRecord {
    BookingScheduleRecord {
        resource_id: booking.resource_id.as_ref().map(|r| r.to_string()),
        booking_date: booking.schedule.as_ref().map(|s| s.date.clone()),
        booking_time: booking.schedule.as_ref().map(|s| s.time.clone()),
        services: booking.services.to_value(),
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()> {
        insert(booking, &self.bookings)
    }

    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>> {
        find(booking_id, &self.bookings)
    }

    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |b| query.matches(b))?;
        bookings.sort_by_key(|b| b.created);
        Ok(bookings)
    }

    async fn find_schedule_records(&self) -> anyhow::Result<Vec<BookingScheduleRecord>> {
        let mut records = lock(&self.bookings)?
            .iter()
            .map(to_schedule_record)
            .collect::<Vec<_>>();
        // Same as ORDER BY with NULLS LAST
        records.sort_by(|a, b| {
            let key = |r: &BookingScheduleRecord| {
                (
                    r.booking_date.is_none(),
                    r.booking_date.clone(),
                    r.booking_time.is_none(),
                    r.booking_time.clone(),
                )
            };
            key(a).cmp(&key(b))
        });
        Ok(records)
    }
}
