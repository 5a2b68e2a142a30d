use crate::{
    duration::total_minutes,
    schedule::MIDNIGHT,
    service_line::{MalformedServiceLines, ServiceLines},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const SENTINEL_DATE: &str = "1900-01-01";
pub const SENTINEL_TIME: &str = MIDNIGHT;
pub const UNKNOWN_RESOURCE: &str = "unknown";

/// The columns of a stored booking needed to tell when its resource is busy.
///
/// Fields are read exactly as stored, so they may break the invariants a
/// `Booking` has.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingScheduleRecord {
    pub resource_id: Option<String>,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub services: Value,
}

/// A time range during which a resource is occupied. Derived at query time
/// and used by clients to avoid picking conflicting times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilitySlot {
    pub resource_id: String,
    pub date: String,
    pub time: String,
    pub occupied_minutes: i64,
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionFault {
    #[error("Booking has no date and time")]
    MissingSchedule,
    #[error("Booking has only one of date and time")]
    PartialSchedule,
    #[error(transparent)]
    MalformedServices(#[from] MalformedServiceLines),
}

fn known_resource(resource_id: Option<&str>) -> Option<&str> {
    resource_id.filter(|id| !id.is_empty())
}

impl AvailabilitySlot {
    pub fn project(record: &BookingScheduleRecord) -> Result<Self, ProjectionFault> {
        let (date, time) = match (&record.booking_date, &record.booking_time) {
            (Some(date), Some(time)) => (date.clone(), time.clone()),
            (None, None) => return Err(ProjectionFault::MissingSchedule),
            _ => return Err(ProjectionFault::PartialSchedule),
        };
        let services = ServiceLines::parse(record.services.clone())?;

        Ok(Self {
            resource_id: known_resource(record.resource_id.as_deref())
                .unwrap_or(UNKNOWN_RESOURCE)
                .to_string(),
            date,
            time,
            occupied_minutes: total_minutes(&services),
        })
    }

    /// Stand-in for a record that could not be projected. Keeps the resource
    /// when it is known so the result still lines up with the stored bookings.
    pub fn sentinel(resource_id: Option<&str>) -> Self {
        Self {
            resource_id: known_resource(resource_id)
                .unwrap_or(UNKNOWN_RESOURCE)
                .to_string(),
            date: SENTINEL_DATE.to_string(),
            time: SENTINEL_TIME.to_string(),
            occupied_minutes: crate::DEFAULT_DURATION_MINUTES,
        }
    }
}
