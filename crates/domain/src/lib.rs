mod availability;
mod booking;
mod customer;
mod duration;
mod role;
mod schedule;
mod service_line;
mod shared;

pub use availability::{
    AvailabilitySlot, BookingScheduleRecord, ProjectionFault, SENTINEL_DATE, SENTINEL_TIME,
    UNKNOWN_RESOURCE,
};
pub use booking::Booking;
pub use customer::{ContactDetails, ContactMatch, Customer};
pub use duration::{total_minutes, ServiceDuration, DEFAULT_DURATION_MINUTES};
pub use role::{BookingScope, Requester, Role};
pub use schedule::{
    normalize_schedule, DateParts, InvalidSchedule, ScheduleInput, ScheduleSlot, MIDNIGHT,
};
pub use service_line::{MalformedServiceLines, ServiceLineItem, ServiceLines};
pub use shared::entity::{Entity, ResourceId, ID};
