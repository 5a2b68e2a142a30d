use chrono::Utc;

/// Source of wall clock time, replaced in tests that depend on time
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// Timestamp in millis of when this process booted, used for uptime
    fn booted_at_millis(&self) -> i64;
}

pub struct RealSys {
    booted_at: i64,
}

impl RealSys {
    pub fn new() -> Self {
        Self {
            booted_at: Utc::now().timestamp_millis(),
        }
    }
}

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn booted_at_millis(&self) -> i64 {
        self.booted_at
    }
}
