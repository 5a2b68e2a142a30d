use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

/// Time of day used when the input only carries a date
pub const MIDNIGHT: &str = "00:00";

/// The canonical `(date, time)` pair a `Booking` is scheduled at.
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM` whenever the input was
/// well formed. Text input is split without any validation, so the values
/// are best-effort for malformed strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date: String,
    pub time: String,
}

impl ScheduleSlot {
    pub fn new<D: Into<String>, T: Into<String>>(date: D, time: T) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    fn from_utc(datetime: &DateTime<Utc>) -> Self {
        Self {
            date: datetime.format("%Y-%m-%d").to_string(),
            time: datetime.format("%H:%M").to_string(),
        }
    }

    /// Splits `date-Ttime` text on the first `T`.
    ///
    /// No timezone conversion is done, the wall clock digits are taken as-is.
    fn from_text(text: &str) -> Self {
        match text.split_once('T') {
            Some((date, time)) => {
                let time = time.chars().take(5).collect::<String>();
                Self {
                    date: date.to_string(),
                    time: if time.is_empty() {
                        MIDNIGHT.to_string()
                    } else {
                        time
                    },
                }
            }
            None => Self::new(text, MIDNIGHT),
        }
    }
}

/// Calendar components of a point in time, expressed in a wall clock
/// that is `utc_offset_minutes` away from UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl DateParts {
    fn to_utc(&self) -> Result<DateTime<Utc>, InvalidSchedule> {
        let invalid = || InvalidSchedule::InvalidParts(self.to_string());

        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(invalid)?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
            .ok_or_else(invalid)?;
        let offset = self
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(invalid)?;

        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|datetime| datetime.with_timezone(&Utc))
            .ok_or_else(invalid)
    }
}

impl Display for DateParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{} {}:{}:{} (UTC offset {} minutes)",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_minutes
        )
    }
}

/// The shapes a client may send the booking datetime in
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleInput {
    /// ISO-8601-like `date-Ttime` or a bare date
    Text(String),
    /// Milliseconds since the unix epoch
    Timestamp(i64),
    /// Structured calendar components
    Parts(DateParts),
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidSchedule {
    #[error("Timestamp {0} is outside of the supported calendar range")]
    TimestampOutOfRange(i64),
    #[error("Datetime components {0} do not form a valid point in time")]
    InvalidParts(String),
    #[error("Unsupported datetime representation: {0}")]
    UnsupportedShape(String),
}

impl TryFrom<Value> for ScheduleInput {
    type Error = InvalidSchedule;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Number(number) => match number.as_i64() {
                Some(millis) => Ok(Self::Timestamp(millis)),
                None => number
                    .as_f64()
                    .filter(|millis| millis.is_finite())
                    .map(|millis| Self::Timestamp(millis.trunc() as i64))
                    .ok_or_else(|| InvalidSchedule::UnsupportedShape(number.to_string())),
            },
            Value::Object(map) => serde_json::from_value::<DateParts>(Value::Object(map))
                .map(Self::Parts)
                .map_err(|e| InvalidSchedule::InvalidParts(e.to_string())),
            other => Err(InvalidSchedule::UnsupportedShape(other.to_string())),
        }
    }
}

/// Converts the booking datetime input into a canonical `ScheduleSlot`.
///
/// Absent input gives `Ok(None)`. Text input never fails, it is split as
/// well as possible. Only a failing calendar conversion of a timestamp or
/// structured input gives an `InvalidSchedule`.
pub fn normalize_schedule(
    input: Option<&ScheduleInput>,
) -> Result<Option<ScheduleSlot>, InvalidSchedule> {
    let input = match input {
        Some(input) => input,
        None => return Ok(None),
    };

    let slot = match input {
        ScheduleInput::Text(text) => ScheduleSlot::from_text(text),
        ScheduleInput::Timestamp(millis) => {
            let datetime = Utc
                .timestamp_millis_opt(*millis)
                .single()
                .ok_or(InvalidSchedule::TimestampOutOfRange(*millis))?;
            ScheduleSlot::from_utc(&datetime)
        }
        ScheduleInput::Parts(parts) => ScheduleSlot::from_utc(&parts.to_utc()?),
    };

    Ok(Some(slot))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn normalize_text(text: &str) -> ScheduleSlot {
        normalize_schedule(Some(&ScheduleInput::Text(text.into())))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn it_splits_iso_datetimes_on_the_first_t() {
        let cases = vec![
            ("2025-08-17T09:00:00", "2025-08-17", "09:00"),
            ("2025-08-18T14:15:00.000Z", "2025-08-18", "14:15"),
            ("2025-08-18T14:15:59+02:00", "2025-08-18", "14:15"),
            ("2025-12-31T23:59", "2025-12-31", "23:59"),
        ];

        for (input, date, time) in cases {
            assert_eq!(normalize_text(input), ScheduleSlot::new(date, time));
        }
    }

    #[test]
    fn it_does_not_convert_timezones_of_text_input() {
        // 23:30 at -05:00 would be the next day in UTC
        assert_eq!(
            normalize_text("2025-08-17T23:30:00-05:00"),
            ScheduleSlot::new("2025-08-17", "23:30")
        );
    }

    #[test]
    fn it_defaults_bare_dates_to_midnight() {
        for date in &["2025-08-17", "17/08/2025", "tomorrow", ""] {
            assert_eq!(normalize_text(date), ScheduleSlot::new(*date, MIDNIGHT));
        }
    }

    #[test]
    fn it_gives_best_effort_results_for_malformed_text() {
        assert_eq!(
            normalize_text("2025-08-17T"),
            ScheduleSlot::new("2025-08-17", MIDNIGHT)
        );
        assert_eq!(normalize_text("xT9"), ScheduleSlot::new("x", "9"));
        assert_eq!(
            normalize_text("Tuesday"),
            ScheduleSlot::new("", "uesda")
        );
        // Truncation counts characters, not bytes
        assert_eq!(normalize_text("dTäöüßéè"), ScheduleSlot::new("d", "äöüßé"));
    }

    #[test]
    fn absent_input_gives_no_slot() {
        assert_eq!(normalize_schedule(None), Ok(None));
    }

    #[test]
    fn it_converts_timestamps_to_utc_components() {
        let slot = normalize_schedule(Some(&ScheduleInput::Timestamp(0)))
            .unwrap()
            .unwrap();
        assert_eq!(slot, ScheduleSlot::new("1970-01-01", "00:00"));

        // 2025-08-17T09:05:30Z
        let slot = normalize_schedule(Some(&ScheduleInput::Timestamp(1_755_421_530_000)))
            .unwrap()
            .unwrap();
        assert_eq!(slot, ScheduleSlot::new("2025-08-17", "09:05"));
    }

    #[test]
    fn it_rejects_timestamps_outside_of_the_calendar() {
        assert_eq!(
            normalize_schedule(Some(&ScheduleInput::Timestamp(i64::MAX))),
            Err(InvalidSchedule::TimestampOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn it_converts_date_parts_to_utc() {
        let parts = DateParts {
            year: 2025,
            month: 8,
            day: 17,
            hour: 1,
            minute: 30,
            second: 0,
            utc_offset_minutes: 120,
        };
        let slot = normalize_schedule(Some(&ScheduleInput::Parts(parts)))
            .unwrap()
            .unwrap();
        assert_eq!(slot, ScheduleSlot::new("2025-08-16", "23:30"));
    }

    #[test]
    fn it_rejects_impossible_date_parts() {
        let parts = DateParts {
            year: 2025,
            month: 2,
            day: 30,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
        };
        let res = normalize_schedule(Some(&ScheduleInput::Parts(parts)));
        assert!(matches!(res, Err(InvalidSchedule::InvalidParts(_))));
    }

    #[test]
    fn it_classifies_json_input_shapes() {
        assert_eq!(
            ScheduleInput::try_from(json!("2025-08-17")),
            Ok(ScheduleInput::Text("2025-08-17".into()))
        );
        assert_eq!(
            ScheduleInput::try_from(json!(1000)),
            Ok(ScheduleInput::Timestamp(1000))
        );
        assert_eq!(
            ScheduleInput::try_from(json!(1000.9)),
            Ok(ScheduleInput::Timestamp(1000))
        );
        assert!(matches!(
            ScheduleInput::try_from(json!({ "year": 2025, "month": 8, "day": 17 })),
            Ok(ScheduleInput::Parts(DateParts { hour: 0, minute: 0, .. }))
        ));
        assert!(matches!(
            ScheduleInput::try_from(json!({ "month": 8 })),
            Err(InvalidSchedule::InvalidParts(_))
        ));
        assert!(matches!(
            ScheduleInput::try_from(json!(true)),
            Err(InvalidSchedule::UnsupportedShape(_))
        ));
        assert!(matches!(
            ScheduleInput::try_from(json!(["2025-08-17"])),
            Err(InvalidSchedule::UnsupportedShape(_))
        ));
    }
}
