use crate::service_line::ServiceLines;
use serde_json::Value;

/// Minutes assumed when a duration can not be read, both per line item and
/// for a whole booking whose services are not a list.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// The duration of a line item as it was sent by the client
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceDuration {
    /// Plain number of minutes
    Minutes(i64),
    /// Text like `"45 mins"` or `"060 minutes"`
    Text(String),
    /// Missing or of a type that can not hold a duration
    Unrecognized,
}

impl From<Option<&Value>> for ServiceDuration {
    fn from(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(number)) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|minutes| minutes.trunc() as i64))
                .map(Self::Minutes)
                .unwrap_or(Self::Unrecognized),
            Some(Value::String(text)) => Self::Text(text.clone()),
            _ => Self::Unrecognized,
        }
    }
}

impl ServiceDuration {
    /// Occupied minutes, falling back to `DEFAULT_DURATION_MINUTES`
    pub fn minutes(&self) -> i64 {
        match self {
            Self::Minutes(minutes) if *minutes >= 0 => *minutes,
            Self::Text(text) => first_number(text).unwrap_or(DEFAULT_DURATION_MINUTES),
            _ => DEFAULT_DURATION_MINUTES,
        }
    }
}

/// First contiguous run of ascii digits in `text`
fn first_number(text: &str) -> Option<i64> {
    let digits = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();
    digits.parse().ok()
}

/// Total minutes a booking occupies given its services. Never fails.
pub fn total_minutes(services: &ServiceLines) -> i64 {
    match services {
        ServiceLines::Items(items) => items
            .iter()
            .map(|item| item.duration().minutes())
            .fold(0, i64::saturating_add),
        ServiceLines::Unrecognized(_) => DEFAULT_DURATION_MINUTES,
    }
}
