use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time {
    pub timestamp: i64,
    datetime: NaiveDateTime,
}

impl Time {
    pub fn new(timestamp: i64) -> Self {
        let datetime = NaiveDateTime::from_timestamp_opt(timestamp, 0).expect("Invalid timestamp");
        Self {
            timestamp,
            datetime,
        }
    }

    pub fn from_str(time_str: &str) -> Result<Self, String> {
        // Supports multiple formats: "YYYY-MM-DD HH:MM:SS" or "YYYYMMDD"
        let datetime = if time_str.contains('-') {
            NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M:%S")
                .map_err(|e| e.to_string())?
        } else {
            let date = NaiveDate::parse_from_str(time_str, "%Y%m%d").map_err(|e| e.to_string())?;
            date.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap())
        };

        Ok(Self {
            timestamp: datetime.timestamp(),
            datetime,
        })
    }

    pub fn to_str(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn to_date_str(&self) -> String {
        self.datetime.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
