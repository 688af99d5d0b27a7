use chrono::{DateTime, Duration, TimeZone};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A wall-clock time of day on a 24-hour clock, without a date.
///
/// Renders as a zero-padded `HH:MM` string, which makes a lexicographic
/// sort on the rendered value coincide with chronological order within
/// a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidTimeOfDayError> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeOfDayError::OutOfRange(hour, minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The next instant at which this time of day occurs, relative to `now`.
    ///
    /// Builds a candidate at `HH:MM:00` in the same calendar as `now`,
    /// starting today and rolling forward by one day until the candidate is
    /// strictly in the future. A wall time skipped by a clock adjustment
    /// rolls to the next day; an ambiguous wall time resolves to its
    /// earlier instant.
    pub fn next_occurrence<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let tz = now.timezone();
        let today = now.naive_local().date();
        for days_ahead in 0..=2 {
            let date = today + Duration::days(days_ahead);
            let naive = match date.and_hms_opt(self.hour, self.minute, 0) {
                Some(naive) => naive,
                None => continue,
            };
            let candidate = match tz.from_local_datetime(&naive).earliest() {
                Some(candidate) => candidate,
                None => continue,
            };
            if candidate > *now {
                return candidate;
            }
        }
        // A wall time cannot be skipped on consecutive days
        now.clone() + Duration::days(1)
    }
}

#[derive(Error, Debug)]
pub enum InvalidTimeOfDayError {
    #[error("Time of day: {0} is malformed, expected HH:MM")]
    Malformed(String),
    #[error("Time of day: {0}:{1} is out of range")]
    OutOfRange(u32, u32),
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(InvalidTimeOfDayError::Malformed(s.to_string()));
        }
        let hour = parts[0].parse();
        let minute = parts[1].parse();

        match (hour, minute) {
            (Ok(hour), Ok(minute)) => Self::new(hour, minute),
            _ => Err(InvalidTimeOfDayError::Malformed(s.to_string())),
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A zero-padded HH:MM time on a 24-hour clock")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<TimeOfDay>()
                    .map_err(|_| E::custom(format!("Malformed time of day: {}", value)))
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}
