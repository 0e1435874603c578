use crate::error::ScheduleError;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A local time of day at which one posting run is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleEntry {
    time: NaiveTime,
}

impl ScheduleEntry {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(|time| Self { time })
            .ok_or_else(|| ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")))
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl FromStr for ScheduleEntry {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(trimmed.to_string()))?;
        Ok(Self { time })
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Source of the local wall-clock time the scheduler matches against.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
