//! Table booking requests.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::error::ActionError;

/// Requested table date and time. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BookingSlot {
    /// Parse booking form input (`YYYY-MM-DD`, `HH:MM`).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingBookingSlot`] when either field is absent
    /// or blank, and [`ActionError::InvalidBookingSlot`] when a field does not
    /// parse.
    pub fn parse(date: Option<&str>, time: Option<&str>) -> Result<Self, ActionError> {
        let date = date.map(str::trim).filter(|s| !s.is_empty());
        let time = time.map(str::trim).filter(|s| !s.is_empty());
        let (Some(date), Some(time)) = (date, time) else {
            return Err(ActionError::MissingBookingSlot);
        };

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ActionError::InvalidBookingSlot(date.to_owned()))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .map_err(|_| ActionError::InvalidBookingSlot(time.to_owned()))?;

        Ok(Self { date, time })
    }
}

impl fmt::Display for BookingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }
}
