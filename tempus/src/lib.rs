#[macro_use]
extern crate tracing;

mod error;
mod fields;
mod format;
mod relative;
mod utils;

use std::time::SystemTime;

use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time as WallTime, UtcOffset};

pub use crate::{
    error::{Error, Result},
    fields::MONTH_NAMES,
    format::DEFAULT_MASK,
    relative::{Ladder, RelativeTime, Rung},
    utils::datetime::{local_offset, parse_offset, Clock, SystemClock},
};

use crate::utils::datetime::truncate_to_millis;

/// An immutable instant with millisecond resolution, viewed in a fixed offset.
///
/// Every accessor except [`Time::day`] reads its field in that offset, which is
/// the host's local offset unless another one was picked with
/// [`Time::with_offset`]. Equality and ordering compare instants only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    instant: OffsetDateTime,
}

impl Time {
    /// The current instant.
    pub fn now() -> Self {
        SystemClock.now().into()
    }

    pub fn from_unix_millis(millis: i64) -> Result<Self> {
        let nanos = i128::from(millis) * 1_000_000;
        let instant = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|_| Error::InvalidInstant(millis))?;

        Ok(instant.into())
    }

    /// Builds a time from calendar components read in the local offset.
    pub fn from_parts(
        year: i32,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self> {
        let date = Date::from_calendar_date(year, month, day)?;
        let wall = WallTime::from_hms_milli(hour, minute, second, millisecond)?;

        Ok(Self::from_local(PrimitiveDateTime::new(date, wall)))
    }

    /// Interprets a date and time without offset as local time.
    pub fn from_local(date_time: PrimitiveDateTime) -> Self {
        Self {
            instant: truncate_to_millis(date_time.assume_offset(local_offset())),
        }
    }

    /// Same instant, viewed in `offset`.
    ///
    /// Fails when the shifted date would leave the years `time` can represent,
    /// which only happens within a day of either end of its range.
    pub fn with_offset(self, offset: UtcOffset) -> Result<Self> {
        let instant = self
            .instant
            .checked_to_offset(offset)
            .ok_or(Error::InvalidInstant(self.unix_millis()))?;

        Ok(Self { instant })
    }

    pub fn offset(&self) -> UtcOffset {
        self.instant.offset()
    }

    pub fn unix_millis(&self) -> i64 {
        // Every representable instant fits: the range of `time` is ±9999 years.
        (self.instant.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.instant
    }
}

impl From<OffsetDateTime> for Time {
    /// Keeps the instant, moves it to the local offset and drops anything below
    /// a millisecond. Near the ends of the representable range, where the local
    /// date wouldn't exist, the original offset is kept.
    fn from(date_time: OffsetDateTime) -> Self {
        let instant = date_time
            .checked_to_offset(local_offset())
            .unwrap_or(date_time);

        Self {
            instant: truncate_to_millis(instant),
        }
    }
}

impl From<SystemTime> for Time {
    fn from(system_time: SystemTime) -> Self {
        OffsetDateTime::from(system_time).into()
    }
}

impl From<Time> for OffsetDateTime {
    fn from(time: Time) -> Self {
        time.instant
    }
}
