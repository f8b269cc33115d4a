use time::UtcOffset;

use crate::Time;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Time {
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Last two digits of the year, without padding: 2019 gives 19, 2005
    /// gives 5. Years below 10 come back unchanged and negative years lose
    /// their sign.
    pub fn short_year(&self) -> i32 {
        (self.year() % 100).abs()
    }

    pub fn month(&self) -> &'static str {
        let index = u8::from(self.instant.month()) - 1;

        MONTH_NAMES[usize::from(index)]
    }

    pub fn short_month(&self) -> &'static str {
        &self.month()[..3]
    }

    /// Day of the month.
    ///
    /// Unlike every other field this one is read in UTC, so it can disagree
    /// with [`Time::month`] and [`Time::hours`] near midnight. On the first
    /// day `time` can represent, where the UTC date may not exist, the day is
    /// read in the time's own offset.
    pub fn day(&self) -> u8 {
        self.instant
            .checked_to_offset(UtcOffset::UTC)
            .map_or(self.instant.day(), |utc| utc.day())
    }

    pub fn long_day(&self) -> String {
        format!("{:02}", self.day())
    }

    pub fn hours(&self) -> u8 {
        self.instant.hour()
    }

    pub fn long_hours(&self) -> String {
        format!("{:02}", self.hours())
    }

    pub fn minutes(&self) -> u8 {
        self.instant.minute()
    }

    pub fn long_minutes(&self) -> String {
        format!("{:02}", self.minutes())
    }

    pub fn seconds(&self) -> u8 {
        self.instant.second()
    }

    pub fn long_seconds(&self) -> String {
        format!("{:02}", self.seconds())
    }
}
