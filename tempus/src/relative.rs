use time::OffsetDateTime;

use crate::{Clock, SystemClock, Time};

/// One unit of a [`Ladder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rung {
    pub name: &'static str,
    pub millis: i64,
}

impl Rung {
    pub const MILLISECOND: Self = Self::new("millisecond", 1);
    pub const SECOND: Self = Self::new("second", 1000);
    pub const MINUTE: Self = Self::new("minute", 60 * Self::SECOND.millis);
    pub const HOUR: Self = Self::new("hour", 60 * Self::MINUTE.millis);
    pub const DAY: Self = Self::new("day", 24 * Self::HOUR.millis);
    pub const MONTH: Self = Self::new("month", 30 * Self::DAY.millis);
    pub const YEAR: Self = Self::new("year", 365 * Self::DAY.millis);

    const fn new(name: &'static str, millis: i64) -> Self {
        Self { name, millis }
    }
}

const CLASSIC: &[Rung] = &[
    Rung::MILLISECOND,
    Rung::SECOND,
    Rung::MINUTE,
    Rung::DAY,
    Rung::MONTH,
    Rung::YEAR,
];

const HOURLY: &[Rung] = &[
    Rung::MILLISECOND,
    Rung::SECOND,
    Rung::MINUTE,
    Rung::HOUR,
    Rung::DAY,
    Rung::MONTH,
    Rung::YEAR,
];

/// Units a relative time may be expressed in, finest first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Ladder {
    /// Milliseconds, seconds, minutes, days, 30-day months, 365-day years.
    ///
    /// There is no hour unit: five hours ago reads as "300 minutes ago".
    #[default]
    Classic,
    /// [`Ladder::Classic`] with hours between minutes and days.
    Hourly,
}

impl Ladder {
    pub fn rungs(self) -> &'static [Rung] {
        match self {
            Ladder::Classic => CLASSIC,
            Ladder::Hourly => HOURLY,
        }
    }

    /// Describes an offset of `difference` milliseconds, positive for the
    /// past and negative for the future.
    ///
    /// The unit is the one before the first rung that the offset doesn't
    /// fill at least once, or the coarsest rung if it fills them all.
    pub fn describe(self, difference: i64) -> String {
        let magnitude = difference.unsigned_abs() as f64;
        let mut prev: Option<(Rung, f64)> = None;

        for &rung in self.rungs() {
            let ratio = magnitude / rung.millis as f64;

            if ratio < 1.0 {
                // Only a zero offset stops on the first rung, which then
                // describes itself: "0 milliseconds ago".
                let (rung, ratio) = prev.unwrap_or((rung, ratio));

                return phrase(rung, ratio, difference);
            }

            prev = Some((rung, ratio));
        }

        match prev {
            Some((rung, ratio)) => phrase(rung, ratio, difference),
            None => phrase(Rung::MILLISECOND, magnitude, difference),
        }
    }
}

fn phrase(rung: Rung, ratio: f64, difference: i64) -> String {
    let amount = ratio.round() as u64;

    trace!(difference, unit = rung.name, amount, "Resolved relative time");

    format!(
        "{amount} {unit}{plural} {direction}",
        unit = rung.name,
        plural = if amount == 1 { "" } else { "s" },
        direction = if difference < 0 { "from now" } else { "ago" },
    )
}

pub trait RelativeTime {
    /// Describes `self` relative to `now`, e.g. "3 days ago" or
    /// "1 minute from now".
    fn to_relative_at(&self, now: OffsetDateTime, ladder: Ladder) -> String;

    fn to_relative(&self) -> String {
        self.to_relative_at(SystemClock.now(), Ladder::default())
    }
}

impl RelativeTime for OffsetDateTime {
    fn to_relative_at(&self, now: OffsetDateTime, ladder: Ladder) -> String {
        let difference = (now - *self).whole_milliseconds();
        let difference = i64::try_from(difference).unwrap_or(if difference < 0 {
            i64::MIN
        } else {
            i64::MAX
        });

        ladder.describe(difference)
    }
}

impl RelativeTime for Time {
    fn to_relative_at(&self, now: OffsetDateTime, ladder: Ladder) -> String {
        self.instant.to_relative_at(now, ladder)
    }
}

impl Time {
    /// How long ago, or how far ahead, this time is from the system clock.
    pub fn when(&self) -> String {
        self.to_relative()
    }

    /// Like [`Time::when`], measured from `now` instead of the system clock.
    pub fn when_at(&self, now: &Time) -> String {
        self.when_with(&now.instant, Ladder::default())
    }

    pub fn when_with(&self, clock: &impl Clock, ladder: Ladder) -> String {
        self.to_relative_at(clock.now(), ladder)
    }
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;

    const NOW: OffsetDateTime = datetime!(2019-10-10 12:00 UTC);

    fn ago(offset: Duration) -> String {
        (NOW - offset).to_relative_at(NOW, Ladder::Classic)
    }

    fn hourly_ago(offset: Duration) -> String {
        (NOW - offset).to_relative_at(NOW, Ladder::Hourly)
    }

    #[test]
    fn whole_days() {
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(1)), "1 day ago");
        assert_eq!(ago(Duration::days(-1)), "1 day from now");
        assert_eq!(ago(Duration::days(-3)), "3 days from now");
    }

    #[test]
    fn finer_units() {
        assert_eq!(ago(Duration::milliseconds(1)), "1 millisecond ago");
        assert_eq!(ago(Duration::milliseconds(999)), "999 milliseconds ago");
        assert_eq!(ago(Duration::seconds(1)), "1 second ago");
        assert_eq!(ago(Duration::seconds(-45)), "45 seconds from now");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(ago(Duration::milliseconds(1_499)), "1 second ago");
        assert_eq!(ago(Duration::milliseconds(1_500)), "2 seconds ago");
        assert_eq!(ago(Duration::seconds(90)), "2 minutes ago");
        assert_eq!(ago(Duration::days(45)), "2 months ago");
        assert_eq!(ago(Duration::days(-44)), "1 month from now");
    }

    #[test]
    fn zero_offset_stays_on_first_rung() {
        assert_eq!(ago(Duration::ZERO), "0 milliseconds ago");
        // Below a millisecond the instants are the same.
        assert_eq!(ago(Duration::microseconds(900)), "0 milliseconds ago");
    }

    #[test]
    fn classic_ladder_skips_hours() {
        assert_eq!(ago(Duration::hours(5)), "300 minutes ago");
        assert_eq!(ago(Duration::hours(-1)), "60 minutes from now");
        assert_eq!(ago(Duration::hours(23)), "1380 minutes ago");
    }

    #[test]
    fn hourly_ladder_uses_hours() {
        assert_eq!(hourly_ago(Duration::hours(5)), "5 hours ago");
        assert_eq!(hourly_ago(Duration::hours(-1)), "1 hour from now");
        assert_eq!(hourly_ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(hourly_ago(Duration::days(2)), "2 days ago");
    }

    #[test]
    fn beyond_the_last_rung_counts_years() {
        assert_eq!(ago(Duration::days(400)), "1 year ago");
        assert_eq!(ago(Duration::days(365)), "1 year ago");
        assert_eq!(ago(Duration::days(-800)), "2 years from now");
        assert_eq!(ago(Duration::days(3650)), "10 years ago");
    }

    #[test]
    fn under_a_year_stays_in_months() {
        assert_eq!(ago(Duration::days(364)), "12 months ago");
        assert_eq!(ago(Duration::days(30)), "1 month ago");
    }

    #[test]
    fn describe_takes_signed_millis() {
        assert_eq!(Ladder::Classic.describe(172_800_000), "2 days ago");
        assert_eq!(Ladder::Classic.describe(-86_400_000), "1 day from now");
        assert_eq!(Ladder::Hourly.describe(i64::MIN), "292471209 years from now");
    }

    #[test]
    fn time_uses_the_given_clock() {
        let now = Time::from(NOW);
        let then = Time::from(NOW - Duration::days(2));

        assert_eq!(then.when_at(&now), "2 days ago");
        assert_eq!(now.when_at(&then), "2 days from now");
        assert_eq!(then.when_with(&NOW, Ladder::Hourly), "2 days ago");
    }

    #[test]
    fn now_is_a_few_milliseconds_ago() {
        let when = Time::now().when();

        assert!(when.ends_with(" ago"), "{when}");
        assert!(when.contains("millisecond"), "{when}");
    }
}
