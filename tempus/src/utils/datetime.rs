use std::sync::OnceLock;

use time::{macros::format_description, Duration, OffsetDateTime, UtcOffset};

use crate::error::{Error, Result};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

// A fixed instant is a clock that never moves.
impl Clock for OffsetDateTime {
    fn now(&self) -> OffsetDateTime {
        *self
    }
}

/// Offset of the host's local time zone, detected once per process.
///
/// `time` refuses to read the offset when it cannot do so soundly (e.g. in a
/// multi-threaded process on most unixes); UTC is used in that case.
pub fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| match UtcOffset::current_local_offset() {
        Ok(offset) => offset,
        Err(err) => {
            warn!(?err, "Failed to determine local offset, falling back to UTC");

            UtcOffset::UTC
        }
    })
}

/// Parses `+HH:MM` / `-HH:MM`, or `Z` / `UTC`.
pub fn parse_offset(input: &str) -> Result<UtcOffset> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("z") || input.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }

    let description = format_description!("[offset_hour sign:mandatory]:[offset_minute]");

    UtcOffset::parse(input, &description).map_err(|_| Error::InvalidOffset(input.to_owned()))
}

pub fn truncate_to_millis(date_time: OffsetDateTime) -> OffsetDateTime {
    let sub_millis = date_time.nanosecond() % 1_000_000;

    date_time - Duration::nanoseconds(i64::from(sub_millis))
}
