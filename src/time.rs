use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use crate::error::{Error, Result};

pub const LONG_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const SHORT_FORMAT: &str = "%a %H:%M";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock time anchored to the zone it was observed in.
pub type ResolvedTime = DateTime<Tz>;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> TimeDelta {
        match self {
            Direction::Forward => TimeDelta::hours(1),
            Direction::Backward => TimeDelta::hours(-1),
        }
    }
}

/// Anchors a civil date+time in `tz`. A wall-clock time that occurs twice
/// resolves to the earlier instant; one skipped by a forward transition is
/// read with the offset in force before the transition.
pub fn anchor(tz: &Tz, naive: NaiveDateTime) -> ResolvedTime {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
        LocalResult::None => {
            // offset in force a day earlier, i.e. before the transition
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1))).fix();
            let utc = naive - TimeDelta::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Parses `YYYY-MM-DDTHH:MM` as wall-clock time in `tz`.
pub fn parse_local(input: &str, tz: &Tz) -> Result<ResolvedTime> {
    let naive = NaiveDateTime::parse_from_str(input, LONG_FORMAT)
        .map_err(|e| Error::parse(input, e))?;
    Ok(anchor(tz, naive))
}

/// Parses `HH:MM` as wall-clock time on `date` in `tz`.
pub fn parse_time_on(input: &str, date: NaiveDate, tz: &Tz) -> Result<ResolvedTime> {
    let borrowed = format!("{}T{}", date.format(DATE_FORMAT), input);
    let naive = NaiveDateTime::parse_from_str(&borrowed, LONG_FORMAT)
        .map_err(|e| Error::parse(input, e))?;
    Ok(anchor(tz, naive))
}

/// Moves `t` to the neighbouring local calendar date while keeping its
/// wall-clock time of day.
///
/// Steps an hour at a time until the local date changes, then re-anchors the
/// original time of day on that date, so DST transitions on the way never
/// leak into the result.
pub fn shift_by_whole_days(t: &ResolvedTime, direction: Direction) -> ResolvedTime {
    let tz = t.timezone();
    let day = t.date_naive();
    let mut tmp = *t + direction.step();
    while tmp.date_naive() == day {
        tmp = tmp + direction.step();
    }

    let target = tmp.date_naive().and_time(t.time());
    anchor(&tz, target)
}

pub fn next_day(t: &ResolvedTime) -> ResolvedTime {
    shift_by_whole_days(t, Direction::Forward)
}

pub fn prev_day(t: &ResolvedTime) -> ResolvedTime {
    shift_by_whole_days(t, Direction::Backward)
}

/// Elapsed time between two instants, shown as `13h05m`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct FlightDuration(pub TimeDelta);

impl FlightDuration {
    pub fn between(from: &ResolvedTime, to: &ResolvedTime) -> Self {
        FlightDuration(to.signed_duration_since(*from))
    }

    pub fn hours(&self) -> f64 {
        self.0.num_seconds() as f64 / 3600.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < TimeDelta::zero()
    }
}

impl std::fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0.num_hours();
        let mins = self.0.num_minutes() % 60;
        write!(f, "{}h{:02}m", hours, mins)
    }
}

impl Serialize for FlightDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
