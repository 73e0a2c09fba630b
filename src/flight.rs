use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, info};
use crate::airport::Airport;
use crate::error::Result;
use crate::time::{next_day, parse_local, parse_time_on, prev_day, FlightDuration, ResolvedTime};
use crate::timezone::TimeZoneLookup;

/// Longest leg, in hours, the date disambiguation will accept without moving
/// the arrival to another day.
pub const MAX_LEG_HOURS: f64 = 22.0;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DayCorrection {
    None,
    AdvanceOne,
    AdvanceTwo,
    RetreatOne,
}

impl DayCorrection {
    /// Picks the correction for a naive departure-to-arrival duration.
    pub fn for_hours(hours: f64) -> Self {
        if hours < -MAX_LEG_HOURS {
            DayCorrection::AdvanceTwo
        } else if hours < 0.0 {
            DayCorrection::AdvanceOne
        } else if hours > MAX_LEG_HOURS {
            DayCorrection::RetreatOne
        } else {
            DayCorrection::None
        }
    }

    fn apply(self, arrival: &ResolvedTime) -> ResolvedTime {
        match self {
            DayCorrection::None => *arrival,
            DayCorrection::AdvanceOne => next_day(arrival),
            DayCorrection::AdvanceTwo => next_day(&next_day(arrival)),
            DayCorrection::RetreatOne => prev_day(arrival),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightTimeSpan {
    pub departure: ResolvedTime,
    pub arrival: ResolvedTime,
    pub duration: FlightDuration,
    pub correction: DayCorrection,
}

/// Resolves a departure and an arrival given as local wall-clock strings.
///
/// The departure must be `YYYY-MM-DDTHH:MM`. The arrival may be the same or
/// just `HH:MM`, in which case it borrows the departure's local date. A leg
/// that comes out negative or longer than 22 hours gets its arrival moved by
/// whole days, once, on the assumption that no single leg is longer than that.
pub fn resolve_times(
    departure_tz: &Tz,
    departure: &str,
    arrival_tz: &Tz,
    arrival: &str,
) -> Result<FlightTimeSpan> {
    let departure = parse_local(departure, departure_tz)?;
    let arrival = match parse_local(arrival, arrival_tz) {
        Ok(t) => t,
        Err(_) => parse_time_on(arrival, departure.date_naive(), arrival_tz)?,
    };

    let naive = FlightDuration::between(&departure, &arrival);
    let correction = DayCorrection::for_hours(naive.hours());
    debug!(%departure, %arrival, hours = naive.hours(), ?correction, "naive flight duration");

    let arrival = correction.apply(&arrival);
    let duration = FlightDuration::between(&departure, &arrival);
    if correction != DayCorrection::None {
        info!(%arrival, %duration, ?correction, "moved arrival to another day");
    }

    Ok(FlightTimeSpan {
        departure,
        arrival,
        duration,
        correction,
    })
}

pub struct FlightTimeResolver<'a, L: TimeZoneLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: TimeZoneLookup + ?Sized> FlightTimeResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        FlightTimeResolver { lookup }
    }

    pub fn resolve(
        &self,
        origin: &Airport,
        departure: &str,
        destination: &Airport,
        arrival: &str,
    ) -> Result<FlightTimeSpan> {
        let departure_tz = self.lookup.resolve(origin.latitude, origin.longitude)?;
        let arrival_tz = self.lookup.resolve(destination.latitude, destination.longitude)?;
        debug!(%origin, %departure_tz, %destination, %arrival_tz, "anchored airports");
        resolve_times(&departure_tz, departure, &arrival_tz, arrival)
    }
}
