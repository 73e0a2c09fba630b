//! Turns a flight given as airport codes and local wall-clock times into a
//! calendar event with correct, time zone aware start and end instants.

pub mod airport;
pub mod config;
pub mod directory;
pub mod error;
pub mod event;
pub mod flight;
pub mod time;
pub mod timezone;

use tracing::debug;
use crate::config::Config;
use crate::directory::AirportDirectory;
use crate::event::{ComposeOptions, FlightDetails, FlightEvent};
use crate::flight::FlightTimeResolver;
use crate::timezone::{PolygonLookup, TimeZoneLookup};

pub use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug)]
pub struct FlightRequest<'a> {
    pub carrier_prefix: &'a str,
    pub flight_number: &'a str,
    /// Free text such as a booking reference; left out of the event when empty.
    pub record: &'a str,
    pub departure_code: &'a str,
    pub departure_time: &'a str,
    pub arrival_code: &'a str,
    pub arrival_time: &'a str,
}

pub struct FlightCal {
    directory: AirportDirectory,
    lookup: Box<dyn TimeZoneLookup + Send + Sync>,
    options: ComposeOptions,
}

impl FlightCal {
    pub fn new(config: &Config) -> Result<Self> {
        let directory = match &config.airports {
            Some(path) => AirportDirectory::from_path(path)?,
            None => AirportDirectory::embedded().clone(),
        };
        Ok(FlightCal::with_parts(directory, PolygonLookup, config.compose_options()))
    }

    pub fn with_parts<L>(directory: AirportDirectory, lookup: L, options: ComposeOptions) -> Self
    where
        L: TimeZoneLookup + Send + Sync + 'static,
    {
        FlightCal {
            directory,
            lookup: Box::new(lookup),
            options,
        }
    }

    pub fn directory(&self) -> &AirportDirectory {
        &self.directory
    }

    pub fn create_flight_event(&self, request: &FlightRequest<'_>) -> Result<FlightEvent> {
        let origin = self.directory.lookup_iata(request.departure_code)?;
        let destination = self.directory.lookup_iata(request.arrival_code)?;
        debug!(%origin, %destination, "found airports");

        let span = FlightTimeResolver::new(self.lookup.as_ref()).resolve(
            &origin,
            request.departure_time,
            &destination,
            request.arrival_time,
        )?;

        let details = FlightDetails {
            carrier_prefix: request.carrier_prefix,
            flight_number: request.flight_number,
            record: request.record,
        };
        Ok(event::compose(&details, &origin, &destination, &span, self.options))
    }
}

/// Builds the event for one flight from the bundled airport data.
pub fn create_flight_event(
    carrier_prefix: &str,
    flight_number: &str,
    record: &str,
    departure_code: &str,
    departure_time: &str,
    arrival_code: &str,
    arrival_time: &str,
) -> Result<FlightEvent> {
    let cal = FlightCal::with_parts(
        AirportDirectory::embedded().clone(),
        PolygonLookup,
        ComposeOptions::default(),
    );
    cal.create_flight_event(&FlightRequest {
        carrier_prefix,
        flight_number,
        record,
        departure_code,
        departure_time,
        arrival_code,
        arrival_time,
    })
}
