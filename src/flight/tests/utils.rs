use crate::airport::Airport;
use crate::error::{Error, Result};
use crate::timezone::TimeZoneLookup;
use chrono_tz::Tz;
use std::sync::Arc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn airport(ident: &str, iata: &str, city: &str, country: &str, latitude: f64, longitude: f64) -> Airport {
    Airport {
        ident: Arc::from(ident),
        iata: Arc::from(iata),
        gps_code: Arc::from(ident),
        name: Arc::from(format!("{} International Airport", city)),
        country: Arc::from(country),
        region: Arc::from(""),
        city: Arc::from(city),
        latitude,
        longitude,
    }
}

/// Zone lookup that only knows the coordinates it was given.
#[derive(Default)]
pub struct ZoneTable {
    zones: Vec<((f64, f64), Tz)>,
}

impl ZoneTable {
    pub fn with(mut self, airport: &Airport, tz: Tz) -> Self {
        self.zones.push(((airport.latitude, airport.longitude), tz));
        self
    }
}

impl TimeZoneLookup for ZoneTable {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz> {
        self.zones
            .iter()
            .find(|((lat, lon), _)| *lat == latitude && *lon == longitude)
            .map(|(_, tz)| *tz)
            .ok_or(Error::Resolution { latitude, longitude })
    }
}

pub fn haneda() -> Airport {
    airport("RJTT", "HND", "Tokyo", "JP", 35.552299, 139.779999)
}

pub fn heathrow() -> Airport {
    airport("EGLL", "LHR", "London", "GB", 51.4706, -0.461941)
}

pub fn honolulu() -> Airport {
    airport("PHNL", "HNL", "Honolulu", "US", 21.32062, -157.924228)
}

pub fn auckland() -> Airport {
    airport("NZAA", "AKL", "Auckland", "NZ", -37.008099, 174.792007)
}

pub fn zones() -> ZoneTable {
    ZoneTable::default()
        .with(&haneda(), Tz::Asia__Tokyo)
        .with(&heathrow(), Tz::Europe__London)
        .with(&honolulu(), Tz::Pacific__Honolulu)
        .with(&auckland(), Tz::Pacific__Auckland)
}
