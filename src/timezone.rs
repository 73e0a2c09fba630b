use std::sync::LazyLock;
use chrono_tz::Tz;
use tracing::debug;
use tzf_rs::DefaultFinder;
use crate::error::{Error, Result};

/// Maps a coordinate pair to the IANA zone observed there.
pub trait TimeZoneLookup {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz>;
}

static FINDER: LazyLock<DefaultFinder> = LazyLock::new(DefaultFinder::new);

/// Point-in-polygon lookup against the zone boundaries bundled with `tzf-rs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolygonLookup;

impl TimeZoneLookup for PolygonLookup {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz> {
        let unresolved = || Error::Resolution { latitude, longitude };
        if !in_range(latitude, longitude) {
            return Err(unresolved());
        }

        // tzf takes longitude first
        let name = FINDER.get_tz_name(longitude, latitude);
        debug!(latitude, longitude, zone = name, "time zone lookup");
        // open water only gets a nautical Etc/GMT±N zone
        if name.is_empty() || name.starts_with("Etc/") {
            return Err(unresolved());
        }
        name.parse::<Tz>().map_err(|_| unresolved())
    }
}

fn in_range(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}
