use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

pub type AirportCode = Arc<str>;

/// One row of the reference dataset, exactly as it appears in the file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AirportRow {
    pub ident: String,
    pub name: String,
    pub iso_country: String,
    pub iso_region: String,
    pub municipality: String,
    pub iata_code: String,
    pub gps_code: String,
    pub latitude_deg: String,
    pub longitude_deg: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Airport {
    pub ident: AirportCode,
    pub iata: AirportCode,
    pub gps_code: AirportCode,
    pub name: Arc<str>,
    pub country: Arc<str>,
    pub region: Arc<str>,
    pub city: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Country flag built from the two regional-indicator symbols of the
    /// ISO country code, e.g. "NZ" -> 🇳🇿.
    pub fn flag(&self) -> Option<String> {
        let code = self.country.as_bytes();
        if code.len() != 2 || !code.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        code.iter()
            .map(|b| char::from_u32(0x1F1E6 + u32::from(b.to_ascii_uppercase() - b'A')))
            .collect()
    }
}

impl TryFrom<AirportRow> for Airport {
    type Error = Error;

    fn try_from(row: AirportRow) -> Result<Self> {
        let latitude = parse_degrees(&row.ident, "latitude_deg", &row.latitude_deg)?;
        let longitude = parse_degrees(&row.ident, "longitude_deg", &row.longitude_deg)?;
        Ok(Airport {
            ident: Arc::from(row.ident),
            iata: Arc::from(row.iata_code),
            gps_code: Arc::from(row.gps_code),
            name: Arc::from(row.name),
            country: Arc::from(row.iso_country),
            region: Arc::from(row.iso_region),
            city: Arc::from(row.municipality),
            latitude,
            longitude,
        })
    }
}

fn parse_degrees(ident: &str, field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::DataFormat {
            ident: ident.to_string(),
            field,
            value: value.to_string(),
        })
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.iata.is_empty() {
            write!(f, "{}", self.ident)
        } else {
            write!(f, "{}", self.iata)
        }
    }
}
