use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};
use crate::airport::{Airport, AirportRow};
use crate::error::{Error, Result};

static EMBEDDED_AIRPORTS: &[u8] = include_bytes!("../data/airports.csv");

static EMBEDDED: LazyLock<AirportDirectory> =
    LazyLock::new(|| AirportDirectory::from_bytes(EMBEDDED_AIRPORTS));

/// Airport reference data in the OurAirports CSV layout.
///
/// Every lookup scans the rows from the top and stops at the first match;
/// nothing is indexed or cached between calls.
#[derive(Clone, Debug)]
pub struct AirportDirectory {
    data: Cow<'static, [u8]>,
}

impl AirportDirectory {
    pub fn embedded() -> &'static AirportDirectory {
        &EMBEDDED
    }

    pub fn from_bytes(data: impl Into<Cow<'static, [u8]>>) -> Self {
        AirportDirectory { data: data.into() }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "loaded airport data");
        Ok(AirportDirectory::from_bytes(data))
    }

    pub fn lookup<F>(&self, code: &str, predicate: F) -> Result<Airport>
    where
        F: Fn(&AirportRow) -> bool,
    {
        let mut reader = csv::Reader::from_reader(self.data.as_ref());
        for row in reader.deserialize::<AirportRow>() {
            let row = row?;
            if predicate(&row) {
                return Airport::try_from(row)
                    .inspect_err(|e| warn!(code, error = %e, "unusable airport record"));
            }
        }
        Err(Error::NotFound { code: code.to_string() })
    }

    pub fn lookup_ident(&self, ident: &str) -> Result<Airport> {
        if ident.is_empty() {
            return Err(Error::NotFound { code: String::new() });
        }
        self.lookup(ident, |row| row.ident == ident)
    }

    pub fn lookup_iata(&self, iata: &str) -> Result<Airport> {
        if iata.is_empty() {
            return Err(Error::NotFound { code: String::new() });
        }
        self.lookup(iata, |row| row.iata_code == iata)
    }

    /// Every non-empty IATA code in dataset order.
    pub fn iata_codes(&self) -> Result<Vec<String>> {
        let mut reader = csv::Reader::from_reader(self.data.as_ref());
        let mut codes = vec![];
        for row in reader.deserialize::<AirportRow>() {
            let row = row?;
            if !row.iata_code.is_empty() {
                codes.push(row.iata_code);
            }
        }
        Ok(codes)
    }
}
