use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::error::Result;
use crate::event::ComposeOptions;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Airport data to use instead of the bundled copy, in the OurAirports CSV layout.
    pub airports: Option<PathBuf>,
    pub show_flags: bool,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            show_flags: self.show_flags,
        }
    }
}
