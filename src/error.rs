use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no such airport {code}")]
    NotFound { code: String },
    #[error("airport {ident} has a malformed {field}: {value:?}")]
    DataFormat {
        ident: String,
        field: &'static str,
        value: String,
    },
    #[error("malformed airport data: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no time zone found at ({latitude}, {longitude})")]
    Resolution { latitude: f64, longitude: f64 },
    #[error("cannot parse time {input:?}: {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },
    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(input: &str, source: chrono::ParseError) -> Self {
        Error::Parse {
            input: input.to_string(),
            source,
        }
    }
}
