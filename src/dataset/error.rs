use std::{error::Error, fmt, io, num::ParseFloatError};

use reqwest::StatusCode;

/// The dataset module's result type.
pub type Result<T> = std::result::Result<T, DatasetErr>;

/// Failures while retrieving or decoding a dataset.
#[derive(Debug)]
pub enum DatasetErr {
    Http(reqwest::Error),
    Status(StatusCode),
    Io(io::Error),
    Csv(csv::Error),
    FieldCount {
        line: u64,
        got: usize,
    },
    Parse {
        line: u64,
        column: usize,
        source: ParseFloatError,
    },
}

impl fmt::Display for DatasetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetErr::Http(e) => write!(f, "http request failed: {e}"),
            DatasetErr::Status(status) => {
                write!(f, "couldn't download the csv file, status code: {status}")
            }
            DatasetErr::Io(e) => write!(f, "io error: {e}"),
            DatasetErr::Csv(e) => write!(f, "couldn't read the csv file: {e}"),
            DatasetErr::FieldCount { line, got } => {
                write!(f, "line {line}: expected 2 fields, got {got}")
            }
            DatasetErr::Parse {
                line,
                column,
                source,
            } => write!(f, "line {line}, column {column}: not a float: {source}"),
        }
    }
}

impl Error for DatasetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetErr::Http(e) => Some(e),
            DatasetErr::Io(e) => Some(e),
            DatasetErr::Csv(e) => Some(e),
            DatasetErr::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DatasetErr {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<io::Error> for DatasetErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for DatasetErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
