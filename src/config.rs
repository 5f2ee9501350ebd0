use std::{
    env,
    error::Error,
    fmt,
    num::{NonZeroUsize, ParseFloatError},
    thread,
};

use crate::dataset::DatasetSource;

/// The dataset fitted when `LINREG_DATASET` isn't set.
pub const DEFAULT_DATASET: &str =
    "https://raw.githubusercontent.com/FrowsyFrog/T3_ProgramacionConcurrenteDistribuida/main/train.csv";

/// The inputs predicted when `LINREG_INPUTS` isn't set.
pub const DEFAULT_INPUTS: [f64; 1] = [100.];

/// How the least-squares sums are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorConfig {
    /// One unit of work per sample, all contributions serialized by a single lock.
    Locked { workers: NonZeroUsize },
    /// One chunk per worker reduced locally, partial tuples merged at the end.
    Partitioned { workers: NonZeroUsize },
}

impl AccumulatorConfig {
    pub fn workers(&self) -> NonZeroUsize {
        match self {
            Self::Locked { workers } | Self::Partitioned { workers } => *workers,
        }
    }
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self::Partitioned {
            workers: default_workers(),
        }
    }
}

/// Everything a single run of the binary needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: DatasetSource,
    pub accumulator: AccumulatorConfig,
    pub inputs: Vec<f64>,
}

impl RunConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of a variable, if set.
    ///
    /// # Returns
    /// The run configuration or a `ConfigErr` for the first invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup("LINREG_DATASET")
            .map(|s| DatasetSource::parse(&s))
            .unwrap_or_else(|| DatasetSource::Remote(DEFAULT_DATASET.to_string()));

        let workers = match lookup("LINREG_WORKERS") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigErr::InvalidWorkers(s.clone()))?,
            None => default_workers(),
        };

        let accumulator = match lookup("LINREG_STRATEGY").as_deref().map(str::trim) {
            None | Some("partitioned") => AccumulatorConfig::Partitioned { workers },
            Some("locked") => AccumulatorConfig::Locked { workers },
            Some(other) => return Err(ConfigErr::UnknownStrategy(other.to_string())),
        };

        let inputs = match lookup("LINREG_INPUTS") {
            Some(s) => parse_inputs(&s)?,
            None => DEFAULT_INPUTS.to_vec(),
        };

        Ok(Self {
            source,
            accumulator,
            inputs,
        })
    }
}

fn default_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

fn parse_inputs(s: &str) -> Result<Vec<f64>, ConfigErr> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse().map_err(|source| ConfigErr::InvalidInput {
                value: v.to_string(),
                source,
            })
        })
        .collect()
}

/// Invalid values in the run configuration.
#[derive(Debug)]
pub enum ConfigErr {
    InvalidWorkers(String),
    UnknownStrategy(String),
    InvalidInput {
        value: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkers(s) => {
                write!(f, "invalid LINREG_WORKERS {s:?}: expected a positive integer")
            }
            Self::UnknownStrategy(s) => {
                write!(f, "unknown LINREG_STRATEGY {s:?}: expected partitioned or locked")
            }
            Self::InvalidInput { value, source } => {
                write!(f, "invalid LINREG_INPUTS value {value:?}: {source}")
            }
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput { source, .. } => Some(source),
            _ => None,
        }
    }
}
