use std::{fmt, path::PathBuf};

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// An `http://` or `https://` URL, fetched with a GET request.
    Remote(String),
    /// A CSV file on the local filesystem.
    Local(PathBuf),
}

impl DatasetSource {
    /// Interprets `s` as a URL when it has an http(s) scheme, as a path otherwise.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Remote(s.to_string())
        } else {
            Self::Local(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Remote(url) => f.write_str(url),
            DatasetSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
