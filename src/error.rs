// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A segmented control needs at least one tab.
    NoTabs,
    /// The requested starting tab does not exist.
    StartingIndexOutOfRange { index: usize, count: usize },
    /// The requested height leaves no room for the tabs.
    ControlTooShort { height: f32, minimum: f32 },
    /// A color string could not be parsed as `#rrggbb`.
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NoTabs => write!(f, "Segmented control requires at least one tab"),
            Error::StartingIndexOutOfRange { index, count } => write!(
                f,
                "Starting index {} is out of range for {} tab(s)",
                index, count
            ),
            Error::ControlTooShort { height, minimum } => write!(
                f,
                "Control height {} must be greater than {}",
                height, minimum
            ),
            Error::InvalidColor(raw) => write!(f, "Invalid color: {}", raw),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
