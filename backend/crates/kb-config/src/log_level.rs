use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// A `log` verbosity read from config.toml or a `KB_LOG_*` variable.
///
/// Names are case-insensitive. An unknown name becomes `info` rather than
/// stopping the server over a typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    /// Application messages
    pub const APP_DEFAULT: Self = Self(LevelFilter::Info);
    /// sqlx statement logging, which is very chatty at `info`
    pub const SQL_DEFAULT: Self = Self(LevelFilter::Warn);

    pub fn parse_lenient(name: &str) -> Self {
        name.trim()
            .parse::<LevelFilter>()
            .map(Self)
            .unwrap_or(Self::APP_DEFAULT)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&name))
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
