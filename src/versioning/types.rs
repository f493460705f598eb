use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: '{0}' (expected <major>.<minor>)")]
    InvalidVersionFormat(String),
    #[error("cannot bump {component} component of version {version}: value would overflow")]
    Overflow {
        version: String,
        component: &'static str,
    },
}

/// Which component of a version gets incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CreationMethod {
    Major,
    Minor,
}

impl CreationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreationMethod::Major => "major",
            CreationMethod::Minor => "minor",
        }
    }
}

impl fmt::Display for CreationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreationMethod {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(CreationMethod::Major),
            "minor" => Ok(CreationMethod::Minor),
            other => Err(format!("unknown creation method: {} (expected: major|minor)", other)),
        }
    }
}

/// A two-component `major.minor` version.
///
/// Parsing accepts one or more ASCII digits per component (leading zeros
/// included); rendering never emits leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The version handed out when nothing has been versioned yet.
    pub fn initial(method: CreationMethod) -> Self {
        match method {
            CreationMethod::Major => Self::new(1, 0),
            CreationMethod::Minor => Self::new(0, 1),
        }
    }

    /// Returns the next version. A major bump resets minor to zero; a minor
    /// bump never carries into major.
    pub fn bump(self, method: CreationMethod) -> Result<Self, VersionError> {
        match method {
            CreationMethod::Major => {
                let major = self
                    .major
                    .checked_add(1)
                    .ok_or_else(|| self.overflow("major"))?;
                Ok(Self::new(major, 0))
            }
            CreationMethod::Minor => {
                let minor = self
                    .minor
                    .checked_add(1)
                    .ok_or_else(|| self.overflow("minor"))?;
                Ok(Self::new(self.major, minor))
            }
        }
    }

    fn overflow(&self, component: &'static str) -> VersionError {
        VersionError::Overflow {
            version: self.to_string(),
            component,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError::InvalidVersionFormat(raw.to_string());

        let mut parts = raw.split('.');
        let (major, minor) = match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => (major, minor),
            _ => return Err(invalid()),
        };

        let major = parse_component(major).ok_or_else(invalid)?;
        let minor = parse_component(minor).ok_or_else(invalid)?;
        Ok(Self::new(major, minor))
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

// u32's own parser also takes a leading '+', which is not a valid component.
fn parse_component(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
