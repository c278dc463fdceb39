//! Where stack outputs are written

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::reference::ParseReferenceError;

/// Outputs destination: `-` is standard output, anything else a file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputsDestination {
    Stdout,
    File(PathBuf),
}

impl FromStr for OutputsDestination {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ParseReferenceError::EmptyDestination),
            "-" => Ok(Self::Stdout),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for OutputsDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
