use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::warn;

use crate::rolling_checksum::bozo32::Bozo32;
use crate::rolling_checksum::rolling_adler32::RollingAdler32;
use crate::rolling_checksum::RollingChecksum;
use crate::Error;

/// The rolling checksums this crate provides, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Adler32,
    Bozo32,
}

impl Algorithm {
    /// Builds an empty checksum of this kind.
    ///
    /// `base` only applies to [`Algorithm::Bozo32`], `None` picks the default one.
    pub fn checksum(&self, base: Option<u32>) -> Box<dyn RollingChecksum> {
        match self {
            Algorithm::Adler32 => {
                if let Some(base) = base {
                    warn!("{} has no base, ignoring {}", self, base);
                }
                Box::new(RollingAdler32::new())
            }
            Algorithm::Bozo32 => match base {
                Some(base) => Box::new(Bozo32::with_base(base)),
                None => Box::new(Bozo32::new()),
            },
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Adler32 => write!(f, "adler32"),
            Algorithm::Bozo32 => write!(f, "bozo32"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "adler32" => Ok(Algorithm::Adler32),
            "bozo32" => Ok(Algorithm::Bozo32),
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }
}
