//! Rolling checksums: 32 bit digests over a sliding window of bytes that are
//! updated in O(1) when one byte leaves the window and another one enters it.
//!
//! ```
//! use rollinghash::{RollingAdler32, RollingChecksum};
//!
//! let mut checksum = RollingAdler32::new();
//! checksum.write(b"\0ab");
//! checksum.roll(b'c');
//! assert_eq!(checksum.sum32(), 0x024d0127);
//! ```

use thiserror::Error;

pub mod algorithm;
pub mod rolling_checksum;
pub mod rolling_sums;
pub mod window;

pub use algorithm::Algorithm;
pub use rolling_checksum::bozo32::Bozo32;
pub use rolling_checksum::rolling_adler32::RollingAdler32;
pub use rolling_checksum::RollingChecksum;
pub use rolling_sums::rolling_sums;

/// Capacity the window storage is pre-sized to by the default constructors.
pub const DEFAULT_WINDOW_CAP: usize = 64;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown rolling checksum: {0}")]
    UnknownAlgorithm(String),
}
