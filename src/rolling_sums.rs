use log::debug;

use crate::rolling_checksum::RollingChecksum;

/// Slides a window of `window` bytes over `content` and collects
/// `(offset, sum32)` pairs, where `offset` is the index of the window's first
/// byte.
///
/// The first pair is always the seeded window at offset 0. After that only
/// offsets that are a multiple of `every` are kept (an `every` of 0 keeps them
/// all). When `content` is shorter than `window` the whole content is hashed as
/// a single window. `checksum` is expected to be empty.
pub fn rolling_sums(
    checksum: &mut dyn RollingChecksum,
    content: &[u8],
    window: usize,
    every: usize,
) -> Vec<(usize, u32)> {
    let window = window.min(content.len());
    let every = every.max(1);
    debug!(
        "rolling over {} bytes with a window of {} bytes",
        content.len(),
        window
    );

    checksum.write(&content[..window]);

    let rolled = content.len() - window;
    let mut sums = Vec::with_capacity(1 + rolled / every);
    sums.push((0, checksum.sum32()));
    for (i, &byte) in content[window..].iter().enumerate() {
        checksum.roll(byte);
        let offset = i + 1;
        if offset % every == 0 {
            sums.push((offset, checksum.sum32()));
        }
    }
    sums
}
