pub mod bozo32;
pub mod rolling_adler32;

/// Size in bytes of the digests produced by the checksums in this crate.
pub const SIZE: usize = 4;

/// A 32 bit checksum over a window of bytes that can slide by one byte in O(1).
///
/// The window is established with [`RollingChecksum::write`] and then advanced
/// with [`RollingChecksum::roll`]. At any point [`RollingChecksum::sum32`] equals
/// what a fresh checksum would compute over the current window contents.
pub trait RollingChecksum {
    /// Creates a checksum with default parameters and seeds it with `initial_window`.
    fn from_window(initial_window: &[u8]) -> Self
    where
        Self: Sized;

    /// Appends `data` to the window and recomputes the checksum over the whole
    /// window. Returns the new window length, or 0 when `data` is empty.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Drops the oldest byte of the window and appends `byte`.
    ///
    /// The window must have been seeded with [`RollingChecksum::write`] first,
    /// rolling an empty window does nothing.
    fn roll(&mut self, byte: u8);

    fn sum32(&self) -> u32;

    /// Appends the checksum to `buf`, most significant byte first.
    fn sum(&self, mut buf: Vec<u8>) -> Vec<u8> {
        buf.extend_from_slice(&self.sum32().to_be_bytes());
        buf
    }

    /// Returns the checksum to its freshly constructed, empty state.
    fn reset(&mut self);

    fn window_len(&self) -> usize;

    /// Copies the current window, oldest byte first.
    fn window(&self) -> Vec<u8>;

    fn size(&self) -> usize {
        SIZE
    }

    fn block_size(&self) -> usize {
        1
    }
}

/// Implements `std::io::Write` by forwarding to [`RollingChecksum::write`].
///
/// `io::Write::write` reports the bytes consumed from the buffer rather than
/// the window length, as the `io::Write` contract requires.
macro_rules! impl_io_write {
    ($checksum:ty) => {
        impl std::io::Write for $checksum {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                $crate::rolling_checksum::RollingChecksum::write(self, buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
    };
}

pub(crate) use impl_io_write;
