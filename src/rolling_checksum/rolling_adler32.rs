use log::debug;

use super::{impl_io_write, RollingChecksum};
use crate::window::Window;
use crate::DEFAULT_WINDOW_CAP;

/// Largest prime smaller than 2^16.
const MOD: u32 = 65521;

/// Adler-32 over a sliding window.
///
/// The window is reseeded with the standard, non-rolling Adler-32 and then
/// maintained with the rolling identity
/// `A' = A + enter - leave` and `B' = B + A' - n * leave - 1` (mod 65521).
#[derive(Debug, Clone)]
pub struct RollingAdler32 {
    a: u32,
    b: u32,
    /// Window length modulo `MOD`.
    n: u32,
    window: Window,
}

impl RollingAdler32 {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW_CAP)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RollingAdler32 {
            a: 1,
            b: 0,
            n: 0,
            window: Window::with_capacity(capacity),
        }
    }
}

impl Default for RollingAdler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingChecksum for RollingAdler32 {
    fn from_window(initial_window: &[u8]) -> Self {
        let mut checksum = RollingAdler32::new();
        checksum.write(initial_window);
        checksum
    }

    fn write(&mut self, data: &[u8]) -> usize {
        if data.is_empty() {
            return 0;
        }
        let window = self.window.extend(data);
        debug!("reseeding adler32 over a window of {} bytes", window.len());

        let sum = adler32::RollingAdler32::from_buffer(window).hash();
        self.a = sum & 0xffff;
        self.b = sum >> 16;
        self.n = (window.len() % MOD as usize) as u32;
        window.len()
    }

    fn roll(&mut self, byte: u8) {
        let leaving = match self.window.roll(byte) {
            Some(leaving) => leaving as u32,
            None => return,
        };
        let entering = byte as u32;

        // every operand stays below MOD so adding MOD keeps the subtractions positive
        self.a = (self.a + MOD + entering - leaving) % MOD;
        self.b = (self.b + MOD - (self.n * leaving) % MOD + self.a + MOD - 1) % MOD;
    }

    fn sum32(&self) -> u32 {
        (self.b << 16) | self.a
    }

    fn reset(&mut self) {
        self.a = 1;
        self.b = 0;
        self.n = 0;
        self.window.clear();
    }

    fn window_len(&self) -> usize {
        self.window.len()
    }

    fn window(&self) -> Vec<u8> {
        self.window.to_vec()
    }
}

impl_io_write!(RollingAdler32);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn vanilla(data: &[u8]) -> u32 {
        adler32::adler32(data).unwrap()
    }

    #[test_case(b"", 0x00000001; "empty")]
    #[test_case(b"a", 0x00620062; "single byte")]
    #[test_case(b"abc", 0x024d0127; "short")]
    #[test_case(b"Nepal premier won't resign.", 0x8c3c09ea; "sentence")]
    fn test_write(data: &[u8], expected: u32) {
        let mut checksum = RollingAdler32::new();
        assert_eq!(checksum.write(data), data.len());
        assert_eq!(checksum.sum32(), expected);
    }

    #[test]
    fn test_write_then_roll() {
        let mut checksum = RollingAdler32::from_window(b"\0ab");
        checksum.roll(b'c');
        assert_eq!(checksum.sum32(), 0x024d0127);

        let direct = RollingAdler32::from_window(b"abc");
        assert_eq!(checksum.sum32(), direct.sum32());
    }

    #[test_case(3; "small window")]
    #[test_case(64; "default capacity window")]
    #[test_case(1; "single byte window")]
    fn test_checksum_sliding_window(window_size: usize) {
        let data: Vec<u8> = (0..500u32).map(|x| (x * 151 % 256) as u8).collect();

        let mut checksum = RollingAdler32::from_window(&data[..window_size]);

        for right in window_size..data.len() {
            let left = right - window_size;
            assert_eq!(checksum.sum32(), vanilla(&data[left..right]));
            checksum.roll(data[right]);
            assert_eq!(checksum.window_len(), window_size);
        }
        assert_eq!(checksum.sum32(), vanilla(&data[data.len() - window_size..]));
    }

    #[test]
    fn test_roll_saturated_bytes() {
        // 0xff bytes push both sums across the modulus on almost every roll
        let data = [0xffu8; 6000];
        let window_size = 5552;
        let mut checksum = RollingAdler32::from_window(&data[..window_size]);
        for (i, &byte) in data[window_size..].iter().enumerate() {
            checksum.roll(byte ^ (i as u8));
        }
        let mut expected: Vec<u8> = data[data.len() - window_size..].to_vec();
        let rolled = data.len() - window_size;
        for (i, byte) in expected[window_size - rolled..].iter_mut().enumerate() {
            *byte ^= i as u8;
        }
        assert_eq!(checksum.sum32(), vanilla(&expected));
    }

    #[test]
    fn test_roll_on_empty_window_is_noop() {
        let mut checksum = RollingAdler32::new();
        checksum.roll(b'x');
        assert_eq!(checksum.sum32(), 1);
        assert_eq!(checksum.window_len(), 0);
    }

    #[test]
    fn test_write_after_roll_extends_window() {
        let mut checksum = RollingAdler32::from_window(b"abcd");
        checksum.roll(b'e');
        assert_eq!(checksum.write(b"fg"), 6);
        assert_eq!(checksum.sum32(), vanilla(b"bcdefg"));

        checksum.roll(b'h');
        assert_eq!(checksum.sum32(), vanilla(b"cdefgh"));
        assert_eq!(checksum.window(), b"cdefgh");
    }

    #[test]
    fn test_reset() {
        let mut checksum = RollingAdler32::from_window(b"window");
        checksum.roll(b'!');
        checksum.reset();
        assert_eq!(checksum.sum32(), 1);
        assert_eq!(checksum.window_len(), 0);
        assert!(checksum.window().is_empty());

        checksum.write(b"again");
        assert_eq!(checksum.sum32(), vanilla(b"again"));
    }

    #[test]
    fn test_sum() {
        let checksum = RollingAdler32::from_window(b"a");
        assert_eq!(checksum.sum(Vec::new()), vec![0x00, 0x62, 0x00, 0x62]);
        assert_eq!(checksum.sum(vec![1, 2]), vec![1, 2, 0x00, 0x62, 0x00, 0x62]);
        assert_eq!(checksum.sum32(), checksum.sum32());
    }
}
