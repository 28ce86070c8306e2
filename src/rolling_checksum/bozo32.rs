//! A polynomial rolling hash in the style of Rabin-Karp.
//!
//! The hash of a window `w` of length `n` is `sum(w[i] * a^(n - 1 - i))` modulo
//! 2^32. It is not the Rabin-Karp fingerprint from the paper (there is no prime
//! modulus, the arithmetic simply wraps), hence the name, but it rolls
//! consistently and spreads well enough for content defined chunking.

use log::debug;

use super::{impl_io_write, RollingChecksum};
use crate::window::Window;
use crate::DEFAULT_WINDOW_CAP;

/// Largest prime that fits in 16 bits.
pub const DEFAULT_BASE: u32 = 65521;

#[derive(Debug, Clone)]
pub struct Bozo32 {
    a: u32,
    h: u32,
    /// `a` to the power of the window length.
    a_power_n: u32,
    window: Window,
}

impl Bozo32 {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE)
    }

    /// Any base is accepted, including degenerate ones like 0.
    pub fn with_base(a: u32) -> Self {
        Self::with_base_and_capacity(a, DEFAULT_WINDOW_CAP)
    }

    pub fn with_base_and_capacity(a: u32, capacity: usize) -> Self {
        Bozo32 {
            a,
            h: 0,
            a_power_n: 1,
            window: Window::with_capacity(capacity),
        }
    }

    pub fn base(&self) -> u32 {
        self.a
    }
}

impl Default for Bozo32 {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingChecksum for Bozo32 {
    fn from_window(initial_window: &[u8]) -> Self {
        let mut checksum = Bozo32::new();
        checksum.write(initial_window);
        checksum
    }

    fn write(&mut self, data: &[u8]) -> usize {
        if data.is_empty() {
            return 0;
        }
        let window = self.window.extend(data);
        debug!("reseeding bozo32 over a window of {} bytes", window.len());

        self.h = 0;
        self.a_power_n = 1;
        for &c in window {
            self.h = self.h.wrapping_mul(self.a).wrapping_add(c as u32);
            self.a_power_n = self.a_power_n.wrapping_mul(self.a);
        }
        window.len()
    }

    fn roll(&mut self, byte: u8) {
        let Some(leaving) = self.window.roll(byte) else {
            return;
        };
        self.h = self
            .h
            .wrapping_mul(self.a)
            .wrapping_add(byte as u32)
            .wrapping_sub((leaving as u32).wrapping_mul(self.a_power_n));
    }

    fn sum32(&self) -> u32 {
        self.h
    }

    fn reset(&mut self) {
        self.h = 0;
        self.a_power_n = 1;
        self.window.clear();
    }

    fn window_len(&self) -> usize {
        self.window.len()
    }

    fn window(&self) -> Vec<u8> {
        self.window.to_vec()
    }
}

impl_io_write!(Bozo32);
