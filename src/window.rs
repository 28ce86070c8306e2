use log::trace;

/// Byte storage for a rolling window.
///
/// Once seeded the window behaves like a ring: [`Window::roll`] overwrites the
/// oldest byte in place and moves the logical start forward, so no bytes are
/// shifted on the hot path. The logical start is only brought back to physical
/// offset 0 when the window is extended.
#[derive(Debug, Clone, Default)]
pub struct Window {
    bytes: Vec<u8>,
    oldest: usize,
}

impl Window {
    pub fn with_capacity(capacity: usize) -> Self {
        Window {
            bytes: Vec::with_capacity(capacity),
            oldest: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends `data` after the newest byte and returns the whole window in
    /// oldest to newest order.
    pub fn extend(&mut self, data: &[u8]) -> &[u8] {
        self.rotate_to_start();
        // spare capacity is reused, the Vec only reallocates when it runs out
        self.bytes.extend_from_slice(data);
        &self.bytes
    }

    /// Replaces the oldest byte with `entering` and returns the byte that left
    /// the window, or `None` if the window is empty.
    pub fn roll(&mut self, entering: u8) -> Option<u8> {
        let slot = self.bytes.get_mut(self.oldest)?;
        let leaving = std::mem::replace(slot, entering);
        self.oldest += 1;
        if self.oldest >= self.bytes.len() {
            self.oldest = 0;
        }
        Some(leaving)
    }

    fn iter(&self) -> impl Iterator<Item = &u8> + '_ {
        self.bytes[self.oldest..]
            .iter()
            .chain(self.bytes[..self.oldest].iter())
    }

    /// Copies the window from the oldest to the newest byte.
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.oldest = 0;
    }

    fn rotate_to_start(&mut self) {
        if self.oldest == 0 {
            return;
        }
        trace!(
            "rotating window of {} bytes by {}",
            self.bytes.len(),
            self.oldest
        );
        self.bytes.rotate_left(self.oldest);
        self.oldest = 0;
    }
}
