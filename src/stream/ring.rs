//! Transport Stream Ring Buffer
//!
//! Fixed-capacity byte ring owned by one consumer. The producer never waits:
//! a write larger than the free space advances the read position by the
//! overflow, dropping the oldest bytes. With capacity and every write a
//! whole number of packets, the read position stays packet aligned.

use crate::config::TS_PACKET_SIZE;

/// Byte ring of `N` bytes, `N` a non-zero multiple of the TS packet size
pub struct TsRingBuffer<const N: usize> {
    buffer: [u8; N],
    read_pos: usize,
    write_pos: usize,
    len: usize,
}

impl<const N: usize> TsRingBuffer<N> {
    const PACKET_ALIGNED: () = assert!(
        N > 0 && N % TS_PACKET_SIZE == 0,
        "ring capacity must be a whole number of TS packets"
    );

    /// Create an empty ring
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::PACKET_ALIGNED;
        Self {
            buffer: [0; N],
            read_pos: 0,
            write_pos: 0,
            len: 0,
        }
    }

    /// Append `data`, dropping the oldest bytes if it does not fit
    ///
    /// Returns the number of bytes dropped.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if data.len() >= N {
            let dropped = self.len + data.len() - N;
            self.buffer.copy_from_slice(&data[data.len() - N..]);
            self.read_pos = 0;
            self.write_pos = 0;
            self.len = N;
            return dropped;
        }

        let overflow = (self.len + data.len()).saturating_sub(N);
        if overflow > 0 {
            self.read_pos = (self.read_pos + overflow) % N;
            self.len -= overflow;
        }

        let first = data.len().min(N - self.write_pos);
        self.buffer[self.write_pos..self.write_pos + first].copy_from_slice(&data[..first]);
        let rest = data.len() - first;
        self.buffer[..rest].copy_from_slice(&data[first..]);

        self.write_pos = (self.write_pos + data.len()) % N;
        self.len += data.len();
        overflow
    }

    /// Move up to `out.len()` bytes out of the ring
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        let count = out.len().min(self.len);
        let first = count.min(N - self.read_pos);
        out[..first].copy_from_slice(&self.buffer[self.read_pos..self.read_pos + first]);
        out[first..count].copy_from_slice(&self.buffer[..count - first]);

        self.read_pos = (self.read_pos + count) % N;
        self.len -= count;
        count
    }

    /// Discard everything
    pub fn clear(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        self.len = 0;
    }

    /// Bytes waiting to be read
    #[must_use]
    pub const fn available(&self) -> usize {
        self.len
    }

    /// Bytes that can be written without dropping
    #[must_use]
    pub const fn free(&self) -> usize {
        N - self.len
    }

    /// Total capacity in bytes
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for TsRingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKT: usize = TS_PACKET_SIZE;

    #[test]
    fn wraps_around_end() {
        let mut ring = TsRingBuffer::<{ PKT * 3 }>::new();
        ring.write(&[1; PKT * 2]);
        let mut out = [0u8; PKT * 2];
        assert_eq!(ring.read(&mut out), PKT * 2);

        ring.write(&[2; PKT * 2]);
        assert_eq!(ring.available(), PKT * 2);
        assert_eq!(ring.read(&mut out), PKT * 2);
        assert!(out.iter().all(|&b| b == 2));
    }

    #[test]
    fn oversized_write_keeps_tail() {
        let mut ring = TsRingBuffer::<{ PKT * 2 }>::new();
        let mut data = [0u8; PKT * 3];
        data[PKT..].fill(7);
        assert_eq!(ring.write(&data), PKT);
        let mut out = [0u8; PKT * 2];
        assert_eq!(ring.read(&mut out), PKT * 2);
        assert!(out.iter().all(|&b| b == 7));
    }
}
