//! Consumer Table
//!
//! Fixed table of open handles. Each slot owns its ring exclusively; the
//! table as a whole sits behind the device's buffer lock.

use heapless::Vec;

use crate::config::{MAX_CONSUMERS, TS_PACKET_SIZE};
use crate::error::{Error, Result};
use crate::stream::ring::TsRingBuffer;
use crate::stream::ConsumerKind;

/// Open handle
///
/// The generation makes a handle to a closed-and-reused slot stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u8,
    generation: u16,
}

impl Handle {
    /// Slot index
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Handle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "handle{}.{}", self.index, self.generation);
    }
}

/// One open handle's state
pub struct Consumer<const N: usize> {
    kind: ConsumerKind,
    ring: TsRingBuffer<N>,
    parked: bool,
    interrupted: bool,
}

impl<const N: usize> Consumer<N> {
    /// Subscription type
    #[must_use]
    pub const fn kind(&self) -> ConsumerKind {
        self.kind
    }

    /// Bytes waiting
    #[must_use]
    pub const fn available(&self) -> usize {
        self.ring.available()
    }
}

/// All open handles of one device
pub struct ConsumerList<const N: usize> {
    slots: [Option<Consumer<N>>; MAX_CONSUMERS],
    generations: [u16; MAX_CONSUMERS],
}

impl<const N: usize> ConsumerList<N> {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            generations: [0; MAX_CONSUMERS],
        }
    }

    /// Claim a free slot
    #[allow(clippy::cast_possible_truncation)]
    pub fn open(&mut self, kind: ConsumerKind) -> Result<Handle> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Error::NoFreeHandle)?;

        self.generations[index] = self.generations[index].wrapping_add(1);
        self.slots[index] = Some(Consumer {
            kind,
            ring: TsRingBuffer::new(),
            parked: false,
            interrupted: false,
        });

        Ok(Handle {
            index: index as u8,
            generation: self.generations[index],
        })
    }

    /// Release a slot
    pub fn close(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?;
        self.slots[handle.index()] = None;
        Ok(())
    }

    /// Look up an open handle
    pub fn get(&self, handle: Handle) -> Result<&Consumer<N>> {
        match self.slots.get(handle.index()) {
            Some(Some(consumer)) if self.generations[handle.index()] == handle.generation => {
                Ok(consumer)
            }
            _ => Err(Error::InvalidHandle),
        }
    }

    /// Look up an open handle
    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut Consumer<N>> {
        let generation = self
            .generations
            .get(handle.index())
            .copied()
            .ok_or(Error::InvalidHandle)?;
        match self.slots.get_mut(handle.index()) {
            Some(Some(consumer)) if generation == handle.generation => Ok(consumer),
            _ => Err(Error::InvalidHandle),
        }
    }

    /// Number of open handles
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no handle is open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty every ring
    pub fn flush_all(&mut self) {
        for consumer in self.slots.iter_mut().flatten() {
            consumer.ring.clear();
        }
    }

    /// Copy a block into every TS consumer's ring
    ///
    /// Returns the slots written so their readers can be woken.
    pub fn fan_out(&mut self, data: &[u8]) -> Vec<usize, MAX_CONSUMERS> {
        let mut written = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(consumer) = slot {
                if consumer.kind != ConsumerKind::TransportStream {
                    continue;
                }
                let dropped = consumer.ring.write(data);
                if dropped > 0 {
                    debug!("consumer {} overrun, dropped {} bytes", index, dropped);
                }
                let _ = written.push(index);
            }
        }
        written
    }

    /// Take whole packets out of a consumer's ring
    ///
    /// Buffered data always wins; an interruption only ends a read that
    /// found the ring empty.
    pub fn read(&mut self, handle: Handle, buf: &mut [u8]) -> Result<usize> {
        let consumer = self.get_mut(handle)?;
        let whole = buf.len() / TS_PACKET_SIZE * TS_PACKET_SIZE;
        let count = consumer.ring.read(&mut buf[..whole]);
        if count > 0 {
            consumer.parked = false;
            consumer.interrupted = false;
            return Ok(count);
        }
        if core::mem::take(&mut consumer.interrupted) {
            consumer.parked = false;
            return Err(Error::Interrupted);
        }
        Ok(0)
    }

    /// Mark a reader as waiting for data
    pub fn park(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.parked = true;
        Ok(())
    }

    /// Interrupt the reader waiting on a consumer
    ///
    /// Returns whether a reader was waiting; without one nothing is
    /// recorded.
    pub fn interrupt(&mut self, handle: Handle) -> Result<bool> {
        let consumer = self.get_mut(handle)?;
        consumer.interrupted = consumer.parked;
        Ok(consumer.parked)
    }
}

impl<const N: usize> Default for ConsumerList<N> {
    fn default() -> Self {
        Self::new()
    }
}
