//! Transport Stream Buffering
//!
//! Demodulated TS data lands in one [`ring::TsRingBuffer`] per open handle.
//! [`consumer::ConsumerList`] owns those rings and fans each burst out to
//! every transport-stream subscriber.

pub mod consumer;
pub mod ring;

pub use consumer::{ConsumerList, Handle};
pub use ring::TsRingBuffer;

/// What an open handle subscribes to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerKind {
    /// Receives every TS burst
    TransportStream,
    /// Control-only handle, never receives data
    Control,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ConsumerKind {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::TransportStream => defmt::write!(f, "TS"),
            Self::Control => defmt::write!(f, "CTRL"),
        }
    }
}
