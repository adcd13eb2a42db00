//! TS Streaming
//!
//! The data-ready interrupt handler only calls [`Isdbt::on_interrupt`]. A
//! long-lived worker ([`Isdbt::run`]) takes it from there: under the mode
//! lock it burst-reads one block of packets, then under the buffer lock it
//! copies the block into every transport-stream consumer and wakes their
//! readers. The worker never waits on a reader; a full ring drops its oldest
//! data instead.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use super::{Control, Isdbt};
use crate::config::TS_PACKET_SIZE;
use crate::drivers::demod;
use crate::error::{Error, Result};
use crate::hal::bus::RegisterBus;
use crate::stream::{ConsumerKind, Handle};
use crate::types::{DeviceMode, DeviceSelector};

impl<M: RawMutex, B: RegisterBus, D: DelayNs, const N: usize> Isdbt<M, B, D, N> {
    /// Open a handle
    pub async fn open(&self, kind: ConsumerKind) -> Result<Handle> {
        let handle = self.consumers.lock().await.open(kind)?;
        self.wakers[handle.index()].reset();
        debug!("opened {:?}", handle);
        Ok(handle)
    }

    /// Close a handle, discarding its buffered data
    pub async fn close(&self, handle: Handle) -> Result<()> {
        self.consumers.lock().await.close(handle)?;
        // release a reader still parked on this slot
        self.wakers[handle.index()].signal(());
        debug!("closed {:?}", handle);
        Ok(())
    }

    /// Enter Streaming: flush every ring and arm the data-ready interrupt
    pub async fn start_stream(&self, handle: Handle) -> Result<()> {
        let mut ctl = self.control.lock().await;
        {
            let mut consumers = self.consumers.lock().await;
            consumers.get(handle)?;
            ctl.require_powered()?;
            consumers.flush_all();
        }
        demod::enable_ts_interrupt(&mut ctl.io, DeviceSelector::Master, true).await?;
        ctl.mode = DeviceMode::Streaming;
        info!("streaming started");
        Ok(())
    }

    /// Leave Streaming and mask the data-ready interrupt
    pub async fn stop_stream(&self, handle: Handle) -> Result<()> {
        let mut ctl = self.control.lock().await;
        self.consumers.lock().await.get(handle)?;
        ctl.leave_streaming().await
    }

    /// Read whole TS packets
    ///
    /// Copies `min(buf.len() rounded down to 188, available)` bytes. With
    /// nothing buffered, a non-blocking read fails with
    /// [`Error::WouldBlock`]; a blocking one waits for the worker or for
    /// [`Isdbt::interrupt_reader`].
    pub async fn read(&self, handle: Handle, buf: &mut [u8], non_blocking: bool) -> Result<usize> {
        if buf.len() < TS_PACKET_SIZE {
            self.consumers.lock().await.get(handle)?;
            return Ok(0);
        }

        loop {
            {
                let mut consumers = self.consumers.lock().await;
                let count = consumers.read(handle, buf)?;
                if count > 0 {
                    return Ok(count);
                }
                if non_blocking {
                    return Err(Error::WouldBlock);
                }
                consumers.park(handle)?;
            }
            self.wakers[handle.index()].wait().await;
        }
    }

    /// Wake a blocked reader with [`Error::Interrupted`]
    ///
    /// Does nothing to a handle with no reader waiting.
    pub async fn interrupt_reader(&self, handle: Handle) -> Result<()> {
        if self.consumers.lock().await.interrupt(handle)? {
            self.wakers[handle.index()].signal(());
        }
        Ok(())
    }

    /// Data-ready interrupt hook; only flags the worker
    pub fn on_interrupt(&self) {
        self.irq.signal(());
    }

    /// Wait for one interrupt and service it
    ///
    /// Returns the number of bytes delivered; zero when the device was not
    /// streaming or had nothing pending.
    pub async fn service_interrupt(&self) -> Result<usize> {
        self.irq.wait().await;
        self.drain().await
    }

    /// Worker loop; never returns
    pub async fn run(&self) -> ! {
        loop {
            if let Err(err) = self.service_interrupt().await {
                warn!("TS worker: {:?}", err);
            }
        }
    }

    async fn drain(&self) -> Result<usize> {
        let mut ctl = self.control.lock().await;
        if ctl.mode != DeviceMode::Streaming {
            trace!("interrupt outside streaming ignored");
            return Ok(0);
        }

        let bytes = ctl.config.ts_burst_bytes();
        let Control { io, ts_buf, .. } = &mut *ctl;
        let status = demod::read_int_status(io, DeviceSelector::Master).await?;
        if status & demod::INT_TS_READY == 0 {
            demod::clear_int(io, DeviceSelector::Master, status).await?;
            return Ok(0);
        }

        let block = &mut ts_buf[..bytes];
        demod::read_ts(io, DeviceSelector::Master, block).await?;
        demod::clear_int(io, DeviceSelector::Master, status).await?;

        let written = self.consumers.lock().await.fan_out(block);
        for &index in &written {
            self.wakers[index].signal(());
        }
        trace!("delivered {} bytes to {} consumers", bytes, written.len());
        Ok(bytes)
    }
}
