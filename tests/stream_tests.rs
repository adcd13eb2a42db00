//! TS Streaming Tests
//!
//! Tests for the ring buffer, the consumer table and the interrupt-driven
//! worker that fans TS bursts out to open handles.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test stream_tests

mod common;

use embassy_futures::{block_on, join::join};

use common::{SimDevice, RING};
use isdbt_frontend::config::{MAX_CONSUMERS, TS_PACKET_SIZE};
use isdbt_frontend::drivers::demod::reg;
use isdbt_frontend::stream::{ConsumerKind, ConsumerList, TsRingBuffer};
use isdbt_frontend::types::{DeviceMode, DeviceSelector};
use isdbt_frontend::Error;

const MASTER: DeviceSelector = DeviceSelector::Master;
const BURST: usize = 4 * TS_PACKET_SIZE;

fn packets(first: u8, count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|i| {
            let mut packet = vec![first + i as u8; TS_PACKET_SIZE];
            packet[0] = 0x47;
            packet
        })
        .collect()
}

/// Powered-on device with one TS handle streaming
fn streaming() -> (SimDevice, common::Sim, isdbt_frontend::device::Handle) {
    let (device, sim, _) = common::device(common::small_burst_config());
    common::healthy_board(&sim, isdbt_frontend::types::Topology::Single);
    let handle = block_on(async {
        device.power_on().await.unwrap();
        let handle = device.open(ConsumerKind::TransportStream).await.unwrap();
        device.start_stream(handle).await.unwrap();
        handle
    });
    (device, sim, handle)
}

// =============================================================================
// Ring Buffer Tests
// =============================================================================

#[test]
fn ring_preserves_order_across_wrap() {
    let mut ring: TsRingBuffer<{ 4 * TS_PACKET_SIZE }> = TsRingBuffer::new();
    assert_eq!(ring.write(&packets(0, 3)), 0);

    let mut out = vec![0u8; 2 * TS_PACKET_SIZE];
    assert_eq!(ring.read(&mut out), out.len());
    assert_eq!(out, packets(0, 2));

    assert_eq!(ring.write(&packets(3, 3)), 0);
    assert_eq!(ring.available(), 4 * TS_PACKET_SIZE);
    assert_eq!(ring.free(), 0);

    let mut out = vec![0u8; 4 * TS_PACKET_SIZE];
    ring.read(&mut out);
    assert_eq!(out, packets(2, 4));
    assert!(ring.is_empty());
}

#[test]
fn ring_drops_oldest_on_overrun() {
    let mut ring: TsRingBuffer<{ 4 * TS_PACKET_SIZE }> = TsRingBuffer::new();
    ring.write(&packets(0, 3));
    assert_eq!(ring.write(&packets(3, 2)), TS_PACKET_SIZE);

    let mut out = vec![0u8; 4 * TS_PACKET_SIZE];
    assert_eq!(ring.read(&mut out), 4 * TS_PACKET_SIZE);
    assert_eq!(out, packets(1, 4));
}

#[test]
fn ring_oversized_write_keeps_tail() {
    let mut ring: TsRingBuffer<{ 2 * TS_PACKET_SIZE }> = TsRingBuffer::new();
    ring.write(&packets(0, 1));
    assert_eq!(ring.write(&packets(1, 3)), 2 * TS_PACKET_SIZE);

    let mut out = vec![0u8; 2 * TS_PACKET_SIZE];
    ring.read(&mut out);
    assert_eq!(out, packets(2, 2));
}

#[test]
fn ring_clear_discards_everything() {
    let mut ring: TsRingBuffer<{ 2 * TS_PACKET_SIZE }> = TsRingBuffer::new();
    ring.write(&packets(0, 2));
    ring.clear();
    assert!(ring.is_empty());
    assert_eq!(ring.capacity(), 2 * TS_PACKET_SIZE);
}

// =============================================================================
// Consumer Table Tests
// =============================================================================

#[test]
fn table_full_after_max_consumers() {
    let mut list: ConsumerList<RING> = ConsumerList::new();
    for _ in 0..MAX_CONSUMERS {
        list.open(ConsumerKind::TransportStream).unwrap();
    }
    assert_eq!(list.len(), MAX_CONSUMERS);
    assert_eq!(list.open(ConsumerKind::Control), Err(Error::NoFreeHandle));
}

#[test]
fn reused_slot_invalidates_old_handle() {
    let mut list: ConsumerList<RING> = ConsumerList::new();
    let old = list.open(ConsumerKind::TransportStream).unwrap();
    list.close(old).unwrap();
    let new = list.open(ConsumerKind::TransportStream).unwrap();

    assert_eq!(old.index(), new.index());
    assert_ne!(old, new);
    assert_eq!(list.get(old).err(), Some(Error::InvalidHandle));
    assert!(list.get(new).is_ok());
    assert_eq!(list.close(old), Err(Error::InvalidHandle));
}

#[test]
fn fan_out_skips_control_handles() {
    let mut list: ConsumerList<RING> = ConsumerList::new();
    let ts = list.open(ConsumerKind::TransportStream).unwrap();
    let ctl = list.open(ConsumerKind::Control).unwrap();

    let written = list.fan_out(&packets(0, 2));
    assert_eq!(written.as_slice(), &[ts.index()]);
    assert_eq!(list.get(ts).unwrap().available(), 2 * TS_PACKET_SIZE);
    assert_eq!(list.get(ctl).unwrap().available(), 0);
}

// =============================================================================
// Reader Tests
// =============================================================================

#[test]
fn non_blocking_read_on_empty_would_block() {
    let (device, _, handle) = streaming();
    let mut buf = [0u8; BURST];
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Err(Error::WouldBlock)
    );
}

#[test]
fn short_buffer_reads_nothing() {
    let (device, _, handle) = streaming();
    device.on_interrupt();
    block_on(device.service_interrupt()).unwrap();

    let mut buf = [0u8; TS_PACKET_SIZE - 1];
    assert_eq!(block_on(device.read(handle, &mut buf, true)), Ok(0));
}

#[test]
fn reads_round_down_to_whole_packets() {
    let (device, _, handle) = streaming();
    device.on_interrupt();
    assert_eq!(block_on(device.service_interrupt()), Ok(BURST));

    let mut buf = [0u8; 2 * TS_PACKET_SIZE + 100];
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Ok(2 * TS_PACKET_SIZE)
    );
    assert_eq!(buf[0], 0x47);
    assert_eq!(buf[TS_PACKET_SIZE], 0x47);
    assert_eq!(buf[TS_PACKET_SIZE + 1], 1);

    let mut rest = [0u8; 8 * TS_PACKET_SIZE];
    assert_eq!(
        block_on(device.read(handle, &mut rest, true)),
        Ok(2 * TS_PACKET_SIZE)
    );
    assert_eq!(rest[1], 2);
}

#[test]
fn blocking_read_woken_by_worker() {
    let (device, sim, handle) = streaming();
    let mut buf = [0u8; 8 * TS_PACKET_SIZE];

    device.on_interrupt();
    let (read, serviced) = block_on(join(
        device.read(handle, &mut buf, false),
        device.service_interrupt(),
    ));

    assert_eq!(serviced, Ok(BURST));
    assert_eq!(read, Ok(BURST));
    assert_eq!(sim.bytes_to(MASTER, reg::INT_CLEAR), [0x01]);
}

#[test]
fn interrupt_reader_releases_blocked_read() {
    let (device, _, handle) = streaming();
    let mut buf = [0u8; BURST];

    let (read, interrupted) = block_on(join(
        device.read(handle, &mut buf, false),
        device.interrupt_reader(handle),
    ));

    assert_eq!(interrupted, Ok(()));
    assert_eq!(read, Err(Error::Interrupted));
    // the interruption is consumed
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Err(Error::WouldBlock)
    );
}

#[test]
fn interrupt_without_waiting_reader_keeps_buffered_data() {
    let (device, _, handle) = streaming();
    device.on_interrupt();
    assert_eq!(block_on(device.service_interrupt()), Ok(BURST));

    assert_eq!(block_on(device.interrupt_reader(handle)), Ok(()));

    let mut buf = [0u8; BURST];
    assert_eq!(block_on(device.read(handle, &mut buf, true)), Ok(BURST));
    assert_eq!(buf[0], 0x47);
}

#[test]
fn interrupt_without_waiting_reader_is_not_remembered() {
    let (device, _, handle) = streaming();
    assert_eq!(block_on(device.interrupt_reader(handle)), Ok(()));

    // a later blocking read waits for data instead of failing
    let mut buf = [0u8; BURST];
    device.on_interrupt();
    let (read, serviced) = block_on(join(
        device.read(handle, &mut buf, false),
        device.service_interrupt(),
    ));
    assert_eq!(serviced, Ok(BURST));
    assert_eq!(read, Ok(BURST));
}

#[test]
fn consumer_interrupt_only_reaches_parked_reader() {
    let mut list: ConsumerList<{ 4 * TS_PACKET_SIZE }> = ConsumerList::new();
    let handle = list.open(ConsumerKind::TransportStream).unwrap();
    let mut buf = [0u8; TS_PACKET_SIZE];

    assert_eq!(list.interrupt(handle), Ok(false));
    assert_eq!(list.read(handle, &mut buf), Ok(0));

    list.park(handle).unwrap();
    assert_eq!(list.interrupt(handle), Ok(true));
    list.fan_out(&packets(0, 1));
    // data first, and the pending interruption is dropped with it
    assert_eq!(list.read(handle, &mut buf), Ok(TS_PACKET_SIZE));
    assert_eq!(list.read(handle, &mut buf), Ok(0));

    list.park(handle).unwrap();
    list.interrupt(handle).unwrap();
    assert_eq!(list.read(handle, &mut buf), Err(Error::Interrupted));
    assert_eq!(list.read(handle, &mut buf), Ok(0));
}

#[test]
fn close_releases_blocked_read() {
    let (device, _, handle) = streaming();
    let mut buf = [0u8; BURST];

    let (read, closed) = block_on(join(
        device.read(handle, &mut buf, false),
        device.close(handle),
    ));

    assert_eq!(closed, Ok(()));
    assert_eq!(read, Err(Error::InvalidHandle));
}

#[test]
fn stale_handle_rejected_by_device() {
    let (device, _, handle) = streaming();
    let mut buf = [0u8; BURST];
    block_on(async {
        device.close(handle).await.unwrap();
        device.open(ConsumerKind::TransportStream).await.unwrap();
    });
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Err(Error::InvalidHandle)
    );
    assert_eq!(block_on(device.start_stream(handle)), Err(Error::InvalidHandle));
}

// =============================================================================
// Worker Tests
// =============================================================================

#[test]
fn every_ts_consumer_gets_each_burst() {
    let (device, _, first) = streaming();
    let second = block_on(device.open(ConsumerKind::TransportStream)).unwrap();
    let control = block_on(device.open(ConsumerKind::Control)).unwrap();

    device.on_interrupt();
    block_on(device.service_interrupt()).unwrap();

    let mut a = [0u8; BURST];
    let mut b = [0u8; BURST];
    assert_eq!(block_on(device.read(first, &mut a, true)), Ok(BURST));
    assert_eq!(block_on(device.read(second, &mut b, true)), Ok(BURST));
    assert_eq!(a, b);
    assert_eq!(
        block_on(device.read(control, &mut a, true)),
        Err(Error::WouldBlock)
    );
}

#[test]
fn slow_reader_loses_oldest_packets() {
    let (device, _, handle) = streaming();
    // five bursts of four packets into a sixteen-packet ring
    for _ in 0..5 {
        device.on_interrupt();
        block_on(device.service_interrupt()).unwrap();
    }

    let mut buf = vec![0u8; 2 * RING];
    assert_eq!(block_on(device.read(handle, &mut buf, true)), Ok(RING));
    assert_eq!(buf[1], 4);
    assert_eq!(buf[RING - TS_PACKET_SIZE + 1], 19);
}

#[test]
fn interrupt_outside_streaming_is_ignored() {
    let (device, sim, _) = common::device(common::small_burst_config());
    block_on(device.power_on()).unwrap();

    device.on_interrupt();
    assert_eq!(block_on(device.service_interrupt()), Ok(0));
    assert_eq!(sim.reads(MASTER, reg::INT_STATUS), 0);
    assert_eq!(sim.reads(MASTER, reg::TS_DATA), 0);
}

#[test]
fn spurious_interrupt_is_acknowledged() {
    let (device, sim, handle) = streaming();
    sim.set(MASTER, reg::INT_STATUS, 0x02);

    device.on_interrupt();
    assert_eq!(block_on(device.service_interrupt()), Ok(0));
    assert_eq!(sim.bytes_to(MASTER, reg::INT_CLEAR), [0x02]);
    assert_eq!(sim.reads(MASTER, reg::TS_DATA), 0);

    let mut buf = [0u8; BURST];
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Err(Error::WouldBlock)
    );
}

#[test]
fn stop_stream_masks_interrupt() {
    let (device, sim, handle) = streaming();
    block_on(device.stop_stream(handle)).unwrap();

    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOn);
    assert_eq!(sim.bytes_to(MASTER, reg::INT_ENABLE), [0x01, 0x00]);

    device.on_interrupt();
    assert_eq!(block_on(device.service_interrupt()), Ok(0));
}

#[test]
fn start_stream_flushes_stale_data() {
    let (device, _, handle) = streaming();
    device.on_interrupt();
    block_on(device.service_interrupt()).unwrap();

    block_on(async {
        device.stop_stream(handle).await.unwrap();
        device.start_stream(handle).await.unwrap();
    });

    let mut buf = [0u8; BURST];
    assert_eq!(
        block_on(device.read(handle, &mut buf, true)),
        Err(Error::WouldBlock)
    );
}

#[test]
fn start_stream_requires_power() {
    let (device, _, _) = common::device(common::small_burst_config());
    let handle = block_on(device.open(ConsumerKind::TransportStream)).unwrap();
    assert_eq!(block_on(device.start_stream(handle)), Err(Error::InvalidState));
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOff);
}
