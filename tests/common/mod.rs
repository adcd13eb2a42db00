//! Simulated Hardware for Integration Tests
//!
//! `Sim` is a scripted register file behind the [`RegisterBus`] trait. Each
//! `(unit, address)` can be given a sequence of read values: the n-th read
//! returns the n-th value and the last one repeats. Unscripted registers read
//! back the last value written, or zero. Every write is logged.
//!
//! `SimDelay` advances a virtual clock instead of sleeping, so tests can
//! assert how many 1 ms ticks a phase consumed.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;

use isdbt_frontend::config::{DemodConfig, CHIP_ID, TS_PACKET_SIZE};
use isdbt_frontend::drivers::demod::reg;
use isdbt_frontend::drivers::fc8300;
use isdbt_frontend::hal::bus::{tuner_reg, BusError, BusResult, Io, RegisterBus};
use isdbt_frontend::types::{Bandwidth, DeviceSelector, Topology};
use isdbt_frontend::Isdbt;

/// Per-consumer ring used by the test devices (16 packets)
pub const RING: usize = TS_PACKET_SIZE * 16;

/// Device type every integration test drives
pub type SimDevice = Isdbt<NoopRawMutex, SimBus, SimDelay, RING>;

/// One logged register write
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Byte(u8),
    Word(u16),
    Long(u32),
    Burst(Vec<u8>),
}

#[derive(Default)]
struct SimState {
    scripts: HashMap<(DeviceSelector, u16), Vec<u32>>,
    registers: HashMap<(DeviceSelector, u16), u32>,
    reads: HashMap<(DeviceSelector, u16), usize>,
    writes: Vec<(DeviceSelector, u16, Access)>,
    failing: HashSet<(DeviceSelector, u16)>,
    packets: u8,
}

/// Handle on the simulated register file; clones share state
#[derive(Clone, Default)]
pub struct Sim(Rc<RefCell<SimState>>);

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport for a device or driver under test
    pub fn bus(&self) -> SimBus {
        SimBus(self.clone())
    }

    /// Script successive read values; the last one repeats
    pub fn script(&self, dev: DeviceSelector, addr: u16, values: &[u32]) {
        self.0
            .borrow_mut()
            .scripts
            .insert((dev, addr), values.to_vec());
    }

    /// Register always reads `value`
    pub fn set(&self, dev: DeviceSelector, addr: u16, value: u32) {
        self.script(dev, addr, &[value]);
    }

    /// Register reads zero `ticks` times, then `value`
    pub fn ready_at(&self, dev: DeviceSelector, addr: u16, ticks: usize, value: u32) {
        let mut values = vec![0; ticks];
        values.push(value);
        self.script(dev, addr, &values);
    }

    /// Every access to this register fails with a NACK
    pub fn fail(&self, dev: DeviceSelector, addr: u16) {
        self.0.borrow_mut().failing.insert((dev, addr));
    }

    /// Number of reads seen at a register
    pub fn reads(&self, dev: DeviceSelector, addr: u16) -> usize {
        self.0.borrow().reads.get(&(dev, addr)).copied().unwrap_or(0)
    }

    /// Full write log
    pub fn writes(&self) -> Vec<(DeviceSelector, u16, Access)> {
        self.0.borrow().writes.clone()
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, dev: DeviceSelector, addr: u16) -> Vec<Access> {
        self.0
            .borrow()
            .writes
            .iter()
            .filter(|(d, a, _)| *d == dev && *a == addr)
            .map(|(_, _, access)| access.clone())
            .collect()
    }

    /// Byte values written to one register, in order
    pub fn bytes_to(&self, dev: DeviceSelector, addr: u16) -> Vec<u8> {
        self.writes_to(dev, addr)
            .into_iter()
            .filter_map(|access| match access {
                Access::Byte(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn clear_writes(&self) {
        self.0.borrow_mut().writes.clear();
    }

    fn read(&self, dev: DeviceSelector, addr: u16) -> BusResult<u32> {
        let mut state = self.0.borrow_mut();
        let key = (dev, addr);
        if state.failing.contains(&key) {
            return Err(BusError::Nack);
        }
        let n = {
            let count = state.reads.entry(key).or_insert(0);
            *count += 1;
            *count - 1
        };
        if let Some(values) = state.scripts.get(&key) {
            return Ok(values.get(n).or(values.last()).copied().unwrap_or(0));
        }
        Ok(state.registers.get(&key).copied().unwrap_or(0))
    }

    fn write(&self, dev: DeviceSelector, addr: u16, value: u32, access: Access) -> BusResult<()> {
        let mut state = self.0.borrow_mut();
        if state.failing.contains(&(dev, addr)) {
            return Err(BusError::Nack);
        }
        state.registers.insert((dev, addr), value);
        state.writes.push((dev, addr, access));
        Ok(())
    }

    /// TS FIFO reads yield packets with a sync byte and a running counter
    fn fill_ts(&self, buf: &mut [u8]) {
        let mut state = self.0.borrow_mut();
        for packet in buf.chunks_mut(TS_PACKET_SIZE) {
            packet.fill(state.packets);
            packet[0] = 0x47;
            state.packets = state.packets.wrapping_add(1);
        }
    }
}

/// [`RegisterBus`] over a [`Sim`]
pub struct SimBus(Sim);

impl RegisterBus for SimBus {
    async fn read_byte(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u8> {
        self.0.read(dev, addr).map(|v| v as u8)
    }

    async fn write_byte(&mut self, dev: DeviceSelector, addr: u16, value: u8) -> BusResult<()> {
        self.0.write(dev, addr, u32::from(value), Access::Byte(value))
    }

    async fn read_word(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u16> {
        self.0.read(dev, addr).map(|v| v as u16)
    }

    async fn write_word(&mut self, dev: DeviceSelector, addr: u16, value: u16) -> BusResult<()> {
        self.0.write(dev, addr, u32::from(value), Access::Word(value))
    }

    async fn read_long(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u32> {
        self.0.read(dev, addr)
    }

    async fn write_long(&mut self, dev: DeviceSelector, addr: u16, value: u32) -> BusResult<()> {
        self.0.write(dev, addr, value, Access::Long(value))
    }

    async fn read_burst(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> BusResult<()> {
        self.0.read(dev, addr)?;
        if addr == reg::TS_DATA {
            self.0.fill_ts(buf);
        } else {
            buf.fill(0);
        }
        Ok(())
    }

    async fn write_burst(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> BusResult<()> {
        self.0.write(dev, addr, 0, Access::Burst(data.to_vec()))
    }
}

/// Virtual-time delay; clones share the clock
#[derive(Clone, Default)]
pub struct SimDelay(Rc<Cell<u64>>);

impl SimDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time spent waiting, whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get() + u64::from(ns));
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Register transport plus virtual clock for driver-level tests
pub fn io() -> (Io<SimBus, SimDelay>, Sim, SimDelay) {
    init_logger();
    let sim = Sim::new();
    let delay = SimDelay::new();
    (Io::new(sim.bus(), delay.clone()), sim, delay)
}

/// Single-demodulator config reading 4 packets per interrupt
pub fn small_burst_config() -> DemodConfig {
    DemodConfig::new(26_000, Bandwidth::Mhz6, Topology::Single, 4).unwrap()
}

/// Device plus handles on its simulated hardware
pub fn device(config: DemodConfig) -> (SimDevice, Sim, SimDelay) {
    init_logger();
    let sim = Sim::new();
    let delay = SimDelay::new();
    let device = SimDevice::new(sim.bus(), delay.clone(), config);
    (device, sim, delay)
}

/// Chip id, tuner lock and interrupt status of a healthy board
pub fn healthy_board(sim: &Sim, topology: Topology) {
    for &branch in topology.branches() {
        sim.set(branch, reg::CHIP_ID, u32::from(CHIP_ID));
    }
    sim.set(
        DeviceSelector::Master,
        tuner_reg(fc8300::reg::LOCK_DETECT),
        u32::from(fc8300::LOCK_MASK),
    );
    sim.set(DeviceSelector::Master, reg::INT_STATUS, 0x01);
}

/// Every acquisition phase confirms on the master at `tick`
///
/// Frame information reports transmission mode 3 with partial reception.
pub fn signal_at(sim: &Sim, topology: Topology, tick: usize) {
    let master = DeviceSelector::Master;
    let sync = if topology.is_diversity() { 0x0B } else { 0x03 };
    sim.ready_at(master, reg::AGC_STATUS, tick, 0x01);
    sim.ready_at(master, reg::OFDM_STATUS, tick, 0x01);
    sim.ready_at(master, reg::SYNC_STATUS, tick, sync);
    sim.ready_at(master, reg::CARRIER_STATUS, tick, 0x01);
    sim.ready_at(master, reg::TMCC_STATUS, tick, 0x01);
    sim.ready_at(master, reg::PER_COUNT, tick, 0x0010);
    let info = 0x13;
    if topology.is_diversity() {
        sim.set(master, reg::TMCC_INFO, info << 16);
    } else {
        sim.set(master, reg::TMCC_INFO, info);
    }
}
