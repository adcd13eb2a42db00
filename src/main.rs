//! ISDB-T Receiver Main Application
//!
//! Entry point for the STM32G474 board carrying the demodulator and an
//! FC8300 tuner. Brings the front end up on a fixed channel, then streams
//! TS packets from the data-ready interrupt through the worker task.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Async;
use embassy_stm32::time::Hertz;
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Delay, Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use isdbt_frontend::hal::i2c::I2cRegisterBus;
use isdbt_frontend::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    I2C1_EV => embassy_stm32::i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => embassy_stm32::i2c::ErrorInterruptHandler<peripherals::I2C1>;
});


/// Channel tuned at start-up (UHF 18, centre plus the 1/7 MHz offset)
const STARTUP_CHANNEL_KHZ: u32 = 503_143;

type Device = Isdbt<CriticalSectionRawMutex, I2cRegisterBus<I2c<'static, Async>>, Delay, TARGET_RING_CAPACITY>;

static DEVICE: StaticCell<Device> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("ISDB-T receiver v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // PB8 = SCL, PB9 = SDA
    let i2c = I2c::new(
        p.I2C1,
        p.PB8,
        p.PB9,
        Irqs,
        p.DMA1_CH1,
        p.DMA1_CH2,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    let ready = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);

    let config = match DemodConfig::new(
        DEFAULT_XTAL_KHZ,
        Bandwidth::Mhz6,
        Topology::Single,
        DEFAULT_TS_BURST_PACKETS,
    ) {
        Ok(config) => config,
        Err(err) => defmt::panic!("bad board config: {}", err),
    };
    let device: &'static Device = DEVICE.init(Isdbt::new(I2cRegisterBus::new(i2c), Delay, config));

    spawner.must_spawn(ts_worker(device));
    spawner.must_spawn(data_ready(ready, device));

    if let Err(err) = bring_up(device).await {
        defmt::panic!("front end bring-up failed: {}", err);
    }

    match device.scan_status().await {
        ScanResult::Locked => info!("locked on {} kHz", STARTUP_CHANNEL_KHZ),
        ScanResult::Failed => warn!("no signal on {} kHz", STARTUP_CHANNEL_KHZ),
    }

    spawner.must_spawn(heartbeat_task(led));

    let handle = match device.open(ConsumerKind::TransportStream).await {
        Ok(handle) => handle,
        Err(err) => defmt::panic!("open failed: {}", err),
    };
    if let Err(err) = device.start_stream(handle).await {
        defmt::panic!("start_stream failed: {}", err);
    }

    let mut packets = [0u8; TS_PACKET_SIZE * 8];
    let mut reads: u32 = 0;
    loop {
        match device.read(handle, &mut packets, false).await {
            Ok(count) if count > 0 && packets[0] != 0x47 => warn!("lost TS sync"),
            Ok(_) => {}
            Err(err) => warn!("read: {}", err),
        }
        reads = reads.wrapping_add(1);
        if reads % 1024 == 0 {
            info!("{} reads serviced", reads);
        }
    }
}

async fn bring_up(device: &Device) -> Result<()> {
    device.initialize(DeviceSelector::Master).await?;
    device
        .tuner_select(ProductType::Fc8300, BroadcastMode::Isdbt13Seg)
        .await?;
    device.tuner_set_frequency(STARTUP_CHANNEL_KHZ, 0).await?;
    info!("RSSI {} dBm", device.rssi().await?);
    Ok(())
}

/// TS worker: drains the demodulator on every data-ready interrupt
#[embassy_executor::task]
async fn ts_worker(device: &'static Device) {
    device.run().await
}

/// Forwards data-ready edges to the worker
#[embassy_executor::task]
async fn data_ready(mut pin: ExtiInput<'static>, device: &'static Device) {
    loop {
        pin.wait_for_rising_edge().await;
        device.on_interrupt();
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
