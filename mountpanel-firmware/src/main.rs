//! Mountpanel - Telescope Mount Hand-Control Firmware
//!
//! Main firmware binary for RP2040-based touch panels. Drives an ILI9486
//! display with an XPT2046 touch controller and talks to the mount
//! controller over a serial link.
//!
//! Two tasks share work:
//! - UI task (50 ms): touch sampling, button feedback, readouts
//! - Control task (500 ms): command dispatch, status and position polling

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDeviceWithConfig;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Delay;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9486Rgb565;
use mipidsi::options::{ColorOrder, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use mountpanel_core::config::PanelConfig;
use mountpanel_display::GraphicsRenderer;
use mountpanel_drivers::touch::{Xpt2046, Xpt2046Config};

use crate::board::{
    SharedSpiBus, BOARD, LCD_BUFFER_SIZE, LCD_SPI_HZ, MOUNT_BAUD, NATIVE_HEIGHT, NATIVE_WIDTH,
    TOUCH_SPI_HZ,
};
use crate::mount::SerialMount;

mod board;
mod channels;
mod mount;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Shared SPI bus and display write buffer
static SPI_BUS: StaticCell<SharedSpiBus> = StaticCell::new();
static LCD_BUFFER: StaticCell<[u8; LCD_BUFFER_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Mountpanel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = PanelConfig {
        board: BOARD,
        ..PanelConfig::default()
    };

    // Backlight on before the splash screen
    let backlight_level = if BOARD.backlight_active_low() {
        Level::Low
    } else {
        Level::High
    };
    let backlight = Output::new(p.PIN_13, backlight_level);
    // Dropping the pin would release it and switch the backlight off
    core::mem::forget(backlight);

    // Shared SPI bus: display and touch controller
    let spi = Spi::new_blocking(p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, spi::Config::default());
    let bus = SPI_BUS.init(Mutex::new(RefCell::new(spi)));

    let mut lcd_config = spi::Config::default();
    lcd_config.frequency = LCD_SPI_HZ;
    let lcd_cs = Output::new(p.PIN_9, Level::High);
    let lcd_spi = SpiDeviceWithConfig::new(bus, lcd_cs, lcd_config);

    let mut touch_config = spi::Config::default();
    touch_config.frequency = TOUCH_SPI_HZ;
    let touch_cs = Output::new(p.PIN_16, Level::High);
    let touch_spi = SpiDeviceWithConfig::new(bus, touch_cs, touch_config);

    // Display
    let dc = Output::new(p.PIN_8, Level::Low);
    let reset = Output::new(p.PIN_15, Level::High);
    let interface = SpiInterface::new(lcd_spi, dc, LCD_BUFFER.init([0u8; LCD_BUFFER_SIZE]));
    let lcd = match Builder::new(ILI9486Rgb565, interface)
        .reset_pin(reset)
        .display_size(NATIVE_WIDTH, NATIVE_HEIGHT)
        .color_order(ColorOrder::Bgr)
        .orientation(Orientation::new().rotate(rotation(BOARD.rotation())))
        .init(&mut Delay)
    {
        Ok(lcd) => lcd,
        Err(_) => defmt::panic!("Display init failed"),
    };
    let display = GraphicsRenderer::new(lcd);
    info!("Display initialized (rotation {})", BOARD.rotation());

    // Touch controller
    let touch = Xpt2046::new(
        touch_spi,
        Xpt2046Config::for_screen(config.width, config.height, BOARD.rotation()),
    );

    // Setup UART for the mount controller link
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = MOUNT_BAUD;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mount = SerialMount::new(uart, config.reply_timeout_ms);

    info!("UART initialized for mount communication");

    spawner.spawn(tasks::control_task(mount, config)).unwrap();
    spawner.spawn(tasks::ui_task(display, touch, config)).unwrap();

    info!("All tasks spawned");
}

/// Map quarter turns to a display rotation
fn rotation(quarter_turns: u8) -> Rotation {
    match quarter_turns % 4 {
        0 => Rotation::Deg0,
        1 => Rotation::Deg90,
        2 => Rotation::Deg180,
        _ => Rotation::Deg270,
    }
}
