//! Board wiring
//!
//! | Signal        | Pin    |
//! |---------------|--------|
//! | Mount UART TX | GPIO0  |
//! | Mount UART RX | GPIO1  |
//! | LCD DC        | GPIO8  |
//! | LCD CS        | GPIO9  |
//! | SPI1 SCK      | GPIO10 |
//! | SPI1 MOSI     | GPIO11 |
//! | SPI1 MISO     | GPIO12 |
//! | LCD backlight | GPIO13 |
//! | LCD reset     | GPIO15 |
//! | Touch CS      | GPIO16 |
//!
//! The ILI9486 and the XPT2046 share SPI1; each device gets its own clock
//! rate through `SpiDeviceWithConfig`.

use core::cell::RefCell;

use embassy_embedded_hal::shared_bus::blocking::spi::SpiDeviceWithConfig;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9486Rgb565;

use mountpanel_core::config::BoardVariant;
use mountpanel_display::GraphicsRenderer;
use mountpanel_drivers::touch::Xpt2046;

/// Board this build targets
pub const BOARD: BoardVariant = BoardVariant::Dlc32;

/// Display SPI clock
pub const LCD_SPI_HZ: u32 = 32_000_000;

/// Touch controller SPI clock
pub const TOUCH_SPI_HZ: u32 = 2_000_000;

/// Mount link baud rate
pub const MOUNT_BAUD: u32 = 9600;

/// Native panel size (portrait, before rotation)
pub const NATIVE_WIDTH: u16 = 320;
pub const NATIVE_HEIGHT: u16 = 480;

/// Bytes buffered per SPI write to the display
pub const LCD_BUFFER_SIZE: usize = 512;

pub type SpiBus = Spi<'static, SPI1, Blocking>;

pub type SharedSpiBus = Mutex<NoopRawMutex, RefCell<SpiBus>>;

pub type SpiDevice = SpiDeviceWithConfig<'static, NoopRawMutex, SpiBus, Output<'static>>;

pub type Lcd = mipidsi::Display<
    SpiInterface<'static, SpiDevice, Output<'static>>,
    ILI9486Rgb565,
    Output<'static>,
>;

pub type PanelDisplay = GraphicsRenderer<Lcd>;

pub type PanelTouch = Xpt2046<SpiDevice>;
