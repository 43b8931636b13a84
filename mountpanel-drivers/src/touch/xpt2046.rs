//! XPT2046 resistive touch controller
//!
//! 12-bit conversions over SPI. Each conversion is one control byte
//! followed by two read bytes; the result sits left-aligned in bits 14..3.
//!
//! # Control bytes
//!
//! | Byte | Channel |
//! |------|---------|
//! | 0xD0 | X position |
//! | 0x90 | Y position |
//! | 0xB0 | Z1 pressure |
//! | 0xC0 | Z2 pressure |
//!
//! Pressure is `z1 + 4095 - z2`; the screen counts as touched above a
//! threshold. Position is the average of a few conversions and is dropped
//! if contact is lost while sampling.

use embedded_hal::spi::SpiDevice;
use mountpanel_core::traits::TouchInput;
use mountpanel_core::ui::TouchSample;

use super::calibration::Calibration;

/// Control bytes (start bit, channel, 12-bit differential mode)
pub mod cmd {
    /// X position
    pub const READ_X: u8 = 0xD0;
    /// Y position
    pub const READ_Y: u8 = 0x90;
    /// Pressure Z1
    pub const READ_Z1: u8 = 0xB0;
    /// Pressure Z2
    pub const READ_Z2: u8 = 0xC0;
}

/// Full-scale conversion value
const FULL_SCALE: u16 = 4095;

/// Touch driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError<E> {
    /// SPI transfer failed
    Spi(E),
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Xpt2046Config {
    /// Minimum pressure that counts as a touch
    pub pressure_threshold: u16,
    /// Conversions averaged per sample (at least 1)
    pub samples: u8,
    /// Raw to screen mapping
    pub calibration: Calibration,
}

impl Xpt2046Config {
    /// Defaults for a screen of the given size and rotation
    pub fn for_screen(width: u16, height: u16, rotation: u8) -> Self {
        Self {
            pressure_threshold: 300,
            samples: 4,
            calibration: Calibration::for_screen(width, height, rotation),
        }
    }
}

/// XPT2046 driver
pub struct Xpt2046<SPI> {
    spi: SPI,
    config: Xpt2046Config,
}

impl<SPI: SpiDevice> Xpt2046<SPI> {
    /// Create a new driver
    pub fn new(spi: SPI, config: Xpt2046Config) -> Self {
        Self { spi, config }
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }

    pub fn config(&self) -> &Xpt2046Config {
        &self.config
    }

    /// Replace the calibration
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.config.calibration = calibration;
    }

    /// Run one 12-bit conversion
    fn convert(&mut self, command: u8) -> Result<u16, TouchError<SPI::Error>> {
        let tx = [command, 0, 0];
        let mut rx = [0u8; 3];
        self.spi.transfer(&mut rx, &tx).map_err(TouchError::Spi)?;
        Ok(((u16::from(rx[1]) << 8 | u16::from(rx[2])) >> 3) & FULL_SCALE)
    }

    /// Current contact pressure (0 when untouched)
    pub fn pressure(&mut self) -> Result<u16, TouchError<SPI::Error>> {
        let z1 = self.convert(cmd::READ_Z1)?;
        let z2 = self.convert(cmd::READ_Z2)?;
        Ok((z1 + FULL_SCALE).saturating_sub(z2))
    }

    pub fn is_touched(&mut self) -> Result<bool, TouchError<SPI::Error>> {
        Ok(self.pressure()? > self.config.pressure_threshold)
    }

    /// Averaged raw position, or `None` if contact was lost while sampling
    pub fn read_raw(&mut self) -> Result<Option<(u16, u16)>, TouchError<SPI::Error>> {
        let count = self.config.samples.max(1) as u32;
        let mut sum_x = 0u32;
        let mut sum_y = 0u32;

        for _ in 0..count {
            sum_x += u32::from(self.convert(cmd::READ_X)?);
            sum_y += u32::from(self.convert(cmd::READ_Y)?);
        }

        if !self.is_touched()? {
            return Ok(None);
        }
        Ok(Some(((sum_x / count) as u16, (sum_y / count) as u16)))
    }

    /// Read a screen point, or `None` when untouched
    pub fn read_point(&mut self) -> Result<Option<(u16, u16)>, TouchError<SPI::Error>> {
        if !self.is_touched()? {
            return Ok(None);
        }
        Ok(self
            .read_raw()?
            .map(|(x, y)| self.config.calibration.apply(x, y)))
    }
}

impl<SPI: SpiDevice> TouchInput for Xpt2046<SPI> {
    type Error = TouchError<SPI::Error>;

    fn sample(&mut self) -> Result<TouchSample, Self::Error> {
        Ok(match self.read_point()? {
            Some((x, y)) => TouchSample::Point { x, y },
            None => TouchSample::Released,
        })
    }
}
