// Pixel Sink für WS2812 über das RMT Peripheral
//
// Die Farben landen zuerst in einem Puffer (ein Eintrag pro LED) und werden
// erst bei flush() über RMT auf den LED-Bus geschoben.

use esp_core::{HardwareError, PixelSink};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

// Buffer-Größe für LED_COUNT LEDs (3 Farben * 8 Bits pro LED + 1 Reset)
pub const RMT_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Pixel Sink
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der RMT-Buffer muss länger leben als der Sink, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtPixelSink<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
    pixels: [RGB8; LED_COUNT],
}

impl<'a> RmtPixelSink<'a> {
    /// Erstellt einen neuen RmtPixelSink
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, HardwareError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| HardwareError::PixelWriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self {
            led,
            pixels: [RGB8::default(); LED_COUNT],
        })
    }
}

impl PixelSink for RmtPixelSink<'_> {
    fn write_pixel(&mut self, index: usize, color: RGB8) -> Result<(), HardwareError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(HardwareError::PixelOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareError> {
        self.pixels = [RGB8::default(); LED_COUNT];
        Ok(())
    }

    fn flush(&mut self) -> Result<(), HardwareError> {
        self.led
            .write(self.pixels.iter().copied())
            .map_err(|_| HardwareError::PixelWriteFailed)
    }
}
