//! Measurement frame parsing and conversion to physical units.

use crate::error::ShortFrame;

/// Number of bytes returned by the `read_measurement` command.
///
/// Layout: CO2 (2) + CRC, temperature (2) + CRC, humidity (2) + CRC,
/// status (2) + CRC. All words are big-endian.
pub const FRAME_LEN: usize = 12;

/// Raw, unconverted words taken from a measurement frame.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMeasurement {
    /// CO2 concentration, already in ppm.
    pub co2: u16,
    /// Raw temperature word.
    pub temperature: u16,
    /// Raw relative humidity word.
    pub humidity: u16,
}

impl RawMeasurement {
    /// Extracts the CO2, temperature and humidity words from a complete
    /// frame.
    ///
    /// CRC bytes and the status word are skipped.
    pub fn from_bytes(frame: &[u8; FRAME_LEN]) -> Self {
        RawMeasurement {
            co2: u16::from_be_bytes([frame[0], frame[1]]),
            temperature: u16::from_be_bytes([frame[3], frame[4]]),
            humidity: u16::from_be_bytes([frame[6], frame[7]]),
        }
    }

    /// Like [`RawMeasurement::from_bytes`], for frames received through a
    /// transport that may deliver fewer bytes than requested.
    ///
    /// Bytes past [`FRAME_LEN`] are ignored. A frame shorter than
    /// [`FRAME_LEN`] is rejected and never decoded.
    pub fn from_frame(frame: &[u8]) -> Result<Self, ShortFrame> {
        let frame = frame.first_chunk::<FRAME_LEN>().ok_or(ShortFrame {
            expected: FRAME_LEN,
            received: frame.len(),
        })?;

        Ok(Self::from_bytes(frame))
    }
}

/// Reading returned by the SCD40 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// CO2 concentration in parts per million.
    pub co2: u16,
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity as a fraction in `[0, 1)`.
    pub relative_humidity: f32,
    /// Absolute humidity in grams of water vapor per cubic meter.
    pub absolute_humidity: f32,
}

impl Reading {
    /// Converts raw words into physical units.
    pub fn from_raw(raw: RawMeasurement) -> Self {
        let temperature = temperature_from_raw(raw.temperature);
        let relative_humidity = relative_humidity_from_raw(raw.humidity);

        Reading {
            co2: raw.co2,
            temperature,
            relative_humidity,
            absolute_humidity: absolute_humidity(temperature, relative_humidity),
        }
    }

    /// Relative humidity in percent.
    pub fn relative_humidity_percent(&self) -> f32 {
        self.relative_humidity * 100.0
    }
}

/// Maps a raw temperature word onto `[-45, 130)` °C.
pub fn temperature_from_raw(raw: u16) -> f32 {
    -45.0 + 175.0 * (raw as f32 / 65536.0)
}

/// Maps a raw humidity word onto `[0, 1)`.
pub fn relative_humidity_from_raw(raw: u16) -> f32 {
    raw as f32 / 65536.0
}

/// Absolute humidity in g/m³ from temperature (°C) and relative humidity
/// (fraction).
///
/// Saturation vapor pressure comes from the Magnus formula (hPa):
/// `e = 6.1078 * 10^(7.5 T / (T + 237.3))`, then
/// `AH = 217 e / (T + 273.15) * RH`.
pub fn absolute_humidity(temperature: f32, relative_humidity: f32) -> f32 {
    let exponent = 7.5 * temperature / (temperature + 237.3);
    let saturation = 6.1078 * libm::powf(10.0, exponent);
    let saturated_density = 217.0 * saturation / (temperature + 273.15);
    saturated_density * relative_humidity
}
