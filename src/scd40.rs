use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};

use crate::checksum;
use crate::error::Scd40Error;
use crate::reading::{FRAME_LEN, RawMeasurement, Reading};

/// 7-bit I2C address of the SCD40.
pub const ADDRESS: u8 = 0x62;

/// Time (in milliseconds) the sensor needs after power-up before it accepts
/// commands.
pub const INIT_DELAY_MS: u32 = 1000;

/// Period (in milliseconds) at which the sensor refreshes its measurement
/// registers in periodic mode.
pub const MEASUREMENT_INTERVAL_MS: u32 = 5000;

/// Commands sent to the sensor, encoded as big-endian 16-bit codes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start periodic measurement mode. The sensor refreshes every 5 s.
    StartPeriodicMeasurement = 0x21b1,
    /// Read out the latest measurement (12 bytes).
    ReadMeasurement = 0xec05,
}

impl Command {
    /// The two bytes put on the wire for this command.
    pub fn to_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Uninitialized,
    Ready,
}

/// Driver for the SCD40 CO2, temperature and humidity sensor.
///
/// The driver owns the bus for as long as it lives. It is not meant to be
/// shared between threads of execution.
pub struct Scd40<I2C, PWR, D> {
    i2c: I2C,
    power: PWR,
    delay: D,
    state: State,
    validate_crc: bool,
}

impl<I2C, PWR, D> Scd40<I2C, PWR, D>
where
    I2C: I2c,
    PWR: OutputPin,
    D: DelayNs,
{
    /// Creates a new instance of the SCD40 driver.
    ///
    /// No bus traffic happens here; call [`Scd40::initialize`] before
    /// reading.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to, already configured
    ///   with the board's SDA/SCL pins.
    /// * `power` - Output that enables the sensor's power rail. Use
    ///   [`AlwaysOn`](crate::AlwaysOn) if the rail is not switchable.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(i2c: I2C, power: PWR, delay: D) -> Self {
        Scd40 {
            i2c,
            power,
            delay,
            state: State::Uninitialized,
            validate_crc: false,
        }
    }

    /// Enables or disables CRC checking of received measurement frames.
    ///
    /// Disabled by default, in which case checksum bytes are ignored.
    pub fn with_crc_validation(mut self, enabled: bool) -> Self {
        self.validate_crc = enabled;
        self
    }

    /// Returns `true` once [`Scd40::initialize`] has completed.
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Powers the sensor and starts periodic measurement.
    ///
    /// This performs the complete start-up sequence: enabling the power
    /// rail, waiting for the sensor to settle, sending the start command,
    /// and waiting one measurement interval so that the first read sees a
    /// finished measurement. Blocks for about 6 seconds.
    ///
    /// Calling it again resends the start command and waits again. If any
    /// step fails the session is left uninitialized, even if it was ready
    /// before.
    pub fn initialize(&mut self) -> Result<(), Scd40Error<I2C::Error, PWR::Error>> {
        self.state = State::Uninitialized;

        debug!("scd40: enabling power");
        self.power.set_high().map_err(Scd40Error::Power)?;

        self.delay.delay_ms(INIT_DELAY_MS);

        debug!("scd40: starting periodic measurement");
        self.send_command(Command::StartPeriodicMeasurement)?;

        // First measurement is available one interval after the start command
        self.wait();

        self.state = State::Ready;
        debug!("scd40: ready");
        Ok(())
    }

    /// Reads the latest measurement and converts it into physical units.
    ///
    /// The sensor only refreshes every [`MEASUREMENT_INTERVAL_MS`]; reading
    /// faster returns the previous values. Call [`Scd40::wait`] between
    /// reads.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful.
    /// * `Err(Scd40Error)` if the session is not initialized, the bus fails,
    ///   or CRC validation is enabled and a checksum is wrong.
    pub fn get_sensing_information(
        &mut self,
    ) -> Result<Reading, Scd40Error<I2C::Error, PWR::Error>> {
        if self.state != State::Ready {
            return Err(Scd40Error::NotInitialized);
        }

        let mut frame = [0u8; FRAME_LEN];
        self.read_frame(&mut frame)?;

        let reading = self.decode(&frame)?;
        trace!(
            "scd40: co2={} ppm, t={} C, rh={}",
            reading.co2, reading.temperature, reading.relative_humidity
        );
        Ok(reading)
    }

    /// Blocks for one measurement interval.
    pub fn wait(&mut self) {
        self.delay.delay_ms(MEASUREMENT_INTERVAL_MS);
    }

    /// Releases the bus, power pin and delay.
    ///
    /// Nothing is sent to the sensor, so it keeps measuring.
    pub fn release(self) -> (I2C, PWR, D) {
        (self.i2c, self.power, self.delay)
    }

    /// Sends the read command and fills `frame` with the sensor's answer.
    fn read_frame(
        &mut self,
        frame: &mut [u8; FRAME_LEN],
    ) -> Result<(), Scd40Error<I2C::Error, PWR::Error>> {
        self.send_command(Command::ReadMeasurement)?;
        self.i2c.read(ADDRESS, frame).map_err(Scd40Error::I2c)
    }

    /// Validates (if enabled) and decodes a measurement frame.
    fn decode(
        &self,
        frame: &[u8; FRAME_LEN],
    ) -> Result<Reading, Scd40Error<I2C::Error, PWR::Error>> {
        if self.validate_crc {
            if let Err(word) = checksum::verify_frame(frame) {
                warn!("scd40: crc mismatch on word {}", word);
                return Err(Scd40Error::CrcMismatch { word });
            }
        }

        Ok(Reading::from_raw(RawMeasurement::from_bytes(frame)))
    }

    fn send_command(
        &mut self,
        command: Command,
    ) -> Result<(), Scd40Error<I2C::Error, PWR::Error>> {
        self.i2c
            .write(ADDRESS, &command.to_bytes())
            .map_err(Scd40Error::I2c)
    }
}
