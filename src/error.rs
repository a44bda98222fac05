/// Possible errors from the SCD40 driver.
///
/// `E` is the I2C bus error type and `P` the power-enable pin error type.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Scd40Error<E, P> {
    /// Error from the I2C bus (NACK, arbitration loss, incomplete transfer).
    I2c(E),
    /// Error from the power-enable pin.
    Power(P),
    /// A measurement was requested before the session was initialized.
    NotInitialized,
    /// CRC validation is enabled and a word failed its checksum.
    CrcMismatch {
        /// Index of the first failing word (0 = CO2, 1 = temperature,
        /// 2 = humidity, 3 = status).
        word: usize,
    },
}

/// A measurement frame handed to [`RawMeasurement::from_frame`] was too short.
///
/// [`RawMeasurement::from_frame`]: crate::RawMeasurement::from_frame
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortFrame {
    /// Bytes the frame must contain.
    pub expected: usize,
    /// Bytes actually available.
    pub received: usize,
}
