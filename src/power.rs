use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// A power-enable output that does not have any physical basis.
///
/// Use this when the sensor rail is always powered and there is no pin to
/// switch. `set_high` and `set_low` always succeed and do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysOn;

impl ErrorType for AlwaysOn {
    type Error = Infallible;
}

impl OutputPin for AlwaysOn {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
