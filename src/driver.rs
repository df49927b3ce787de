use std::fmt;

/// Raw servo hardware used by [`ClampedServo`](crate::servo::ClampedServo).
///
/// Implementations do no clamping of their own beyond what the hardware needs;
/// angles handed to [`write`](Self::write) are already inside the servo's limits.
pub trait ServoDriver {
    type Error: fmt::Display;

    /// Put the pin in input mode until the servo is attached.
    fn set_input(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Bind the pin for output control. Returns the driver's channel/status code.
    fn attach(&mut self, pin: u8) -> Result<u8, Self::Error>;

    /// Command an angle in degrees (0..=180).
    fn write(&mut self, angle: u8) -> Result<(), Self::Error>;

    /// Last commanded angle in degrees.
    fn read(&self) -> u8;

    fn attached(&self) -> bool;
}

impl<D: ServoDriver + ?Sized> ServoDriver for &mut D {
    type Error = D::Error;

    fn set_input(&mut self, pin: u8) -> Result<(), Self::Error> {
        (**self).set_input(pin)
    }

    fn attach(&mut self, pin: u8) -> Result<u8, Self::Error> {
        (**self).attach(pin)
    }

    fn write(&mut self, angle: u8) -> Result<(), Self::Error> {
        (**self).write(angle)
    }

    fn read(&self) -> u8 {
        (**self).read()
    }

    fn attached(&self) -> bool {
        (**self).attached()
    }
}
