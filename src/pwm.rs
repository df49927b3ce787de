use std::time::Duration;

use log::{debug, warn};

// Use rppal in production
#[cfg(not(test))]
use rppal::gpio::{Gpio, InputPin, OutputPin};

// Mock GPIO for testing
#[cfg(test)]
use crate::mocks::mock_gpio::{Gpio, InputPin, OutputPin};

use crate::config::{
    ANGLE_MAX, SERVO_CHANNEL, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_PERIOD_MS,
};
use crate::driver::ServoDriver;
use crate::error::{Error, Result};

enum PinMode {
    Released,
    // Held only to keep the pin claimed in input mode
    #[allow(dead_code)]
    Input(InputPin),
    Output(OutputPin),
}

/// Servo driver for the Raspberry Pi using software PWM on any GPIO pin.
pub struct PwmServoDriver {
    gpio: Gpio,
    mode: PinMode,
    angle: u8,
}

/// Map an angle (0..=180 degrees) onto the servo pulse width range.
pub fn angle_to_pulse_width(angle: u8) -> Duration {
    let angle = u64::from(angle).min(ANGLE_MAX as u64);
    let pulse_us =
        SERVO_MIN_PULSE_US + angle * (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US) / ANGLE_MAX as u64;
    Duration::from_micros(pulse_us)
}

impl PwmServoDriver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            gpio: Gpio::new()?,
            mode: PinMode::Released,
            angle: 0,
        })
    }

    fn apply_pulse(&mut self) -> Result<()> {
        if let PinMode::Output(pin) = &mut self.mode {
            pin.set_pwm(
                Duration::from_millis(SERVO_PERIOD_MS),
                angle_to_pulse_width(self.angle),
            )?;
        }
        Ok(())
    }
}

impl ServoDriver for PwmServoDriver {
    type Error = Error;

    fn set_input(&mut self, pin: u8) -> Result<()> {
        // Release whatever we held before claiming the pin again
        self.mode = PinMode::Released;
        self.mode = PinMode::Input(self.gpio.get(pin)?.into_input());
        Ok(())
    }

    fn attach(&mut self, pin: u8) -> Result<u8> {
        self.mode = PinMode::Released;
        let output = self
            .gpio
            .get(pin)
            .inspect_err(|e| warn!("Cannot attach servo on GPIO {}: {}", pin, e))?
            .into_output_low();
        self.mode = PinMode::Output(output);
        Ok(SERVO_CHANNEL)
    }

    fn write(&mut self, angle: u8) -> Result<()> {
        self.angle = angle.min(ANGLE_MAX as u8);
        debug!(
            "PWM pulse {:?} for {}°",
            angle_to_pulse_width(self.angle),
            self.angle
        );
        self.apply_pulse()
    }

    fn read(&self) -> u8 {
        self.angle
    }

    fn attached(&self) -> bool {
        matches!(self.mode, PinMode::Output(_))
    }
}

impl Drop for PwmServoDriver {
    fn drop(&mut self) {
        // Ensure PWM is stopped when dropped
        if let PinMode::Output(pin) = &mut self.mode {
            let _ = pin.clear_pwm();
        }
    }
}
