// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use rppal::gpio::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy)]
struct MockPin {
    mode: Mode,
    in_use: bool,
    pulse_width: Option<Duration>,
}

thread_local! {
    static MOCK_PINS: RefCell<HashMap<u8, MockPin>> = RefCell::new(HashMap::new());
}

fn update(pin: u8, f: impl FnOnce(&mut MockPin)) {
    MOCK_PINS.with(|pins| {
        if let Some(state) = pins.borrow_mut().get_mut(&pin) {
            f(state);
        }
    });
}

fn claim(pin: u8, mode: Mode) {
    MOCK_PINS.with(|pins| {
        pins.borrow_mut().insert(
            pin,
            MockPin {
                mode,
                in_use: true,
                pulse_width: None,
            },
        );
    });
}

pub struct Gpio;

impl Gpio {
    pub fn new() -> Result<Self> {
        Ok(Gpio)
    }

    pub fn get(&self, pin: u8) -> Result<Pin> {
        let in_use = MOCK_PINS.with(|pins| pins.borrow().get(&pin).is_some_and(|p| p.in_use));
        if in_use {
            return Err(Error::PinUsed(pin));
        }
        Ok(Pin { pin })
    }
}

pub struct Pin {
    pin: u8,
}

impl Pin {
    pub fn into_input(self) -> InputPin {
        claim(self.pin, Mode::Input);
        InputPin { pin: self.pin }
    }

    pub fn into_output_low(self) -> OutputPin {
        claim(self.pin, Mode::Output);
        OutputPin { pin: self.pin }
    }
}

pub struct InputPin {
    pin: u8,
}

impl Drop for InputPin {
    fn drop(&mut self) {
        update(self.pin, |state| state.in_use = false);
    }
}

pub struct OutputPin {
    pin: u8,
}

impl OutputPin {
    pub fn set_pwm(&mut self, period: Duration, pulse_width: Duration) -> Result<()> {
        update(self.pin, |state| state.pulse_width = Some(pulse_width));
        println!(
            "[Mock GPIO {}] PWM period {:?}, pulse width {:?}",
            self.pin, period, pulse_width
        );
        Ok(())
    }

    pub fn clear_pwm(&mut self) -> Result<()> {
        update(self.pin, |state| state.pulse_width = None);
        println!("[Mock GPIO {}] PWM cleared", self.pin);
        Ok(())
    }
}

impl Drop for OutputPin {
    fn drop(&mut self) {
        update(self.pin, |state| state.in_use = false);
    }
}

// test helper to read the current pin mode
pub fn get_mock_mode(pin: u8) -> Option<Mode> {
    MOCK_PINS.with(|pins| pins.borrow().get(&pin).map(|p| p.mode))
}

// test helper to read the active PWM pulse width
pub fn get_mock_pulse_width(pin: u8) -> Option<Duration> {
    MOCK_PINS.with(|pins| pins.borrow().get(&pin).and_then(|p| p.pulse_width))
}

// test helper to check whether a pin is still claimed
pub fn is_mock_pin_in_use(pin: u8) -> bool {
    MOCK_PINS.with(|pins| pins.borrow().get(&pin).is_some_and(|p| p.in_use))
}

// test helper to reset all pins
pub fn reset_mock_pins() {
    MOCK_PINS.with(|pins| {
        pins.borrow_mut().clear();
    });
}
