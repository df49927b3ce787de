//! Servo wrapper with configurable angle limits.
//!
//! [`ClampedServo`] owns a [`ServoDriver`] and makes sure every angle it forwards
//! lies between the configured minimum and maximum. Out-of-range requests are
//! silently clamped, never rejected.

use std::fmt::{self, Write as _};

use log::{debug, info, warn};

use crate::driver::ServoDriver;
use crate::limits::{Limit, Limits};

pub struct ClampedServo<D: ServoDriver> {
    pin: u8,
    limits: Limits,
    driver: D,
}

impl<D: ServoDriver> ClampedServo<D> {
    /// Create a servo on `pin` with the default 0°..=180° limits.
    ///
    /// The pin is left in input mode until [`attach`](Self::attach) is called.
    pub fn new(pin: u8, mut driver: D) -> Result<Self, D::Error> {
        driver.set_input(pin)?;

        Ok(Self {
            pin,
            limits: Limits::default(),
            driver,
        })
    }

    pub fn get_pin(&self) -> u8 {
        self.pin
    }

    pub fn get_limits(&self) -> Limits {
        self.limits
    }

    pub fn get_limit(&self, which: Limit) -> i32 {
        self.limits.get_limit(which)
    }

    /// Raw selector version of [`get_limit`](Self::get_limit): `0` = min, `1` = max.
    /// Any unknown index returns the minimum.
    pub fn get_limit_by_index(&self, index: u8) -> i32 {
        self.limits.get_limit_by_index(index)
    }

    /// Set a limit. The angle is clamped to 0..=180 and the pair is swapped
    /// if min would end up above max.
    pub fn set_limit(&mut self, which: Limit, angle: i32) {
        self.limits.set_limit(which, angle);
    }

    /// Raw selector version of [`set_limit`](Self::set_limit). Unknown indexes are ignored.
    pub fn set_limit_by_index(&mut self, index: u8, angle: i32) {
        self.limits.set_limit_by_index(index, angle);
    }

    pub fn get_min(&self) -> i32 {
        self.limits.get_min()
    }

    pub fn set_min(&mut self, angle: i32) {
        self.limits.set_min(angle);
    }

    pub fn get_max(&self) -> i32 {
        self.limits.get_max()
    }

    pub fn set_max(&mut self, angle: i32) {
        self.limits.set_max(angle);
    }

    /// Attach the servo and move it to the midpoint of its limits.
    ///
    /// Returns the driver's attach result unchanged.
    pub fn attach(&mut self) -> Result<u8, D::Error> {
        let midpoint = self.limits.midpoint();
        self.attach_at(midpoint)
    }

    /// Attach the servo and move it to `angle` (clamped to the limits).
    ///
    /// The attach result is returned as is; a failed initial write is only logged.
    pub fn attach_at(&mut self, angle: i32) -> Result<u8, D::Error> {
        let channel = self.driver.attach(self.pin)?;
        info!(
            "Servo on pin {} attached (channel {}), limits {}",
            self.pin, channel, self.limits
        );
        if let Err(e) = self.write(angle) {
            warn!("Servo on pin {} initial write failed: {}", self.pin, e);
        }
        Ok(channel)
    }

    /// Command an angle, clamped into `[min, max]`.
    ///
    /// Out-of-range angles are not an error; only a driver fault is.
    pub fn write(&mut self, angle: i32) -> Result<(), D::Error> {
        let clamped = self.limits.clamp(angle);
        debug!("Servo pin {} write({}) -> {}°", self.pin, angle, clamped);

        // Limits keep `clamped` within 0..=180
        self.driver.write(clamped as u8)
    }

    /// Last angle commanded through the driver.
    pub fn read(&self) -> u8 {
        self.driver.read()
    }

    pub fn attached(&self) -> bool {
        self.driver.attached()
    }

    /// Write the status line `<attached> { <min> ; <current> ; <max> }` plus a newline.
    ///
    /// `<attached>` is printed as `1` or `0`. Returns the number of bytes written.
    pub fn describe<W: fmt::Write>(&self, sink: &mut W) -> Result<usize, fmt::Error> {
        let mut counter = CountingWriter { inner: sink, count: 0 };
        writeln!(counter, "{}", self)?;
        Ok(counter.count)
    }
}

impl<D: ServoDriver> fmt::Display for ClampedServo<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ {} ; {} ; {} }}",
            u8::from(self.attached()),
            self.limits.get_min(),
            self.read(),
            self.limits.get_max()
        )
    }
}

/// Forwards to another writer while counting bytes.
struct CountingWriter<'a, W: fmt::Write> {
    inner: &'a mut W,
    count: usize,
}

impl<W: fmt::Write> fmt::Write for CountingWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.count += s.len();
        Ok(())
    }
}
