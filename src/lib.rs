pub mod config;
pub mod driver;
pub mod error;
pub mod limits;
pub mod pwm;
pub mod servo;

// Re-export commonly used types
pub use driver::ServoDriver;
pub use error::{Error, Result};
pub use limits::{Limit, Limits};
pub use pwm::PwmServoDriver;
pub use servo::ClampedServo;

#[cfg(test)]
pub(crate) mod mocks;
