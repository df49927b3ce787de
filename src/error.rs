use derive_more::{Display, Error, From};

/// A specialized [`Result`](core::result::Result) where the error is this crate's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by the servo drivers in this crate.
///
/// Out-of-range angles and unknown limit selectors are never errors; they are
/// clamped or ignored. Only hardware faults and explicit conversions end up here.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    #[display("GPIO error: {_0}")]
    Gpio(rppal::gpio::Error),

    #[display("Invalid limit index {_0}. Use 0 (min) or 1 (max)")]
    #[from(ignore)]
    InvalidLimitIndex(#[error(not(source))] u8),
}
