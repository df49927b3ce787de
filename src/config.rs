// ** ANGLE CONFIGURATION ** //

/// Lowest angle any limit may be set to (degrees).
pub const ANGLE_MIN: i32 = 0;
/// Highest angle any limit may be set to (degrees).
pub const ANGLE_MAX: i32 = 180;

/// Raw selector for the minimum limit.
pub const LIMIT_INDEX_MIN: u8 = 0;
/// Raw selector for the maximum limit.
pub const LIMIT_INDEX_MAX: u8 = 1;

//  ** SERVO CONFIGURATION ** //

/// Default GPIO pin for the bench tool.
/// - GPIO 18 (PWM0) - Most commonly used
pub const SERVO_DEFAULT_PIN: u8 = 18;
/// Pulse width range (microseconds) mapped onto 0..=180 degrees.
/// Same defaults as the Arduino Servo library.
pub const SERVO_MIN_PULSE_US: u64 = 544;
pub const SERVO_MAX_PULSE_US: u64 = 2400;
/// Standard servo PWM period (20 ms = 50 Hz)
pub const SERVO_PERIOD_MS: u64 = 20;
/// Channel code reported by a successful attach.
pub const SERVO_CHANNEL: u8 = 0;
