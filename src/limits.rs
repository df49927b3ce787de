use std::fmt;

use log::debug;

use crate::config::{ANGLE_MAX, ANGLE_MIN, LIMIT_INDEX_MAX, LIMIT_INDEX_MIN};
use crate::error::Error;

/// Selects one of the two clamping limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    Min,
    Max,
}

impl TryFrom<u8> for Limit {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            LIMIT_INDEX_MIN => Ok(Limit::Min),
            LIMIT_INDEX_MAX => Ok(Limit::Max),
            other => Err(Error::InvalidLimitIndex(other)),
        }
    }
}

/// Pair of angle limits (degrees) that always satisfies
/// `ANGLE_MIN <= min <= max <= ANGLE_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    min: i32,
    max: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min: ANGLE_MIN,
            max: ANGLE_MAX,
        }
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}°, {}°]", self.min, self.max)
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_limit(&self, which: Limit) -> i32 {
        match which {
            Limit::Min => self.min,
            Limit::Max => self.max,
        }
    }

    /// Raw selector form of [`get_limit`](Self::get_limit).
    ///
    /// Only `1` selects the maximum; any other index, valid or not, yields the minimum.
    pub fn get_limit_by_index(&self, index: u8) -> i32 {
        if index == LIMIT_INDEX_MAX {
            self.max
        } else {
            self.min
        }
    }

    /// Store a limit, clamped to `ANGLE_MIN..=ANGLE_MAX`.
    /// If the pair ends up inverted the two values are swapped.
    pub fn set_limit(&mut self, which: Limit, angle: i32) {
        let angle = angle.clamp(ANGLE_MIN, ANGLE_MAX);
        match which {
            Limit::Min => self.min = angle,
            Limit::Max => self.max = angle,
        }

        if self.max < self.min {
            std::mem::swap(&mut self.min, &mut self.max);
            debug!("Limits inverted, swapped to {}", self);
        }
    }

    /// Raw selector form of [`set_limit`](Self::set_limit). Unknown indexes are ignored.
    pub fn set_limit_by_index(&mut self, index: u8, angle: i32) {
        if let Ok(which) = Limit::try_from(index) {
            self.set_limit(which, angle);
        }
    }

    pub fn get_min(&self) -> i32 {
        self.min
    }

    pub fn get_max(&self) -> i32 {
        self.max
    }

    pub fn set_min(&mut self, angle: i32) {
        self.set_limit(Limit::Min, angle);
    }

    pub fn set_max(&mut self, angle: i32) {
        self.set_limit(Limit::Max, angle);
    }

    /// Clamp an angle into `[min, max]`.
    pub fn clamp(&self, angle: i32) -> i32 {
        angle.clamp(self.min, self.max)
    }

    /// Average of the two limits (integer division).
    pub fn midpoint(&self) -> i32 {
        (self.min + self.max) / 2
    }
}
