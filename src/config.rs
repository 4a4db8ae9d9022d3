//! Teleop loop configuration.
//!
//! The defaults reproduce the clawbot's driver control: left stick arcade
//! drive, 12 V mechanisms and a 10 ms cycle.

use std::time::Duration;

use snafu::ensure;
use vexide::prelude::Motor;

use crate::{
    error::{ConfigError, InvalidFullScaleSnafu, InvalidIntervalSnafu, SameAxisSnafu},
    opcontrol::controller::ControllerAxis,
};

/// Delay between two control cycles.
pub const LOOP_INTERVAL: Duration = Duration::from_millis(10);

/// Settings for a [`Teleop`](crate::opcontrol::Teleop) loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleopConfig {
    /// How long to sleep after every cycle.
    pub interval:     Duration,
    /// Voltage sent to an actuator while its up or down button is held.
    pub full_scale:   f64,
    /// Axis read as forward/backward intent.
    pub forward_axis: ControllerAxis,
    /// Axis read as turning intent.
    pub turn_axis:    ControllerAxis,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            interval:     LOOP_INTERVAL,
            full_scale:   Motor::V5_MAX_VOLTAGE,
            forward_axis: ControllerAxis::LeftY,
            turn_axis:    ControllerAxis::LeftX,
        }
    }
}

impl TeleopConfig {
    /// Checks that the configuration can drive a robot.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidInterval`] for a zero interval.
    /// - [`ConfigError::InvalidFullScale`] unless
    ///   `0 < full_scale <= Motor::V5_MAX_VOLTAGE`.
    /// - [`ConfigError::SameAxis`] if forward and turn share an axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(!self.interval.is_zero(), InvalidIntervalSnafu);
        ensure!(
            self.full_scale.is_finite()
                && self.full_scale > 0.0
                && self.full_scale <= Motor::V5_MAX_VOLTAGE,
            InvalidFullScaleSnafu {
                volts: self.full_scale,
                max:   Motor::V5_MAX_VOLTAGE,
            }
        );
        ensure!(
            self.forward_axis != self.turn_axis,
            SameAxisSnafu {
                axis: self.forward_axis,
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_clawbot() {
        let config = TeleopConfig::default();
        assert_eq!(config.interval, Duration::from_millis(10));
        assert_eq!(config.full_scale, 12.0);
        assert_eq!(config.forward_axis, ControllerAxis::LeftY);
        assert_eq!(config.turn_axis, ControllerAxis::LeftX);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_interval_rejected() {
        let config = TeleopConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidInterval));
    }

    #[test]
    fn full_scale_bounds() {
        for volts in [0.0, -12.0, 12.5, f64::NAN, f64::INFINITY] {
            let config = TeleopConfig {
                full_scale: volts,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFullScale { .. })),
                "{volts} accepted"
            );
        }

        let config = TeleopConfig {
            full_scale: 6.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn full_scale_limit_is_v5_motor_maximum() {
        let config = TeleopConfig {
            full_scale: Motor::V5_MAX_VOLTAGE,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = TeleopConfig {
            full_scale: Motor::V5_MAX_VOLTAGE + 0.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFullScale {
                volts: 12.5,
                max:   12.0,
            })
        );
    }

    #[test]
    fn shared_axis_rejected() {
        let config = TeleopConfig {
            turn_axis: ControllerAxis::LeftY,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SameAxis {
                axis: ControllerAxis::LeftY,
            })
        );
    }
}
