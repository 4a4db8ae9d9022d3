//! Differential drivetrain control.
//!
//! This module provides the `Differential` struct for controlling robots with
//! separate left and right motor groups, and the [`ArcadeDrive`] trait the
//! teleop loop drives it through.
//!
//! # Example
//!
//! ```ignore
//! use clawbot_driver::drivetrain::{ArcadeDrive, Differential};
//! use vexide::prelude::*;
//!
//! let mut drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_14, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_10, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_20, Gearset::Green, Direction::Forward),
//!     ],
//! );
//!
//! // Half speed forward, no turn.
//! drivetrain.arcade(0.5, 0.0);
//! ```

use log::warn;
use vexide::prelude::Motor;

/// A drivetrain that accepts arcade-style forward/turn intent.
pub trait ArcadeDrive {
    /// Drives with `forward` and `turn`, both nominally in `[-1.0, 1.0]`.
    /// The implementor is responsible for clamping and mixing.
    fn arcade(&mut self, forward: f64, turn: f64);
}

/// Mixes forward and turn intent into `(left, right)` outputs in `[-1.0, 1.0]`.
///
/// Both inputs are clamped to `[-1.0, 1.0]` first. The outer side of the
/// turn runs at the larger of `|forward|` and `|turn|`, signed like
/// `forward`. The inner side runs at `forward - turn` (turning right) or
/// `forward + turn` (turning left). Driving backwards swaps which side is
/// outer.
///
/// # Example
///
/// ```
/// use clawbot_driver::drivetrain::arcade_mix;
///
/// assert_eq!(arcade_mix(0.5, 0.25), (0.5, 0.25));
/// assert_eq!(arcade_mix(1.0, 1.0), (1.0, 0.0));
/// ```
pub fn arcade_mix(forward: f64, turn: f64) -> (f64, f64) {
    let forward = forward.clamp(-1.0, 1.0);
    let turn = turn.clamp(-1.0, 1.0);

    // Signed with the same `>= 0.0` test as the side choice so that a
    // negative-zero stick reading still counts as forward.
    let magnitude = forward.abs().max(turn.abs());
    let outer = if forward >= 0.0 { magnitude } else { -magnitude };

    let (left, right) = if (forward >= 0.0) == (turn >= 0.0) {
        (outer, forward - turn)
    } else {
        (forward + turn, outer)
    };

    (left.clamp(-1.0, 1.0), right.clamp(-1.0, 1.0))
}

/// A differential drivetrain controller.
///
/// Holds the left and right motor groups. Motors on opposite sides usually
/// need opposite [`Direction`](vexide::smart::motor::Direction)s so that
/// positive voltage drives the robot forward; set that up when creating
/// the motors.
pub struct Differential {
    /// The left motor group.
    left:  Box<dyn AsMut<[Motor]>>,
    /// The right motor group.
    right: Box<dyn AsMut<[Motor]>>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  Box::new(left),
            right: Box::new(right),
        }
    }

    /// Sets every motor in the group to `volts`, logging any motor that
    /// rejects the command.
    fn set_side(motors: &mut dyn AsMut<[Motor]>, volts: f64) {
        for motor in motors.as_mut() {
            motor.set_voltage(volts).unwrap_or_else(|e| {
                warn!("Motor Set Voltage Error: {}", e);
            });
        }
    }
}

impl ArcadeDrive for Differential {
    fn arcade(&mut self, forward: f64, turn: f64) {
        let (left, right) = arcade_mix(forward, turn);
        Self::set_side(&mut *self.left, left * Motor::V5_MAX_VOLTAGE);
        Self::set_side(&mut *self.right, right * Motor::V5_MAX_VOLTAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        let tolerance = 1e-10;
        assert!((actual.0 - expected.0).abs() < tolerance, "{actual:?} != {expected:?}");
        assert!((actual.1 - expected.1).abs() < tolerance, "{actual:?} != {expected:?}");
    }

    #[test]
    fn straight_and_spin() {
        assert_close(arcade_mix(0.5, 0.0), (0.5, 0.5));
        assert_close(arcade_mix(-1.0, 0.0), (-1.0, -1.0));
        assert_close(arcade_mix(0.0, 0.5), (0.5, -0.5));
        assert_close(arcade_mix(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn spin_in_place() {
        assert_close(arcade_mix(0.0, -0.5), (-0.5, 0.5));
        assert_close(arcade_mix(0.0, 1.0), (1.0, -1.0));
        assert_close(arcade_mix(-0.0, 0.5), (0.5, -0.5));
    }

    #[test]
    fn forward_turns_keep_outer_side_at_max_input() {
        // Right turn: left is the outer side.
        assert_close(arcade_mix(0.5, 0.25), (0.5, 0.25));
        assert_close(arcade_mix(0.8, 0.6), (0.8, 0.2));
        assert_close(arcade_mix(0.25, 0.5), (0.5, -0.25));
        // Left turn: right is the outer side.
        assert_close(arcade_mix(0.5, -0.25), (0.25, 0.5));
        assert_close(arcade_mix(0.8, -0.6), (0.2, 0.8));
    }

    #[test]
    fn reverse_turns_swap_outer_side() {
        assert_close(arcade_mix(-0.5, 0.25), (-0.25, -0.5));
        assert_close(arcade_mix(-0.5, -0.25), (-0.5, -0.25));
        assert_close(arcade_mix(-0.25, 0.5), (0.25, -0.5));
        assert_close(arcade_mix(-1.0, -1.0), (-1.0, 0.0));
    }

    #[test]
    fn full_stick_corners_stay_in_range() {
        assert_close(arcade_mix(1.0, 1.0), (1.0, 0.0));
        assert_close(arcade_mix(1.0, -1.0), (0.0, 1.0));
        assert_close(arcade_mix(-1.0, 1.0), (0.0, -1.0));
    }

    #[test]
    fn inputs_are_clamped() {
        assert_close(arcade_mix(3.0, 0.0), (1.0, 1.0));
        assert_close(arcade_mix(0.0, -2.0), (-1.0, 1.0));
    }
}
