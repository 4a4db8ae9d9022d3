//! Errors raised while assembling a teleop loop.
//!
//! Once a [`Teleop`](crate::opcontrol::Teleop) is built it never fails.
//! Everything that can go wrong is caught here, before the robot moves.

use snafu::Snafu;

use crate::opcontrol::controller::{ControllerAxis, ControllerButton};

/// A rejected [`TeleopConfig`](crate::config::TeleopConfig) or binding set.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    /// The loop interval was zero, which would never yield to other tasks.
    #[snafu(display("loop interval must be greater than zero"))]
    InvalidInterval,

    /// The full-scale voltage is not a usable motor voltage.
    #[snafu(display("full-scale voltage {volts} V is outside (0, {max}] V"))]
    InvalidFullScale {
        /// The configured voltage.
        volts: f64,
        /// The largest voltage a motor accepts.
        max:   f64,
    },

    /// Forward and turn were mapped to the same stick axis.
    #[snafu(display("forward and turn both read {axis:?}"))]
    SameAxis {
        /// The shared axis.
        axis: ControllerAxis,
    },

    /// A binding uses one button for both directions.
    #[snafu(display("binding `{name}` uses {button:?} for both up and down"))]
    ConflictingButtons {
        /// Name of the offending binding.
        name:   &'static str,
        /// The duplicated button.
        button: ControllerButton,
    },

    /// More bindings were supplied than the loop can hold.
    #[snafu(display("at most {max} actuator bindings are supported"))]
    TooManyBindings {
        /// The binding capacity.
        max: usize,
    },
}
