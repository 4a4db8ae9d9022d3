//! Pure mapping from operator input to actuator and drive commands.
//!
//! Nothing in here touches hardware, so every tie-break and neutral case
//! can be checked without a robot attached.

/// What a two-button actuator should do for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    /// Run at full-scale forward voltage.
    Forward,
    /// Run at full-scale reverse voltage.
    Reverse,
    /// Command zero volts and let the motor's brake mode hold it.
    Neutral,
}

impl ActuatorCommand {
    /// Converts the command into a signed voltage for a motor whose
    /// full-scale output is `full_scale` volts.
    ///
    /// # Example
    ///
    /// ```
    /// use clawbot_driver::opcontrol::command::ActuatorCommand;
    ///
    /// assert_eq!(ActuatorCommand::Reverse.voltage(12.0), -12.0);
    /// ```
    pub fn voltage(self, full_scale: f64) -> f64 {
        match self {
            ActuatorCommand::Forward => full_scale,
            ActuatorCommand::Reverse => -full_scale,
            ActuatorCommand::Neutral => 0.0,
        }
    }
}

/// Resolves an up/down button pair into a command.
///
/// The up button is checked first, so holding both runs the actuator
/// forward. Holding neither always yields [`ActuatorCommand::Neutral`].
pub fn buttons_to_command(up: bool, down: bool) -> ActuatorCommand {
    if up {
        ActuatorCommand::Forward
    } else if down {
        ActuatorCommand::Reverse
    } else {
        ActuatorCommand::Neutral
    }
}

/// The arcade-drive intent sampled from the sticks in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriveCommand {
    /// Forward/backward intent, nominally in `[-1.0, 1.0]`.
    pub forward: f64,
    /// Turning intent, nominally in `[-1.0, 1.0]`.
    pub turn:    f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_only_runs_forward() {
        assert_eq!(buttons_to_command(true, false), ActuatorCommand::Forward);
    }

    #[test]
    fn down_only_runs_reverse() {
        assert_eq!(buttons_to_command(false, true), ActuatorCommand::Reverse);
    }

    #[test]
    fn released_is_neutral() {
        assert_eq!(buttons_to_command(false, false), ActuatorCommand::Neutral);
    }

    #[test]
    fn up_wins_when_both_held() {
        assert_eq!(buttons_to_command(true, true), ActuatorCommand::Forward);
    }

    #[test]
    fn voltage_is_full_scale_or_zero() {
        assert_eq!(ActuatorCommand::Forward.voltage(12.0), 12.0);
        assert_eq!(ActuatorCommand::Reverse.voltage(12.0), -12.0);
        assert_eq!(ActuatorCommand::Neutral.voltage(12.0), 0.0);
        assert_eq!(ActuatorCommand::Reverse.voltage(6.5), -6.5);
    }
}
