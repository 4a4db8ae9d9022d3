//! Two-button actuators such as arms, claws and clamps.
//!
//! An [`Actuator`] accepts a signed voltage. A [`Binding`] ties one actuator
//! to an up/down button pair and applies
//! [`buttons_to_command`](super::command::buttons_to_command) every cycle.

use log::warn;
use vexide::{
    prelude::Motor,
    smart::motor::BrakeMode,
};

use super::{
    command::{ActuatorCommand, buttons_to_command},
    controller::{ControllerButton, OperatorInput},
};

/// Something that can be driven by a signed voltage.
pub trait Actuator {
    /// Commands `volts` to the device. Zero means stop, and the device is
    /// free to brake or hold while stopped.
    fn set_voltage(&mut self, volts: f64);
}

impl<A: Actuator + ?Sized> Actuator for Box<A> {
    fn set_voltage(&mut self, volts: f64) { (**self).set_voltage(volts); }
}

/// A motor that engages a brake mode whenever it is commanded zero volts.
///
/// Use [`BrakeMode::Hold`] for mechanisms that must stay put under load,
/// like an arm holding a game object.
pub struct HoldMotor {
    motor:      Motor,
    brake_mode: BrakeMode,
}

impl HoldMotor {
    /// Wraps `motor` and engages `brake_mode` straight away so the
    /// mechanism does not drop before the first cycle.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let arm = HoldMotor::new(
    ///     Motor::new(peripherals.port_8, Gearset::Green, Direction::Reverse),
    ///     BrakeMode::Hold,
    /// );
    /// ```
    pub fn new(mut motor: Motor, brake_mode: BrakeMode) -> Self {
        motor.brake(brake_mode).unwrap_or_else(|e| {
            warn!("Motor Brake Error: {}", e);
        });
        Self { motor, brake_mode }
    }
}

/// What a [`HoldMotor`] sends to its motor for a commanded voltage.
#[derive(Debug, Clone, Copy)]
pub enum MotorOutput {
    /// Stop using the brake mode.
    Brake(BrakeMode),
    /// Drive at this many volts.
    Voltage(f64),
}

impl MotorOutput {
    /// Zero volts, either sign, engages `brake_mode`. Anything else is
    /// passed through as a voltage.
    pub fn for_voltage(volts: f64, brake_mode: BrakeMode) -> Self {
        if volts == 0.0 {
            MotorOutput::Brake(brake_mode)
        } else {
            MotorOutput::Voltage(volts)
        }
    }
}

impl Actuator for HoldMotor {
    fn set_voltage(&mut self, volts: f64) {
        let result = match MotorOutput::for_voltage(volts, self.brake_mode) {
            MotorOutput::Brake(mode) => self.motor.brake(mode),
            MotorOutput::Voltage(volts) => self.motor.set_voltage(volts),
        };
        result.unwrap_or_else(|e| {
            warn!("Motor Set Voltage Error: {}", e);
        });
    }
}

/// An actuator bound to an up/down button pair.
pub struct Binding<A> {
    name:     &'static str,
    up:       ControllerButton,
    down:     ControllerButton,
    actuator: A,
}

impl<A: Actuator> Binding<A> {
    /// Binds `actuator` so that `up` runs it forward and `down` runs it in
    /// reverse. `name` shows up in logs and cycle reports.
    pub fn new(
        name: &'static str,
        up: ControllerButton,
        down: ControllerButton,
        actuator: A,
    ) -> Self {
        Self {
            name,
            up,
            down,
            actuator,
        }
    }

    /// The name this binding was created with.
    pub fn name(&self) -> &'static str { self.name }

    /// The `(up, down)` buttons.
    pub fn buttons(&self) -> (ControllerButton, ControllerButton) { (self.up, self.down) }

    /// Reads the button pair from `input` without touching the actuator.
    pub fn command(&self, input: &impl OperatorInput) -> ActuatorCommand {
        buttons_to_command(input.is_pressed(self.up), input.is_pressed(self.down))
    }

    /// Reads the button pair, drives the actuator and returns the voltage
    /// that was commanded.
    pub fn apply(&mut self, input: &impl OperatorInput, full_scale: f64) -> f64 {
        let volts = self.command(input).voltage(full_scale);
        self.actuator.set_voltage(volts);
        volts
    }
}
