use clawbot_driver::{
    config::TeleopConfig,
    drivetrain::Differential,
    error::ConfigError,
    opcontrol::{
        Teleop,
        actuator::{Binding, HoldMotor},
        controller::{ControllerButton, ControllerInput},
    },
};
use vexide::{prelude::*, smart::motor::BrakeMode};

pub type Driver = Teleop<ControllerInput, Differential, HoldMotor>;

pub struct Robot {
    pub driver: Driver,
}

impl Robot {
    /// Clawbot wiring: left stick arcade drive, arm on L1/L2, claw on
    /// R1/R2, clamp on Right/Y.
    pub fn default_config(peripherals: Peripherals) -> Result<Self, ConfigError> {
        let drivetrain = Differential::new(
            [
                Motor::new(peripherals.port_14, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_10, Gearset::Green, Direction::Forward),
            ],
            [
                Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_20, Gearset::Green, Direction::Forward),
            ],
        );

        let arm = HoldMotor::new(
            Motor::new(peripherals.port_8, Gearset::Green, Direction::Reverse),
            BrakeMode::Hold,
        );
        let claw = HoldMotor::new(
            Motor::new(peripherals.port_9, Gearset::Green, Direction::Forward),
            BrakeMode::Hold,
        );
        let clamp = HoldMotor::new(
            Motor::new(peripherals.port_19, Gearset::Green, Direction::Forward),
            BrakeMode::Hold,
        );

        let driver = Teleop::new(
            TeleopConfig::default(),
            ControllerInput::new(peripherals.primary_controller),
            drivetrain,
            [
                Binding::new("arm", ControllerButton::ButtonL1, ControllerButton::ButtonL2, arm),
                Binding::new("claw", ControllerButton::ButtonR1, ControllerButton::ButtonR2, claw),
                Binding::new(
                    "clamp",
                    ControllerButton::ButtonRight,
                    ControllerButton::ButtonY,
                    clamp,
                ),
            ],
        )?;

        Ok(Self { driver })
    }
}
