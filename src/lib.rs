//! # Clawbot Driver
//!
//! Driver control for a VEX V5 clawbot, built on top of [Vexide](https://vexide.dev).
//!
//! The robot has an arcade-driven differential drivetrain and three
//! two-button mechanisms (arm, claw and clamp). Every 10 ms the driver loop
//! reads the controller, passes the left stick to the drivetrain, and runs
//! each mechanism at full forward, full reverse or stop.
//!
//! ## Quick Start
//!
//! ```ignore
//! use clawbot_driver::{
//!     config::TeleopConfig,
//!     drivetrain::Differential,
//!     opcontrol::{
//!         CancelToken, Teleop, VexTicker,
//!         actuator::{Binding, HoldMotor},
//!         controller::{ControllerButton, ControllerInput},
//!     },
//! };
//! use vexide::{prelude::*, smart::motor::BrakeMode};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let drivetrain = Differential::new(
//!         [Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward)],
//!         [Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse)],
//!     );
//!     let arm = HoldMotor::new(
//!         Motor::new(peripherals.port_8, Gearset::Green, Direction::Forward),
//!         BrakeMode::Hold,
//!     );
//!
//!     let mut teleop = Teleop::new(
//!         TeleopConfig::default(),
//!         ControllerInput::new(peripherals.primary_controller),
//!         drivetrain,
//!         [Binding::new("arm", ControllerButton::ButtonL1, ControllerButton::ButtonL2, arm)],
//!     )
//!     .unwrap();
//!
//!     teleop.run(&CancelToken::new(), &mut VexTicker).await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`opcontrol`]: The driver-control loop and its input/actuator traits.
//! - [`drivetrain`]: Arcade drive for differential drivetrains.
//! - [`config`]: Loop configuration and validation.
//! - [`error`]: Configuration errors.
//! - [`fs`]: Filesystem utilities including logging.

/// Loop configuration.
///
/// [`TeleopConfig`](config::TeleopConfig) holds the cycle interval,
/// full-scale voltage and stick axes.
pub mod config;

/// Differential drivetrain control module.
///
/// Provides the [`Differential`](drivetrain::Differential) drivetrain and the
/// [`ArcadeDrive`](drivetrain::ArcadeDrive) trait.
pub mod drivetrain;

/// Errors raised while building a driver loop.
pub mod error;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording debug information to files
/// on the V5 Brain's SD card.
pub mod fs;

/// Operator control module.
///
/// Maps controller sticks and buttons to the drivetrain and mechanisms
/// once per cycle.
pub mod opcontrol;
