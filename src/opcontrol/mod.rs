//! Operator control for driver control periods.
//!
//! [`Teleop`] is the driver-control loop. Every cycle it
//!
//! 1. samples the controller once,
//! 2. hands the forward/turn sticks to the drivetrain untouched,
//! 3. drives every two-button [`Binding`](actuator::Binding) at full
//!    forward, full reverse or zero,
//!
//! and then sleeps for the configured interval. It keeps going until its
//! [`CancelToken`] is cancelled or the competition runtime drops the task.
//!
//! Every piece of hardware is injected, so the loop runs just as well
//! against fakes as against a robot.
//!
//! # Example
//!
//! ```ignore
//! use clawbot_driver::{
//!     config::TeleopConfig,
//!     opcontrol::{CancelToken, Teleop, VexTicker, actuator::Binding, controller::*},
//! };
//!
//! let mut teleop = Teleop::new(
//!     TeleopConfig::default(),
//!     ControllerInput::new(peripherals.primary_controller),
//!     drivetrain,
//!     [Binding::new("arm", ControllerButton::ButtonL1, ControllerButton::ButtonL2, arm)],
//! )?;
//! teleop.run(&CancelToken::new(), &mut VexTicker).await;
//! ```

use std::{cell::Cell, rc::Rc, time::Duration};

use heapless::Vec;
use log::{debug, info, trace};
use snafu::ensure;
use vexide::time::sleep;

use crate::{
    config::TeleopConfig,
    drivetrain::ArcadeDrive,
    error::{ConfigError, ConflictingButtonsSnafu, TooManyBindingsSnafu},
};

/// Two-button actuators and the [`Actuator`](actuator::Actuator) trait.
pub mod actuator;

/// Pure input-to-command mapping.
pub mod command;

/// Controller input sampling.
///
/// Provides the [`OperatorInput`](controller::OperatorInput) trait and its
/// V5 controller implementation.
pub mod controller;

use actuator::{Actuator, Binding};
use command::DriveCommand;
use controller::OperatorInput;

/// Largest number of actuator bindings a single loop can drive.
pub const MAX_BINDINGS: usize = 8;

/// Cooperative stop signal for a running [`Teleop`] loop.
///
/// Clones share the same flag. The loop checks it before every cycle, so
/// it stops within one interval of [`cancel`](CancelToken::cancel).
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self { Self::default() }

    /// Asks every loop holding a clone of this token to stop.
    pub fn cancel(&self) { self.0.set(true); }

    /// Whether [`cancel`](CancelToken::cancel) has been called.
    pub fn is_cancelled(&self) -> bool { self.0.get() }
}

/// Waits out the gap between two control cycles.
pub trait Ticker {
    /// Resolves after `interval`, yielding to other tasks meanwhile.
    fn wait(&mut self, interval: Duration) -> impl Future<Output = ()>;
}

/// [`Ticker`] backed by the vexide executor's timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VexTicker;

impl Ticker for VexTicker {
    fn wait(&mut self, interval: Duration) -> impl Future<Output = ()> {
        async move { sleep(interval).await }
    }
}

/// Everything one control cycle commanded.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// The forward/turn pair passed to the drivetrain.
    pub drive:     DriveCommand,
    /// Voltage sent to each binding, in binding order.
    pub actuators: Vec<(&'static str, f64), MAX_BINDINGS>,
}

impl CycleReport {
    /// The voltage commanded to the binding called `name`.
    pub fn voltage(&self, name: &str) -> Option<f64> {
        self.actuators
            .iter()
            .find(|(binding, _)| *binding == name)
            .map(|(_, volts)| *volts)
    }
}

/// The driver-control loop.
pub struct Teleop<I, D, A> {
    config:   TeleopConfig,
    input:    I,
    drive:    D,
    bindings: Vec<Binding<A>, MAX_BINDINGS>,
}

impl<I: OperatorInput, D: ArcadeDrive, A: Actuator> Teleop<I, D, A> {
    /// Assembles a loop from its configuration and hardware.
    ///
    /// # Errors
    ///
    /// - Any error from [`TeleopConfig::validate`].
    /// - [`ConfigError::ConflictingButtons`] if a binding uses the same
    ///   button for up and down.
    /// - [`ConfigError::TooManyBindings`] for more than [`MAX_BINDINGS`]
    ///   bindings.
    pub fn new(
        config: TeleopConfig,
        input: I,
        drive: D,
        bindings: impl IntoIterator<Item = Binding<A>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut list = Vec::new();
        for binding in bindings {
            let (up, down) = binding.buttons();
            ensure!(
                up != down,
                ConflictingButtonsSnafu {
                    name:   binding.name(),
                    button: up,
                }
            );
            list.push(binding).map_err(|_| {
                TooManyBindingsSnafu {
                    max: MAX_BINDINGS,
                }
                .build()
            })?;
        }

        debug!(
            "Teleop configured: {:?}, bindings [{}]",
            config,
            list.iter().map(Binding::name).collect::<std::vec::Vec<_>>().join(", ")
        );

        Ok(Self {
            config,
            input,
            drive,
            bindings: list,
        })
    }

    /// The configuration this loop runs with.
    pub fn config(&self) -> &TeleopConfig { &self.config }

    /// Runs a single control cycle without sleeping.
    ///
    /// Input is sampled once, before anything is written, so the drivetrain
    /// and every binding act on the same snapshot.
    pub fn step(&mut self) -> CycleReport {
        self.input.refresh();

        let drive = DriveCommand {
            forward: self.input.analog(self.config.forward_axis),
            turn:    self.input.analog(self.config.turn_axis),
        };
        self.drive.arcade(drive.forward, drive.turn);

        let input = &self.input;
        let full_scale = self.config.full_scale;
        let actuators = self
            .bindings
            .iter_mut()
            .map(|binding| (binding.name(), binding.apply(input, full_scale)))
            .collect();

        CycleReport { drive, actuators }
    }

    /// Runs control cycles until `token` is cancelled, waiting
    /// [`TeleopConfig::interval`] on `ticker` after each one.
    ///
    /// The token is checked before every cycle. A token cancelled before
    /// the call returns without commanding anything.
    pub async fn run(&mut self, token: &CancelToken, ticker: &mut impl Ticker) {
        info!("Driver control started");
        let mut cycles: u64 = 0;

        while !token.is_cancelled() {
            let report = self.step();
            trace!("Cycle {}: {:?}", cycles, report);

            ticker.wait(self.config.interval).await;
            cycles += 1;
        }

        info!("Driver control stopped after {} cycles", cycles);
    }
}
