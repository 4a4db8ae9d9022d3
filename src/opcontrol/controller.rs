//! Controller input for operator control.
//!
//! The teleop loop never talks to a [`Controller`] directly. It goes through
//! the [`OperatorInput`] trait, which answers two questions per cycle: is a
//! named button held, and where is a named stick axis. [`ControllerInput`]
//! answers them from a real V5 controller.
//!
//! Buttons are level-triggered. There is no debouncing or edge detection,
//! a button counts as pressed for every cycle it is held down.
//!
//! # Example
//!
//! ```ignore
//! use clawbot_driver::opcontrol::controller::{
//!     ControllerAxis, ControllerButton, ControllerInput, OperatorInput,
//! };
//!
//! let mut input = ControllerInput::new(peripherals.primary_controller);
//! input.refresh();
//! if input.is_pressed(ControllerButton::ButtonL1) {
//!     let forward = input.analog(ControllerAxis::LeftY);
//! }
//! ```

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

/// A source of operator input sampled once per control cycle.
///
/// Implementors cache a snapshot in [`refresh`](OperatorInput::refresh) so
/// that every read within a cycle sees the same state.
pub trait OperatorInput {
    /// Samples fresh input. Called once at the start of every cycle.
    fn refresh(&mut self) {}

    /// Returns `true` while `button` is held down.
    fn is_pressed(&self, button: ControllerButton) -> bool;

    /// Returns the position of `axis`, nominally in `[-1.0, 1.0]`.
    fn analog(&self, axis: ControllerAxis) -> f64;
}

/// [`OperatorInput`] backed by a V5 controller.
///
/// A failed read (controller unplugged, competition control holding the
/// controller) is logged and replaced with the default state: every button
/// released and both sticks centred. The robot stops instead of repeating
/// the last command.
pub struct ControllerInput {
    controller: Controller,
    state:      ControllerState,
}

impl ControllerInput {
    /// Wraps `controller`. Nothing is read until the first
    /// [`refresh`](OperatorInput::refresh).
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            state: ControllerState::default(),
        }
    }
}

impl OperatorInput for ControllerInput {
    fn refresh(&mut self) { self.state = get_state(&self.controller); }

    fn is_pressed(&self, button: ControllerButton) -> bool {
        get_button_state(self.state, button).is_pressed()
    }

    fn analog(&self, axis: ControllerAxis) -> f64 {
        match axis {
            ControllerAxis::LeftX => self.state.left_stick.x(),
            ControllerAxis::LeftY => self.state.left_stick.y(),
            ControllerAxis::RightX => self.state.right_stick.x(),
            ControllerAxis::RightY => self.state.right_stick.y(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A list of Controller Buttons.
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

/// A single joystick axis. Up and right are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BUTTONS: [ControllerButton; 12] = [
        ControllerButton::ButtonA,
        ControllerButton::ButtonB,
        ControllerButton::ButtonX,
        ControllerButton::ButtonY,
        ControllerButton::ButtonUp,
        ControllerButton::ButtonDown,
        ControllerButton::ButtonLeft,
        ControllerButton::ButtonRight,
        ControllerButton::ButtonL1,
        ControllerButton::ButtonL2,
        ControllerButton::ButtonR1,
        ControllerButton::ButtonR2,
    ];

    #[test]
    fn default_state_is_released() {
        let state = ControllerState::default();
        for button in ALL_BUTTONS {
            assert!(!get_button_state(state, button).is_pressed(), "{button:?}");
        }
    }

    #[test]
    fn default_sticks_are_centred() {
        let state = ControllerState::default();
        assert_eq!(state.left_stick.x(), 0.0);
        assert_eq!(state.left_stick.y(), 0.0);
        assert_eq!(state.right_stick.x(), 0.0);
        assert_eq!(state.right_stick.y(), 0.0);
    }
}
