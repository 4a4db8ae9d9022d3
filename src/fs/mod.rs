//! Filesystem utilities for the V5 Brain.
//!
//! # Example
//!
//! ```ignore
//! use clawbot_driver::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// Logger writing to the console and a file on the SD card.
pub mod logger;
