//! Closed-form projectile motion: kinematics, input parsing, the form
//! controller shared by the GUI and CLI front ends, and plot export.

pub mod core;

pub use crate::core::config::SimConfig;
pub use crate::core::error::SimError;
pub use crate::core::form::{PlotState, SimulatorForm};
pub use crate::core::kinematics::{Kinematics, LaunchInputs, TrajectorySample, solve};
