pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod kinematics;
pub mod plot;
pub mod window;
