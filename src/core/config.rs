use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const TRAJECTORY_SAMPLES: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub gravity_mps2: f64,
    pub samples: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: EARTH_GRAVITY_MPS2,
            samples: TRAJECTORY_SAMPLES,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be a positive finite number, got {}",
                self.gravity_mps2
            )));
        }
        if self.samples < 2 {
            return Err(SimError::InvalidConfig(format!(
                "at least 2 trajectory samples are required, got {}",
                self.samples
            )));
        }
        Ok(())
    }
}
