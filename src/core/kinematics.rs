use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::core::error::SimError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Everything derived from one launch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub inputs: LaunchInputs,
    pub gravity_mps2: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub time_of_flight_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
    pub trajectory: Vec<TrajectorySample>,
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    let vx = inputs.speed_mps * theta.cos();
    let vy = inputs.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(inputs: LaunchInputs, time_s: f64, gravity_mps2: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = inputs.height_m + (vy * time_s) - (0.5 * gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Time until the projectile returns to height 0.
pub fn flight_time(inputs: LaunchInputs, gravity_mps2: f64) -> Result<f64, SimError> {
    if !inputs.angle_deg.is_finite()
        || !inputs.speed_mps.is_finite()
        || !inputs.height_m.is_finite()
    {
        return Err(SimError::InvalidInput {
            field: "launch",
            value: format!("{inputs:?}"),
        });
    }

    let (_, vy) = velocity_components(inputs);
    let disc = vy * vy + 2.0 * gravity_mps2 * inputs.height_m;
    if !disc.is_finite() {
        return Err(SimError::NonFiniteResult {
            quantity: "discriminant",
        });
    }
    if disc < 0.0 {
        return Err(SimError::NoRealLandingTime { discriminant: disc });
    }

    let t_land = (vy + disc.sqrt()) / gravity_mps2;
    if !t_land.is_finite() {
        return Err(SimError::NonFiniteResult {
            quantity: "time of flight",
        });
    }
    if t_land < 0.0 {
        return Err(SimError::NegativeFlightTime { time_s: t_land });
    }

    Ok(t_land)
}

pub fn max_height(inputs: LaunchInputs, gravity_mps2: f64) -> f64 {
    let (_, vy) = velocity_components(inputs);
    inputs.height_m + (vy * vy) / (2.0 * gravity_mps2)
}

/// Evenly spaced samples over `[0, time_of_flight_s]`, both ends included.
pub fn sample_trajectory(
    inputs: LaunchInputs,
    time_of_flight_s: f64,
    samples: usize,
    gravity_mps2: f64,
) -> Vec<TrajectorySample> {
    let sample_count = samples.max(2);
    let last = sample_count - 1;
    let step = time_of_flight_s / last as f64;
    (0..sample_count)
        .map(|i| {
            // Pin the endpoint so it is not off by accumulated rounding.
            let t = if i == last {
                time_of_flight_s
            } else {
                i as f64 * step
            };
            let (x, y) = position_at_time(inputs, t, gravity_mps2);
            TrajectorySample {
                time_s: t,
                x_m: x,
                y_m: y,
            }
        })
        .collect()
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NonFiniteResult { quantity })
    }
}

pub fn solve(inputs: LaunchInputs, config: &SimConfig) -> Result<Kinematics, SimError> {
    config.validate()?;
    let g = config.gravity_mps2;

    let time_of_flight_s = flight_time(inputs, g)?;
    let (vx_mps, vy_mps) = velocity_components(inputs);
    let max_height_m = max_height(inputs, g);
    let range_m = vx_mps * time_of_flight_s;
    finite("max height", max_height_m)?;
    finite("range", range_m)?;

    let trajectory = sample_trajectory(inputs, time_of_flight_s, config.samples, g);
    if trajectory
        .iter()
        .any(|s| !s.x_m.is_finite() || !s.y_m.is_finite())
    {
        return Err(SimError::NonFiniteResult {
            quantity: "trajectory",
        });
    }

    Ok(Kinematics {
        inputs,
        gravity_mps2: g,
        vx_mps,
        vy_mps,
        time_of_flight_s,
        max_height_m,
        range_m,
        trajectory,
    })
}
