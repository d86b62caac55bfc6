//! The form controller: owns the three input buffers, the last computed
//! report and the plot, and implements the Simulate and Reset actions.
//! Front ends draw from it and forward user actions to it.

use log::{debug, info, warn};

use crate::core::config::SimConfig;
use crate::core::error::SimError;
use crate::core::input::parse_inputs;
use crate::core::kinematics::{Kinematics, TrajectorySample, solve};
use crate::core::window::{PlotBounds, axis_bounds};

pub const PLOT_TITLE: &str = "Projectile Motion Trajectory";
pub const X_AXIS_LABEL: &str = "Horizontal Distance (m)";
pub const Y_AXIS_LABEL: &str = "Vertical Height (m)";
pub const SERIES_LABEL: &str = "Trajectory";

pub const TIME_OF_FLIGHT_CAPTION: &str = "Time of Flight: ";
pub const MAX_HEIGHT_CAPTION: &str = "Max Height: ";
pub const RANGE_CAPTION: &str = "Range: ";

/// What the plot shows: fixed title and axis labels plus at most one curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotState {
    curve: Option<Vec<TrajectorySample>>,
}

impl PlotState {
    pub fn title(&self) -> &'static str {
        PLOT_TITLE
    }

    pub fn x_label(&self) -> &'static str {
        X_AXIS_LABEL
    }

    pub fn y_label(&self) -> &'static str {
        Y_AXIS_LABEL
    }

    pub fn curve(&self) -> Option<&[TrajectorySample]> {
        self.curve.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.curve.is_none()
    }

    /// Replaces any previous curve.
    pub fn plot(&mut self, samples: &[TrajectorySample]) {
        self.curve = Some(samples.to_vec());
    }

    /// Back to empty axes.
    pub fn clear(&mut self) {
        self.curve = None;
    }

    pub fn bounds(&self) -> PlotBounds {
        axis_bounds(self.curve().unwrap_or(&[]))
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimulatorForm {
    pub velocity: String,
    pub angle: String,
    pub height: String,
    config: SimConfig,
    report: Option<Kinematics>,
    plot: PlotState,
}

impl SimulatorForm {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn report(&self) -> Option<&Kinematics> {
        self.report.as_ref()
    }

    pub fn plot(&self) -> &PlotState {
        &self.plot
    }

    /// Parses the fields and recomputes. On error nothing already shown changes.
    pub fn simulate(&mut self) -> Result<&Kinematics, SimError> {
        let outcome = parse_inputs(&self.velocity, &self.angle, &self.height)
            .and_then(|inputs| solve(inputs, &self.config))
            .and_then(|report| {
                if axis_bounds(&report.trajectory).is_finite() {
                    Ok(report)
                } else {
                    Err(SimError::NonFiniteResult {
                        quantity: "plot window",
                    })
                }
            });
        let report = match outcome {
            Ok(report) => report,
            Err(err) => {
                warn!("simulate rejected: {err}");
                return Err(err);
            }
        };

        info!(
            "simulated v={} angle={} h={}: t={:.3}s max={:.3}m range={:.3}m",
            report.inputs.speed_mps,
            report.inputs.angle_deg,
            report.inputs.height_m,
            report.time_of_flight_s,
            report.max_height_m,
            report.range_m
        );
        self.plot.plot(&report.trajectory);
        debug!(
            "plotted {} samples within {:?}",
            report.trajectory.len(),
            self.plot.bounds()
        );

        Ok(self.report.insert(report))
    }

    pub fn reset(&mut self) {
        self.velocity.clear();
        self.angle.clear();
        self.height.clear();
        self.report = None;
        self.plot.clear();
        info!("form reset");
    }

    pub fn time_of_flight_text(&self) -> String {
        match &self.report {
            Some(r) => format!("{TIME_OF_FLIGHT_CAPTION}{:.2} s", r.time_of_flight_s),
            None => TIME_OF_FLIGHT_CAPTION.to_string(),
        }
    }

    pub fn max_height_text(&self) -> String {
        match &self.report {
            Some(r) => format!("{MAX_HEIGHT_CAPTION}{:.2} m", r.max_height_m),
            None => MAX_HEIGHT_CAPTION.to_string(),
        }
    }

    pub fn range_text(&self) -> String {
        match &self.report {
            Some(r) => format!("{RANGE_CAPTION}{:.2} m", r.range_m),
            None => RANGE_CAPTION.to_string(),
        }
    }
}
