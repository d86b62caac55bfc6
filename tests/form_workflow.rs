use projectile_sim::core::error::INVALID_INPUT_MESSAGE;
use projectile_sim::{SimError, SimulatorForm};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

fn fill(form: &mut SimulatorForm, velocity: &str, angle: &str, height: &str) {
    form.velocity = velocity.to_string();
    form.angle = angle.to_string();
    form.height = height.to_string();
}

#[test]
fn simulate_then_reset() {
    let mut form = SimulatorForm::default();
    fill(&mut form, "20", "45", "0");

    let report = form.simulate().expect("simulation should succeed");
    assert_close(report.time_of_flight_s, 2.886, 0.001);
    assert_close(report.max_height_m, 10.204, 0.001);
    assert_close(report.range_m, 40.816, 0.001);
    assert_eq!(report.trajectory.len(), 500);
    assert!(!form.plot().is_empty());

    form.reset();

    assert_eq!(form.velocity, "");
    assert_eq!(form.angle, "");
    assert_eq!(form.height, "");
    assert_eq!(form.time_of_flight_text(), "Time of Flight: ");
    assert_eq!(form.max_height_text(), "Max Height: ");
    assert_eq!(form.range_text(), "Range: ");
    assert!(form.plot().is_empty());
    assert_eq!(form.plot().title(), "Projectile Motion Trajectory");
}

#[test]
fn invalid_input_leaves_previous_results_untouched() {
    let mut form = SimulatorForm::default();
    fill(&mut form, "10", "90", "5");
    form.simulate().expect("simulation should succeed");
    let captions = (
        form.time_of_flight_text(),
        form.max_height_text(),
        form.range_text(),
    );
    let plot = form.plot().clone();
    assert_eq!(captions.1, "Max Height: 10.10 m");
    assert_eq!(captions.2, "Range: 0.00 m");

    let rejected = [("fast", "45", "0"), ("10", "", "0"), ("10", "45", "1..2")];
    for (velocity, angle, height) in rejected {
        fill(&mut form, velocity, angle, height);
        let err = form.simulate().expect_err("input should be rejected");
        assert!(matches!(err, SimError::InvalidInput { .. }));
        assert_eq!(err.user_message(), INVALID_INPUT_MESSAGE);

        assert_eq!(form.time_of_flight_text(), captions.0);
        assert_eq!(form.max_height_text(), captions.1);
        assert_eq!(form.range_text(), captions.2);
        assert_eq!(form.plot(), &plot);
    }
}

#[test]
fn ground_out_of_reach_is_rejected_without_plotting() {
    let mut form = SimulatorForm::default();
    fill(&mut form, "2", "30", "-50");

    let err = form.simulate().expect_err("no landing point");
    assert!(matches!(err, SimError::NoRealLandingTime { .. }));
    assert!(form.report().is_none());
    assert!(form.plot().is_empty());
}

#[test]
fn plot_bounds_cover_the_whole_curve() {
    let mut form = SimulatorForm::default();
    fill(&mut form, "30", "60", "12");
    form.simulate().expect("simulation should succeed");

    let bounds = form.plot().bounds();
    for s in form.plot().curve().expect("curve present") {
        assert!(s.x_m >= bounds.x_min && s.x_m <= bounds.x_max);
        assert!(s.y_m >= bounds.y_min && s.y_m <= bounds.y_max);
    }
}

#[test]
fn overflowing_inputs_are_rejected_and_prior_plot_kept() {
    let mut form = SimulatorForm::default();
    fill(&mut form, "20", "45", "0");
    form.simulate().expect("simulation should succeed");
    let plot = form.plot().clone();
    let caption = form.range_text();

    for (velocity, angle, height) in [("1e200", "45", "0"), ("1", "45", "1e307")] {
        fill(&mut form, velocity, angle, height);
        let err = form.simulate().expect_err("overflow should be rejected");
        assert!(matches!(err, SimError::NonFiniteResult { .. }));
        assert_eq!(err.title(), "Out of Range");

        assert_eq!(form.plot(), &plot);
        assert_eq!(form.range_text(), caption);
        assert!(form.plot().bounds().is_finite());
    }
}
