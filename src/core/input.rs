use crate::core::error::SimError;
use crate::core::kinematics::LaunchInputs;

pub const VELOCITY_FIELD: &str = "velocity";
pub const ANGLE_FIELD: &str = "angle";
pub const HEIGHT_FIELD: &str = "height";

/// Parses one text field into a finite real number.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, SimError> {
    let invalid = || SimError::InvalidInput {
        field,
        value: text.to_string(),
    };
    let value = text.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

pub fn parse_inputs(velocity: &str, angle: &str, height: &str) -> Result<LaunchInputs, SimError> {
    Ok(LaunchInputs {
        speed_mps: parse_field(VELOCITY_FIELD, velocity)?,
        angle_deg: parse_field(ANGLE_FIELD, angle)?,
        height_m: parse_field(HEIGHT_FIELD, height)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_and_signed_numbers() {
        assert_eq!(parse_field(VELOCITY_FIELD, " 20 ").unwrap(), 20.0);
        assert_eq!(parse_field(HEIGHT_FIELD, "-3.5").unwrap(), -3.5);
        assert_eq!(parse_field(ANGLE_FIELD, "4.5e1").unwrap(), 45.0);
    }

    #[test]
    fn rejects_text_empty_and_non_finite() {
        for bad in ["", "   ", "abc", "12m", "1,5", "inf", "-infinity", "NaN"] {
            let err = parse_field(ANGLE_FIELD, bad).expect_err(bad);
            match err {
                SimError::InvalidInput { field, value } => {
                    assert_eq!(field, ANGLE_FIELD);
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn reports_first_failing_field() {
        let err = parse_inputs("10", "north", "x").expect_err("angle should fail");
        assert!(matches!(err, SimError::InvalidInput { field: ANGLE_FIELD, .. }));

        let inputs = parse_inputs("10", "45", "0").expect("all fields parse");
        assert_eq!(inputs.speed_mps, 10.0);
        assert_eq!(inputs.angle_deg, 45.0);
        assert_eq!(inputs.height_m, 0.0);
    }
}
