use std::error::Error;
use std::fmt;
use std::io;

/// Message shown to the user whenever a form field fails to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numerical values.";

#[derive(Debug)]
pub enum SimError {
    /// A text field did not hold a finite real number.
    InvalidInput { field: &'static str, value: String },
    /// `vy^2 + 2*g*h` is negative, so the projectile never reaches the ground.
    NoRealLandingTime { discriminant: f64 },
    /// The landing root lies before launch.
    NegativeFlightTime { time_s: f64 },
    /// A derived quantity left the range of `f64`.
    NonFiniteResult { quantity: &'static str },
    InvalidConfig(String),
    Plot(String),
    Encode(String),
    Io(io::Error),
}

impl SimError {
    /// Title for a blocking notification about this error.
    pub fn title(&self) -> &'static str {
        match self {
            SimError::InvalidInput { .. } => "Invalid Input",
            SimError::NoRealLandingTime { .. } | SimError::NegativeFlightTime { .. } => {
                "No Landing Point"
            }
            SimError::NonFiniteResult { .. } => "Out of Range",
            SimError::InvalidConfig(_) => "Invalid Configuration",
            SimError::Plot(_) => "Plot Error",
            SimError::Encode(_) => "Output Error",
            SimError::Io(_) => "I/O Error",
        }
    }

    /// Text suitable for a dialog. Parse failures collapse to one generic line.
    pub fn user_message(&self) -> String {
        match self {
            SimError::InvalidInput { .. } => INVALID_INPUT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidInput { field, value } => {
                write!(f, "Invalid {field}: '{value}'. Expected a number.")
            }
            SimError::NoRealLandingTime { discriminant } => write!(
                f,
                "No real landing time: vy^2 + 2*g*h is negative ({discriminant})."
            ),
            SimError::NegativeFlightTime { time_s } => write!(
                f,
                "Landing time computed as negative ({time_s}). Check your inputs."
            ),
            SimError::NonFiniteResult { quantity } => write!(
                f,
                "The {quantity} is too large to represent. Try smaller inputs."
            ),
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            SimError::Plot(msg) => write!(f, "Could not draw plot: {msg}"),
            SimError::Encode(msg) => write!(f, "Could not encode output: {msg}"),
            SimError::Io(err) => write!(f, "I/O failure: {err}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            SimError::Io(err.into())
        } else {
            SimError::Encode(err.to_string())
        }
    }
}
