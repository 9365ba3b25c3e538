use std::fmt;

/// Reasons a scenario is refused before it is ever simulated
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    NoBodies,
    NonPositiveMass { index: usize, mass: f64 },
    BadVectorLength { index: usize, field: &'static str, len: usize },
    NonFinite { what: String },
    NonPositiveStep(f64),
    NonPositiveMaxSpeed(f64),
    NonPositiveSpeedMultiplier(f64),
    BodyIndexOutOfRange { index: usize, len: usize },
    BadBodyEdit(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read scenario: {}", err),
            Self::Yaml(err) => write!(f, "failed to parse scenario: {}", err),
            Self::NoBodies => write!(f, "scenario has no bodies"),
            Self::NonPositiveMass { index, mass } => {
                write!(f, "body {} has non-positive mass {}", index, mass)
            }
            Self::BadVectorLength { index, field, len } => write!(
                f,
                "body {}: `{}` must have exactly 2 components, got {}",
                index, field, len
            ),
            Self::NonFinite { what } => write!(f, "{} is not finite", what),
            Self::NonPositiveStep(dt) => write!(f, "time step must be positive, got {}", dt),
            Self::NonPositiveMaxSpeed(v) => write!(f, "max_speed must be positive, got {}", v),
            Self::NonPositiveSpeedMultiplier(v) => {
                write!(f, "speed_multiplier must be positive, got {}", v)
            }
            Self::BodyIndexOutOfRange { index, len } => {
                write!(f, "body index {} out of range for {} bodies", index, len)
            }
            Self::BadBodyEdit(msg) => write!(f, "bad body edit {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}
