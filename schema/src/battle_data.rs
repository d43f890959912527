use serde::{Deserialize, Serialize};
use std::fmt;

/// Field weather. The battle layer owns it and mirrors the current value onto
/// each participant so weather-conditioned abilities can read it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Sun,
    Sandstorm,
    Hail,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Sun => "Harsh Sunlight",
            Weather::Sandstorm => "Sandstorm",
            Weather::Hail => "Hail",
        };
        write!(f, "{}", display_name)
    }
}
