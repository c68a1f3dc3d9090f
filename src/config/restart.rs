use std::str::FromStr;

/// Strategies for scheduling restarts of the complete search.
///
/// Each strategy is a trigger on the count of decisions *d*, given the count of restarts so far *k*.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RestartStrategy {
    /// Never restart.
    None,

    /// Restart whenever *d* is a multiple of the interval.
    Fixed { interval: usize },

    /// Restart whenever *d* ≥ initial · factor^*k*.
    ///
    /// With a factor of 1 the threshold never grows, so each decision from *initial* onward restarts.
    Exponential { initial: f64, factor: f64 },

    /// Restart whenever *d* is at least the sum of the first *k + 1* elements of the luby sequence.
    Luby,
}

impl std::fmt::Display for RestartStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Fixed { interval } => write!(f, "fixed({interval})"),
            Self::Exponential { initial, factor } => write!(f, "exponential({initial}, {factor})"),
            Self::Luby => write!(f, "luby"),
        }
    }
}

/// The name of a restart strategy, without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartName {
    None,
    Fixed,
    Exponential,
    Luby,
}

impl FromStr for RestartName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "fixed" => Ok(Self::Fixed),
            "exponential" => Ok(Self::Exponential),
            "luby" => Ok(Self::Luby),
            _unknown_string => Err(()),
        }
    }
}

impl std::fmt::Display for RestartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Fixed => write!(f, "fixed"),
            Self::Exponential => write!(f, "exponential"),
            Self::Luby => write!(f, "luby"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for name in ["none", "fixed", "exponential", "luby"] {
            let parsed = name.parse::<RestartName>();
            assert!(parsed.is_ok());
            assert_eq!(parsed.unwrap().to_string(), name);
        }
        assert!("geometric".parse::<RestartName>().is_err());
    }
}
