use std::{fmt, str::FromStr};

use crate::errors::RasterInfoError;

/// Rule mapping a fractional pixel coordinate onto an integer index.
///
/// There is deliberately no default: a world coordinate lying on a pixel
/// edge lands in different pixels depending on the rule, so every lookup
/// names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Pixel whose lower edge is at or below the coordinate.
    Floor,
    /// Nearest pixel index, halves away from zero.
    Round,
    Ceil,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::Floor => value.floor(),
            RoundingPolicy::Round => value.round(),
            RoundingPolicy::Ceil => value.ceil(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingPolicy::Floor => "floor",
            RoundingPolicy::Round => "round",
            RoundingPolicy::Ceil => "ceil",
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = RasterInfoError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "floor" => Ok(RoundingPolicy::Floor),
            "round" => Ok(RoundingPolicy::Round),
            "ceil" => Ok(RoundingPolicy::Ceil),
            _ => Err(RasterInfoError::InvalidRoundingPolicy(token.into())),
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RoundingPolicy::Floor, 0.5, 0.)]
    #[case(RoundingPolicy::Round, 0.5, 1.)]
    #[case(RoundingPolicy::Ceil, 0.5, 1.)]
    #[case(RoundingPolicy::Floor, -0.5, -1.)]
    #[case(RoundingPolicy::Round, -0.5, -1.)]
    #[case(RoundingPolicy::Ceil, -0.5, -0.)]
    #[case(RoundingPolicy::Round, 2.49, 2.)]
    #[case(RoundingPolicy::Ceil, 3., 3.)]
    fn apply_policy(#[case] policy: RoundingPolicy, #[case] value: f64, #[case] expected: f64) {
        assert_eq!(policy.apply(value), expected)
    }

    #[rstest]
    #[case("floor", RoundingPolicy::Floor)]
    #[case("Round", RoundingPolicy::Round)]
    #[case(" CEIL ", RoundingPolicy::Ceil)]
    fn parse_token(#[case] token: &str, #[case] expected: RoundingPolicy) {
        assert_eq!(token.parse::<RoundingPolicy>().unwrap(), expected)
    }

    #[rstest]
    #[case("nearest")]
    #[case("")]
    #[case("trunc")]
    fn reject_unknown_token(#[case] token: &str) {
        let err = token.parse::<RoundingPolicy>().unwrap_err();
        assert!(matches!(err, RasterInfoError::InvalidRoundingPolicy(t) if t == token))
    }

    #[test]
    fn serde_tokens() {
        let policy: RoundingPolicy = serde_json::from_str("\"ceil\"").unwrap();
        assert_eq!(policy, RoundingPolicy::Ceil);
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::Floor).unwrap(),
            "\"floor\""
        );
        assert!(serde_json::from_str::<RoundingPolicy>("\"nearest\"").is_err());
    }
}
