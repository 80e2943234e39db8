//! Influence Polarity
//!
//! The two kinds of social influencer an agent can be.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of an influencer agent.
///
/// Positive influencers keep unsatisfied neighbors in place; negative ones
/// push them into short erratic hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    Positive,
    Negative,
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Influence::Positive => write!(f, "positive"),
            Influence::Negative => write!(f, "negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_influence_serialization() {
        assert_eq!(
            serde_json::to_string(&Influence::Positive).unwrap(),
            r#""positive""#
        );
        assert_eq!(
            serde_json::to_string(&Influence::Negative).unwrap(),
            r#""negative""#
        );
    }

    #[test]
    fn test_influence_display() {
        assert_eq!(Influence::Positive.to_string(), "positive");
        assert_eq!(Influence::Negative.to_string(), "negative");
    }
}
