//! Model Parameters
//!
//! The fixed parameter set a simulation is built from.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Type label drawn for agents that are not in the minority
pub const MAJORITY_TYPE: u8 = 0;

/// Type label drawn with probability `minority_pc`
pub const MINORITY_TYPE: u8 = 1;

/// Parameters fixed for the lifetime of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchellingParams {
    pub height: usize,
    pub width: usize,
    /// Probability that a cell is occupied at seeding time
    pub density: f64,
    /// Probability that a seeded agent gets the minority type
    pub minority_pc: f64,
    /// Same-type ordinary neighbors needed for an ordinary agent to be satisfied
    pub homophily: u32,
    /// Number of positive influencers, taken from the first seeded agents
    pub num_positive: u32,
    pub positive_tolerance: u32,
    /// Number of negative influencers, taken right after the positive ones
    pub num_negative: u32,
    pub negative_tolerance: u32,
    /// Type influencers treat as the majority when judging their surroundings.
    /// A configured constant, never derived from the population.
    pub majority_type: u8,
}

impl Default for SchellingParams {
    fn default() -> Self {
        Self {
            height: 20,
            width: 20,
            density: 0.8,
            minority_pc: 0.2,
            homophily: 3,
            num_positive: 1,
            positive_tolerance: 8,
            num_negative: 1,
            negative_tolerance: 2,
            majority_type: MAJORITY_TYPE,
        }
    }
}

impl SchellingParams {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_minority_pc(mut self, minority_pc: f64) -> Self {
        self.minority_pc = minority_pc;
        self
    }

    pub fn with_homophily(mut self, homophily: u32) -> Self {
        self.homophily = homophily;
        self
    }

    pub fn with_positive(mut self, count: u32, tolerance: u32) -> Self {
        self.num_positive = count;
        self.positive_tolerance = tolerance;
        self
    }

    pub fn with_negative(mut self, count: u32, tolerance: u32) -> Self {
        self.num_negative = count;
        self.negative_tolerance = tolerance;
        self
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check every parameter against its valid range
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        check_probability("density", self.density)?;
        check_probability("minority_pc", self.minority_pc)?;
        if self.majority_type != MAJORITY_TYPE && self.majority_type != MINORITY_TYPE {
            return Err(ParamError::MajorityType(self.majority_type));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ParamError> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamError::Probability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = SchellingParams::default();

        assert_eq!(params.cell_count(), 400);
        assert_eq!(params.homophily, 3);
        assert_eq!(params.positive_tolerance, 8);
        assert_eq!(params.negative_tolerance, 2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let params = SchellingParams::default().with_size(0, 5);

        assert_eq!(
            params.validate(),
            Err(ParamError::EmptyGrid {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_probability_bounds() {
        assert!(SchellingParams::default().with_density(0.0).validate().is_ok());
        assert!(SchellingParams::default().with_density(1.0).validate().is_ok());
        assert!(matches!(
            SchellingParams::default().with_density(1.01).validate(),
            Err(ParamError::Probability { name: "density", .. })
        ));
        assert!(matches!(
            SchellingParams::default().with_minority_pc(-0.1).validate(),
            Err(ParamError::Probability {
                name: "minority_pc",
                ..
            })
        ));
        assert!(SchellingParams::default()
            .with_minority_pc(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_majority_type_must_be_seeded_label() {
        let params = SchellingParams {
            majority_type: 2,
            ..SchellingParams::default()
        };

        assert_eq!(params.validate(), Err(ParamError::MajorityType(2)));
    }
}
