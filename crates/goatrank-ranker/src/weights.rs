//! Preference weight vector over the six greatness categories.

use serde::{Deserialize, Serialize};
use crate::error::RankingError;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// One of the six greatness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Offense,
    Defense,
    TeamSuccess,
    Longevity,
    Efficiency,
    PeakPerformance,
}

impl Category {
    /// All categories in canonical order. Every per-category array in this
    /// crate is indexed in this order.
    pub const ALL: [Category; 6] = [
        Category::Offense,
        Category::Defense,
        Category::TeamSuccess,
        Category::Longevity,
        Category::Efficiency,
        Category::PeakPerformance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Offense         => "offense",
            Category::Defense         => "defense",
            Category::TeamSuccess     => "team_success",
            Category::Longevity       => "longevity",
            Category::Efficiency      => "efficiency",
            Category::PeakPerformance => "peak_performance",
        }
    }

    /// Human-readable label for pages and forms.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Offense         => "Offense",
            Category::Defense         => "Defense",
            Category::TeamSuccess     => "Team Success",
            Category::Longevity       => "Longevity",
            Category::Efficiency      => "Efficiency",
            Category::PeakPerformance => "Peak Performance",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Offense         => 0,
            Category::Defense         => 1,
            Category::TeamSuccess     => 2,
            Category::Longevity       => 3,
            Category::Efficiency      => 4,
            Category::PeakPerformance => 5,
        }
    }
}

/// The 6-component weight vector W, one non-negative weight per category.
/// A valid vector sums to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceVector {
    pub offense: f64,
    pub defense: f64,
    pub team_success: f64,
    pub longevity: f64,
    pub efficiency: f64,
    pub peak_performance: f64,
}

impl Default for PreferenceVector {
    /// Equal emphasis on every category.
    fn default() -> Self {
        Self::from_array([1.0 / 6.0; 6])
    }
}

impl PreferenceVector {
    pub fn from_array(w: [f64; 6]) -> Self {
        Self {
            offense:          w[0],
            defense:          w[1],
            team_success:     w[2],
            longevity:        w[3],
            efficiency:       w[4],
            peak_performance: w[5],
        }
    }

    /// Build from slider percentages (0–100 each, expected to total 100).
    pub fn from_percentages(p: [f64; 6]) -> Self {
        Self::from_array(p.map(|v| v / 100.0))
    }

    /// Convert to array for iteration, in [`Category::ALL`] order.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.offense,
            self.defense,
            self.team_success,
            self.longevity,
            self.efficiency,
            self.peak_performance,
        ]
    }

    pub fn weight(&self, category: Category) -> f64 {
        self.as_array()[category.index()]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Check that every weight is finite and non-negative and that the
    /// weights sum to 1.0 within tolerance.
    pub fn validate(&self) -> Result<(), RankingError> {
        self.check_components()?;
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RankingError::InvalidPreference(format!(
                "weights sum to {sum:.4}, expected 1.0 ± {WEIGHT_SUM_TOLERANCE}"
            )));
        }
        Ok(())
    }

    /// Return a copy rescaled to sum to 1.0.
    /// Negative, non-finite and all-zero vectors are still rejected.
    pub fn normalised(&self) -> Result<Self, RankingError> {
        self.check_components()?;
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(RankingError::InvalidPreference(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(Self::from_array(self.as_array().map(|w| w / sum)))
    }

    fn check_components(&self) -> Result<(), RankingError> {
        for (category, w) in Category::ALL.iter().zip(self.as_array()) {
            if !w.is_finite() {
                return Err(RankingError::InvalidPreference(format!(
                    "{} weight is not a finite number",
                    category.as_str()
                )));
            }
            if w < 0.0 {
                return Err(RankingError::InvalidPreference(format!(
                    "{} weight is negative ({w})",
                    category.as_str()
                )));
            }
        }
        Ok(())
    }
}
