use crate::core::nutrition::{MIN_CRUDE_FIBER, MIN_TRUE_PROTEIN};
use thiserror::Error;

/// Every candidate mix of the search sums to this many percent.
pub const MIX_TOTAL_PERCENT: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Inclusive, ascending range of shares visited by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareRange {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl ShareRange {
    pub const fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    /// The shares in ascending order. Call [`ShareRange::validate`] first: a
    /// zero step cannot be iterated.
    pub fn values(&self) -> impl Iterator<Item = u32> + use<> {
        (self.start..=self.end).step_by(self.step.max(1) as usize)
    }

    pub fn len(&self) -> usize {
        if self.step == 0 || self.start > self.end {
            return 0;
        }
        ((self.end - self.start) / self.step) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: "step must be greater than zero".to_string(),
            });
        }
        if self.start > self.end {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: format!("start {} exceeds end {}", self.start, self.end),
            });
        }
        if self.end > MIX_TOTAL_PERCENT {
            return Err(ConfigError::InvalidParameter {
                name,
                reason: format!("end {} exceeds {}%", self.end, MIX_TOTAL_PERCENT),
            });
        }
        Ok(())
    }
}

/// Grid and feasibility bounds of the mix search.
///
/// Grass silage and maize silage shares are enumerated from their ranges; the
/// hay share is whatever remains of [`MIX_TOTAL_PERCENT`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub grass_silage: ShareRange,
    pub maize_silage: ShareRange,
    pub max_hay_share: u32,
    pub min_true_protein: f64,
    pub min_crude_fiber: f64,
}

impl SearchConfig {
    /// Derived hay share for a grass/maize pair, or `None` when the pair is
    /// outside the grid (the remainder is negative or above `max_hay_share`).
    pub fn hay_share(&self, grass_silage: u32, maize_silage: u32) -> Option<u32> {
        let hay = i64::from(MIX_TOTAL_PERCENT) - i64::from(grass_silage) - i64::from(maize_silage);
        if hay < 0 || hay > i64::from(self.max_hay_share) {
            return None;
        }
        u32::try_from(hay).ok()
    }

    /// Number of grass/maize pairs the search visits, skipped ones included.
    pub fn total_pairs(&self) -> u64 {
        (self.grass_silage.len() as u64).saturating_mul(self.maize_silage.len() as u64)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grass_silage.validate("grass_silage")?;
        self.maize_silage.validate("maize_silage")?;
        if !self.min_true_protein.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "min_true_protein",
                reason: format!("{} is not a finite number", self.min_true_protein),
            });
        }
        if !self.min_crude_fiber.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "min_crude_fiber",
                reason: format!("{} is not a finite number", self.min_crude_fiber),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    /// Grass silage 40..=80 and maize silage 0..=50 in steps of 5, hay at most
    /// 60, with the health minimums for true protein and crude fiber.
    fn default() -> Self {
        Self {
            grass_silage: ShareRange::new(40, 80, 5),
            maize_silage: ShareRange::new(0, 50, 5),
            max_hay_share: 60,
            min_true_protein: MIN_TRUE_PROTEIN,
            min_crude_fiber: MIN_CRUDE_FIBER,
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    grass_silage: Option<ShareRange>,
    maize_silage: Option<ShareRange>,
    max_hay_share: Option<u32>,
    min_true_protein: Option<f64>,
    min_crude_fiber: Option<f64>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grass_silage(mut self, range: ShareRange) -> Self {
        self.grass_silage = Some(range);
        self
    }
    pub fn maize_silage(mut self, range: ShareRange) -> Self {
        self.maize_silage = Some(range);
        self
    }
    pub fn max_hay_share(mut self, share: u32) -> Self {
        self.max_hay_share = Some(share);
        self
    }
    pub fn min_true_protein(mut self, value: f64) -> Self {
        self.min_true_protein = Some(value);
        self
    }
    pub fn min_crude_fiber(mut self, value: f64) -> Self {
        self.min_crude_fiber = Some(value);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let config = SearchConfig {
            grass_silage: self
                .grass_silage
                .ok_or(ConfigError::MissingParameter("grass_silage"))?,
            maize_silage: self
                .maize_silage
                .ok_or(ConfigError::MissingParameter("maize_silage"))?,
            max_hay_share: self
                .max_hay_share
                .ok_or(ConfigError::MissingParameter("max_hay_share"))?,
            min_true_protein: self
                .min_true_protein
                .ok_or(ConfigError::MissingParameter("min_true_protein"))?,
            min_crude_fiber: self
                .min_crude_fiber
                .ok_or(ConfigError::MissingParameter("min_crude_fiber"))?,
        };
        config.validate()?;
        Ok(config)
    }
}
