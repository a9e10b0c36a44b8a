use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cs::dynamic::{CostParameters, DEFAULT_DELETE_COST, DEFAULT_INSERT_COST};
use crate::error::{Error, Result};

/// Public parameters shared by both players, as stored in `<prefix>_params.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    pub threshold: u64,
    pub delete_cost: u64,
    pub insert_cost: u64,
}

impl GameParams {
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if any value is negative.
    pub fn new(threshold: i64, delete_cost: i64, insert_cost: i64) -> Result<Self> {
        let threshold = u64::try_from(threshold).map_err(|_| {
            Error::invalid_argument(format!("threshold must be non-negative, got {threshold}"))
        })?;
        let costs = CostParameters::new(delete_cost, insert_cost)?;
        Ok(Self {
            threshold,
            delete_cost: costs.delete_cost,
            insert_cost: costs.insert_cost,
        })
    }

    pub fn costs(&self) -> CostParameters {
        CostParameters {
            delete_cost: self.delete_cost,
            insert_cost: self.insert_cost,
        }
    }
}

/// Everything a generator run needs, gathered from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub threshold: i64,
    pub dictionary_path: PathBuf,
    pub output_size: usize,
    pub output_prefix: String,
    pub delete_cost: i64,
    pub insert_cost: i64,
    /// Fixed seed for reproducible output; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Creates a config with the default costs and no fixed seed.
    pub fn new<P, S>(
        dictionary_path: P,
        output_prefix: S,
        threshold: i64,
        output_size: usize,
    ) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            threshold,
            dictionary_path: dictionary_path.into(),
            output_size,
            output_prefix: output_prefix.into(),
            delete_cost: DEFAULT_DELETE_COST as i64,
            insert_cost: DEFAULT_INSERT_COST as i64,
            seed: None,
        }
    }

    pub fn with_costs(mut self, delete_cost: i64, insert_cost: i64) -> Self {
        self.delete_cost = delete_cost;
        self.insert_cost = insert_cost;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the numeric settings and returns the game parameters they describe.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for negative threshold or costs, a zero
    /// output size, or an empty output prefix.
    pub fn validate(&self) -> Result<GameParams> {
        if self.output_size == 0 {
            return Err(Error::invalid_argument("output_size must be at least 1"));
        }
        if self.output_prefix.is_empty() {
            return Err(Error::invalid_argument("output_prefix must not be empty"));
        }
        GameParams::new(self.threshold, self.delete_cost, self.insert_cost)
    }

    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
