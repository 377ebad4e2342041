use crate::error::{Result, StarNeighboursError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tuning for one neighbour computation. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourConfig {
    /// Maximum number of stargazers per batched query. Should be between 30 and 80.
    pub max_sublist_length: usize,
    /// Stargazers requested per page of the target repository.
    pub stargazers_per_page: u32,
    /// Stop paging a heavy stargazer's stars once this many were fetched.
    pub max_stars_per_stargazer: u32,
}

impl Default for NeighbourConfig {
    fn default() -> Self {
        Self {
            max_sublist_length: 50,
            stargazers_per_page: 10,
            max_stars_per_stargazer: 150,
        }
    }
}

impl NeighbourConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_sublist_length == 0 {
            return Err(StarNeighboursError::Config(
                "max_sublist_length must be greater than zero".to_string(),
            ));
        }
        if self.stargazers_per_page == 0 || self.stargazers_per_page > 100 {
            return Err(StarNeighboursError::Config(format!(
                "stargazers_per_page must be between 1 and 100, got {}",
                self.stargazers_per_page
            )));
        }
        if self.max_stars_per_stargazer == 0 {
            return Err(StarNeighboursError::Config(
                "max_stars_per_stargazer must be greater than zero".to_string(),
            ));
        }
        if !(30..=80).contains(&self.max_sublist_length) {
            warn!(
                max_sublist_length = self.max_sublist_length,
                "max_sublist_length outside the recommended 30-80 range"
            );
        }
        Ok(())
    }
}
