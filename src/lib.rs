pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod graph;
pub mod health;
pub mod models;
pub mod neighbours;
pub mod pagination;
pub mod server;
pub mod types;

pub use config::NeighbourConfig;
pub use error::{ErrorKind, Result, StarNeighboursError};
pub use graph::StarGraph;
pub use models::{NeighbourMap, RepoRef, ResponseEntry, Stargazer};
pub use neighbours::compute_star_neighbours;
