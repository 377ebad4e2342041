use crate::config::NeighbourConfig;
use crate::github::GRAPHQL_URL;
use clap::Parser;

#[derive(Parser)]
#[command(name = "star-neighbours")]
#[command(about = "Star Neighbours Server - Finds the repositories starred by a repository's stargazers")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API token used for GraphQL queries
    #[arg(long, env = "GITHUB_API_SECRET", hide_env_values = true)]
    pub github_api_secret: String,

    /// Maximum number of stargazers per batched query (recommended 30-80)
    #[arg(long, env = "MAX_SUBLIST_LENGTH", default_value_t = 50)]
    pub max_sublist_length: usize,

    /// Number of stargazers to fetch per page
    #[arg(long, env = "STARGAZERS_PER_PAGE", default_value_t = 10)]
    pub stargazers_per_page: u32,

    /// Stop fetching a stargazer's stars after this many
    #[arg(long, env = "MAX_STARS_PER_STARGAZER", default_value_t = 150)]
    pub max_stars_per_stargazer: u32,

    /// Address the HTTP API binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// GitHub GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = GRAPHQL_URL)]
    pub graphql_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn neighbour_config(&self) -> NeighbourConfig {
        NeighbourConfig {
            max_sublist_length: self.max_sublist_length,
            stargazers_per_page: self.stargazers_per_page,
            max_stars_per_stargazer: self.max_stars_per_stargazer,
        }
    }
}
