use anyhow::Context;
use clap::Parser;
use colored::*;
use star_neighbours::cli::Cli;
use star_neighbours::github::GitHubClient;
use star_neighbours::server::{serve, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level))
        )
        .init();

    println!("{}", "Star Neighbours Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let config = cli.neighbour_config();
    config.validate().context("Invalid configuration")?;

    let github = GitHubClient::with_endpoint(cli.github_api_secret.clone(), &cli.graphql_url)
        .context("Failed to create GitHub client")?;

    println!("✅ GraphQL endpoint: {}", cli.graphql_url);
    println!(
        "📊 Batches of up to {} stargazers, {} stargazers per page, {} stars per heavy stargazer",
        config.max_sublist_length, config.stargazers_per_page, config.max_stars_per_stargazer
    );
    println!("\nPress Ctrl+C to stop the server\n");

    let state = AppState::new(Arc::new(github), config);

    serve(state, &cli.bind, async {
        let _ = tokio::signal::ctrl_c().await;
        println!("\n🛑 Shutting down server...");
    })
    .await
    .context("Server failed")?;

    info!("Server stopped");
    println!("✅ Server stopped");

    Ok(())
}
