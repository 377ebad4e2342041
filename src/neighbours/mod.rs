//! Star neighbours: repositories starred by the stargazers of a repository.
//!
//! The computation runs in stages, each a plain async function over a
//! [`StarGraph`]:
//!
//! 1. page through the target's stargazers and [`partition`] them into light
//!    and heavy by starred-repo count,
//! 2. [`binpack`] the light ones into weight- and size-bounded batches and
//!    resolve each batch in one query ([`fetch_batched_neighbours`]),
//! 3. page through each heavy stargazer's stars up to a cap
//!    ([`fetch_capped_neighbours`]),
//! 4. [`merge`] both maps and [`invert`] them into repo → stargazers.
//!
//! Stages run sequentially and any failure aborts the whole computation.

pub mod aggregate;
pub mod batch;
pub mod binpack;
pub mod capped;
pub mod partition;

pub use aggregate::{invert, merge};
pub use batch::fetch_batched_neighbours;
pub use binpack::binpack;
pub use capped::fetch_capped_neighbours;
pub use partition::{fetch_partitioned_stargazers, partition};

use crate::config::NeighbourConfig;
use crate::error::Result;
use crate::graph::StarGraph;
use crate::models::{RepoRef, ResponseEntry, MAX_BATCH_WEIGHT};
use tracing::info;

/// Computes the star neighbours of `owner/name`.
///
/// The target repository itself never shows up in the result. A repository
/// without stargazers, or whose stargazers star nothing else, yields an
/// empty list.
pub async fn compute_star_neighbours<G>(
    graph: &G,
    config: &NeighbourConfig,
    owner: &str,
    name: &str,
) -> Result<Vec<ResponseEntry>>
where
    G: StarGraph + ?Sized,
{
    let ignore_repo = RepoRef::new(owner, name);

    let stargazers =
        fetch_partitioned_stargazers(graph, owner, name, config.stargazers_per_page).await?;
    info!(
        repo = %ignore_repo,
        light = stargazers.light.len(),
        heavy = stargazers.heavy.len(),
        "Fetched stargazers"
    );

    let batches = binpack(&stargazers.light, MAX_BATCH_WEIGHT, config.max_sublist_length);
    let light = fetch_batched_neighbours(graph, &batches, &ignore_repo).await?;
    info!(
        repo = %ignore_repo,
        batches = batches.len(),
        users = light.len(),
        "Fetched light stargazer stars"
    );

    let heavy = fetch_capped_neighbours(
        graph,
        &stargazers.heavy,
        &ignore_repo,
        config.max_stars_per_stargazer,
    )
    .await?;
    info!(repo = %ignore_repo, users = heavy.len(), "Fetched heavy stargazer stars");

    let entries = invert(&merge(light, heavy));
    info!(repo = %ignore_repo, neighbours = entries.len(), "Computed star neighbours");

    Ok(entries)
}
