use crate::error::Result;
use crate::graph::StarGraph;
use crate::models::{Batch, NeighbourMap, RepoRef};
use tracing::{debug, warn};

/// Resolves each batch in one query and collects the starred repos of every
/// returned login, minus `ignore_repo`.
///
/// The remote is trusted to return each user's full list unpaged. Users
/// miscounted as light may come back truncated.
pub async fn fetch_batched_neighbours<G>(
    graph: &G,
    batches: &[Batch],
    ignore_repo: &RepoRef,
) -> Result<NeighbourMap>
where
    G: StarGraph + ?Sized,
{
    let mut neighbours = NeighbourMap::new();

    for (index, batch) in batches.iter().enumerate() {
        let resolved = graph.starred_repos_of_many(batch).await?;

        if resolved.len() < batch.len() {
            warn!(
                batch = index,
                requested = batch.len(),
                resolved = resolved.len(),
                "Some stargazers could not be resolved"
            );
        } else {
            debug!(batch = index, users = resolved.len(), "Fetched batched stargazers");
        }

        for (login, repos) in resolved {
            let repos = repos.into_iter().filter(|repo| repo != ignore_repo).collect();
            neighbours.insert(login, repos);
        }
    }

    Ok(neighbours)
}
