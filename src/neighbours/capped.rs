use crate::error::Result;
use crate::graph::StarGraph;
use crate::models::{NeighbourMap, RepoRef, Stargazer};
use crate::pagination::{starred_repo_pages, STARRED_REPOS_PAGE_SIZE};
use futures::TryStreamExt;
use std::pin::pin;
use tracing::debug;

/// Pages through each heavy stargazer's starred repos until at least
/// `max_stars_per_stargazer` items were fetched for them.
///
/// The cap is checked after each page, so a user may end up with up to one
/// page more than the cap. Every heavy stargazer gets an entry, even an
/// empty one.
pub async fn fetch_capped_neighbours<G>(
    graph: &G,
    heavy: &[Stargazer],
    ignore_repo: &RepoRef,
    max_stars_per_stargazer: u32,
) -> Result<NeighbourMap>
where
    G: StarGraph + ?Sized,
{
    let mut neighbours = NeighbourMap::new();

    for stargazer in heavy {
        let repos = neighbours.entry(&stargazer.login);
        let mut pages = pin!(starred_repo_pages(graph, &stargazer.id, STARRED_REPOS_PAGE_SIZE));
        let mut fetched: u64 = 0;
        let mut page_count = 0;

        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            fetched += page.items.len() as u64;
            repos.extend(page.items.into_iter().filter(|repo| repo != ignore_repo));

            if fetched >= u64::from(max_stars_per_stargazer) {
                break;
            }
        }

        debug!(
            login = %stargazer.login,
            pages = page_count,
            fetched,
            "Fetched capped stargazer"
        );
    }

    Ok(neighbours)
}
