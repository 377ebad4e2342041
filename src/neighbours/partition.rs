use crate::error::Result;
use crate::graph::StarGraph;
use crate::models::{PartitionedStargazers, Stargazer, HEAVY_STARGAZER_THRESHOLD};
use crate::pagination::stargazer_pages;
use futures::TryStreamExt;
use std::pin::pin;
use tracing::debug;

/// Splits stargazers into light and heavy, keeping fetch order in each.
pub fn partition<I>(stargazers: I) -> PartitionedStargazers
where
    I: IntoIterator<Item = Stargazer>,
{
    let mut partitioned = PartitionedStargazers::default();
    for stargazer in stargazers {
        if stargazer.starred_repos_count < HEAVY_STARGAZER_THRESHOLD {
            partitioned.light.push(stargazer);
        } else {
            partitioned.heavy.push(stargazer);
        }
    }
    partitioned
}

/// Pages through every stargazer of `owner/name` and partitions them.
pub async fn fetch_partitioned_stargazers<G>(
    graph: &G,
    owner: &str,
    name: &str,
    stargazers_per_page: u32,
) -> Result<PartitionedStargazers>
where
    G: StarGraph + ?Sized,
{
    let mut pages = pin!(stargazer_pages(graph, owner, name, stargazers_per_page));
    let mut partitioned = PartitionedStargazers::default();
    let mut page_number = 0;

    while let Some(page) = pages.try_next().await? {
        page_number += 1;
        debug!(
            owner,
            repo = name,
            page = page_number,
            stargazers = page.items.len(),
            "Fetched stargazer page"
        );
        let split = partition(page.items);
        partitioned.light.extend(split.light);
        partitioned.heavy.extend(split.heavy);
    }

    Ok(partitioned)
}
