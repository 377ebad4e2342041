use crate::models::{NeighbourMap, RepoRef, ResponseEntry};
use std::collections::HashMap;
use tracing::warn;

/// Union of the light and heavy maps. The buckets are disjoint, but should a
/// login appear in both the heavy entry wins.
pub fn merge(light: NeighbourMap, heavy: NeighbourMap) -> NeighbourMap {
    let mut merged = light;
    for (login, repos) in heavy {
        if merged.contains(&login) {
            warn!(%login, "Stargazer present in both light and heavy results");
        }
        merged.insert(login, repos);
    }
    merged
}

/// Inverts login → repos into repo → logins.
///
/// Entries come out in the order each repo is first seen; logins within an
/// entry keep the map's order.
pub fn invert(neighbours: &NeighbourMap) -> Vec<ResponseEntry> {
    let mut entries: Vec<ResponseEntry> = Vec::new();
    let mut positions: HashMap<&RepoRef, usize> = HashMap::new();

    for (login, repos) in neighbours.iter() {
        for repo in repos {
            let position = *positions.entry(repo).or_insert_with(|| {
                entries.push(ResponseEntry {
                    repo: repo.clone(),
                    stargazers: Vec::new(),
                });
                entries.len() - 1
            });
            entries[position].stargazers.push(login.to_string());
        }
    }

    entries
}
