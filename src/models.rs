use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Starred-repo count at which a stargazer stops being fetched in batches.
/// Matches the page size of the remote `starredRepositories` connection.
pub const HEAVY_STARGAZER_THRESHOLD: u32 = 100;

/// Maximum summed `starred_repos_count` of one batch.
pub const MAX_BATCH_WEIGHT: u32 = 100;

/// A user who starred the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stargazer {
    pub id: String,
    pub login: String,
    pub starred_repos_count: u32,
}

/// Canonical `owner/name` repository reference. Casing is kept as the
/// remote API returned it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoRef(String);

impl RepoRef {
    pub fn new(owner: &str, name: &str) -> Self {
        RepoRef(format!("{}/{}", owner, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoRef {
    fn from(full_name: &str) -> Self {
        RepoRef(full_name.to_string())
    }
}

/// Stargazer ids fetched together in one round trip.
pub type Batch = Vec<String>;

/// One page of a paginated query.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Cursor to request the following page with, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Stargazers split by how many repositories they have starred.
#[derive(Debug, Clone, Default)]
pub struct PartitionedStargazers {
    pub light: Vec<Stargazer>,
    pub heavy: Vec<Stargazer>,
}

impl PartitionedStargazers {
    pub fn total(&self) -> usize {
        self.light.len() + self.heavy.len()
    }
}

/// Login → starred repos, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighbourMap {
    entries: Vec<(String, Vec<RepoRef>)>,
    index: HashMap<String, usize>,
}

impl NeighbourMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repos for `login`. An existing login keeps its position
    /// but has its repos replaced.
    pub fn insert(&mut self, login: String, repos: Vec<RepoRef>) {
        match self.index.get(&login) {
            Some(&pos) => self.entries[pos].1 = repos,
            None => {
                self.index.insert(login.clone(), self.entries.len());
                self.entries.push((login, repos));
            }
        }
    }

    /// Repos for `login`, creating an empty entry on first sight.
    pub fn entry(&mut self, login: &str) -> &mut Vec<RepoRef> {
        let pos = match self.index.get(login) {
            Some(&pos) => pos,
            None => {
                self.index.insert(login.to_string(), self.entries.len());
                self.entries.push((login.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, login: &str) -> Option<&[RepoRef]> {
        self.index.get(login).map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains(&self, login: &str) -> bool {
        self.index.contains_key(login)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(login, _)| login.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RepoRef])> {
        self.entries
            .iter()
            .map(|(login, repos)| (login.as_str(), repos.as_slice()))
    }
}

impl IntoIterator for NeighbourMap {
    type Item = (String, Vec<RepoRef>);
    type IntoIter = std::vec::IntoIter<(String, Vec<RepoRef>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Vec<RepoRef>)> for NeighbourMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RepoRef>)>>(iter: I) -> Self {
        let mut map = NeighbourMap::new();
        for (login, repos) in iter {
            map.insert(login, repos);
        }
        map
    }
}

/// A neighbour repository and every stargazer of the target who starred it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub repo: RepoRef,
    pub stargazers: Vec<String>,
}
