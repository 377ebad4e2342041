use star_neighbours::models::{NeighbourMap, Page, RepoRef, ResponseEntry, Stargazer};
use star_neighbours::NeighbourConfig;

#[test]
fn test_repo_ref_creation() {
    let repo = RepoRef::new("octocat", "Hello-World");

    assert_eq!(repo.as_str(), "octocat/Hello-World");
    assert_eq!(repo.to_string(), "octocat/Hello-World");
    assert_eq!(repo, RepoRef::from("octocat/Hello-World"));
    assert_ne!(repo, RepoRef::from("octocat/hello-world"));
}

#[test]
fn test_response_entry_serialization() {
    let entry = ResponseEntry {
        repo: RepoRef::from("kubernetes/kubernetes"),
        stargazers: vec!["another".to_string()],
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "repo": "kubernetes/kubernetes", "stargazers": ["another"] })
    );

    let back: ResponseEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn test_stargazer_serialization() {
    let stargazer = Stargazer {
        id: "MDQ6VXNlcjE=".to_string(),
        login: "kevintongg".to_string(),
        starred_repos_count: 12,
    };

    let json = serde_json::to_string(&stargazer).unwrap();
    assert!(json.contains("\"starred_repos_count\":12"));
}

#[test]
fn test_page_next_cursor() {
    let page: Page<u32> = Page {
        items: vec![1, 2],
        end_cursor: Some("abc".to_string()),
        has_next_page: true,
    };
    assert_eq!(page.next_cursor(), Some("abc"));

    let last = Page::<u32> {
        items: vec![],
        end_cursor: Some("abc".to_string()),
        has_next_page: false,
    };
    assert_eq!(last.next_cursor(), None);
}

#[test]
fn test_neighbour_map_keeps_insertion_order() {
    let mut map = NeighbourMap::new();
    map.insert("b".to_string(), vec![RepoRef::from("x/y")]);
    map.insert("a".to_string(), vec![]);
    map.entry("c").push(RepoRef::from("p/q"));
    map.insert("b".to_string(), vec![RepoRef::from("z/z")]);

    assert_eq!(map.len(), 3);
    assert_eq!(map.logins().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(map.get("b").unwrap(), &[RepoRef::from("z/z")]);
    assert_eq!(map.get("c").unwrap(), &[RepoRef::from("p/q")]);
    assert!(map.contains("a"));
    assert!(!map.contains("d"));
}

#[test]
fn test_config_defaults() {
    let config = NeighbourConfig::default();

    assert_eq!(config.max_sublist_length, 50);
    assert_eq!(config.stargazers_per_page, 10);
    assert_eq!(config.max_stars_per_stargazer, 150);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let config = NeighbourConfig {
        max_sublist_length: 0,
        ..NeighbourConfig::default()
    };
    assert!(config.validate().is_err());

    let config = NeighbourConfig {
        stargazers_per_page: 101,
        ..NeighbourConfig::default()
    };
    assert!(config.validate().is_err());

    let config = NeighbourConfig {
        max_stars_per_stargazer: 0,
        ..NeighbourConfig::default()
    };
    assert!(config.validate().is_err());

    // Outside the recommended range is only a warning.
    let config = NeighbourConfig {
        max_sublist_length: 100,
        ..NeighbourConfig::default()
    };
    assert!(config.validate().is_ok());
}
