//! Tier 3: Session navigation through the typed explorer API

use crate::test_utils::*;
use lineup::{Command, Error, Explorer, Output};

fn explorer() -> (Fixture, Explorer) {
    let fx = Fixture::new();
    let explorer = Explorer::open(&fx.config()).unwrap();
    (fx, explorer)
}

#[test]
fn search_click_back() {
    let (_fx, mut ex) = explorer();

    let v = ex.search("QUEEN").unwrap().unwrap();
    assert_eq!(v.root, "Queen");
    assert_eq!(v.radius, 2);

    let v = ex.click("Roger Taylor").unwrap();
    assert_eq!(v.root, "Roger Taylor");
    assert!(v.subgraph.contains_node("The Cross"));

    let v = ex.click("The Cross").unwrap();
    assert_eq!(v.root, "The Cross");

    assert_eq!(ex.back().unwrap().unwrap().root, "Roger Taylor");
    assert_eq!(ex.back().unwrap().unwrap().root, "Queen");
    assert!(ex.back().unwrap().is_none());
}

#[test]
fn search_miss_is_not_an_error() {
    let (_fx, mut ex) = explorer();
    assert!(ex.search("Led Zeppelin").unwrap().is_none());
    assert!(ex.show().unwrap().is_none());
}

#[test]
fn filter_and_radius_persist_across_navigation() {
    let (_fx, mut ex) = explorer();
    ex.set_originals_only(true).unwrap();
    ex.set_radius(1).unwrap();

    let v = ex.search("queen").unwrap().unwrap();
    assert!(v.originals_only);
    assert_eq!(v.subgraph.node_count(), 4);

    let v = ex.click("Brian May").unwrap();
    assert_eq!(v.radius, 1);
    assert_eq!(sorted(v.subgraph.labels()), vec!["Brian May", "Queen", "Smile"]);
}

#[test]
fn radius_limit_comes_from_config() {
    let fx = Fixture::new();
    let mut config = fx.config();
    config.query.max_radius = 1;
    config.query.default_radius = 1;
    let mut ex = Explorer::open(&config).unwrap();

    let err = ex.set_radius(2).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn raw_commands_and_stats() {
    let (_fx, mut ex) = explorer();
    ex.execute(Command::Search {
        text: "smile".into(),
    })
    .unwrap();
    let out = ex.execute(Command::Show).unwrap();
    assert!(matches!(out, Output::View(ref v) if v.root == "Smile"));

    let stats = ex.stats().unwrap();
    assert_eq!(stats.nodes, 10);
    assert_eq!(stats.edges, 10);
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.cache_hits, 1);
}

#[test]
fn inspect_resolves_and_reports() {
    let (_fx, mut ex) = explorer();
    let info = ex.inspect("roger taylor").unwrap();
    assert_eq!(info.label, "Roger Taylor");
    assert!(info.original_member);
    assert_eq!(info.degree(), 3);

    assert!(matches!(
        ex.inspect("nobody"),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn open_fails_without_dataset() {
    let err = Explorer::open(&lineup::ExplorerConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}
