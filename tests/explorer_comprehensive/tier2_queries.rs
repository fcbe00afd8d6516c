//! Tier 2: Neighborhood queries on the Queen family tree

use crate::test_utils::*;
use lineup::{Dataset, GraphBuilder, GraphStore, LineupError, NeighborhoodQuery, RootRetention};

fn queen() -> GraphStore {
    let fx = Fixture::new();
    Dataset::load(&fx.source())
        .unwrap()
        .build(&GraphBuilder::new())
        .unwrap()
}

#[test]
fn radius_grows_the_neighborhood() {
    let gs = queen();
    let counts: Vec<usize> = (0..=4)
        .map(|r| gs.query("Queen", r, false).unwrap().node_count())
        .collect();
    assert_eq!(counts, vec![1, 5, 7, 9, 10]);
}

#[test]
fn radius_one_is_the_band_and_its_members() {
    let gs = queen();
    let sg = gs.query("Queen", 1, false).unwrap();
    assert_eq!(
        sorted(sg.labels()),
        vec![
            "Brian May",
            "Freddie Mercury",
            "John Deacon",
            "Queen",
            "Roger Taylor"
        ]
    );
    // Star around Queen: no member-to-member edges
    assert_eq!(sg.edge_count(), 4);
}

#[test]
fn originals_only_drops_non_original_members() {
    let gs = queen();
    let sg = gs.query("Queen", 2, true).unwrap();
    assert_eq!(
        sorted(sg.labels()),
        vec![
            "Brian May",
            "Freddie Mercury",
            "Queen",
            "Roger Taylor",
            "Smile",
            "The Cross"
        ]
    );
    assert_eq!(sg.edge_count(), 6);
    assert!(sg.edges.iter().all(|e| !e.touches("John Deacon")));
}

#[test]
fn distances_come_from_shortest_paths() {
    let gs = queen();
    let sg = gs.query("Tim Staffell", 3, false).unwrap();
    assert_eq!(sg.node("Tim Staffell").unwrap().distance, Some(0));
    assert_eq!(sg.node("Smile").unwrap().distance, Some(1));
    assert_eq!(sg.node("Brian May").unwrap().distance, Some(2));
    assert_eq!(sg.node("Queen").unwrap().distance, Some(3));
    assert!(!sg.contains_node("Freddie Mercury"));
}

#[test]
fn unknown_root_retention() {
    let gs = queen();
    let kept = gs.query("Spike Edney", 1, true).unwrap();
    assert!(kept.contains_node("Spike Edney"));
    assert!(kept.contains_node("The Cross"));

    let dropped = NeighborhoodQuery::new(1)
        .originals_only(true)
        .root_retention(RootRetention::Filtered)
        .run(&gs, "Spike Edney")
        .unwrap();
    assert_eq!(dropped.labels(), vec!["The Cross"]);
}

#[test]
fn text_queries_are_case_insensitive_but_roots_are_exact() {
    let gs = queen();
    let sg = NeighborhoodQuery::new(1).run_text(&gs, "the cross").unwrap();
    assert_eq!(sg.nodes[0].label, "The Cross");
    assert!(matches!(
        gs.query("the cross", 1, false),
        Err(LineupError::NodeNotFound { .. })
    ));
}

#[test]
fn json_export_of_a_view() {
    let gs = queen();
    let sg = gs.query("Smile", 1, true).unwrap();
    let json = serde_json::to_value(&sg).unwrap();
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0]["label"], "Smile");
    assert_eq!(nodes[0]["role"], "band");
    assert_eq!(nodes[0]["distance"], 0);
}
