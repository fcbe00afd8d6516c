//! Tier 1: Dataset loading and graph construction

use crate::test_utils::*;
use lineup::{
    Dataset, DatasetSource, DuplicatePolicy, GraphBuilder, LineupError, NodeRole, NodeType,
};

#[test]
fn csv_fixture_builds_expected_graph() {
    let fx = Fixture::new();
    let gs = Dataset::load(&fx.source())
        .unwrap()
        .build(&GraphBuilder::new())
        .unwrap();

    // Nine declared plus Spike Edney, who only appears in a connection
    assert_eq!(gs.node_count(), 10);
    assert_eq!(gs.edge_count(), 10);
    assert_eq!(
        gs.node_attributes("Spike Edney").unwrap().node_type,
        NodeType::Unknown
    );
}

#[test]
fn original_members_are_promoted() {
    let fx = Fixture::new();
    let gs = Dataset::load(&fx.source())
        .unwrap()
        .build(&GraphBuilder::new())
        .unwrap();

    for name in ["Freddie Mercury", "Brian May", "Roger Taylor", "Tim Staffell"] {
        let attrs = gs.node_attributes(name).unwrap();
        assert!(attrs.original_member, "{} should be promoted", name);
        assert_eq!(attrs.role(), NodeRole::OriginalMember);
    }
    assert!(!gs.node_attributes("John Deacon").unwrap().original_member);
    assert!(!gs.node_attributes("Spike Edney").unwrap().original_member);
    // Bands are never promoted, even on an original connection
    assert!(!gs.node_attributes("Queen").unwrap().original_member);
}

#[test]
fn json_dataset_loads() {
    let fx = Fixture::new();
    let path = fx.dir.path().join("queen.json");
    std::fs::write(
        &path,
        r#"{
            "elements": [
                {"Label": "Queen", "Type": "Band"},
                {"Label": "Freddie Mercury", "Type": "Musician"}
            ],
            "connections": [
                {"From": "Freddie Mercury", "To": "Queen", "Original Member": "YES"}
            ]
        }"#,
    )
    .unwrap();

    let gs = Dataset::load(&DatasetSource::Json(path))
        .unwrap()
        .build(&GraphBuilder::new())
        .unwrap();
    assert_eq!(gs.node_count(), 2);
    assert!(gs.node_attributes("Freddie Mercury").unwrap().original_member);
}

#[test]
fn missing_required_cell_is_reported_with_row() {
    let fx = Fixture::with("Label,Type\nQueen,Band\n", "From,To\nFreddie,Queen\n,Queen\n");
    let err = Dataset::load(&fx.source())
        .unwrap()
        .build(&GraphBuilder::new())
        .unwrap_err();
    match err {
        LineupError::InvalidRecord { row, field, .. } => {
            assert_eq!(row, 1);
            assert_eq!(field, "From");
        }
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn duplicate_labels_follow_policy() {
    let fx = Fixture::with("Label,Type\nX,Band\nX,Musician\n", "From,To\n");
    let ds = Dataset::load(&fx.source()).unwrap();

    let gs = ds.build(&GraphBuilder::new()).unwrap();
    assert_eq!(gs.node_count(), 1);
    assert!(gs.node_attributes("X").unwrap().node_type.is_musician());

    let err = ds
        .build(&GraphBuilder::new().duplicate_policy(DuplicatePolicy::Reject))
        .unwrap_err();
    assert!(matches!(err, LineupError::DuplicateRecord { label } if label == "X"));
}

#[test]
fn missing_file_is_io_error() {
    let fx = Fixture::new();
    let err = Dataset::load(&DatasetSource::Csv {
        entities: fx.dir.path().join("nope.csv"),
        connections: fx.connections.clone(),
    })
    .unwrap_err();
    assert!(matches!(err, LineupError::Io { .. }));
}
