use std::io::Write;

use mapgraph_lib::{load_graph, Error};
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

const TRIANGLE: &str = r#"{
  "nodes": [
    { "index": 0, "name": "A", "x": 0.0, "y": 0.0 },
    { "index": 1, "name": "B", "x": 3.0, "y": 0.0 },
    { "index": 2, "name": "C", "x": 3.0, "y": 4.0 }
  ],
  "edges": [
    { "source": 0, "target": 1, "weight": 3.0 },
    { "source": 1, "target": 2, "weight": 4.0 },
    { "source": 0, "target": 2, "weight": 10.0 }
  ]
}"#;

#[test]
fn loads_nodes_and_edges() {
    let file = write_fixture(TRIANGLE);
    let graph = load_graph(file.path()).expect("fixture loads");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.node_name(1), Some("B"));
    assert_eq!(graph.edge_weight(0, 2), Some(10.0));
}

#[test]
fn edges_section_is_optional() {
    let file = write_fixture(r#"{ "nodes": [ { "index": 0, "name": "Solo", "x": 1.0, "y": 2.0 } ] }"#);
    let graph = load_graph(file.path()).expect("fixture loads");
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn restated_node_keeps_last_record() {
    let file = write_fixture(
        r#"{
  "nodes": [
    { "index": 0, "name": "First", "x": 0.0, "y": 0.0 },
    { "index": 0, "name": "Second", "x": 5.0, "y": 5.0 }
  ]
}"#,
    );
    let graph = load_graph(file.path()).expect("fixture loads");
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.node_name(0), Some("Second"));
}

#[test]
fn edge_to_undeclared_node_fails_the_load() {
    let file = write_fixture(
        r#"{
  "nodes": [ { "index": 0, "name": "A", "x": 0.0, "y": 0.0 } ],
  "edges": [ { "source": 0, "target": 9, "weight": 1.0 } ]
}"#,
    );
    let error = load_graph(file.path()).expect_err("dangling edge");
    assert!(matches!(error, Error::UnknownNode { index: 9 }));
}

#[test]
fn malformed_json_is_a_typed_error() {
    let file = write_fixture("{ not json");
    let error = load_graph(file.path()).expect_err("parse failure");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let error = load_graph(std::path::Path::new("/nonexistent/map.json")).expect_err("no file");
    assert!(matches!(error, Error::Io(_)));
}
