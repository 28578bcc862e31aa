use std::fs;

use flowroute_lib::{load_network, optimal_path, shortest_path, Error, NetworkDefinition};
use tempfile::tempdir;

#[test]
fn loads_json_definition() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("network.json");
    fs::write(
        &path,
        r#"{
            "edges": [
                { "from": "S", "to": "A", "weight": 2 },
                { "from": "A", "to": "T", "weight": 2.5 },
                { "from": "S", "to": "T", "weight": 9 }
            ]
        }"#,
    )
    .expect("write fixture");

    let network = load_network(&path).expect("valid definition");
    assert_eq!(network.node_names(), ["S", "A", "T"]);

    let route = shortest_path(&network, "S", "T").expect("connected");
    assert_eq!(route.cost, 4.5);
    let route = optimal_path(&network, "S", "T").expect("feasible");
    assert_eq!(route.cost, 4.5);
}

#[test]
fn definition_round_trips_through_edge_specs() {
    let network = flowroute_lib::sample_network().expect("sample is valid");
    let definition = NetworkDefinition {
        edges: network.edge_specs(),
    };
    let json = serde_json::to_string(&definition).expect("serialise");

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("sample.json");
    fs::write(&path, json).expect("write");

    let reloaded = load_network(&path).expect("reload");
    assert_eq!(reloaded.edge_specs(), network.edge_specs());
}

#[test]
fn malformed_json_is_a_format_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "edges": [ { "from": "S" } ] }"#).expect("write");

    assert!(matches!(load_network(&path), Err(Error::NetworkFormat(_))));
}

#[test]
fn invalid_edge_in_file_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("negative.json");
    fs::write(
        &path,
        r#"{ "edges": [ { "from": "S", "to": "T", "weight": -1 } ] }"#,
    )
    .expect("write");

    assert!(matches!(load_network(&path), Err(Error::InvalidEdge { .. })));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    assert!(matches!(
        load_network(&dir.path().join("absent.json")),
        Err(Error::Io(_))
    ));
}
