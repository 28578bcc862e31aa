mod common;

use flowroute_lib::{
    build_network, compare_routes, optimal_path, reconcile, sample_edges, sample_network,
    shortest_path, EdgeSpec, Error, FlowOptions, FlowOrientation, ReconciliationStatus,
    SAMPLE_DESTINATION, SAMPLE_ORIGIN,
};

use common::brute_force_optimum;

fn bidirectional() -> FlowOptions {
    FlowOptions {
        orientation: FlowOrientation::Bidirectional,
        ..FlowOptions::default()
    }
}

#[test]
fn shortest_path_matches_exhaustive_enumeration() {
    let network = sample_network().expect("sample is valid");
    let (best, optima) = brute_force_optimum(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION, false)
        .expect("sample is connected");

    let route = shortest_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).expect("route exists");

    assert_eq!(route.cost, best);
    assert!(optima.contains(&route.nodes), "{route} is not an optimum");
    assert_eq!(best, 160.0);
    assert_eq!(
        route.nodes,
        vec!["Origin", "A", "B", "E", "D", "Destination"],
        "the undirected optimum is unique on this graph"
    );
}

#[test]
fn declared_flow_matches_directed_enumeration() {
    let network = sample_network().expect("sample is valid");
    let (best, optima) = brute_force_optimum(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION, true)
        .expect("declared orientations reach the destination");

    let route = optimal_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).expect("feasible");

    assert_eq!(route.cost, best);
    assert!(optima.contains(&route.nodes), "{route} is not an optimum");
    assert_eq!(route.nodes, vec!["Origin", "A", "B", "D", "Destination"]);
    assert_eq!(route.cost, 165.0);
}

#[test]
fn reconciler_flags_orientation_gap_on_sample() {
    let network = sample_network().expect("sample is valid");
    let comparison = compare_routes(
        &network,
        SAMPLE_ORIGIN,
        SAMPLE_DESTINATION,
        FlowOptions::default(),
    )
    .expect("both methods succeed");

    assert!(!comparison.reconciliation.costs_match);
    assert_eq!(
        comparison.reconciliation.status(),
        ReconciliationStatus::Inconsistent
    );
    assert_eq!(comparison.reconciliation.cost_delta, 5.0);
    assert!(matches!(
        comparison.ensure_consistent(),
        Err(Error::CostMismatch { .. })
    ));
}

#[test]
fn bidirectional_flow_agrees_with_search_on_sample() {
    let network = sample_network().expect("sample is valid");
    let comparison = compare_routes(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION, bidirectional())
        .expect("both methods succeed");

    assert!(comparison.reconciliation.costs_match);
    assert_eq!(comparison.optimal.cost, 160.0);
    assert_eq!(comparison.shortest.nodes, comparison.optimal.nodes);
    assert!(comparison.ensure_consistent().is_ok());
}

#[test]
fn removing_edges_into_destination_breaks_both_methods() {
    let network = sample_network()
        .expect("sample is valid")
        .without_edges_into(SAMPLE_DESTINATION);

    let err = shortest_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }), "got {err:?}");

    let err = optimal_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap_err();
    assert!(matches!(err, Error::Infeasible { .. }), "got {err:?}");
}

#[test]
fn removing_edges_into_destination_covers_edges_declared_out_of_it() {
    let edges = sample_edges().into_iter().map(|edge| {
        if edge.from == "D" && edge.to == SAMPLE_DESTINATION {
            EdgeSpec::new(SAMPLE_DESTINATION, "D", edge.weight)
        } else {
            edge
        }
    });
    let network = build_network(edges)
        .expect("reversed sample is valid")
        .without_edges_into(SAMPLE_DESTINATION);

    let err = shortest_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }), "got {err:?}");

    let err = optimal_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap_err();
    assert!(matches!(err, Error::Infeasible { .. }), "got {err:?}");
}

#[test]
fn destination_with_only_outgoing_arcs_is_infeasible_for_flow() {
    let network = flowroute_lib::build_network([
        ("Origin", "A", 1.0),
        ("Destination", "A", 1.0),
    ])
    .expect("valid");

    let route = shortest_path(&network, "Origin", "Destination").expect("undirected path exists");
    assert_eq!(route.cost, 2.0);

    let err = optimal_path(&network, "Origin", "Destination").unwrap_err();
    assert!(matches!(err, Error::Infeasible { .. }), "got {err:?}");
}

#[test]
fn shortest_path_is_deterministic() {
    let network = sample_network().expect("sample is valid");
    let first = shortest_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap();
    let second = shortest_path(&network, SAMPLE_ORIGIN, SAMPLE_DESTINATION).unwrap();
    assert_eq!(first, second);
    assert!(reconcile(&first, &second).paths_match);
}
