use mapgraph_lib::{
    plan_route, plan_route_between, Error, Graph, GraphBuilder, Position, RouteAlgorithm,
    RouteRequest,
};

fn triangle() -> Graph {
    let mut builder = GraphBuilder::new();
    builder.add_node(0, "A", Position { x: 0.0, y: 0.0 });
    builder.add_node(1, "B", Position { x: 3.0, y: 0.0 });
    builder.add_node(2, "C", Position { x: 3.0, y: 4.0 });
    builder.add_edge(0, 1, 3.0).unwrap();
    builder.add_edge(1, 2, 4.0).unwrap();
    builder.add_edge(0, 2, 10.0).unwrap();
    builder.build()
}

#[test]
fn dijkstra_plan_from_name_tokens() {
    let graph = triangle();
    let request = RouteRequest::dijkstra("A", "C");
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(plan.steps, vec![0, 1, 2]);
    assert_eq!(plan.edges, vec![(0, 1), (1, 2)]);
    assert_eq!(plan.total_weight, 7.0);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn numeric_tokens_resolve_like_indices() {
    let graph = triangle();
    let request = RouteRequest::astar("0", "2");
    let plan = plan_route(&graph, &request).expect("route exists");
    assert_eq!(plan.start, 0);
    assert_eq!(plan.goal, 2);
    assert_eq!(plan.total_weight, 7.0);
}

#[test]
fn plan_between_preresolved_indices() {
    let graph = triangle();
    let plan = plan_route_between(&graph, RouteAlgorithm::BellmanFord, 0, 2)
        .expect("route exists");
    assert_eq!(plan.steps, vec![0, 1, 2]);
}

#[test]
fn first_path_plan_reports_its_algorithm() {
    let graph = triangle();
    let request = RouteRequest::first_path("A", "C");
    let plan = plan_route(&graph, &request).expect("route exists");
    assert_eq!(plan.algorithm, RouteAlgorithm::FirstPath);
    assert!(!plan.steps.is_empty());
}

#[test]
fn unreachable_goal_maps_to_no_path_found() {
    let graph = triangle();
    let request = RouteRequest::dijkstra("C", "A");
    let error = plan_route(&graph, &request).expect_err("no reverse edges");
    match error {
        Error::NoPathFound { start, goal } => {
            assert_eq!(start, "C");
            assert_eq!(goal, "A");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn list_token_is_rejected_at_plan_level() {
    let graph = triangle();
    let request = RouteRequest::dijkstra("list", "C");
    let error = plan_route(&graph, &request).expect_err("list token");
    assert!(matches!(error, Error::ListRequested));
}

#[test]
fn unknown_token_propagates_resolution_error() {
    let graph = triangle();
    let request = RouteRequest::dijkstra("A", "Nowhere");
    let error = plan_route(&graph, &request).expect_err("unknown goal");
    assert!(matches!(error, Error::Resolution { .. }));
}

#[test]
fn degenerate_plan_is_a_single_step() {
    let graph = triangle();
    for algorithm in [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::AStar,
        RouteAlgorithm::BellmanFord,
        RouteAlgorithm::FirstPath,
    ] {
        let plan = plan_route_between(&graph, algorithm, 1, 1).expect("degenerate route");
        assert_eq!(plan.steps, vec![1]);
        assert!(plan.edges.is_empty());
        assert_eq!(plan.total_weight, 0.0);
    }
}

#[test]
fn negative_cycle_surfaces_from_plan() {
    let mut builder = GraphBuilder::new();
    builder.add_node(0, "A", Position { x: 0.0, y: 0.0 });
    builder.add_node(1, "B", Position { x: 3.0, y: 0.0 });
    builder.add_node(2, "C", Position { x: 3.0, y: 4.0 });
    builder.add_edge(0, 1, 3.0).unwrap();
    builder.add_edge(1, 2, 4.0).unwrap();
    builder.add_edge(0, 2, 10.0).unwrap();
    builder.add_edge(2, 0, -20.0).unwrap();
    let graph = builder.build();

    let request = RouteRequest::bellman_ford("A", "C");
    let error = plan_route(&graph, &request).expect_err("negative cycle");
    assert!(matches!(error, Error::NegativeCycle { .. }));
}
