//! Mapping sweep integration tests.

mod common;

use common::{enclosed_cell, reference_maze, sig, square_ring};
use vastu_topo::harness::{NoopEffector, RecordingEffector};
use vastu_topo::{
    Direction, Environment, Explorer, ExplorerConfig, GridPos, Side, TopoError,
};

#[test]
fn reference_maze_graph_shape() {
    common::init_logging();
    let maze = reference_maze();
    let mut effector = NoopEffector;
    let result = Explorer::with_defaults()
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap();

    assert!(result.closed_loop);
    assert_eq!(result.end_position, GridPos::new(0, 0));
    assert_eq!(result.graph.node_count(), 6);
    assert_eq!(result.graph.edge_count(), 6);

    // Stop cells and their signatures, in discovery order.
    let stops: Vec<(GridPos, _)> = result
        .graph
        .nodes()
        .iter()
        .map(|n| (n.position, n.signature))
        .collect();
    assert_eq!(
        stops,
        vec![
            (GridPos::new(0, 0), sig([1, 0, 0, 0])),
            (GridPos::new(0, 3), sig([0, 1, 1, 0])),
            (GridPos::new(3, 3), sig([0, 0, 1, 1])),
            (GridPos::new(3, 0), sig([1, 0, 0, 0])),
            (GridPos::new(3, 2), sig([1, 0, 1, 1])),
            (GridPos::new(0, 2), sig([1, 1, 1, 0])),
        ]
    );
}

#[test]
fn full_run_visits_every_reachable_cell() {
    // The sweep's trajectory (not just its stops) covers the whole ring.
    let maze = reference_maze();
    let mut effector = RecordingEffector::new();
    Explorer::with_defaults()
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap();

    let visited: std::collections::HashSet<GridPos> =
        effector.trajectory().into_iter().collect();
    for cell in maze.free_cells() {
        assert!(visited.contains(&cell), "cell {} never traversed", cell);
    }
}

#[test]
fn recorded_signatures_match_brute_force_census() {
    let maze = reference_maze();
    let mut effector = NoopEffector;
    let result = Explorer::with_defaults()
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap();

    let census: std::collections::HashMap<_, _> =
        maze.signature_census().into_iter().collect();
    for node in result.graph.nodes() {
        // Every recorded signature is exactly what independent sensing at
        // the recorded cell yields.
        assert_eq!(node.signature, census[&node.position]);
    }
    // And every recorded signature occurs somewhere in the full census.
    let census_sigs: std::collections::HashSet<_> = census.values().copied().collect();
    for node in result.graph.nodes() {
        assert!(census_sigs.contains(&node.signature));
    }
}

#[test]
fn mapping_is_deterministic() {
    let maze = reference_maze();
    let run = |config: ExplorerConfig| {
        let mut effector = NoopEffector;
        Explorer::new(config)
            .map(&maze, &mut effector, GridPos::new(0, 0))
            .unwrap()
    };
    for side in [Side::Clockwise, Side::CounterClockwise] {
        let config = ExplorerConfig::new().with_side(side);
        let a = run(config.clone());
        let b = run(config);
        assert_eq!(a.graph.nodes(), b.graph.nodes());
        assert_eq!(a.graph.edges(), b.graph.edges());
        assert_eq!(a.steps, b.steps);
    }
}

#[test]
fn counter_clockwise_sweep_closes_too() {
    let maze = reference_maze();
    let mut effector = NoopEffector;
    let explorer = Explorer::new(ExplorerConfig::new().with_side(Side::CounterClockwise));
    let result = explorer.map(&maze, &mut effector, GridPos::new(0, 0)).unwrap();
    assert!(result.closed_loop);
    assert_eq!(result.graph.node_count(), 6);
    for node in result.graph.nodes() {
        assert_eq!(node.signature, maze.sense_openings(node.position));
    }
}

#[test]
fn square_ring_stops_at_corners() {
    let maze = square_ring();
    let mut effector = NoopEffector;
    let result = Explorer::with_defaults()
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap();

    assert!(result.closed_loop);
    let positions: Vec<GridPos> = result.graph.nodes().iter().map(|n| n.position).collect();
    assert_eq!(
        positions,
        vec![
            GridPos::new(0, 0),
            GridPos::new(0, 4),
            GridPos::new(4, 4),
            GridPos::new(4, 0),
        ]
    );
    // All four corners carry distinct signatures.
    let signatures: std::collections::HashSet<_> =
        result.graph.nodes().iter().map(|n| n.signature).collect();
    assert_eq!(signatures.len(), 4);
}

#[test]
fn enclosed_start_is_a_one_node_graph() {
    let maze = enclosed_cell();
    let mut effector = NoopEffector;
    let result = Explorer::with_defaults()
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap();
    assert!(!result.closed_loop);
    assert_eq!(result.graph.node_count(), 1);
    assert_eq!(result.graph.nodes()[0].signature, sig([0, 0, 0, 0]));
}

#[test]
fn step_budget_is_a_typed_failure() {
    let maze = reference_maze();
    let mut effector = NoopEffector;
    let explorer = Explorer::new(ExplorerConfig::new().with_max_steps(1));
    let err = explorer
        .map(&maze, &mut effector, GridPos::new(0, 0))
        .unwrap_err();
    assert_eq!(err, TopoError::StepBudgetExhausted { limit: 1 });
}

#[test]
fn stepping_into_a_wall_is_blocked() {
    let maze = reference_maze();
    let err = maze.step(GridPos::new(0, 0), Direction::Left).unwrap_err();
    assert!(matches!(err, TopoError::Blocked { .. }));
}
