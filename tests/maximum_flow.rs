use flow_network::graph::{EdgeAttributes, EdgeOrigin, Graph};
use flow_network::maximum_flow::{ActiveNodeSelection, FordFulkerson, MaximumFlowSolver, PushRelabel};
use flow_network::{FlowError, Status};
use rstest::{fixture, rstest};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph<i64> {
    let mut graph = Graph::new();
    graph.add_nodes(nodes).unwrap();
    for &(u, v, capacity) in edges {
        graph.add_edge(u, v, EdgeAttributes::with_capacity(capacity)).unwrap();
    }
    graph
}

#[fixture]
fn network() -> Graph<i64> {
    init_logger();
    build(
        &["S", "A", "B", "C", "D", "E", "F", "T"],
        &[
            ("S", "A", 38),
            ("S", "B", 1),
            ("S", "F", 2),
            ("A", "B", 8),
            ("A", "C", 10),
            ("A", "D", 13),
            ("B", "C", 26),
            ("C", "E", 8),
            ("C", "F", 24),
            ("C", "T", 1),
            ("D", "B", 2),
            ("D", "E", 1),
            ("D", "T", 7),
            ("E", "T", 7),
            ("F", "T", 27),
        ],
    )
}

fn solvers() -> Vec<Box<dyn MaximumFlowSolver<i64>>> {
    vec![Box::new(FordFulkerson::default()), Box::new(PushRelabel::new(ActiveNodeSelection::Fifo)), Box::new(PushRelabel::new(ActiveNodeSelection::NodeOrder))]
}

fn assert_valid_max_flow(graph: &Graph<i64>, capacities: &[i64], source: &str, sink: &str) {
    let (s, t) = (graph.lookup(source).unwrap(), graph.lookup(sink).unwrap());
    for (id, edge) in graph.edges() {
        assert_eq!(edge.origin(), EdgeOrigin::Original);
        assert_eq!(edge.capacity, capacities[id.index()], "capacity of {id} was not restored");
        assert!(0 <= edge.load && edge.load <= edge.capacity, "load {} out of [0, {}] on {id}", edge.load, edge.capacity);
    }
    for (u, node) in graph.nodes() {
        if u == s || u == t {
            continue;
        }
        let incoming: i64 = node.incoming_edges().map(|e| graph[e].load).sum();
        let outgoing: i64 = node.outgoing_edges().map(|e| graph[e].load).sum();
        assert_eq!(incoming, outgoing, "flow is not conserved at {}", node.name());
    }
}

#[rstest]
#[case::ford_fulkerson(Box::new(FordFulkerson::default()))]
#[case::push_relabel_fifo(Box::new(PushRelabel::new(ActiveNodeSelection::Fifo)))]
#[case::push_relabel_node_order(Box::new(PushRelabel::new(ActiveNodeSelection::NodeOrder)))]
fn sample_network(mut network: Graph<i64>, #[case] mut solver: Box<dyn MaximumFlowSolver<i64>>) {
    let capacities: Vec<i64> = network.edges().map(|(_, e)| e.capacity).collect();
    let (s, t) = (network.lookup("S").unwrap(), network.lookup("T").unwrap());
    let num_edges = network.num_edges();

    assert_eq!(solver.run(&mut network, s, t), Ok(Status::Optimal));

    assert_eq!(network.maximum_flow(s), 31);
    assert_eq!(network.num_edges(), num_edges);
    assert_valid_max_flow(&network, &capacities, "S", "T");
}

#[rstest]
#[case::single_edge(&["s", "t"], &[("s", "t", 5)], 5)]
#[case::diamond(&["s", "a", "b", "t"], &[("s", "a", 3), ("s", "b", 2), ("a", "b", 1), ("a", "t", 2), ("b", "t", 3)], 5)]
#[case::bottleneck(&["s", "a", "b", "t"], &[("s", "a", 10), ("a", "b", 1), ("b", "t", 10)], 1)]
#[case::unreachable(&["s", "a", "t"], &[("s", "a", 4), ("t", "a", 4)], 0)]
#[case::antiparallel(&["s", "a", "b", "t"], &[("s", "a", 4), ("a", "b", 3), ("b", "a", 2), ("b", "t", 5), ("s", "b", 1)], 4)]
#[case::back_edge_needed(&["s", "a", "b", "t"], &[("s", "a", 1), ("s", "b", 1), ("a", "b", 1), ("a", "t", 1), ("b", "t", 1)], 2)]
#[case::parallel(&["s", "a", "t"], &[("s", "a", 2), ("s", "a", 3), ("a", "t", 4), ("s", "t", 1)], 5)]
#[case::parallel_and_antiparallel(&["s", "a", "b", "t"], &[("s", "a", 3), ("a", "b", 2), ("a", "b", 2), ("b", "a", 1), ("b", "t", 5)], 3)]
#[case::dead_end(&["s", "a", "b", "c", "t"], &[("s", "a", 5), ("a", "b", 5), ("s", "c", 2), ("c", "t", 2)], 2)]
fn all_solvers_agree(#[case] nodes: &[&str], #[case] edges: &[(&str, &str, i64)], #[case] expected: i64) {
    init_logger();
    for mut solver in solvers() {
        let mut graph = build(nodes, edges);
        let capacities: Vec<i64> = graph.edges().map(|(_, e)| e.capacity).collect();
        let (s, t) = (graph.lookup("s").unwrap(), graph.lookup("t").unwrap());

        assert_eq!(solver.run(&mut graph, s, t), Ok(Status::Optimal));
        assert_eq!(graph.maximum_flow(s), expected);
        assert_valid_max_flow(&graph, &capacities, "s", "t");
    }
}

#[rstest]
#[case::ford_fulkerson(Box::new(FordFulkerson::default()))]
#[case::push_relabel_fifo(Box::new(PushRelabel::new(ActiveNodeSelection::Fifo)))]
#[case::push_relabel_node_order(Box::new(PushRelabel::new(ActiveNodeSelection::NodeOrder)))]
fn antiparallel_pair_carries_net_flow_once(#[case] mut solver: Box<dyn MaximumFlowSolver<i64>>) {
    let mut graph = build(&["s", "a", "b", "t"], &[("s", "a", 4), ("a", "b", 3), ("b", "a", 2), ("b", "t", 5)]);
    let (s, t) = (graph.lookup("s").unwrap(), graph.lookup("t").unwrap());
    solver.run(&mut graph, s, t).unwrap();

    let ab = graph.edge_between("a", "b").unwrap().unwrap();
    let ba = graph.edge_between("b", "a").unwrap().unwrap();
    assert_eq!(graph[ab].load, 3);
    assert_eq!(graph[ba].load, 0);
}

#[rstest]
fn parallel_edges_keep_separate_loads() {
    let mut graph = build(&["s", "t"], &[("s", "t", 2), ("s", "t", 3)]);
    FordFulkerson::default().solve(&mut graph, "s", "t").unwrap();

    let loads: Vec<i64> = graph.edges().map(|(_, e)| e.load).collect();
    assert_eq!(loads, vec![2, 3]);
    assert_eq!(graph.num_edges(), 2);
}

#[rstest]
fn solving_twice_gives_the_same_loads(mut network: Graph<i64>) {
    let mut solver = PushRelabel::default();
    solver.solve(&mut network, "S", "T").unwrap();
    let first: Vec<i64> = network.edges().map(|(_, e)| e.load).collect();

    solver.solve(&mut network, "S", "T").unwrap();
    let second: Vec<i64> = network.edges().map(|(_, e)| e.load).collect();
    assert_eq!(first, second);
    assert!(solver.pushes() > 0);
}

#[rstest]
fn ford_fulkerson_counts_augmentations(mut network: Graph<i64>) {
    let mut solver = FordFulkerson::default();
    solver.solve(&mut network, "S", "T").unwrap();
    assert!(solver.augmentations() > 0);
}

#[rstest]
fn source_equal_to_sink_is_bad_input(mut network: Graph<i64>) {
    assert_eq!(FordFulkerson::default().solve(&mut network, "S", "S"), Ok(Status::BadInput));
    assert_eq!(PushRelabel::default().solve(&mut network, "A", "A"), Ok(Status::BadInput));
}

#[rstest]
fn unknown_terminal(mut network: Graph<i64>) {
    assert_eq!(FordFulkerson::default().solve(&mut network, "S", "X"), Err(FlowError::UnknownNode("X".to_string())));
    assert_eq!(PushRelabel::default().solve(&mut network, "Y", "T"), Err(FlowError::UnknownNode("Y".to_string())));
}

#[rstest]
fn undirected_edges_are_rejected(mut network: Graph<i64>) {
    network.add_undirected_edge("A", "E", EdgeAttributes::with_capacity(4)).unwrap();
    let num_edges = network.num_edges();

    assert!(matches!(FordFulkerson::default().solve(&mut network, "S", "T"), Err(FlowError::InvalidGraph(_))));
    assert!(matches!(PushRelabel::default().solve(&mut network, "S", "T"), Err(FlowError::InvalidGraph(_))));
    assert_eq!(network.num_edges(), num_edges);
}
