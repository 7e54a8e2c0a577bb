// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use proptest::prelude::*;

use dynagraph::{ErrorCode, Graph};

fn quiet() -> Graph {
    let mut graph = Graph::new();
    graph.svg_automatic_animation(false);
    graph.svg_automatic_layout(false);
    graph
}

/// Builds a graph from arbitrary node names and candidate link pairs,
/// skipping the pairs the structural invariants reject.
fn build(
    names: &[char],
    values: &[Option<u8>],
    pairs: &[(usize, usize, bool, Option<u8>)],
    fixed: &[bool],
) -> Graph {
    let mut graph = quiet();
    for (at, &name) in names.iter().enumerate() {
        let value = values[at % values.len()];
        if fixed[at % fixed.len()] {
            let x = (at as i16) * 50;
            graph.node_add_fixed(name, x, -x, value).unwrap();
        } else {
            graph.node_add(name, value).unwrap();
        }
    }
    let mut link_name = 'a';
    for &(i, j, bidirectional, value) in pairs {
        let from = names[i % names.len()];
        let to = names[j % names.len()];
        if graph
            .link_add(link_name, from, to, bidirectional, value)
            .is_ok()
        {
            link_name = char::from_u32(link_name as u32 + 1).unwrap_or('z');
        }
    }
    graph
}

proptest! {
    #[test]
    fn dyna_survives_round_trip(
        names in prop::collection::btree_set(prop::char::range('A', 'J'), 1..8),
        values in prop::collection::vec(prop::option::of(any::<u8>()), 1..8),
        pairs in prop::collection::vec(
            (0usize..8, 0usize..8, any::<bool>(), prop::option::of(any::<u8>())),
            0..12,
        ),
        fixed in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let names: Vec<char> = names.into_iter().collect();
        let graph = build(&names, &values, &pairs, &fixed);

        let text = graph.dyna_to();
        let mut copy = quiet();
        copy.dyna_from(&text).unwrap();

        prop_assert_eq!(copy.dyna_to(), text);
        prop_assert_eq!(copy.graph_order(), graph.graph_order());
        prop_assert_eq!(copy.graph_size(), graph.graph_size());
        prop_assert_eq!(copy.adjacency_list(), graph.adjacency_list());
    }

    #[test]
    fn json_matches_dyna(
        names in prop::collection::btree_set(prop::char::range('A', 'H'), 1..6),
        pairs in prop::collection::vec(
            (0usize..6, 0usize..6, any::<bool>(), prop::option::of(any::<u8>())),
            0..8,
        ),
    ) {
        let names: Vec<char> = names.into_iter().collect();
        let graph = build(&names, &[None], &pairs, &[true]);

        let json = graph.json_to().unwrap();
        let mut copy = quiet();
        copy.json_from(&json).unwrap();

        prop_assert_eq!(copy.dyna_to(), graph.dyna_to());
    }

    #[test]
    fn degree_sequence_is_consistent(
        names in prop::collection::btree_set(prop::char::range('A', 'H'), 2..6),
        pairs in prop::collection::vec(
            (0usize..6, 0usize..6, any::<bool>(), prop::option::of(any::<u8>())),
            0..8,
        ),
    ) {
        let names: Vec<char> = names.into_iter().collect();
        let graph = build(&names, &[None], &pairs, &[false]);

        let degrees = graph.nodes_degrees();
        let total: usize = degrees.values().sum();
        // every link contributes a degree at each endpoint
        prop_assert_eq!(total, graph.graph_size() * 2);

        let sequence = graph.graph_sequence();
        prop_assert_eq!(sequence.len(), graph.graph_order());
        prop_assert!(sequence.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn parse_errors_surface_from_dyna_from() {
    let mut graph = quiet();
    assert_eq!(
        graph.dyna_from("N A _ _\n").unwrap_err().code,
        ErrorCode::BadLine
    );
    assert_eq!(
        graph.dyna_from("L a A B true _\n").unwrap_err().code,
        ErrorCode::NodeDoesNotExist
    );
}

#[test]
fn fixed_positions_survive_the_trip() {
    let mut graph = quiet();
    graph.node_add_fixed('A', -120, 45, Some(7)).unwrap();
    graph.node_add('B', None).unwrap();
    graph.link_add('a', 'B', 'A', false, Some(1)).unwrap();

    let mut copy = quiet();
    copy.dyna_from(&graph.dyna_to()).unwrap();

    assert_eq!(copy.svg_node_position('A').unwrap(), (-120, 45));
    assert_eq!(copy.node_value('A').unwrap(), Some(7));
    assert_eq!(copy.link_value('a').unwrap(), Some(1));

    // free nodes come back free: a later layout may still move them
    let adjacency = copy.adjacency_list();
    assert_eq!(adjacency[&'B'][&'A'], ('a', Some(1)));
    assert!(!adjacency[&'A'].contains_key(&'B'));
}
