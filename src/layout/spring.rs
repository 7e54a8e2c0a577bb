// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::TAU;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::layout::config::LayoutConfig;
use crate::layout::{LayoutNode, Position};

const EPSILON: f64 = 0.01;

pub(crate) fn relax(
    nodes: &mut BTreeMap<char, LayoutNode>,
    targets: &BTreeSet<char>,
    adjacency: &BTreeMap<char, BTreeSet<char>>,
    radius: f64,
    config: &LayoutConfig,
) {
    let movable: Vec<char> = targets
        .iter()
        .copied()
        .filter(|name| nodes.get(name).is_some_and(|n| !n.fixed))
        .collect();
    if movable.is_empty() {
        return;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    seed_positions(nodes, &movable, radius, &mut rng);

    let max_step = 2.0 * radius;
    for _ in 0..config.max_iterations {
        let mut max_displacement: f64 = 0.0;
        for name in &movable {
            let force = net_force(nodes, *name, adjacency, radius, config, &mut rng);
            let magnitude = force.norm();
            let step = if magnitude > max_step {
                Position::new(force.x / magnitude * max_step, force.y / magnitude * max_step)
            } else {
                force
            };
            let node = nodes.get_mut(name).expect("movable node present");
            node.center = node.center + step;
            max_displacement = max_displacement.max(step.norm());
        }
        separate_overlaps(nodes, &movable, radius);
        if max_displacement < config.threshold {
            break;
        }
    }
}

/// Scatter the movable nodes on a ring around the centroid of the whole
/// graph, wide enough that all nodes fit on its circumference.
fn seed_positions(
    nodes: &mut BTreeMap<char, LayoutNode>,
    movable: &[char],
    radius: f64,
    rng: &mut StdRng,
) {
    let n = nodes.len() as f64;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for node in nodes.values() {
        cx += node.center.x;
        cy += node.center.y;
    }
    cx /= n;
    cy /= n;

    let ring = (n * 3.0 * 2.0 * radius) / TAU;
    for name in movable {
        let angle = rng.random::<f64>() * TAU;
        let node = nodes.get_mut(name).expect("movable node present");
        node.center = Position::new(cx + ring * angle.cos(), cy + ring * angle.sin());
    }
}

fn net_force(
    nodes: &BTreeMap<char, LayoutNode>,
    name: char,
    adjacency: &BTreeMap<char, BTreeSet<char>>,
    radius: f64,
    config: &LayoutConfig,
    rng: &mut StdRng,
) -> Position {
    let center = nodes[&name].center;
    let neighbors = adjacency.get(&name);
    let mut force = Position::default();
    for (other_name, other) in nodes {
        if *other_name == name {
            continue;
        }
        let mut delta = other.center - center;
        let mut distance = delta.norm();
        if distance < EPSILON {
            // coincident nodes: nudge apart in a random direction
            let angle = rng.random::<f64>() * TAU;
            delta = Position::new(angle.cos(), angle.sin());
            distance = 1.0;
        }
        let adjacent = neighbors.is_some_and(|set| set.contains(other_name));
        let (length, stiffness) = if adjacent {
            (config.length_adjacent, config.stiffness_adjacent)
        } else {
            (config.length_distant, config.stiffness_distant)
        };
        let pull = stiffness * (distance - length * radius) / distance;
        force = force + Position::new(delta.x * pull, delta.y * pull);
    }
    force
}

/// Push movable nodes out of other nodes they ended up overlapping.
fn separate_overlaps(nodes: &mut BTreeMap<char, LayoutNode>, movable: &[char], radius: f64) {
    let min_gap = 2.0 * radius + 2.0;
    for name in movable {
        let center = nodes[name].center;
        let mut shift = Position::default();
        for (other_name, other) in nodes.iter() {
            if other_name == name {
                continue;
            }
            let delta = center - other.center;
            let distance = delta.norm();
            if distance > EPSILON && distance < min_gap {
                let push = (min_gap - distance) / distance;
                shift = shift + Position::new(delta.x * push, delta.y * push);
            }
        }
        let node = nodes.get_mut(name).expect("movable node present");
        node.center = node.center + shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn pair(adjacent: bool) -> (BTreeMap<char, LayoutNode>, BTreeMap<char, BTreeSet<char>>) {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            'A',
            LayoutNode {
                center: Position::default(),
                fixed: false,
            },
        );
        nodes.insert(
            'B',
            LayoutNode {
                center: Position::default(),
                fixed: false,
            },
        );
        let mut adjacency = BTreeMap::new();
        if adjacent {
            adjacency.insert('A', BTreeSet::from(['B']));
            adjacency.insert('B', BTreeSet::from(['A']));
        }
        (nodes, adjacency)
    }

    #[test]
    fn test_linked_pair_settles_near_rest_length() {
        let config = LayoutConfig::default();
        let (mut nodes, adjacency) = pair(true);
        let targets = BTreeSet::from(['A', 'B']);
        relax(&mut nodes, &targets, &adjacency, 20.0, &config);

        let gap = (nodes[&'A'].center - nodes[&'B'].center).norm();
        // rest length 10 radii at radius 20
        assert!((gap - 200.0).abs() < 10.0, "gap was {gap}");
    }

    #[test]
    fn test_unlinked_pair_settles_farther_apart() {
        let config = LayoutConfig::default();
        let (mut nodes, adjacency) = pair(false);
        let targets = BTreeSet::from(['A', 'B']);
        relax(&mut nodes, &targets, &adjacency, 20.0, &config);

        let gap = (nodes[&'A'].center - nodes[&'B'].center).norm();
        assert!(gap > 300.0, "gap was {gap}");
    }

    #[test]
    fn test_fixed_nodes_never_move() {
        let config = LayoutConfig::default();
        let (mut nodes, adjacency) = pair(true);
        nodes.get_mut(&'A').unwrap().fixed = true;
        nodes.get_mut(&'A').unwrap().center = Position::new(40.0, -10.0);
        let targets = BTreeSet::from(['A', 'B']);
        relax(&mut nodes, &targets, &adjacency, 20.0, &config);

        let a = nodes[&'A'].center;
        assert!(approx_eq!(f64, a.x, 40.0) && approx_eq!(f64, a.y, -10.0));
    }

    #[test]
    fn test_relaxation_is_deterministic() {
        let config = LayoutConfig::default();
        let targets = BTreeSet::from(['A', 'B']);

        let (mut first, adjacency) = pair(true);
        relax(&mut first, &targets, &adjacency, 20.0, &config);
        let (mut second, adjacency) = pair(true);
        relax(&mut second, &targets, &adjacency, 20.0, &config);

        assert_eq!(first[&'A'].center, second[&'A'].center);
        assert_eq!(first[&'B'].center, second[&'B'].center);
    }

    #[test]
    fn test_anchored_layout_leaves_other_nodes_alone() {
        let config = LayoutConfig::default();
        let (mut nodes, adjacency) = pair(true);
        nodes.get_mut(&'A').unwrap().center = Position::new(100.0, 100.0);
        let targets = BTreeSet::from(['B']);
        relax(&mut nodes, &targets, &adjacency, 20.0, &config);

        let a = nodes[&'A'].center;
        assert!(approx_eq!(f64, a.x, 100.0) && approx_eq!(f64, a.y, 100.0));
    }
}
