// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Automatic node placement by spring relaxation over the full pairwise
//! graph: short stiff springs between linked nodes, long weak springs
//! between unlinked ones.

pub mod config;
mod spring;

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, Sub};

pub use self::config::LayoutConfig;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct LayoutNode {
    pub center: Position,
    pub fixed: bool,
}

/// Repositions the nodes named in `targets` in place.  Fixed nodes and
/// nodes outside `targets` act as anchors; they are never moved.
pub fn arrange(
    nodes: &mut BTreeMap<char, LayoutNode>,
    targets: &BTreeSet<char>,
    adjacency: &BTreeMap<char, BTreeSet<char>>,
    radius: f64,
    config: &LayoutConfig,
) {
    spring::relax(nodes, targets, adjacency, radius, config);
}
