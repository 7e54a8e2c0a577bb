// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

/// Tunables for spring relaxation.  Rest lengths are expressed in node
/// radii so the layout scales with the configured node size.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Rest length of the spring between linked nodes, in radii.
    pub length_adjacent: f64,
    /// Rest length of the spring between unlinked nodes, in radii.
    pub length_distant: f64,
    pub stiffness_adjacent: f64,
    pub stiffness_distant: f64,
    pub max_iterations: usize,
    /// Relaxation stops once no node moved farther than this, in user units.
    pub threshold: f64,
    /// Seed for initial placement; a fixed default keeps layouts reproducible.
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            length_adjacent: 10.0,
            length_distant: 25.0,
            stiffness_adjacent: 0.6,
            stiffness_distant: 0.05,
            max_iterations: 200,
            threshold: 0.5,
            seed: 42,
        }
    }
}
