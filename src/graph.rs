// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The graph store and its public operation surface.
//!
//! Every structural mutation is validated first, then mirrored into the
//! animation scene.  With automatic animation on (the default) each
//! mutation also emits an animation step, and with automatic layout on
//! free nodes are repositioned by spring relaxation as the structure
//! changes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::common::{Error, ErrorCode, ErrorKind, Result};
use crate::dyna::{self, Record};
use crate::json::{LinkRecord, NodeRecord, Snapshot};
use crate::layout::{self, LayoutConfig, LayoutNode, Position};
use crate::render::Scene;
use crate::render::common::{Color, Point};
use crate::render::html;
use crate::structure_err;

#[derive(Clone, Debug)]
struct Node {
    value: Option<u8>,
}

#[derive(Clone, Debug)]
struct Link {
    from: char,
    to: char,
    bidirectional: bool,
    value: Option<u8>,
}

pub struct Graph {
    nodes: BTreeMap<char, Node>,
    links: BTreeMap<char, Link>,
    scene: Scene,
    layout_config: LayoutConfig,
    automatic_animation: bool,
    automatic_layout: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: BTreeMap::new(),
            links: BTreeMap::new(),
            scene: Scene::new(),
            layout_config: LayoutConfig::default(),
            automatic_animation: true,
            automatic_layout: true,
        }
    }

    // ---- structure: nodes ----

    /// Adds a free node.  With automatic layout on it is immediately
    /// placed by spring relaxation.
    pub fn node_add(&mut self, name: char, value: Option<u8>) -> Result<()> {
        self.insert_node(name, value, None)
    }

    /// Adds a node pinned to `(x, y)`; pinned nodes are never moved by
    /// automatic layout.
    pub fn node_add_fixed(&mut self, name: char, x: i16, y: i16, value: Option<u8>) -> Result<()> {
        self.insert_node(name, value, Some(Point::new(x as i32, y as i32)))
    }

    /// Removes a node and every link incident to it.
    pub fn node_delete(&mut self, name: char) -> Result<()> {
        self.node_check_exists(name)?;
        let incident: Vec<char> = self
            .links
            .iter()
            .filter(|(_, l)| l.from == name || l.to == name)
            .map(|(n, _)| *n)
            .collect();
        for link_name in incident {
            self.links.remove(&link_name);
            self.scene.link_delete(link_name);
        }
        self.nodes.remove(&name);
        self.scene.node_delete(name);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_delete);
        }
        Ok(())
    }

    pub fn node_value(&self, name: char) -> Result<Option<u8>> {
        self.node_check_exists(name)?;
        Ok(self.nodes[&name].value)
    }

    /// Updates a node's value.  The rendered label keeps the value the
    /// node was created with; values are model data first.
    pub fn node_set_value(&mut self, name: char, value: Option<u8>) -> Result<()> {
        self.node_check_exists(name)?;
        if let Some(node) = self.nodes.get_mut(&name) {
            node.value = value;
        }
        Ok(())
    }

    pub fn nodes_list(&self) -> Vec<char> {
        self.nodes.keys().copied().collect()
    }

    /// Swaps two nodes in place: their positions (and pinned state) are
    /// exchanged and their incident links are rewired, so the two nodes
    /// trade places on the canvas while the structure is preserved.
    pub fn nodes_exchange(&mut self, name_1: char, name_2: char) -> Result<()> {
        self.node_check_exists(name_1)?;
        self.node_check_exists(name_2)?;
        if name_1 == name_2 {
            return structure_err!(
                Generic,
                format!("cannot exchange node '{name_1}' with itself")
            );
        }

        let saved_animation = self.automatic_animation;
        let saved_layout = self.automatic_layout;
        self.automatic_animation = false;
        self.automatic_layout = false;

        let incident: Vec<(char, Link)> = self
            .links
            .iter()
            .filter(|(_, l)| {
                l.from == name_1 || l.to == name_1 || l.from == name_2 || l.to == name_2
            })
            .map(|(n, l)| (*n, l.clone()))
            .collect();

        let result = (|| -> Result<()> {
            for (link_name, _) in &incident {
                self.link_delete(*link_name)?;
            }
            if saved_animation {
                self.svg_animate(self.scene.params.duration_delete);
            }

            let center_1 = self.scene.node_center(name_1);
            let center_2 = self.scene.node_center(name_2);
            let fixed_1 = self.scene.node_is_fixed(name_1);
            let fixed_2 = self.scene.node_is_fixed(name_2);
            self.scene.node_move(name_1, center_2);
            self.scene.node_move(name_2, center_1);
            self.scene.node_set_fixed(name_1, fixed_2);
            self.scene.node_set_fixed(name_2, fixed_1);
            if saved_animation {
                self.svg_animate(self.scene.params.duration_move);
            }

            let swap = |name: char| {
                if name == name_1 {
                    name_2
                } else if name == name_2 {
                    name_1
                } else {
                    name
                }
            };
            for (link_name, link) in &incident {
                self.link_add(
                    *link_name,
                    swap(link.from),
                    swap(link.to),
                    link.bidirectional,
                    link.value,
                )?;
            }
            if saved_animation {
                self.svg_animate(self.scene.params.duration_add);
            }
            Ok(())
        })();

        self.automatic_animation = saved_animation;
        self.automatic_layout = saved_layout;
        result
    }

    // ---- structure: links ----

    /// Adds a link between two existing nodes.  Self-loops and parallel
    /// links (in either orientation) are rejected.
    pub fn link_add(
        &mut self,
        name: char,
        from: char,
        to: char,
        bidirectional: bool,
        value: Option<u8>,
    ) -> Result<()> {
        self.link_check_not_exists(name)?;
        self.node_check_exists(from)?;
        self.node_check_exists(to)?;
        if from == to {
            return structure_err!(SelfLoop, format!("link '{name}' on node '{from}'"));
        }
        if let Some((existing, _)) = self
            .links
            .iter()
            .find(|(_, l)| (l.from == from && l.to == to) || (l.from == to && l.to == from))
        {
            return structure_err!(
                ParallelLink,
                format!("link '{existing}' already joins '{from}' and '{to}'")
            );
        }

        self.links.insert(
            name,
            Link {
                from,
                to,
                bidirectional,
                value,
            },
        );
        self.scene.link_add(name, from, to, bidirectional, value);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_add);
        }
        if self.automatic_layout {
            self.svg_layout_nodes(vec![from, to])?;
        }
        Ok(())
    }

    pub fn link_delete(&mut self, name: char) -> Result<()> {
        self.link_check_exists(name)?;
        self.links.remove(&name);
        self.scene.link_delete(name);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_delete);
        }
        Ok(())
    }

    pub fn link_value(&self, name: char) -> Result<Option<u8>> {
        self.link_check_exists(name)?;
        Ok(self.links[&name].value)
    }

    pub fn links_list(&self) -> Vec<char> {
        self.links.keys().copied().collect()
    }

    // ---- structure: queries ----

    /// Outgoing adjacency: for each node, the reachable neighbors mapped
    /// to the (link name, link value) that joins them.  One-way links
    /// contribute a single direction.
    pub fn adjacency_list(&self) -> BTreeMap<char, BTreeMap<char, (char, Option<u8>)>> {
        let mut adjacency: BTreeMap<char, BTreeMap<char, (char, Option<u8>)>> = self
            .nodes
            .keys()
            .map(|name| (*name, BTreeMap::new()))
            .collect();
        for (name, link) in &self.links {
            if let Some(out) = adjacency.get_mut(&link.from) {
                out.insert(link.to, (*name, link.value));
            }
            if link.bidirectional {
                if let Some(out) = adjacency.get_mut(&link.to) {
                    out.insert(link.from, (*name, link.value));
                }
            }
        }
        adjacency
    }

    /// Nodes reachable from `name` in one hop.
    pub fn node_neighbors(&self, name: char) -> Result<Vec<char>> {
        self.node_check_exists(name)?;
        let mut neighbors = BTreeSet::new();
        for link in self.links.values() {
            if link.from == name {
                neighbors.insert(link.to);
            }
            if link.bidirectional && link.to == name {
                neighbors.insert(link.from);
            }
        }
        Ok(neighbors.into_iter().collect())
    }

    /// Incident link count per node, ignoring direction.
    pub fn nodes_degrees(&self) -> BTreeMap<char, usize> {
        let mut degrees: BTreeMap<char, usize> =
            self.nodes.keys().map(|name| (*name, 0)).collect();
        for link in self.links.values() {
            if let Some(d) = degrees.get_mut(&link.from) {
                *d += 1;
            }
            if let Some(d) = degrees.get_mut(&link.to) {
                *d += 1;
            }
        }
        degrees
    }

    /// Number of nodes.
    pub fn graph_order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    pub fn graph_size(&self) -> usize {
        self.links.len()
    }

    /// Degree sequence, descending.
    pub fn graph_sequence(&self) -> Vec<usize> {
        let mut sequence: Vec<usize> = self.nodes_degrees().into_values().collect();
        sequence.sort_unstable_by(|a, b| b.cmp(a));
        sequence
    }

    // ---- serialization ----

    /// Serializes the structure in the dyna text format.  Coordinates
    /// are written only for pinned nodes.
    pub fn dyna_to(&self) -> String {
        dyna::serialize(&self.records())
    }

    /// Applies a dyna document to this graph.  Animation is suppressed
    /// while the records are applied; the whole batch then appears as a
    /// single step, followed by a full layout when automatic layout is on.
    pub fn dyna_from(&mut self, text: &str) -> Result<()> {
        let records = dyna::parse(text)?;
        self.apply_batch(&records)
    }

    /// Serializes the structure as JSON.
    pub fn json_to(&self) -> Result<String> {
        let records = self.records();
        let mut snapshot = Snapshot {
            nodes: Vec::new(),
            links: Vec::new(),
        };
        for record in records {
            match record {
                Record::Node {
                    name,
                    position,
                    value,
                } => snapshot.nodes.push(NodeRecord {
                    name,
                    value,
                    position,
                }),
                Record::Link {
                    name,
                    from,
                    to,
                    bidirectional,
                    value,
                } => snapshot.links.push(LinkRecord {
                    name,
                    from,
                    to,
                    bidirectional,
                    value,
                }),
            }
        }
        serde_json::to_string_pretty(&snapshot).map_err(|err| {
            Error::new(ErrorKind::Parse, ErrorCode::BadJson, Some(err.to_string()))
        })
    }

    /// Applies a JSON snapshot to this graph, batched like [`Graph::dyna_from`].
    pub fn json_from(&mut self, text: &str) -> Result<()> {
        let snapshot: Snapshot = serde_json::from_str(text).map_err(|err| {
            Error::new(ErrorKind::Parse, ErrorCode::BadJson, Some(err.to_string()))
        })?;
        let mut records = Vec::new();
        for node in snapshot.nodes {
            records.push(Record::Node {
                name: node.name,
                position: node.position,
                value: node.value,
            });
        }
        for link in snapshot.links {
            records.push(Record::Link {
                name: link.name,
                from: link.from,
                to: link.to,
                bidirectional: link.bidirectional,
                value: link.value,
            });
        }
        self.apply_batch(&records)
    }

    // ---- rendering ----

    /// The animated SVG document replaying every step so far.
    pub fn svg_render_animation(&self) -> String {
        self.scene.animation()
    }

    /// An HTML page embedding this graph's animation.
    pub fn svg_render_animation_html(&self, title: &str) -> String {
        html::page(title, &[self.scene.animation()])
    }

    /// Writes one HTML file per `(title, graphs)` pair into `dir`, each
    /// page laying out its graphs' animations in a grid.
    pub fn render_html_pages(dir: &Path, pages: &[(&str, Vec<&Graph>)]) -> io::Result<()> {
        for (title, graphs) in pages {
            let animations: Vec<String> =
                graphs.iter().map(|g| g.scene.animation()).collect();
            fs::write(dir.join(html::file_name(title)), html::page(title, &animations))?;
        }
        Ok(())
    }

    /// Emits one animation step covering every pending change.  A zero
    /// duration is clamped to one millisecond.
    pub fn svg_animate(&mut self, duration_ms: u32) {
        self.scene.animate(duration_ms.max(1));
    }

    /// Total animation time emitted so far, in milliseconds.
    pub fn svg_duration(&self) -> u32 {
        self.scene.clock()
    }

    /// Repositions every free node by spring relaxation.
    pub fn svg_layout(&mut self) -> Result<()> {
        self.svg_layout_nodes(self.nodes_list())
    }

    /// Repositions the named nodes, leaving the rest (and all pinned
    /// nodes) anchored where they are.
    pub fn svg_layout_nodes(&mut self, names: Vec<char>) -> Result<()> {
        for name in &names {
            self.node_check_exists(*name)?;
        }
        let targets: BTreeSet<char> = names
            .into_iter()
            .filter(|name| !self.scene.node_is_fixed(*name))
            .collect();
        if targets.is_empty() {
            return Ok(());
        }

        let mut positions: BTreeMap<char, LayoutNode> = self
            .nodes
            .keys()
            .map(|name| {
                let center = self.scene.node_center(*name);
                (
                    *name,
                    LayoutNode {
                        center: Position::new(center.x as f64, center.y as f64),
                        fixed: self.scene.node_is_fixed(*name),
                    },
                )
            })
            .collect();

        let mut adjacency: BTreeMap<char, BTreeSet<char>> = BTreeMap::new();
        for link in self.links.values() {
            adjacency.entry(link.from).or_default().insert(link.to);
            adjacency.entry(link.to).or_default().insert(link.from);
        }

        let radius = self.scene.params.radius_node as f64;
        layout::arrange(
            &mut positions,
            &targets,
            &adjacency,
            radius,
            &self.layout_config,
        );

        for name in &targets {
            let center = positions[name].center;
            self.scene.node_move(
                *name,
                Point::new(center.x.round() as i32, center.y.round() as i32),
            );
        }
        self.svg_animate(self.scene.params.duration_move);
        Ok(())
    }

    /// Moves a node to `(x, y)`.  The node's pinned state is unchanged.
    pub fn svg_node_move(&mut self, name: char, x: i16, y: i16) -> Result<()> {
        self.node_check_exists(name)?;
        self.scene.node_move(name, Point::new(x as i32, y as i32));
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_move);
        }
        Ok(())
    }

    /// The node's current position on the canvas.
    pub fn svg_node_position(&self, name: char) -> Result<(i32, i32)> {
        self.node_check_exists(name)?;
        let center = self.scene.node_center(name);
        Ok((center.x, center.y))
    }

    /// Overrides the node's fill color.
    pub fn svg_node_color(&mut self, name: char, red: u8, green: u8, blue: u8) -> Result<()> {
        self.node_check_exists(name)?;
        self.scene.node_fill_color(name, Color::new(red, green, blue));
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_color);
        }
        Ok(())
    }

    /// Toggles the node's selection highlight.
    pub fn svg_node_selected(&mut self, name: char, selected: bool) -> Result<()> {
        self.node_check_exists(name)?;
        self.scene.node_selected(name, selected);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_select);
        }
        Ok(())
    }

    /// Toggles the link's selection highlight.
    pub fn svg_link_selected(&mut self, name: char, selected: bool) -> Result<()> {
        self.link_check_exists(name)?;
        self.scene.link_selected(name, selected);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_select);
        }
        Ok(())
    }

    // ---- configuration ----

    pub fn svg_automatic_animation(&mut self, automatic: bool) {
        self.automatic_animation = automatic;
    }

    pub fn svg_automatic_layout(&mut self, automatic: bool) {
        self.automatic_layout = automatic;
    }

    pub fn layout_config(&mut self, config: LayoutConfig) {
        self.layout_config = config;
    }

    pub fn svg_param_duration_add(&mut self, duration_ms: u32) {
        self.scene.params.duration_add = duration_ms;
    }

    pub fn svg_param_duration_delete(&mut self, duration_ms: u32) {
        self.scene.params.duration_delete = duration_ms;
    }

    pub fn svg_param_duration_move(&mut self, duration_ms: u32) {
        self.scene.params.duration_move = duration_ms;
    }

    pub fn svg_param_duration_select(&mut self, duration_ms: u32) {
        self.scene.params.duration_select = duration_ms;
    }

    pub fn svg_param_duration_color(&mut self, duration_ms: u32) {
        self.scene.params.duration_color = duration_ms;
    }

    pub fn svg_param_color_tag_created(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_tag_created = Color::new(red, green, blue);
    }

    pub fn svg_param_color_tag_selected(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_tag_selected = Color::new(red, green, blue);
    }

    pub fn svg_param_color_tag_deleted(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_tag_deleted = Color::new(red, green, blue);
    }

    pub fn svg_param_color_node_fill(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_node_fill = Color::new(red, green, blue);
    }

    pub fn svg_param_color_node_stroke(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_node_stroke = Color::new(red, green, blue);
    }

    pub fn svg_param_color_link_stroke(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_link_stroke = Color::new(red, green, blue);
    }

    pub fn svg_param_color_text(&mut self, red: u8, green: u8, blue: u8) {
        self.scene.params.color_text = Color::new(red, green, blue);
    }

    pub fn svg_param_display_node_label(&mut self, display: bool) {
        self.scene.params.display_node_label = display;
    }

    pub fn svg_param_display_node_value(&mut self, display: bool) {
        self.scene.params.display_node_value = display;
    }

    pub fn svg_param_display_link_label(&mut self, display: bool) {
        self.scene.params.display_link_label = display;
    }

    pub fn svg_param_display_link_value(&mut self, display: bool) {
        self.scene.params.display_link_value = display;
    }

    pub fn svg_param_stroke_width_node(&mut self, width: u32) {
        self.scene.params.stroke_width_node = width;
    }

    pub fn svg_param_stroke_width_link(&mut self, width: u32) {
        self.scene.params.stroke_width_link = width;
    }

    pub fn svg_param_radius_node(&mut self, radius: u32) {
        self.scene.params.radius_node = radius;
    }

    // ---- internal ----

    fn insert_node(&mut self, name: char, value: Option<u8>, position: Option<Point>) -> Result<()> {
        self.node_check_not_exists(name)?;
        self.nodes.insert(name, Node { value });
        self.scene.node_add(name, value, position);
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_add);
        }
        if self.automatic_layout && position.is_none() {
            self.svg_layout_nodes(vec![name])?;
        }
        Ok(())
    }

    fn records(&self) -> Vec<Record> {
        let mut records = Vec::new();
        for (name, node) in &self.nodes {
            let position = if self.scene.node_is_fixed(*name) {
                let center = self.scene.node_center(*name);
                Some((center.x, center.y))
            } else {
                None
            };
            records.push(Record::Node {
                name: *name,
                position,
                value: node.value,
            });
        }
        for (name, link) in &self.links {
            records.push(Record::Link {
                name: *name,
                from: link.from,
                to: link.to,
                bidirectional: link.bidirectional,
                value: link.value,
            });
        }
        records
    }

    fn apply_batch(&mut self, records: &[Record]) -> Result<()> {
        let saved_animation = self.automatic_animation;
        let saved_layout = self.automatic_layout;
        self.automatic_animation = false;
        self.automatic_layout = false;
        let result = self.apply_records(records);
        self.automatic_animation = saved_animation;
        self.automatic_layout = saved_layout;
        result?;
        if self.automatic_animation {
            self.svg_animate(self.scene.params.duration_add);
            if self.automatic_layout {
                self.svg_layout()?;
            }
        }
        Ok(())
    }

    fn apply_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            match record {
                Record::Node {
                    name,
                    position,
                    value,
                } => {
                    let position = position.map(|(x, y)| Point::new(x, y));
                    self.insert_node(*name, *value, position)?;
                }
                Record::Link {
                    name,
                    from,
                    to,
                    bidirectional,
                    value,
                } => {
                    self.link_add(*name, *from, *to, *bidirectional, *value)?;
                }
            }
        }
        Ok(())
    }

    fn node_check_exists(&self, name: char) -> Result<()> {
        if self.nodes.contains_key(&name) {
            Ok(())
        } else {
            structure_err!(NodeDoesNotExist, format!("node '{name}'"))
        }
    }

    fn node_check_not_exists(&self, name: char) -> Result<()> {
        if self.nodes.contains_key(&name) {
            structure_err!(NodeAlreadyExists, format!("node '{name}'"))
        } else {
            Ok(())
        }
    }

    fn link_check_exists(&self, name: char) -> Result<()> {
        if self.links.contains_key(&name) {
            Ok(())
        } else {
            structure_err!(LinkDoesNotExist, format!("link '{name}'"))
        }
    }

    fn link_check_not_exists(&self, name: char) -> Result<()> {
        if self.links.contains_key(&name) {
            structure_err!(LinkAlreadyExists, format!("link '{name}'"))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.dyna_to())
    }
}
