// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Retained animation scene.
//!
//! The scene keeps three snapshots of every element: `initial` (the state
//! encoded in its instantiation markup), `previous` (the state as of the
//! last animation step) and the current one.  [`Scene::animate`] diffs
//! previous against current, appends the SMIL fragments for the step, and
//! promotes the snapshots.

pub mod common;
pub mod html;
pub mod link;
pub mod node;
pub mod params;
pub mod svg;
pub mod tag;

use std::collections::BTreeMap;

use crate::render::common::{Color, Point, Rect};
use crate::render::link::SceneLink;
use crate::render::node::SceneNode;
use crate::render::params::RenderParams;
use crate::render::tag::Tag;

pub struct Scene {
    pub params: RenderParams,
    seq: u32,
    clock: u32,
    nodes: BTreeMap<char, SceneNode>,
    links: BTreeMap<char, SceneLink>,
    previous_nodes: BTreeMap<char, SceneNode>,
    previous_links: BTreeMap<char, SceneLink>,
    initial_nodes: BTreeMap<char, SceneNode>,
    initial_links: BTreeMap<char, SceneLink>,
    view_box: Option<Rect>,
    stream: String,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            params: RenderParams::default(),
            seq: 0,
            clock: 0,
            nodes: BTreeMap::new(),
            links: BTreeMap::new(),
            previous_nodes: BTreeMap::new(),
            previous_links: BTreeMap::new(),
            initial_nodes: BTreeMap::new(),
            initial_links: BTreeMap::new(),
            view_box: None,
            stream: String::new(),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    /// Total animation time emitted so far, in milliseconds.
    pub fn clock(&self) -> u32 {
        self.clock
    }

    pub fn node_add(&mut self, name: char, value: Option<u8>, center: Option<Point>) {
        self.evict_node(name);
        self.seq += 1;
        let fixed = center.is_some();
        let node = SceneNode::new(
            self.seq,
            name,
            value,
            center.unwrap_or_default(),
            fixed,
            &self.params,
        );
        self.stream.push_str(&svg::node_fragment(&node, &self.params));
        self.previous_nodes.insert(name, node.clone());
        self.initial_nodes.insert(name, node.clone());
        self.nodes.insert(name, node);
    }

    pub fn node_delete(&mut self, name: char) {
        let color = self.params.color_tag_deleted;
        self.node_mut(name).tag = Some(Tag::Deleted(color));
    }

    pub fn node_selected(&mut self, name: char, selected: bool) {
        let color = self.params.color_tag_selected;
        let node = self.node_mut(name);
        node.tag = if selected {
            Some(Tag::Selected(color))
        } else {
            None
        };
    }

    pub fn node_fill_color(&mut self, name: char, color: Color) {
        self.node_mut(name).fill_color = color;
    }

    /// Moves a node and refreshes the endpoint copies held by its links.
    pub fn node_move(&mut self, name: char, center: Point) {
        self.node_mut(name).center = center;
        for link in self.links.values_mut() {
            if link.from == name {
                link.from_center = center;
            }
            if link.to == name {
                link.to_center = center;
            }
        }
    }

    pub fn node_center(&self, name: char) -> Point {
        self.node_ref(name).center
    }

    pub fn node_is_fixed(&self, name: char) -> bool {
        self.node_ref(name).fixed
    }

    pub fn node_set_fixed(&mut self, name: char, fixed: bool) {
        self.node_mut(name).fixed = fixed;
    }

    pub fn link_add(
        &mut self,
        name: char,
        from: char,
        to: char,
        bidirectional: bool,
        value: Option<u8>,
    ) {
        self.evict_link(name);
        self.seq += 1;
        let from_center = self.node_center(from);
        let to_center = self.node_center(to);
        let link = SceneLink::new(
            self.seq,
            name,
            from,
            to,
            bidirectional,
            value,
            from_center,
            to_center,
            &self.params,
        );
        // prepended so links paint under the node circles
        let fragment = svg::link_fragment(&link, &self.params);
        self.stream.insert_str(0, &fragment);
        self.previous_links.insert(name, link.clone());
        self.initial_links.insert(name, link.clone());
        self.links.insert(name, link);
    }

    pub fn link_delete(&mut self, name: char) {
        let color = self.params.color_tag_deleted;
        self.link_mut(name).tag = Some(Tag::Deleted(color));
    }

    pub fn link_selected(&mut self, name: char, selected: bool) {
        let color = self.params.color_tag_selected;
        let link = self.link_mut(name);
        link.tag = if selected {
            Some(Tag::Selected(color))
        } else {
            None
        };
    }

    /// Emits one animation step of `duration` milliseconds covering every
    /// change since the last step, then promotes the snapshots: deleted
    /// elements are dropped, created tags are cleared so the follow-up
    /// step fades their highlight back to the base stroke.
    pub fn animate(&mut self, duration: u32) {
        let begin = self.clock;
        let mut step = String::new();

        if let Some(to_rect) = self.visible_bounds() {
            match self.view_box {
                None => self.view_box = Some(to_rect),
                Some(last) if last != to_rect => {
                    step.push_str(&svg::animate_view_box(&last, &to_rect, begin, duration));
                    self.view_box = Some(to_rect);
                }
                Some(_) => {}
            }
        }

        for (name, current) in &self.links {
            let initial = &self.initial_links[name];
            let previous = &self.previous_links[name];
            step.push_str(&svg::animate_link(current, initial, previous, begin, duration));
        }
        for (name, current) in &self.nodes {
            let initial = &self.initial_nodes[name];
            let previous = &self.previous_nodes[name];
            step.push_str(&svg::animate_node(current, initial, previous, begin, duration));
        }

        self.stream.push_str(&step);
        self.clock += duration;

        let deleted_nodes: Vec<char> = self
            .nodes
            .values()
            .filter(|n| n.is_deleted())
            .map(|n| n.name())
            .collect();
        for name in deleted_nodes {
            self.nodes.remove(&name);
            self.previous_nodes.remove(&name);
            self.initial_nodes.remove(&name);
        }
        let deleted_links: Vec<char> = self
            .links
            .values()
            .filter(|l| l.is_deleted())
            .map(|l| l.name())
            .collect();
        for name in deleted_links {
            self.links.remove(&name);
            self.previous_links.remove(&name);
            self.initial_links.remove(&name);
        }

        self.previous_nodes = self.nodes.clone();
        self.previous_links = self.links.clone();

        for node in self.nodes.values_mut() {
            if node.is_created() {
                node.tag = None;
            }
        }
        for link in self.links.values_mut() {
            if link.is_created() {
                link.tag = None;
            }
        }
    }

    /// The complete SVG document emitted so far.
    pub fn animation(&self) -> String {
        let rect = match self.view_box.or_else(|| self.visible_bounds()) {
            Some(rect) => rect,
            None => Rect {
                x_min: 0,
                y_min: 0,
                x_max: 100,
                y_max: 100,
            },
        };
        let mut document = svg::svg_open(&rect);
        document.push_str(&self.stream);
        document.push_str(svg::svg_close());
        document
    }

    /// Bounding box of all nodes not pending deletion, padded by each
    /// node's radius and stroke.
    fn visible_bounds(&self) -> Option<Rect> {
        let corners = self
            .nodes
            .values()
            .filter(|node| !node.is_deleted())
            .flat_map(|node| {
                let margin = (node.radius + node.stroke_width) as i32;
                let rect = Rect::singleton(node.center).grow(margin);
                [
                    Point::new(rect.x_min, rect.y_min),
                    Point::new(rect.x_max, rect.y_max),
                ]
            });
        Rect::of_points(corners)
    }

    /// A name can be reused before the old element's removal was ever
    /// animated; the stale element is dropped and, if it had already been
    /// revealed, hidden instantly.
    fn evict_node(&mut self, name: char) {
        if let Some(old) = self.nodes.remove(&name) {
            self.previous_nodes.remove(&name);
            self.initial_nodes.remove(&name);
            if !old.is_created() {
                self.stream.push_str(&svg::hide(&old.svg_id(), self.clock));
            }
        }
    }

    fn evict_link(&mut self, name: char) {
        if let Some(old) = self.links.remove(&name) {
            self.previous_links.remove(&name);
            self.initial_links.remove(&name);
            if !old.is_created() {
                self.stream.push_str(&svg::hide(&old.svg_id(), self.clock));
            }
        }
    }

    fn node_ref(&self, name: char) -> &SceneNode {
        self.nodes.get(&name).expect("scene node out of sync")
    }

    fn node_mut(&mut self, name: char) -> &mut SceneNode {
        self.nodes.get_mut(&name).expect("scene node out of sync")
    }

    fn link_mut(&mut self, name: char) -> &mut SceneLink {
        self.links.get_mut(&name).expect("scene link out of sync")
    }
}
