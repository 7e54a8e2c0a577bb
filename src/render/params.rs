// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::render::common::Color;

/// Rendering parameters: animation durations, palette, label toggles and
/// stroke geometry.  Changes apply to subsequently created elements and
/// subsequently animated steps; already-rendered fragments are immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
    pub duration_add: u32,
    pub duration_delete: u32,
    pub duration_move: u32,
    pub duration_select: u32,
    pub duration_color: u32,

    pub color_tag_created: Color,
    pub color_tag_selected: Color,
    pub color_tag_deleted: Color,
    pub color_node_fill: Color,
    pub color_node_stroke: Color,
    pub color_link_stroke: Color,
    pub color_text: Color,

    pub display_node_label: bool,
    pub display_node_value: bool,
    pub display_link_label: bool,
    pub display_link_value: bool,

    pub stroke_width_node: u32,
    pub stroke_width_link: u32,
    pub radius_node: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        RenderParams {
            duration_add: 1000,
            duration_delete: 1000,
            duration_move: 1000,
            duration_select: 1000,
            duration_color: 1000,

            color_tag_created: Color::new(0, 0, 255),
            color_tag_selected: Color::new(191, 255, 0),
            color_tag_deleted: Color::new(255, 0, 0),
            color_node_fill: Color::new(255, 255, 255),
            color_node_stroke: Color::new(128, 139, 150),
            color_link_stroke: Color::new(128, 139, 150),
            color_text: Color::new(0, 0, 0),

            display_node_label: true,
            display_node_value: false,
            display_link_label: false,
            display_link_value: true,

            stroke_width_node: 2,
            stroke_width_link: 2,
            radius_node: 20,
        }
    }
}
