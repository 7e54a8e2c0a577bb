// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::render::common::{Color, Point};
use crate::render::params::RenderParams;
use crate::render::tag::Tag;

/// A node as the renderer sees it: geometry and style captured at creation
/// time, plus the pending tag for the next animation step.
#[derive(Clone, Debug)]
pub struct SceneNode {
    id: u32,
    name: char,
    pub value: Option<u8>,
    pub center: Point,
    pub fixed: bool,
    pub radius: u32,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub text_color: Color,
    pub stroke_width: u32,
    pub tag: Option<Tag>,
}

impl SceneNode {
    pub fn new(
        id: u32,
        name: char,
        value: Option<u8>,
        center: Point,
        fixed: bool,
        params: &RenderParams,
    ) -> Self {
        SceneNode {
            id,
            name,
            value,
            center,
            fixed,
            radius: params.radius_node,
            fill_color: params.color_node_fill,
            stroke_color: params.color_node_stroke,
            text_color: params.color_text,
            stroke_width: params.stroke_width_node,
            tag: Some(Tag::Created(params.color_tag_created)),
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    /// SVG id of the node's group element; unique for the lifetime of the
    /// document even if the same name is deleted and re-added.
    pub fn svg_id(&self) -> String {
        format!("n{}", self.id)
    }

    /// Stroke color with the pending tag applied.
    pub fn stroke_color_tagged(&self) -> Color {
        match self.tag {
            Some(tag) => tag.color(),
            None => self.stroke_color,
        }
    }

    /// Stroke width with the pending tag applied; selection doubles it.
    pub fn stroke_width_tagged(&self) -> u32 {
        match self.tag {
            Some(Tag::Selected(_)) => self.stroke_width * 2,
            _ => self.stroke_width,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.tag, Some(Tag::Deleted(_)))
    }

    pub fn is_created(&self) -> bool {
        matches!(self.tag, Some(Tag::Created(_)))
    }
}
