// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::render::common::{Color, Point};
use crate::render::params::RenderParams;
use crate::render::tag::Tag;

/// A link as the renderer sees it.  Endpoint centers are copies of the
/// linked nodes' positions, refreshed whenever a node moves.
#[derive(Clone, Debug)]
pub struct SceneLink {
    id: u32,
    name: char,
    pub from: char,
    pub to: char,
    pub bidirectional: bool,
    pub value: Option<u8>,
    pub from_center: Point,
    pub to_center: Point,
    pub stroke_color: Color,
    pub text_color: Color,
    pub stroke_width: u32,
    /// Whether a midpoint label group was rendered for this link.
    pub has_label: bool,
    pub tag: Option<Tag>,
}

impl SceneLink {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: char,
        from: char,
        to: char,
        bidirectional: bool,
        value: Option<u8>,
        from_center: Point,
        to_center: Point,
        params: &RenderParams,
    ) -> Self {
        SceneLink {
            id,
            name,
            from,
            to,
            bidirectional,
            value,
            from_center,
            to_center,
            stroke_color: params.color_link_stroke,
            text_color: params.color_text,
            stroke_width: params.stroke_width_link,
            has_label: params.display_link_label
                || (params.display_link_value && value.is_some()),
            tag: Some(Tag::Created(params.color_tag_created)),
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn svg_id(&self) -> String {
        format!("l{}", self.id)
    }

    /// The path `d` attribute for the current endpoints.
    pub fn path(&self) -> String {
        format!(
            "M {} {} L {} {} Z",
            self.from_center.x, self.from_center.y, self.to_center.x, self.to_center.y
        )
    }

    /// Midpoint of the link, where labels are anchored.
    pub fn label_anchor(&self) -> Point {
        Point::new(
            (self.from_center.x + self.to_center.x) / 2,
            (self.from_center.y + self.to_center.y) / 2,
        )
    }

    pub fn stroke_color_tagged(&self) -> Color {
        match self.tag {
            Some(tag) => tag.color(),
            None => self.stroke_color,
        }
    }

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
