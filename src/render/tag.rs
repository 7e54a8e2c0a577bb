// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::render::common::Color;

/// Pending visual state of a scene element.  The color is captured at tag
/// time, so palette changes never repaint elements already tagged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Added but not yet faded in.
    Created(Color),
    /// Highlighted with the selection stroke.
    Selected(Color),
    /// Removed; faded out on the next step, then garbage collected.
    Deleted(Color),
}

impl Tag {
    pub fn color(&self) -> Color {
        match self {
            Tag::Created(color) | Tag::Selected(color) | Tag::Deleted(color) => *color,
        }
    }
}
