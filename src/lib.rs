// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! dynagraph builds animated SVG visualizations of evolving graphs.
//!
//! A [`Graph`] is a store of char-named nodes and links.  Every mutation
//! is recorded as an animation step, and the accumulated steps replay as
//! a single SVG/SMIL document, optionally wrapped in an HTML page:
//!
//! ```
//! use dynagraph::Graph;
//!
//! # fn main() -> dynagraph::Result<()> {
//! let mut graph = Graph::new();
//! graph.node_add('A', None)?;
//! graph.node_add('B', None)?;
//! graph.link_add('a', 'A', 'B', true, Some(7))?;
//! let page = graph.svg_render_animation_html("two nodes");
//! assert!(page.contains("<svg"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod common;
mod dyna;
mod graph;
pub mod json;
pub mod layout;
mod render;

pub use crate::common::{Error, ErrorCode, ErrorKind, Result};
pub use crate::graph::Graph;
pub use crate::layout::LayoutConfig;
