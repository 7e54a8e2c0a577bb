// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! SVG/SMIL fragment builders.
//!
//! Every element is instantiated invisible (`opacity="0"`) the moment it
//! enters the scene; all subsequent changes are expressed as `<animate>`,
//! `<animateMotion>` and viewBox animations appended to the document, so
//! the finished SVG replays the whole history of the graph.

use crate::render::common::{Point, Rect, escape_xml_text};
use crate::render::link::SceneLink;
use crate::render::node::SceneNode;
use crate::render::params::RenderParams;

const FONT_SIZE: u32 = 14;
const DIRECTION_MARKER: &str = "&#8658;";

/// Clicking an animation toggles `pauseAnimations()`; the `pause`
/// handler ships with [`crate::render::html::page`].
pub fn svg_open(rect: &Rect) -> String {
    format!(
        "<svg viewBox=\"{}\" onclick=\"pause(this)\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        rect.view_box()
    )
}

pub fn svg_close() -> &'static str {
    "</svg>\n"
}

/// The viewBox `<animate>` has no `href`: a SMIL animation without an
/// explicit target applies to its parent element, which here is the
/// `<svg>` root itself.  This keeps documents embeddable side by side.
pub fn animate_view_box(from: &Rect, to: &Rect, begin: u32, dur: u32) -> String {
    format!(
        "<animate attributeName=\"viewBox\" begin=\"{}ms\" dur=\"{}ms\" \
         values=\"{};{}\" fill=\"freeze\"/>\n",
        begin,
        dur,
        from.view_box(),
        to.view_box()
    )
}

fn animate_attr(target: &str, attr: &str, from: &str, to: &str, begin: u32, dur: u32) -> String {
    format!(
        "<animate href=\"#{target}\" attributeName=\"{attr}\" begin=\"{begin}ms\" \
         dur=\"{dur}ms\" values=\"{from};{to}\" fill=\"freeze\"/>\n"
    )
}

/// `from` and `to` are displacements relative to the element's initial
/// position, so stacked motions with `fill="freeze"` compose correctly.
fn animate_motion(target: &str, from: Point, to: Point, begin: u32, dur: u32) -> String {
    format!(
        "<animateMotion href=\"#{target}\" begin=\"{begin}ms\" dur=\"{dur}ms\" \
         path=\"M {} {} L {} {}\" fill=\"freeze\"/>\n",
        from.x, from.y, to.x, to.y
    )
}

/// Instantly hides an element whose replacement was scheduled without an
/// intervening animation step.
pub fn hide(target: &str, begin: u32) -> String {
    animate_attr(target, "opacity", "1", "0", begin, 1)
}

fn node_label(node: &SceneNode, params: &RenderParams) -> Option<String> {
    let name = if params.display_node_label {
        Some(escape_xml_text(&node.name().to_string()))
    } else {
        None
    };
    let value = if params.display_node_value {
        node.value.map(|v| v.to_string())
    } else {
        None
    };
    match (name, value) {
        (Some(name), Some(value)) => Some(format!("{name}:{value}")),
        (Some(name), None) => Some(name),
        (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

fn link_label(link: &SceneLink, params: &RenderParams) -> Option<String> {
    let name = if params.display_link_label {
        Some(escape_xml_text(&link.name().to_string()))
    } else {
        None
    };
    let value = if params.display_link_value {
        link.value.map(|v| v.to_string())
    } else {
        None
    };
    match (name, value) {
        (Some(name), Some(value)) => Some(format!("{name}:{value}")),
        (Some(name), None) => Some(name),
        (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

/// Initial markup for a node: a hidden group holding the circle and its
/// label, centered on the node's creation position.
pub fn node_fragment(node: &SceneNode, params: &RenderParams) -> String {
    let id = node.svg_id();
    let mut fragment = format!("<g id=\"{id}\" opacity=\"0\">\n");
    fragment.push_str(&format!(
        "<circle id=\"{id}c\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" \
         stroke=\"{}\" stroke-width=\"{}\"/>\n",
        node.center.x,
        node.center.y,
        node.radius,
        node.fill_color,
        node.stroke_color_tagged(),
        node.stroke_width_tagged(),
    ));
    if let Some(label) = node_label(node, params) {
        fragment.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
             font-size=\"{FONT_SIZE}\" fill=\"{}\">{label}</text>\n",
            node.center.x, node.center.y, node.text_color,
        ));
    }
    fragment.push_str("</g>\n");
    fragment
}

/// Initial markup for a link: a hidden group holding the path, the
/// direction marker for one-way links, and the midpoint label group.
pub fn link_fragment(link: &SceneLink, params: &RenderParams) -> String {
    let id = link.svg_id();
    let mut fragment = format!("<g id=\"{id}\" opacity=\"0\">\n");
    fragment.push_str(&format!(
        "<path id=\"{id}p\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        link.path(),
        link.stroke_color_tagged(),
        link.stroke_width_tagged(),
    ));
    if !link.bidirectional {
        fragment.push_str(&format!(
            "<text font-size=\"{FONT_SIZE}\" fill=\"{}\"><textPath href=\"#{id}p\" \
             startOffset=\"50%\" text-anchor=\"middle\">{DIRECTION_MARKER}</textPath></text>\n",
            link.stroke_color,
        ));
    }
    if let Some(label) = link_label(link, params) {
        let anchor = link.label_anchor();
        fragment.push_str(&format!(
            "<g id=\"{id}v\">\n<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
             dominant-baseline=\"text-after-edge\" font-size=\"{FONT_SIZE}\" \
             fill=\"{}\">{label}</text>\n</g>\n",
            anchor.x, anchor.y, link.text_color,
        ));
    }
    fragment.push_str("</g>\n");
    fragment
}

/// Animations taking a node from its `previous` snapshot to `current`.
/// Displacements are expressed relative to `initial`, the state the
/// instantiated markup encodes.
pub fn animate_node(
    current: &SceneNode,
    initial: &SceneNode,
    previous: &SceneNode,
    begin: u32,
    dur: u32,
) -> String {
    let id = current.svg_id();

    if current.is_deleted() {
        if previous.is_deleted() {
            return String::new();
        }
        return animate_attr(&id, "opacity", "1", "0", begin, dur);
    }

    let mut fragment = String::new();
    // the fade-in and any changes since instantiation are independent
    // blocks in the same step
    if current.is_created() {
        fragment.push_str(&animate_attr(&id, "opacity", "0", "1", begin, dur));
    }
    if current.center != previous.center {
        let from = Point::new(
            previous.center.x - initial.center.x,
            previous.center.y - initial.center.y,
        );
        let to = Point::new(
            current.center.x - initial.center.x,
            current.center.y - initial.center.y,
        );
        fragment.push_str(&animate_motion(&id, from, to, begin, dur));
    }
    if current.fill_color != previous.fill_color {
        let circle = format!("{id}c");
        fragment.push_str(&animate_attr(
            &circle,
            "fill",
            &previous.fill_color.to_string(),
            &current.fill_color.to_string(),
            begin,
            dur,
        ));
    }
    if current.stroke_color_tagged() != previous.stroke_color_tagged() {
        let circle = format!("{id}c");
        fragment.push_str(&animate_attr(
            &circle,
            "stroke",
            &previous.stroke_color_tagged().to_string(),
            &current.stroke_color_tagged().to_string(),
            begin,
            dur,
        ));
    }
    if current.stroke_width_tagged() != previous.stroke_width_tagged() {
        let circle = format!("{id}c");
        fragment.push_str(&animate_attr(
            &circle,
            "stroke-width",
            &previous.stroke_width_tagged().to_string(),
            &current.stroke_width_tagged().to_string(),
            begin,
            dur,
        ));
    }
    fragment
}

/// Animations taking a link from its `previous` snapshot to `current`.
pub fn animate_link(
    current: &SceneLink,
    initial: &SceneLink,
    previous: &SceneLink,
    begin: u32,
    dur: u32,
) -> String {
    let id = current.svg_id();

    if current.is_deleted() {
        if previous.is_deleted() {
            return String::new();
        }
        return animate_attr(&id, "opacity", "1", "0", begin, dur);
    }

    let mut fragment = String::new();
    if current.is_created() {
        fragment.push_str(&animate_attr(&id, "opacity", "0", "1", begin, dur));
    }
    if current.from_center != previous.from_center || current.to_center != previous.to_center {
        let path_id = format!("{id}p");
        fragment.push_str(&animate_attr(
            &path_id,
            "d",
            &previous.path(),
            &current.path(),
            begin,
            dur,
        ));
        if current.has_label {
            let label_id = format!("{id}v");
            let origin = initial.label_anchor();
            let prev = previous.label_anchor();
            let curr = current.label_anchor();
            fragment.push_str(&animate_motion(
                &label_id,
                Point::new(prev.x - origin.x, prev.y - origin.y),
                Point::new(curr.x - origin.x, curr.y - origin.y),
                begin,
                dur,
            ));
        }
    }
    if current.stroke_color_tagged() != previous.stroke_color_tagged() {
        let path_id = format!("{id}p");
        fragment.push_str(&animate_attr(
            &path_id,
            "stroke",
            &previous.stroke_color_tagged().to_string(),
            &current.stroke_color_tagged().to_string(),
            begin,
            dur,
        ));
    }
    if current.stroke_width_tagged() != previous.stroke_width_tagged() {
        let path_id = format!("{id}p");
        fragment.push_str(&animate_attr(
            &path_id,
            "stroke-width",
            &previous.stroke_width_tagged().to_string(),
            &current.stroke_width_tagged().to_string(),
            begin,
            dur,
        ));
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::common::Point;

    fn test_params() -> RenderParams {
        RenderParams::default()
    }

    #[test]
    fn test_node_fragment_hidden_with_label() {
        let params = test_params();
        let node = SceneNode::new(3, 'A', Some(7), Point::new(10, 20), false, &params);
        let fragment = node_fragment(&node, &params);
        assert!(fragment.starts_with("<g id=\"n3\" opacity=\"0\">"));
        assert!(fragment.contains("cx=\"10\" cy=\"20\" r=\"20\""));
        // default palette tags fresh nodes with the "created" stroke
        assert!(fragment.contains("stroke=\"rgb(0,0,255)\""));
        // value display is off by default
        assert!(fragment.contains(">A</text>"));
    }

    #[test]
    fn test_link_fragment_direction_marker() {
        let params = test_params();
        let one_way = SceneLink::new(
            2,
            'a',
            'A',
            'B',
            false,
            None,
            Point::new(0, 0),
            Point::new(100, 0),
            &params,
        );
        let fragment = link_fragment(&one_way, &params);
        assert!(fragment.contains("textPath"));
        assert!(fragment.contains("d=\"M 0 0 L 100 0 Z\""));

        let two_way = SceneLink::new(
            4,
            'b',
            'A',
            'B',
            true,
            Some(9),
            Point::new(0, 0),
            Point::new(100, 0),
            &params,
        );
        let fragment = link_fragment(&two_way, &params);
        assert!(!fragment.contains("textPath"));
        // link value shown at the midpoint by default
        assert!(fragment.contains(">9</text>"));
        assert!(fragment.contains("id=\"l4v\""));
    }

    #[test]
    fn test_animate_node_motion_relative_to_initial() {
        let params = test_params();
        let initial = SceneNode::new(1, 'A', None, Point::new(0, 0), false, &params);
        let mut previous = initial.clone();
        previous.tag = None;
        previous.center = Point::new(10, 0);
        let mut current = previous.clone();
        current.center = Point::new(25, -5);

        let fragment = animate_node(&current, &initial, &previous, 2000, 1000);
        assert!(fragment.contains("path=\"M 10 0 L 25 -5\""));
        assert!(fragment.contains("begin=\"2000ms\""));
        assert!(fragment.contains("dur=\"1000ms\""));
    }

    #[test]
    fn test_created_node_keeps_motion_in_first_step() {
        let params = test_params();
        let initial = SceneNode::new(1, 'A', None, Point::new(0, 0), false, &params);
        let previous = initial.clone();
        let mut current = initial.clone();
        current.center = Point::new(100, 100);

        let fragment = animate_node(&current, &initial, &previous, 0, 1000);
        assert!(fragment.contains("values=\"0;1\""));
        assert!(fragment.contains("path=\"M 0 0 L 100 100\""));
    }

    #[test]
    fn test_animate_node_deleted_only_fades_once() {
        let params = test_params();
        let initial = SceneNode::new(1, 'A', None, Point::new(0, 0), false, &params);
        let mut previous = initial.clone();
        previous.tag = None;
        let mut current = previous.clone();
        current.tag = Some(crate::render::tag::Tag::Deleted(params.color_tag_deleted));

        let fade = animate_node(&current, &initial, &previous, 0, 500);
        assert!(fade.contains("values=\"1;0\""));

        let again = animate_node(&current, &initial, &current.clone(), 500, 500);
        assert!(again.is_empty());
    }

    #[test]
    fn test_view_box_animation_targets_parent() {
        let from = Rect {
            x_min: 0,
            y_min: 0,
            x_max: 100,
            y_max: 100,
        };
        let to = from.grow(50);
        let fragment = animate_view_box(&from, &to, 1000, 300);
        assert!(!fragment.contains("href"));
        assert!(fragment.contains("values=\"0 0 100 100;-50 -50 200 200\""));
    }
}
