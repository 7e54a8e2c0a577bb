// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! JSON snapshot of a graph's structure.  Carries the same information
//! as the dyna format for interchange with non-line-oriented tooling.

use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: char,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<u8>,
    /// Present only for nodes pinned to a fixed position.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<(i32, i32)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub name: char,
    pub from: char,
    pub to: char,
    #[serde(skip_serializing_if = "is_false", default)]
    pub bidirectional: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization_skips_defaults() {
        let snapshot = Snapshot {
            nodes: vec![
                NodeRecord {
                    name: 'A',
                    value: Some(3),
                    position: Some((10, -40)),
                },
                NodeRecord {
                    name: 'B',
                    value: None,
                    position: None,
                },
            ],
            links: vec![LinkRecord {
                name: 'a',
                from: 'A',
                to: 'B',
                bidirectional: false,
                value: None,
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("bidirectional"));
        assert!(json.contains("\"position\":[10,-40]"));

        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_snapshot_accepts_missing_sections() {
        let parsed: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(parsed.nodes.is_empty());
        assert!(parsed.links.is_empty());
    }
}
