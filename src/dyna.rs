// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The dyna text format, a line-oriented serialization of a graph:
//!
//! ```text
//! N A 10 -40 3
//! N B _ _ _
//! L a A B true _
//! ```
//!
//! `N` lines declare nodes (name, x, y, value), `L` lines declare links
//! (name, from, to, bidirectional, value).  `_` stands for "absent";
//! coordinates are present only for nodes pinned to a fixed position.
//! Blank lines are ignored.

use crate::common::Result;
use crate::parse_err;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Node {
        name: char,
        position: Option<(i32, i32)>,
        value: Option<u8>,
    },
    Link {
        name: char,
        from: char,
        to: char,
        bidirectional: bool,
        value: Option<u8>,
    },
}

pub fn parse(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            ["N", name, x, y, value] => {
                let name = parse_name(name)?;
                let position = match (parse_coord(x)?, parse_coord(y)?) {
                    (Some(x), Some(y)) => Some((x, y)),
                    (None, None) => None,
                    _ => {
                        return parse_err!(
                            BadLine,
                            format!("node '{name}' has only one coordinate")
                        );
                    }
                };
                let value = parse_value(value)?;
                records.push(Record::Node {
                    name,
                    position,
                    value,
                });
            }
            ["L", name, from, to, bidirectional, value] => {
                records.push(Record::Link {
                    name: parse_name(name)?,
                    from: parse_name(from)?,
                    to: parse_name(to)?,
                    bidirectional: parse_bool(bidirectional)?,
                    value: parse_value(value)?,
                });
            }
            _ => {
                return parse_err!(BadLine, format!("unrecognized line: '{line}'"));
            }
        }
    }
    Ok(records)
}

pub fn serialize(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        match record {
            Record::Node {
                name,
                position,
                value,
            } => {
                let (x, y) = match position {
                    Some((x, y)) => (x.to_string(), y.to_string()),
                    None => ("_".to_string(), "_".to_string()),
                };
                out.push_str(&format!("N {name} {x} {y} {}\n", opt(value)));
            }
            Record::Link {
                name,
                from,
                to,
                bidirectional,
                value,
            } => {
                out.push_str(&format!(
                    "L {name} {from} {to} {bidirectional} {}\n",
                    opt(value)
                ));
            }
        }
    }
    out
}

fn opt(value: &Option<u8>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "_".to_string(),
    }
}

fn parse_name(field: &str) -> Result<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => parse_err!(BadName, format!("'{field}' is not a single character")),
    }
}

fn parse_coord(field: &str) -> Result<Option<i32>> {
    if field == "_" {
        return Ok(None);
    }
    match field.parse::<i32>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => parse_err!(ExpectedNumber, format!("bad coordinate '{field}'")),
    }
}

fn parse_value(field: &str) -> Result<Option<u8>> {
    if field == "_" {
        return Ok(None);
    }
    match field.parse::<u8>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => parse_err!(ExpectedNumber, format!("bad value '{field}'")),
    }
}

fn parse_bool(field: &str) -> Result<bool> {
    match field {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => parse_err!(ExpectedBool, format!("bad flag '{field}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorCode;

    #[test]
    fn test_parse_nodes_and_links() {
        let text = "N A 10 -40 3\nN B _ _ _\n\nL a A B true _\n";
        let records = parse(text).unwrap();
        assert_eq!(
            records,
            vec![
                Record::Node {
                    name: 'A',
                    position: Some((10, -40)),
                    value: Some(3),
                },
                Record::Node {
                    name: 'B',
                    position: None,
                    value: None,
                },
                Record::Link {
                    name: 'a',
                    from: 'A',
                    to: 'B',
                    bidirectional: true,
                    value: None,
                },
            ]
        );
    }

    #[test]
    fn test_serialize_round_trips() {
        let records = vec![
            Record::Node {
                name: 'A',
                position: Some((-7, 0)),
                value: None,
            },
            Record::Link {
                name: 'z',
                from: 'A',
                to: 'A',
                bidirectional: false,
                value: Some(255),
            },
        ];
        let text = serialize(&records);
        assert_eq!(text, "N A -7 0 _\nL z A A false 255\n");
        assert_eq!(parse(&text).unwrap(), records);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert_eq!(parse("X A 1 2 3").unwrap_err().code, ErrorCode::BadLine);
        assert_eq!(parse("N A 1 2").unwrap_err().code, ErrorCode::BadLine);
        assert_eq!(parse("N AB _ _ _").unwrap_err().code, ErrorCode::BadName);
        assert_eq!(parse("N A 1 _ _").unwrap_err().code, ErrorCode::BadLine);
        assert_eq!(
            parse("N A _ _ 999").unwrap_err().code,
            ErrorCode::ExpectedNumber
        );
        assert_eq!(
            parse("L a A B yes _").unwrap_err().code,
            ErrorCode::ExpectedBool
        );
    }
}
