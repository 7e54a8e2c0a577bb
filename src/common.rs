// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    NodeDoesNotExist,
    NodeAlreadyExists,
    LinkDoesNotExist,
    LinkAlreadyExists,
    SelfLoop,
    ParallelLink,
    BadLine,
    BadName,
    ExpectedNumber,
    ExpectedBool,
    BadJson,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            NodeDoesNotExist => "node_does_not_exist",
            NodeAlreadyExists => "node_already_exists",
            LinkDoesNotExist => "link_does_not_exist",
            LinkAlreadyExists => "link_already_exists",
            SelfLoop => "self_loop",
            ParallelLink => "parallel_link",
            BadLine => "bad_line",
            BadName => "bad_name",
            ExpectedNumber => "expected_number",
            ExpectedBool => "expected_bool",
            BadJson => "bad_json",
            Generic => "generic",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Structure,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Structure => "StructureError",
            ErrorKind::Parse => "ParseError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! structure_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(
            ErrorKind::Structure,
            ErrorCode::$code,
            Some($str),
        ))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Structure, ErrorCode::$code, None))
    }};
}

#[macro_export]
macro_rules! parse_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Parse, ErrorCode::$code, Some($str)))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Parse, ErrorCode::$code, None))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::new(
            ErrorKind::Structure,
            ErrorCode::NodeDoesNotExist,
            Some("node 'A'".to_string()),
        );
        assert_eq!(format!("{err}"), "StructureError{node_does_not_exist: node 'A'}");

        let err = Error::new(ErrorKind::Parse, ErrorCode::BadLine, None);
        assert_eq!(format!("{err}"), "ParseError{bad_line}");
    }

    #[test]
    fn test_err_macros() {
        let r: Result<()> = structure_err!(SelfLoop, "link 'a'".to_string());
        let err = r.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structure);
        assert_eq!(err.code, ErrorCode::SelfLoop);
        assert_eq!(err.get_details(), Some("link 'a'".to_string()));

        let r: Result<()> = parse_err!(ExpectedNumber);
        let err = r.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert!(err.get_details().is_none());
    }
}
