use serde::Serialize;
use std::fmt::{self, Display, Write};

///
/// PathSegment
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PathSegment {
    Empty,
    Field(&'static str),
    Index(usize),
}

impl From<&'static str> for PathSegment {
    fn from(s: &'static str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

///
/// Issue
///
/// A single validation failure with an addressable path. An empty path
/// addresses the pax list as a whole. Issues are plain data; consumers
/// pattern-match on the path instead of parsing the rendered string.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// An issue addressing the list as a whole.
    #[must_use]
    pub fn root(message: impl Into<String>) -> Self {
        Self::new(Vec::new(), message)
    }

    /// An issue addressing one field of the entry at `index`.
    #[must_use]
    pub fn at(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self::new(vec![index.into(), field.into()], message)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path
            .iter()
            .all(|seg| matches!(seg, PathSegment::Empty))
    }

    /// First list index addressed by this issue, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.path.iter().find_map(|seg| match seg {
            PathSegment::Index(i) => Some(*i),
            _ => None,
        })
    }

    /// First field name addressed by this issue, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        self.path.iter().find_map(|seg| match seg {
            PathSegment::Field(s) => Some(*s),
            _ => None,
        })
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", render_path(&self.path), self.message)
        }
    }
}

/// Render a path as `[index].field` for display and log output.
fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    let mut first = true;

    for seg in path {
        match seg {
            PathSegment::Field(s) => {
                if !first {
                    out.push('.');
                }
                out.push_str(s);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
            PathSegment::Empty => {}
        }
        first = false;
    }

    out
}

///
/// Issues
///
/// Ordered issue collector. Emission order is part of the engine contract,
/// so issues append in call order and are never deduplicated.
///

#[derive(Clone, Debug, Default)]
pub struct Issues(Vec<Issue>);

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    pub fn add_root(&mut self, message: impl Into<String>) {
        self.push(Issue::root(message));
    }

    pub fn add_at(&mut self, index: usize, field: &'static str, message: impl Into<String>) {
        self.push(Issue::at(index, field, message));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Issue> {
        self.0
    }
}

///
/// TESTS
///
