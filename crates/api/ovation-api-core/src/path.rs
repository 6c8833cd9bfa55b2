//! AttrPath parsing and formatting.
//!
//! Grammar (simple, engine-agnostic):
//!   "n<id>.<attr>"  - a drawable attribute, e.g. "n7.opacity"
//!   "t<id>"         - a tracker value, e.g. "t3"
//!
//! Paths are the keys of the per-frame change stream. They are intentionally
//! compact and string-based so a viewer can index them without knowing the
//! engine's internal tables.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ids::{NodeId, TrackerId};

/// Animatable attribute of a drawable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Opacity,
    Stroke,
    Fill,
    StrokeWidth,
    Transform,
    Points,
}

impl Attr {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attr::Opacity => "opacity",
            Attr::Stroke => "stroke",
            Attr::Fill => "fill",
            Attr::StrokeWidth => "stroke_width",
            Attr::Transform => "transform",
            Attr::Points => "points",
        }
    }

    pub fn parse(s: &str) -> Option<Attr> {
        Some(match s {
            "opacity" => Attr::Opacity,
            "stroke" => Attr::Stroke,
            "fill" => Attr::Fill,
            "stroke_width" => Attr::StrokeWidth,
            "transform" => Attr::Transform,
            "points" => Attr::Points,
            _ => return None,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("invalid attr path: {0}")]
    Invalid(String),
}

/// Address of one animated quantity in the frame stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrPath {
    /// A drawable attribute, formatted "n<id>.<attr>".
    Node { node: NodeId, attr: Attr },
    /// A tracker value, formatted "t<id>".
    Tracker(TrackerId),
}

impl AttrPath {
    pub fn node(node: NodeId, attr: Attr) -> Self {
        AttrPath::Node { node, attr }
    }

    pub fn tracker(tracker: TrackerId) -> Self {
        AttrPath::Tracker(tracker)
    }

    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(rest) = s.strip_prefix('n') {
            let (id, attr) = rest
                .split_once('.')
                .ok_or_else(|| PathError::Invalid(format!("missing attr in {s:?}")))?;
            let id: u32 = id
                .parse()
                .map_err(|_| PathError::Invalid(format!("bad node id in {s:?}")))?;
            let attr = Attr::parse(attr)
                .ok_or_else(|| PathError::Invalid(format!("unknown attr in {s:?}")))?;
            Ok(AttrPath::Node {
                node: NodeId(id),
                attr,
            })
        } else if let Some(rest) = s.strip_prefix('t') {
            let id: u32 = rest
                .parse()
                .map_err(|_| PathError::Invalid(format!("bad tracker id in {s:?}")))?;
            Ok(AttrPath::Tracker(TrackerId(id)))
        } else {
            Err(PathError::Invalid(format!("unknown prefix in {s:?}")))
        }
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrPath::Node { node, attr } => write!(f, "n{}.{}", node.0, attr.as_str()),
            AttrPath::Tracker(t) => write!(f, "t{}", t.0),
        }
    }
}

impl FromStr for AttrPath {
    type Err = PathError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttrPath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string.
impl Serialize for AttrPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AttrPath {
    fn deserialize<D>(deserializer: D) -> Result<AttrPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AttrPath::parse(&s).map_err(de::Error::custom)
    }
}
