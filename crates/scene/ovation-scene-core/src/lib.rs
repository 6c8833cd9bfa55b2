//! ovation-scene-core: drawable store, transforms, geometry, layout
//!
//! The scene crate owns the hierarchy of visual objects and everything
//! geometric about them:
//! - `SceneStore`: arena of drawables with ordered children, lazy world
//!   transforms, bbox queries, subtree removal, snapshots
//! - `Geometry`/`PathData`/`Polyline`: polyline-based path payloads plus the
//!   arc-length toolkit (resampling, prefix extraction) used by morphs and
//!   reveal animations
//! - layout operators (`next_to`, `align_to`, `to_edge`, ...) that compute
//!   target transforms from bounding-box relationships
//! - `shapes`: explicit-style constructors for common primitives

pub mod bbox;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod shapes;
pub mod snapshot;
pub mod store;
pub mod transform;

pub use bbox::{BBox, Corner, Edge};
pub use drawable::{Drawable, Style};
pub use error::SceneError;
pub use geometry::{Geometry, PathData, Polyline};
pub use layout::{Frame, DEFAULT_BUFF};
pub use snapshot::{SceneSnapshot, SnapshotNode};
pub use store::SceneStore;

pub use ovation_api_core::{NodeId, Transform2D};
