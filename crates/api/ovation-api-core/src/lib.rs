//! ovation-api-core: shared value & path vocabulary (core, engine-agnostic)
//!
//! The api crate is the leaf of the workspace: identifiers, the `Value`
//! runtime type, the `AttrPath` addressing scheme used by the frame stream,
//! and kind-specific linear blending. Scene and animation crates build on it.

pub mod ids;
pub mod lerp;
pub mod path;
pub mod value;

pub use ids::{BindingId, IdAllocator, NodeId, TrackerId};
pub use lerp::{lerp_f32, lerp_rgba, lerp_transform, lerp_value, lerp_vec2};
pub use path::{Attr, AttrPath, PathError};
pub use value::{Transform2D, Value, ValueKind};
