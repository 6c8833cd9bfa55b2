//! Error type for store operations.

use ovation_api_core::NodeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneError {
    /// The operation targeted a node that is not currently owned by the store.
    #[error("invalid reference: node n{} is not in the store", .id.0)]
    InvalidReference { id: NodeId },
}
