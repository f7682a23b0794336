//! Error types for scene operations.

use core::fmt;

use crate::link::LinkId;
use crate::node::NodeId;

/// Errors that can occur while building or editing a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Node handle was never issued, or the node has been culled.
    InvalidNode { id: NodeId },
    /// Link handle was never issued, or the link has been culled.
    InvalidLink { id: LinkId },
    /// The grid builder already populated this scene.
    AlreadyPopulated,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidNode { id } => write!(f, "{} is not a live node of this scene", id),
            SceneError::InvalidLink { id } => write!(f, "{} is not a live link of this scene", id),
            SceneError::AlreadyPopulated => write!(f, "scene has already been populated"),
        }
    }
}

impl core::error::Error for SceneError {}
