//! Opaque 2D affine transform carried on scene nodes.

use serde::Serialize;

/// A 2x3 affine matrix `[a, b, c, d, e, f]`.
///
/// Only identity is ever constructed by the scene builder; `transform`
/// attribute strings are recorded on the node but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transform(pub [f32; 6]);

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
