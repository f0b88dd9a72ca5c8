//! Core shared types: math re-exports, errors, Placement.

pub use glam::{Vec2, Vec3, vec2, vec3};

pub mod placement;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Scale must be finite, got {0}")]
    NonFiniteScale(f32),
    #[error("Offset must be finite, got {0}")]
    NonFiniteOffset(Vec3),
    #[error("Fit size must be positive and finite, got {0}")]
    InvalidFitSize(f32),
}

pub type CoreResult<T> = Result<T, CoreError>;
