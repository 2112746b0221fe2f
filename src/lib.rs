//! Quaternion algebra and axis-angle rotation of 3D points.

mod quaternion;
mod rotation;
mod vector;
pub mod config;
pub mod error;

pub use crate::quaternion::Quaternion;
pub use crate::rotation::{rotate, rotate_fast, rotate_normalized};
pub use crate::vector::Vec3;
