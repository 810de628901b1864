/// Spincube Core Library - The software rendering pipeline
///
/// This library provides the stateless core of the cube renderer: the cube
/// model, rotation and animation state, perspective projection, flat shading
/// and the per-frame pipeline that turns all of it into screen-space draw
/// commands. Putting pixels on an actual window is left to a frontend.

pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod shading;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Cube, Triangle};
pub use pipeline::{render, ShadedTriangle, View};
pub use projection::Projection;
pub use shading::Rgb;
pub use transform::{RotationAngles, Spin};
