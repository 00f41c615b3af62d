pub mod camera;

pub use camera::{Camera2D, StretchMode};
