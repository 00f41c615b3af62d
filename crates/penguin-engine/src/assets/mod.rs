pub mod manifest;

pub use manifest::{AnimationManifest, SequenceDescriptor, TweenDescriptor, ValueDescriptor};
