pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod assets;
pub mod error;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, GameContext};
pub use assets::manifest::{AnimationManifest, SequenceDescriptor, TweenDescriptor, ValueDescriptor};
pub use crate::core::score::ScoreBoard;
pub use crate::core::time::FrameClock;
pub use error::ConfigError;
pub use renderer::camera::{Camera2D, StretchMode};
pub use systems::parallax::{tick_parallax, ParallaxLayer};

// Extensions: the animation core
pub use extensions::{
    Easing, lerp, ease,
    Animate, Tween, TweenCallback, FromTo, Wait, Tweenable, ValueSource,
    Sequence, SequenceCallback,
};
