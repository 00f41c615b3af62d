// extensions/mod.rs
//
// The animation core: easing curves, value sources, tweens and sequences.
// Decoupled from the rest of the crate: consumers only feed time deltas
// and read values back.

pub mod easing;
pub mod sequence;
pub mod tween;
pub mod value;

pub use easing::{Easing, ease, lerp};
pub use sequence::{Sequence, SequenceCallback};
pub use tween::{Animate, Tween, TweenCallback};
pub use value::{FromTo, Tweenable, ValueSource, Wait};
