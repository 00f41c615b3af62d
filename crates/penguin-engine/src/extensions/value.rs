// extensions/value.rs
//
// Value sources: how a tween turns its progress into a typed value.
// A tween is generic over its source, so new kinds of output plug in
// without touching the progress/completion machinery.

use glam::{Vec2, Vec3, Vec4};

use super::easing::lerp;

/// A value type that can be linearly interpolated.
pub trait Tweenable: Copy + Default + std::fmt::Debug + 'static {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Tweenable for f32 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        lerp(from, to, t)
    }
}

impl Tweenable for Vec2 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Tweenable for Vec3 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Tweenable for Vec4 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

/// Produces a tween's output for a given progress.
///
/// Called twice per progress change: once with the raw progress (for
/// `value_raw`) and once with the eased progress (for `value`).
pub trait ValueSource<T> {
    fn sample(&self, progress: f32, duration: f32) -> T;
}

/// Linear interpolation between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FromTo<T> {
    pub from: T,
    pub to: T,
}

impl<T> FromTo<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

impl<T: Tweenable> ValueSource<T> for FromTo<T> {
    #[inline]
    fn sample(&self, progress: f32, _duration: f32) -> T {
        T::lerp(self.from, self.to, progress)
    }
}

/// Duration-only source: reads out the elapsed seconds.
///
/// Used as a timer or as a pause between the elements of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wait;

impl ValueSource<f32> for Wait {
    #[inline]
    fn sample(&self, progress: f32, duration: f32) -> f32 {
        progress * duration
    }
}
