use glam::Vec2;

/// A scrolling background layer.
///
/// The host samples its texture at `offset`; only the offset is tracked
/// here. Distant layers use a smaller `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// Base scroll speed in texture widths per second.
    pub velocity: Vec2,
    /// Per-axis depth factor applied to `velocity`.
    pub multiplier: Vec2,
    /// Current texture offset, kept in (-1, 1) per axis.
    pub offset: Vec2,
}

impl ParallaxLayer {
    pub fn new(velocity: Vec2, multiplier: Vec2) -> Self {
        Self {
            velocity,
            multiplier,
            offset: Vec2::ZERO,
        }
    }

    /// Scroll by `dt` seconds, wrapping the offset.
    pub fn tick(&mut self, dt: f32) {
        let offset = self.offset + self.velocity * self.multiplier * dt;
        self.offset = Vec2::new(offset.x % 1.0, offset.y % 1.0);
    }
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }
}

/// Scroll every layer by `dt` seconds.
pub fn tick_parallax(layers: &mut [ParallaxLayer], dt: f32) {
    for layer in layers.iter_mut() {
        layer.tick(dt);
    }
}
