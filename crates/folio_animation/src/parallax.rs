//! Pointer-velocity parallax engine
//!
//! Converts the pointer-intent sampler's velocity into a smoothed visual
//! offset. Velocity updates retarget the engine; each scheduler step advances
//! the rendered offset toward the target by exponential smoothing. The step
//! is a fixed-timestep function decoupled from any real frame callback, so
//! tests can drive it directly.

use folio_core::Vec2;

/// Configuration for a parallax engine
///
/// All fields are clamped to safe ranges on construction rather than
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Velocity-to-offset gain
    pub strength: f32,
    /// Bound on the rendered offset, per axis, in pixels
    pub max_offset: f32,
    /// Per-step lerp factor toward the target
    pub smoothing: f32,
    /// When false the engine pins both target and offset at zero
    pub enabled: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            strength: 0.05,
            max_offset: 20.0,
            smoothing: 0.15,
            enabled: true,
        }
    }
}

impl ParallaxConfig {
    fn sanitized(self) -> Self {
        Self {
            strength: self.strength.max(0.0),
            max_offset: self.max_offset.max(0.0),
            smoothing: self.smoothing.clamp(0.0, 1.0),
            enabled: self.enabled,
        }
    }
}

/// The parallax offset engine
#[derive(Clone, Copy, Debug)]
pub struct Parallax {
    config: ParallaxConfig,
    target: Vec2,
    offset: Vec2,
}

impl Parallax {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config: config.sanitized(),
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
        }
    }

    /// Feed a velocity sample from the pointer-intent sampler
    ///
    /// Recomputes the target offset. When the engine is disabled, target and
    /// offset snap to zero immediately with no animation.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if !self.config.enabled {
            self.target = Vec2::ZERO;
            self.offset = Vec2::ZERO;
            return;
        }

        self.target = velocity
            .scale(self.config.strength * 100.0)
            .clamp_axes(self.config.max_offset);
    }

    /// Enable or disable the engine
    ///
    /// Disabling zeroes both target and offset within this call.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            self.target = Vec2::ZERO;
            self.offset = Vec2::ZERO;
        }
    }

    /// Advance one frame: lerp the rendered offset toward the target
    pub fn step(&mut self) {
        if !self.config.enabled {
            return;
        }
        self.offset = self.offset.lerp(self.target, self.config.smoothing);
    }

    /// The current rendered offset
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The current target offset
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Whether the offset has effectively reached its target
    pub fn is_settled(&self) -> bool {
        self.offset.approx_eq(self.target, 0.01)
    }

    /// Translation the renderer should apply, `(x, y)` in pixels
    pub fn translation(&self) -> (f32, f32) {
        (self.offset.x, self.offset.y)
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(ParallaxConfig::default())
    }
}
