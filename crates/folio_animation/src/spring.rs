//! Spring physics animation
//!
//! RK4-integrated spring physics for the interaction transitions. The preset
//! configurations carry the tunings the variant generators reference.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Card hover lift (snappy with a hint of overshoot)
    pub fn card_hover() -> Self {
        Self {
            stiffness: 350.0,
            damping: 28.0,
            mass: 1.0,
        }
    }

    /// Magnetic pointer-follow effect (looser tracking)
    pub fn magnetic() -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
        }
    }

    /// Modal panel entrance (heavily damped scale/translate settle)
    pub fn modal_entrance() -> Self {
        Self {
            stiffness: 260.0,
            damping: 25.0,
            mass: 1.0,
        }
    }

    /// Text reveal drop-in
    pub fn text_reveal() -> Self {
        Self {
            stiffness: 120.0,
            damping: 16.0,
            mass: 1.0,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::card_hover()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget mid-flight; current velocity is inherited
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to a value immediately, killing velocity
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        // Within 0.05px at under 0.5px/s is imperceptible for hover/press offsets
        const EPSILON: f32 = 0.05;
        const VELOCITY_EPSILON: f32 = 0.5;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::card_hover(), 0.0);
        spring.set_target(-6.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - -6.0).abs() < 0.1);
    }

    #[test]
    fn test_spring_inherits_velocity_on_retarget() {
        let mut spring = Spring::new(SpringConfig::magnetic(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_set_immediate_kills_motion() {
        let mut spring = Spring::new(SpringConfig::magnetic(), 0.0);
        spring.set_target(40.0);
        for _ in 0..5 {
            spring.step(1.0 / 60.0);
        }

        spring.set_immediate(0.0);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_interaction_presets_are_underdamped() {
        assert!(SpringConfig::magnetic().is_underdamped());
        assert!(SpringConfig::card_hover().is_underdamped());
        assert!(SpringConfig::text_reveal().is_underdamped());
    }

    #[test]
    fn test_spring_rk4_stability_with_large_steps() {
        let mut spring = Spring::new(SpringConfig::card_hover(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
