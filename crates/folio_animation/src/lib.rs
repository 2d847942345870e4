//! Folio Animation System
//!
//! Timing and interaction engines behind the Folio presentation layer.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Easing**: timing curves for tweened transitions
//! - **Typewriter Sequencer**: type/pause/delete text cycling with a blinking
//!   cursor, driven through an explicit tick port
//! - **Parallax Engine**: pointer-velocity driven offset with clamped targets
//!   and per-step smoothing
//! - **Scheduler**: owns registered engines, advances them per frame, and
//!   drops registrations with their owners

pub mod easing;
pub mod parallax;
pub mod scheduler;
pub mod spring;
pub mod typewriter;

pub use easing::Easing;
pub use parallax::{Parallax, ParallaxConfig};
pub use scheduler::{
    AnimatedParallax, AnimatedSpring, AnimatedTypewriter, AnimationScheduler, ParallaxId,
    SchedulerHandle, SpringId, TypewriterId,
};
pub use spring::{Spring, SpringConfig};
pub use typewriter::{Typewriter, TypewriterConfig, TypewriterPhase, TypewriterSnapshot};
