//! Animation scheduler
//!
//! Owns all active engines and advances them each frame. Engines are
//! implicitly registered when created through wrapper types:
//! - `AnimatedSpring` - spring-based physics values
//! - `AnimatedTypewriter` - typewriter text sequencers
//! - `AnimatedParallax` - pointer-velocity parallax engines
//!
//! Registration lives exactly as long as the wrapper: dropping a wrapper
//! removes its engine, so a tick can never mutate state whose owner is gone.
//! `advance(dt_ms)` is the single tick port — production pacing comes from
//! the background thread or the host's frame loop, tests drive it with a
//! virtual clock.

use crate::parallax::{Parallax, ParallaxConfig};
use crate::spring::{Spring, SpringConfig};
use crate::typewriter::{Typewriter, TypewriterConfig, TypewriterSnapshot};
use folio_core::Vec2;
use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered spring
    pub struct SpringId;
    /// Handle to a registered typewriter sequencer
    pub struct TypewriterId;
    /// Handle to a registered parallax engine
    pub struct ParallaxId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    typewriters: SlotMap<TypewriterId, Typewriter>,
    parallaxes: SlotMap<ParallaxId, Parallax>,
    last_frame: Instant,
}

impl SchedulerInner {
    /// Advance every registered engine by `dt_ms`
    ///
    /// One call is one scheduler frame: springs integrate over the elapsed
    /// time, typewriters catch up transition by transition, parallax engines
    /// take one smoothing step.
    fn advance(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;

        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, typewriter) in self.typewriters.iter_mut() {
            typewriter.tick(dt_ms);
        }
        for (_, parallax) in self.parallaxes.iter_mut() {
            parallax.step();
        }
    }

    /// Whether anything still needs another frame
    fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
            || self.parallaxes.iter().any(|(_, p)| !p.is_settled())
            // A typewriter is perpetual while registered (cursor blink)
            || !self.typewriters.is_empty()
    }
}

/// Callback for waking up the host's event loop from the animation thread
pub type WakeCallback = Arc<dyn Fn() + Send + Sync>;

/// The animation scheduler that ticks all active engines
///
/// Typically held by the application context and shared via
/// [`SchedulerHandle`]. Engines register themselves implicitly when created.
///
/// # Background Thread Mode
///
/// The scheduler can run on its own background thread via
/// `start_background()`, so animations keep advancing while the host event
/// loop is idle.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    /// Stop signal for the background thread
    stop_flag: Arc<AtomicBool>,
    /// Set by the background thread when a redraw is needed
    needs_redraw: Arc<AtomicBool>,
    /// Request continuous redraws even with no settling animations
    continuous_redraw: Arc<AtomicBool>,
    /// Background thread handle (if running)
    thread_handle: Option<JoinHandle<()>>,
    /// Optional callback to wake up the host event loop
    wake_callback: Option<WakeCallback>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                typewriters: SlotMap::with_key(),
                parallaxes: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            needs_redraw: Arc::new(AtomicBool::new(false)),
            continuous_redraw: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            wake_callback: None,
        }
    }

    /// Set a wake callback invoked from the background thread when engines
    /// are active
    pub fn set_wake_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake_callback = Some(Arc::new(callback));
    }

    /// Start the scheduler on a background thread at 120fps
    ///
    /// The thread sets the `needs_redraw` flag whenever there are active
    /// engines; the host should call `take_needs_redraw()` each loop
    /// iteration and request a redraw when it returns true.
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        let needs_redraw = Arc::clone(&self.needs_redraw);
        let continuous_redraw = Arc::clone(&self.continuous_redraw);
        let wake_callback = self.wake_callback.clone();

        self.thread_handle = Some(thread::spawn(move || {
            let frame_duration = Duration::from_micros(1_000_000 / 120);

            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();

                let wants_continuous = continuous_redraw.load(Ordering::Relaxed);

                let has_active = {
                    let mut inner = inner.lock().unwrap();
                    let now = Instant::now();
                    let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
                    inner.last_frame = now;
                    inner.advance(dt_ms);
                    inner.has_active()
                };

                if has_active || wants_continuous {
                    needs_redraw.store(true, Ordering::Release);

                    if let Some(ref callback) = wake_callback {
                        // Log once per second at 120fps to avoid spam
                        static COUNTER: std::sync::atomic::AtomicU64 =
                            std::sync::atomic::AtomicU64::new(0);
                        let count = COUNTER.fetch_add(1, Ordering::Relaxed);
                        if count % 120 == 0 {
                            tracing::debug!(
                                "Animation thread: waking event loop (continuous={}, active={})",
                                wants_continuous,
                                has_active
                            );
                        }
                        callback();
                    }
                }

                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        }));
    }

    /// Stop the background thread
    pub fn stop_background(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
    }

    /// Check if the background thread is running
    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Check and clear the needs_redraw flag in one atomic swap
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Acquire)
    }

    /// Manually request a redraw
    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Enable continuous redraw mode
    ///
    /// Use for features that need regular redraws without a settling
    /// animation, such as the typewriter cursor blink.
    pub fn set_continuous_redraw(&self, enabled: bool) {
        tracing::debug!("AnimationScheduler: set_continuous_redraw({})", enabled);
        self.continuous_redraw.store(enabled, Ordering::Release);
    }

    /// Check if continuous redraw mode is enabled
    pub fn is_continuous_redraw(&self) -> bool {
        self.continuous_redraw.load(Ordering::Relaxed)
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all engines by an explicit time slice
    ///
    /// This is the virtual-clock entry point: the wall-clock `tick()` and the
    /// background thread both funnel through the same per-engine updates.
    pub fn advance(&self, dt_ms: f32) {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        inner.advance(dt_ms);
    }

    /// Advance all engines by the wall-clock time since the last frame
    ///
    /// Returns true if any engine still needs another tick.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        inner.advance(dt_ms);
        inner.has_active()
    }

    /// Check if any engines are still active
    pub fn has_active_animations(&self) -> bool {
        self.inner.lock().unwrap().has_active()
    }

    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    pub fn typewriter_count(&self) -> usize {
        self.inner.lock().unwrap().typewriters.len()
    }

    pub fn parallax_count(&self) -> usize {
        self.inner.lock().unwrap().parallaxes.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.stop_background();
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register engines. It won't prevent the
/// scheduler from being dropped; operations after that are silent no-ops.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Spring Operations
    // =========================================================================

    /// Register a spring and return its ID
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame so a new spring doesn't integrate a huge dt
            guard.last_frame = Instant::now();
            guard.springs.insert(spring)
        })
    }

    /// Update a spring's target
    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().unwrap().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    /// Get the current spring value
    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.value()))
    }

    /// Check if a spring has settled
    ///
    /// A missing spring counts as settled: nothing is animating.
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .springs
                    .get(id)
                    .map(|s| s.is_settled())
            })
            .unwrap_or(true)
    }

    /// Remove a spring
    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().springs.remove(id);
        }
    }

    // =========================================================================
    // Typewriter Operations
    // =========================================================================

    /// Register a typewriter and return its ID
    pub fn register_typewriter(&self, typewriter: Typewriter) -> Option<TypewriterId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().typewriters.insert(typewriter))
    }

    /// Snapshot a typewriter for rendering
    pub fn typewriter_snapshot(&self, id: TypewriterId) -> Option<TypewriterSnapshot> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .typewriters
                .get(id)
                .map(|t| t.snapshot())
        })
    }

    /// Remove a typewriter
    pub fn remove_typewriter(&self, id: TypewriterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().typewriters.remove(id);
        }
    }

    // =========================================================================
    // Parallax Operations
    // =========================================================================

    /// Register a parallax engine and return its ID
    pub fn register_parallax(&self, parallax: Parallax) -> Option<ParallaxId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().parallaxes.insert(parallax))
    }

    /// Feed a velocity sample to a parallax engine
    pub fn set_parallax_velocity(&self, id: ParallaxId, velocity: Vec2) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(parallax) = inner.lock().unwrap().parallaxes.get_mut(id) {
                parallax.set_velocity(velocity);
            }
        }
    }

    /// Enable or disable a parallax engine
    pub fn set_parallax_enabled(&self, id: ParallaxId, enabled: bool) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(parallax) = inner.lock().unwrap().parallaxes.get_mut(id) {
                parallax.set_enabled(enabled);
            }
        }
    }

    /// Get a parallax engine's current offset
    pub fn parallax_offset(&self, id: ParallaxId) -> Option<Vec2> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .parallaxes
                .get(id)
                .map(|p| p.offset())
        })
    }

    /// Remove a parallax engine
    pub fn remove_parallax(&self, id: ParallaxId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().parallaxes.remove(id);
        }
    }
}

// =============================================================================
// Wrapper types - registration scoped to ownership
// =============================================================================

/// A spring registered with the scheduler for its lifetime
pub struct AnimatedSpring {
    handle: SchedulerHandle,
    id: Option<SpringId>,
}

impl AnimatedSpring {
    pub fn new(handle: &SchedulerHandle, config: SpringConfig, initial: f32) -> Self {
        let id = handle.register_spring(Spring::new(config, initial));
        Self {
            handle: handle.clone(),
            id,
        }
    }

    /// Retarget the spring
    pub fn set_target(&self, target: f32) {
        if let Some(id) = self.id {
            self.handle.set_spring_target(id, target);
        }
    }

    /// Current value, or the last known if the scheduler is gone
    pub fn get(&self) -> Option<f32> {
        self.id.and_then(|id| self.handle.get_spring_value(id))
    }

    pub fn is_settled(&self) -> bool {
        self.id
            .map(|id| self.handle.is_spring_settled(id))
            .unwrap_or(true)
    }
}

impl Drop for AnimatedSpring {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove_spring(id);
        }
    }
}

/// A typewriter sequencer registered with the scheduler for its lifetime
///
/// Dropping this wrapper deregisters the sequencer, which is the liveness
/// guard: no scheduler tick can advance a sequencer whose owner is gone.
pub struct AnimatedTypewriter {
    handle: SchedulerHandle,
    id: Option<TypewriterId>,
}

impl AnimatedTypewriter {
    pub fn new(handle: &SchedulerHandle, config: TypewriterConfig) -> Self {
        let id = handle.register_typewriter(Typewriter::new(config));
        Self {
            handle: handle.clone(),
            id,
        }
    }

    /// Snapshot for the rendering consumer
    pub fn snapshot(&self) -> Option<TypewriterSnapshot> {
        self.id.and_then(|id| self.handle.typewriter_snapshot(id))
    }
}

impl Drop for AnimatedTypewriter {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove_typewriter(id);
        }
    }
}

/// A parallax engine registered with the scheduler for its lifetime
pub struct AnimatedParallax {
    handle: SchedulerHandle,
    id: Option<ParallaxId>,
}

impl AnimatedParallax {
    pub fn new(handle: &SchedulerHandle, config: ParallaxConfig) -> Self {
        let id = handle.register_parallax(Parallax::new(config));
        Self {
            handle: handle.clone(),
            id,
        }
    }

    /// Feed a velocity sample from the pointer-intent sampler
    pub fn set_velocity(&self, velocity: Vec2) {
        if let Some(id) = self.id {
            self.handle.set_parallax_velocity(id, velocity);
        }
    }

    /// Enable or disable; disabling zeroes the offset immediately
    pub fn set_enabled(&self, enabled: bool) {
        if let Some(id) = self.id {
            self.handle.set_parallax_enabled(id, enabled);
        }
    }

    /// Current rendered offset
    pub fn offset(&self) -> Option<Vec2> {
        self.id.and_then(|id| self.handle.parallax_offset(id))
    }
}

impl Drop for AnimatedParallax {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove_parallax(id);
        }
    }
}
