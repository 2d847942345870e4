//! Fine-grained reactive signal system
//!
//! A push-pull reactive graph: signals push invalidation to their
//! subscribers, effects run when a signal they read changes. Folio uses this
//! as the ownership model for shared read-only state — one writer publishes
//! a value (for example the media snapshot), any number of consumers read it
//! or react to it, and nothing is duplicated per consumer.
//!
//! # State
//!
//! [`State<T>`] wraps a signal with thread-safe access to a shared graph and
//! is the surface most callers use:
//!
//! ```
//! use folio_core::reactive::{ReactiveGraph, State};
//! use std::sync::{Arc, Mutex};
//!
//! let graph = Arc::new(Mutex::new(ReactiveGraph::new()));
//! let width = State::create(&graph, 1280.0f32);
//!
//! assert_eq!(width.get(), 1280.0);
//! width.set(640.0);
//! assert_eq!(width.get(), 640.0);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
    /// Unique identifier for an effect
    pub struct EffectId;
}

/// A reactive signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }
}

/// An effect handle
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn id(&self) -> EffectId {
        self.id
    }
}

struct SignalNode {
    /// The signal value (type-erased)
    value: Box<dyn Any + Send>,
    /// Version counter for change detection
    version: u64,
    /// Effects to notify on change
    subscribers: SmallVec<[EffectId; 4]>,
}

struct EffectNode {
    /// The effect function; taken out of the node while running so the graph
    /// stays borrowable from inside the effect
    run: Option<Box<dyn FnMut(&ReactiveGraph) + Send>>,
    /// Signals this effect read on its last run
    dependencies: SmallVec<[SignalId; 4]>,
    /// Whether the effect needs to run
    dirty: bool,
}

/// The reactive graph that manages all signals and effects
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    effects: SlotMap<EffectId, EffectNode>,
    /// Effects queued to run
    pending_effects: VecDeque<EffectId>,
    /// Signals read while an effect is running (for auto-tracking)
    tracking: RefCell<Option<Vec<SignalId>>>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            pending_effects: VecDeque::new(),
            tracking: RefCell::new(None),
        }
    }

    // =========================================================================
    // SIGNALS
    // =========================================================================

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
            subscribers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    ///
    /// If called from inside a running effect, the signal is recorded as a
    /// dependency of that effect.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(ref mut deps) = *self.tracking.borrow_mut() {
            if !deps.contains(&signal.id) {
                deps.push(signal.id);
            }
        }

        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Get the current value without tracking as a dependency
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal, running subscribed effects
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        let subscribers = match self.signals.get_mut(signal.id) {
            Some(node) => {
                node.value = Box::new(value);
                node.version += 1;
                node.subscribers.clone()
            }
            None => {
                tracing::warn!(?signal.id, "set on a signal that no longer exists");
                return;
            }
        };

        for effect_id in subscribers {
            if let Some(node) = self.effects.get_mut(effect_id) {
                if !node.dirty {
                    node.dirty = true;
                    self.pending_effects.push_back(effect_id);
                }
            }
        }

        self.flush_effects();
    }

    /// Update a signal using a function
    pub fn update<T: Clone + Send + 'static, F: FnOnce(T) -> T>(
        &mut self,
        signal: Signal<T>,
        f: F,
    ) {
        if let Some(current) = self.get_untracked(signal) {
            self.set(signal, f(current));
        }
    }

    /// Get the version of a signal (for change detection)
    pub fn signal_version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|n| n.version)
    }

    // =========================================================================
    // EFFECTS
    // =========================================================================

    /// Create an effect that runs immediately and again whenever a signal it
    /// reads changes
    pub fn create_effect<F>(&mut self, run: F) -> Effect
    where
        F: FnMut(&ReactiveGraph) + Send + 'static,
    {
        let id = self.effects.insert(EffectNode {
            run: Some(Box::new(run)),
            dependencies: SmallVec::new(),
            dirty: true,
        });

        self.pending_effects.push_back(id);
        self.flush_effects();

        Effect { id }
    }

    /// Dispose of an effect, removing it from the graph
    pub fn dispose_effect(&mut self, effect: Effect) {
        if let Some(node) = self.effects.remove(effect.id) {
            for &dep_id in &node.dependencies {
                if let Some(sig) = self.signals.get_mut(dep_id) {
                    sig.subscribers.retain(|s| *s != effect.id);
                }
            }
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn flush_effects(&mut self) {
        while let Some(effect_id) = self.pending_effects.pop_front() {
            self.run_effect(effect_id);
        }
    }

    fn run_effect(&mut self, effect_id: EffectId) {
        // Take the closure out so the effect can read the graph while running
        let mut run = match self.effects.get_mut(effect_id) {
            Some(node) if node.dirty => {
                node.dirty = false;
                match node.run.take() {
                    Some(run) => run,
                    None => return,
                }
            }
            _ => return,
        };

        self.tracking.replace(Some(Vec::new()));
        run(self);
        let deps = self.tracking.take().unwrap_or_default();

        if let Some(node) = self.effects.get_mut(effect_id) {
            node.run = Some(run);

            // Re-point subscriptions at what the effect actually read
            for &dep_id in &node.dependencies {
                if let Some(sig) = self.signals.get_mut(dep_id) {
                    sig.subscribers.retain(|s| *s != effect_id);
                }
            }
            for &dep_id in &deps {
                if let Some(sig) = self.signals.get_mut(dep_id) {
                    if !sig.subscribers.contains(&effect_id) {
                        sig.subscribers.push(effect_id);
                    }
                }
            }
            node.dependencies = deps.into_iter().collect();
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// STATE - High-level API over a shared graph
// =============================================================================

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// A bound state value with direct get/set methods
///
/// Wraps a signal together with the shared graph it lives in. Cloning a
/// `State` hands out another reader/writer of the same signal; the value
/// itself is never duplicated.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    graph: SharedReactiveGraph,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a new signal in `graph` and bind it
    pub fn create(graph: &SharedReactiveGraph, initial: T) -> Self {
        let signal = graph.lock().unwrap().create_signal(initial);
        Self {
            signal,
            graph: Arc::clone(graph),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.graph
            .lock()
            .unwrap()
            .get_untracked(self.signal)
            .unwrap_or_default()
    }

    /// Get the current value, returning None if the signal is gone
    pub fn try_get(&self) -> Option<T> {
        self.graph.lock().unwrap().get_untracked(self.signal)
    }

    /// Set a new value, running subscribed effects
    pub fn set(&self, value: T) {
        self.graph.lock().unwrap().set(self.signal, value);
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.graph.lock().unwrap().update(self.signal, f);
    }

    /// Get the underlying signal (for effects that want to track it)
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }

    /// Get the shared graph this state lives in
    pub fn graph(&self) -> &SharedReactiveGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_create_get_set() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(0i32);
        assert_eq!(graph.get(count), Some(0));

        graph.set(count, 42);
        assert_eq!(graph.get(count), Some(42));
    }

    #[test]
    fn test_signal_update() {
        let mut graph = ReactiveGraph::new();

        let count = graph.create_signal(10i32);
        graph.update(count, |x| x + 5);
        assert_eq!(graph.get(count), Some(15));
    }

    #[test]
    fn test_effect_runs_on_change() {
        let mut graph = ReactiveGraph::new();
        let effect_runs = Arc::new(Mutex::new(Vec::new()));

        let count = graph.create_signal(0i32);
        let effect_runs_clone = effect_runs.clone();

        let _effect = graph.create_effect(move |g| {
            let val = g.get(count).unwrap_or(0);
            effect_runs_clone.lock().unwrap().push(val);
        });

        // Effect runs immediately
        assert_eq!(*effect_runs.lock().unwrap(), vec![0]);

        // Effect runs on signal change
        graph.set(count, 1);
        assert_eq!(*effect_runs.lock().unwrap(), vec![0, 1]);

        graph.set(count, 2);
        assert_eq!(*effect_runs.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_dispose_effect_stops_reruns() {
        let mut graph = ReactiveGraph::new();
        let effect_runs = Arc::new(Mutex::new(0));

        let count = graph.create_signal(0i32);
        let effect_runs_clone = effect_runs.clone();

        let effect = graph.create_effect(move |g| {
            let _val = g.get(count);
            *effect_runs_clone.lock().unwrap() += 1;
        });

        assert_eq!(*effect_runs.lock().unwrap(), 1);

        graph.set(count, 1);
        assert_eq!(*effect_runs.lock().unwrap(), 2);

        graph.dispose_effect(effect);

        graph.set(count, 2);
        assert_eq!(*effect_runs.lock().unwrap(), 2);
    }

    #[test]
    fn test_effect_tracks_only_what_it_reads() {
        let mut graph = ReactiveGraph::new();
        let effect_runs = Arc::new(Mutex::new(0));

        let a = graph.create_signal(1i32);
        let b = graph.create_signal(2i32);
        let effect_runs_clone = effect_runs.clone();

        let _effect = graph.create_effect(move |g| {
            let _a = g.get(a);
            *effect_runs_clone.lock().unwrap() += 1;
        });

        assert_eq!(*effect_runs.lock().unwrap(), 1);

        // `b` is not a dependency, so this must not rerun the effect
        graph.set(b, 20);
        assert_eq!(*effect_runs.lock().unwrap(), 1);

        graph.set(a, 10);
        assert_eq!(*effect_runs.lock().unwrap(), 2);
    }

    #[test]
    fn test_state_shared_across_clones() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let width = State::create(&graph, 1280.0f32);
        let reader = width.clone();

        width.set(640.0);
        assert_eq!(reader.get(), 640.0);
    }
}
