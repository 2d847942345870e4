//! Folio Core Runtime
//!
//! Shared foundations for the Folio motion/interaction crates:
//!
//! - **Reactive signals**: a push-pull signal graph with effects, used as the
//!   single process-wide source of truth for shared state such as the device
//!   media snapshot
//! - **Geometry**: the small 2D vector surface the engines need
//! - **Input**: keyboard and pointer event types at the UI boundary

pub mod geometry;
pub mod input;
pub mod reactive;

pub use geometry::Vec2;
pub use input::{Key, KeyState, KeyboardEvent, PointerButton, PointerSample};
pub use reactive::{Effect, ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State};
