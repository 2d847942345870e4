//! Device capability probe
//!
//! One process-wide media snapshot, published by the platform integration
//! and read by every motion consumer. The snapshot lives in a reactive
//! signal so consumers can subscribe instead of polling; none of them write
//! it back — strictly read-only fan-out.

use folio_core::reactive::{SharedReactiveGraph, State};

/// Upper bound of the mobile breakpoint, in CSS pixels
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
/// Upper bound of the tablet breakpoint, in CSS pixels
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

/// Raw global media state, as reported by the platform
///
/// `viewport_width` is `None` when the platform cannot report media state;
/// classification then degrades to "no match" rather than guessing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MediaSnapshot {
    /// Current viewport width in CSS pixels, if known
    pub viewport_width: Option<f32>,
    /// Whether the user prefers reduced motion
    pub reduced_motion: bool,
}

impl MediaSnapshot {
    pub fn new(viewport_width: f32, reduced_motion: bool) -> Self {
        Self {
            viewport_width: Some(viewport_width),
            reduced_motion,
        }
    }
}

/// Derived device classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceClass {
    /// Viewport width <= 768
    pub is_mobile: bool,
    /// Viewport width in 769..=1024
    pub is_tablet: bool,
    /// Viewport width >= 1025
    pub is_desktop: bool,
    /// User prefers reduced motion
    pub prefers_reduced_motion: bool,
}

impl DeviceClass {
    /// Classify a media snapshot against the breakpoints
    pub fn from_snapshot(snapshot: MediaSnapshot) -> Self {
        let (is_mobile, is_tablet, is_desktop) = match snapshot.viewport_width {
            Some(width) => (
                width <= MOBILE_MAX_WIDTH,
                width > MOBILE_MAX_WIDTH && width <= TABLET_MAX_WIDTH,
                width > TABLET_MAX_WIDTH,
            ),
            // No media support: no size class matches
            None => (false, false, false),
        };

        Self {
            is_mobile,
            is_tablet,
            is_desktop,
            prefers_reduced_motion: snapshot.reduced_motion,
        }
    }

    /// A desktop classification (handy default for hosts and tests)
    pub fn desktop() -> Self {
        Self {
            is_desktop: true,
            ..Default::default()
        }
    }

    /// A mobile classification
    pub fn mobile() -> Self {
        Self {
            is_mobile: true,
            ..Default::default()
        }
    }

    /// A tablet classification
    pub fn tablet() -> Self {
        Self {
            is_tablet: true,
            ..Default::default()
        }
    }

    /// Set the reduced-motion preference
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = reduced;
        self
    }
}

/// The shared probe: platform writes, everyone else reads
#[derive(Clone)]
pub struct DeviceProbe {
    state: State<MediaSnapshot>,
}

impl DeviceProbe {
    /// Create the probe in the shared reactive graph
    pub fn new(graph: &SharedReactiveGraph) -> Self {
        Self {
            state: State::create(graph, MediaSnapshot::default()),
        }
    }

    /// Publish a full snapshot (platform integration only)
    pub fn publish(&self, snapshot: MediaSnapshot) {
        tracing::trace!(
            width = ?snapshot.viewport_width,
            reduced_motion = snapshot.reduced_motion,
            "media snapshot published"
        );
        self.state.set(snapshot);
    }

    /// Update just the viewport width
    pub fn set_viewport_width(&self, width: f32) {
        self.state.update(|mut snapshot| {
            snapshot.viewport_width = Some(width);
            snapshot
        });
    }

    /// Update just the reduced-motion preference
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.state.update(|mut snapshot| {
            snapshot.reduced_motion = reduced;
            snapshot
        });
    }

    /// The current raw snapshot
    pub fn snapshot(&self) -> MediaSnapshot {
        self.state.get()
    }

    /// The current classification
    pub fn class(&self) -> DeviceClass {
        DeviceClass::from_snapshot(self.snapshot())
    }

    /// The underlying state, for consumers that want to subscribe via an
    /// effect rather than poll
    pub fn state(&self) -> &State<MediaSnapshot> {
        &self.state
    }
}
