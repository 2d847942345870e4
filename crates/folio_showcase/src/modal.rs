//! Project modal state machine
//!
//! Holds the open/closed state, the active project, and the carousel image
//! index, and maps input events onto them:
//!
//! - `Escape` closes
//! - `ArrowLeft`/`ArrowRight` navigate the project list, no-op at the
//!   boundaries, and reset the carousel to the first image
//! - `ArrowUp`/`ArrowDown` cycle the carousel, wrapping at both ends
//! - clicks on the backdrop close; clicks on the content area do nothing;
//!   clicks on an indicator dot jump straight to that image
//!
//! The machine also produces the entrance descriptors for the backdrop and
//! panel so the renderer animates them consistently with the rest of the
//! motion library.

use folio_animation::SpringConfig;
use folio_core::input::{Key, KeyState, KeyboardEvent};
use folio_motion::{DeviceClass, EntranceVariants, Len, MotionTarget, Transition};

use crate::project::ProjectRecord;

/// Backdrop fade duration, in seconds
const BACKDROP_FADE_S: f32 = 0.3;
/// Panel entrance duration; shorter when the preview is already warm
const PANEL_ENTRANCE_S: f32 = 0.3;
const PANEL_ENTRANCE_WARM_S: f32 = 0.25;

/// Where a pointer click landed, relative to the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Outside the content area
    Backdrop,
    /// On the panel itself
    Content,
    /// On a carousel indicator dot
    Indicator(usize),
}

/// The modal over an ordered project catalog
#[derive(Debug)]
pub struct ProjectModal {
    projects: Vec<ProjectRecord>,
    open: bool,
    current_index: usize,
    image_index: usize,
    /// Whether the project preview was already loaded before opening
    preview_ready: bool,
}

impl ProjectModal {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects,
            open: false,
            current_index: 0,
            image_index: 0,
            preview_ready: false,
        }
    }

    /// Open on the given project; out-of-range indices are ignored
    pub fn open_at(&mut self, index: usize) {
        if index >= self.projects.len() {
            tracing::warn!(index, count = self.projects.len(), "open index out of range");
            return;
        }
        self.open = true;
        self.current_index = index;
        self.image_index = 0;
        tracing::debug!(index, project = %self.projects[index].name, "modal opened");
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("modal closed");
        }
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// The active project, when the modal is open
    pub fn current_project(&self) -> Option<&ProjectRecord> {
        if self.open {
            self.projects.get(self.current_index)
        } else {
            None
        }
    }

    /// Mark the preview as already loaded, shortening the panel entrance
    pub fn set_preview_ready(&mut self, ready: bool) {
        self.preview_ready = ready;
    }

    /// Route a keyboard event; returns true when the event was consumed
    pub fn handle_key(&mut self, event: KeyboardEvent) -> bool {
        if !self.open || event.state != KeyState::Pressed {
            return false;
        }

        match event.key {
            Key::Escape => {
                self.close();
                true
            }
            Key::ArrowLeft => {
                self.previous_project();
                true
            }
            Key::ArrowRight => {
                self.next_project();
                true
            }
            Key::ArrowUp => {
                self.previous_image();
                true
            }
            Key::ArrowDown => {
                self.next_image();
                true
            }
            _ => false,
        }
    }

    /// Route a pointer click
    pub fn handle_click(&mut self, target: ClickTarget) {
        if !self.open {
            return;
        }
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => {}
            ClickTarget::Indicator(index) => self.select_image(index),
        }
    }

    /// Navigate to the previous project; no-op at the start of the list
    pub fn previous_project(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.image_index = 0;
            tracing::debug!(index = self.current_index, "navigated to previous project");
        }
    }

    /// Navigate to the next project; no-op at the end of the list
    pub fn next_project(&mut self) {
        if self.current_index + 1 < self.projects.len() {
            self.current_index += 1;
            self.image_index = 0;
            tracing::debug!(index = self.current_index, "navigated to next project");
        }
    }

    /// Step the carousel backward, wrapping to the last image
    pub fn previous_image(&mut self) {
        let count = self.active_image_count();
        self.image_index = if self.image_index > 0 {
            self.image_index - 1
        } else {
            count - 1
        };
    }

    /// Step the carousel forward, wrapping to the first image
    pub fn next_image(&mut self) {
        let count = self.active_image_count();
        self.image_index = if self.image_index + 1 < count {
            self.image_index + 1
        } else {
            0
        };
    }

    /// Jump directly to an image; out-of-range indices are ignored
    pub fn select_image(&mut self, index: usize) {
        if index < self.active_image_count() {
            self.image_index = index;
        }
    }

    fn active_image_count(&self) -> usize {
        self.projects
            .get(self.current_index)
            .map(ProjectRecord::image_count)
            .unwrap_or(1)
    }

    /// Entrance descriptor for the backdrop: a plain fade
    pub fn backdrop_variants(&self, _device: DeviceClass) -> EntranceVariants {
        EntranceVariants {
            hidden: MotionTarget {
                opacity: Some(0.0),
                ..Default::default()
            },
            show: MotionTarget {
                opacity: Some(1.0),
                transition: Some(Transition::tween(BACKDROP_FADE_S)),
                ..Default::default()
            },
        }
    }

    /// Entrance descriptor for the panel: scale up from 0.9 with a short
    /// drop, on a heavily damped spring
    pub fn panel_variants(&self, device: DeviceClass) -> EntranceVariants {
        if device.prefers_reduced_motion {
            return EntranceVariants {
                hidden: MotionTarget {
                    opacity: Some(0.0),
                    ..Default::default()
                },
                show: MotionTarget {
                    opacity: Some(1.0),
                    transition: Some(Transition::tween(BACKDROP_FADE_S)),
                    ..Default::default()
                },
            };
        }

        let (drop, duration) = if self.preview_ready {
            (10.0, PANEL_ENTRANCE_WARM_S)
        } else {
            (20.0, PANEL_ENTRANCE_S)
        };

        EntranceVariants {
            hidden: MotionTarget {
                y: Len::Px(drop),
                opacity: Some(0.0),
                scale: Some(0.9),
                ..Default::default()
            },
            show: MotionTarget {
                opacity: Some(1.0),
                scale: Some(1.0),
                transition: Some(
                    Transition::spring(SpringConfig::modal_entrance()).duration(duration),
                ),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<ProjectRecord> {
        crate::project::projects_from_json(
            r#"[
                {"name": "alpha", "images": ["a1.png", "a2.png", "a3.png"]},
                {"name": "beta", "image": "b.png"},
                {"name": "gamma"}
            ]"#,
        )
        .unwrap()
    }

    fn open_modal() -> ProjectModal {
        let mut modal = ProjectModal::new(catalog());
        modal.open_at(0);
        modal
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = open_modal();
        assert!(modal.handle_key(KeyboardEvent::pressed(Key::Escape)));
        assert!(!modal.is_open());
        assert!(modal.current_project().is_none());
    }

    #[test]
    fn test_project_navigation_stops_at_boundaries() {
        let mut modal = open_modal();

        // Already at the first project
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowLeft));
        assert_eq!(modal.current_index(), 0);

        modal.handle_key(KeyboardEvent::pressed(Key::ArrowRight));
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowRight));
        assert_eq!(modal.current_index(), 2);

        // And at the last
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowRight));
        assert_eq!(modal.current_index(), 2);
        assert!(modal.is_open());
    }

    #[test]
    fn test_navigation_resets_carousel() {
        let mut modal = open_modal();
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowDown));
        assert_eq!(modal.image_index(), 1);

        modal.handle_key(KeyboardEvent::pressed(Key::ArrowRight));
        assert_eq!(modal.image_index(), 0);

        modal.handle_key(KeyboardEvent::pressed(Key::ArrowLeft));
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn test_carousel_wraps_both_ends() {
        let mut modal = open_modal();

        // Backward from 0 wraps to the last of alpha's three images
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowUp));
        assert_eq!(modal.image_index(), 2);

        // Forward from the last wraps to 0
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowDown));
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn test_imageless_project_pins_carousel_to_zero() {
        let mut modal = open_modal();
        modal.open_at(2);

        modal.handle_key(KeyboardEvent::pressed(Key::ArrowUp));
        assert_eq!(modal.image_index(), 0);
        modal.handle_key(KeyboardEvent::pressed(Key::ArrowDown));
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn test_clicks() {
        let mut modal = open_modal();

        modal.handle_click(ClickTarget::Indicator(2));
        assert_eq!(modal.image_index(), 2);

        // Out-of-range dot is ignored
        modal.handle_click(ClickTarget::Indicator(9));
        assert_eq!(modal.image_index(), 2);

        modal.handle_click(ClickTarget::Content);
        assert!(modal.is_open());

        modal.handle_click(ClickTarget::Backdrop);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_closed_modal_ignores_input() {
        let mut modal = ProjectModal::new(catalog());
        assert!(!modal.handle_key(KeyboardEvent::pressed(Key::Escape)));
        modal.handle_click(ClickTarget::Indicator(1));
        assert_eq!(modal.image_index(), 0);
    }

    #[test]
    fn test_released_keys_are_ignored() {
        let mut modal = open_modal();
        let released = KeyboardEvent {
            key: Key::Escape,
            state: KeyState::Released,
        };
        assert!(!modal.handle_key(released));
        assert!(modal.is_open());
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut modal = ProjectModal::new(catalog());
        modal.open_at(7);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_panel_entrance_shortens_when_preview_warm() {
        let mut modal = open_modal();
        let device = DeviceClass::desktop();

        let cold = modal.panel_variants(device);
        assert_eq!(cold.hidden.y, Len::Px(20.0));
        assert_eq!(cold.show.transition.unwrap().duration_s, Some(0.3));

        modal.set_preview_ready(true);
        let warm = modal.panel_variants(device);
        assert_eq!(warm.hidden.y, Len::Px(10.0));
        assert_eq!(warm.show.transition.unwrap().duration_s, Some(0.25));
    }

    #[test]
    fn test_reduced_motion_panel_is_opacity_only() {
        let modal = open_modal();
        let device = DeviceClass::desktop().with_reduced_motion(true);

        let v = modal.panel_variants(device);
        assert!(v.hidden.is_opacity_only());
        assert!(v.show.is_opacity_only());
    }
}
