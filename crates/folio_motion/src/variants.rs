//! Device-aware variant generators
//!
//! Pure, stateless functions that turn caller parameters plus the current
//! [`DeviceClass`](crate::device::DeviceClass) into declarative animation
//! descriptors. The rendering layer interprets the descriptors; the
//! generators never touch live animation state.
//!
//! Two global policies apply across the library:
//! - `prefers_reduced_motion` short-circuits every generator to an
//!   opacity-only fade or an identity descriptor, overriding all other
//!   parameters
//! - mobile classification scales travel distances and timings down, and
//!   collapses hover/press motion entirely
//!
//! Numeric parameters pass through without validation; the caller owns them.

use crate::device::DeviceClass;
use folio_animation::{Easing, SpringConfig};
use folio_core::Vec2;

/// Travel distance for entrance offsets, in pixels
const FADE_DISTANCE_DESKTOP: f32 = 100.0;
const FADE_DISTANCE_MOBILE: f32 = 50.0;

/// Duration multiplier applied on mobile
const MOBILE_DURATION_SCALE: f32 = 0.8;
/// Stagger/delay multiplier applied on mobile
const MOBILE_STAGGER_SCALE: f32 = 0.7;

/// Duration of the reduced-motion opacity fade, in seconds
const REDUCED_MOTION_FADE_S: f32 = 0.3;

/// A one-dimensional offset, either absolute or relative to the element
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Len {
    Px(f32),
    Percent(f32),
}

impl Len {
    pub const ZERO: Len = Len::Px(0.0);

    /// Whether this length renders as no offset
    pub fn is_zero(&self) -> bool {
        match self {
            Len::Px(v) | Len::Percent(v) => *v == 0.0,
        }
    }
}

impl Default for Len {
    fn default() -> Self {
        Len::ZERO
    }
}

/// How a transition is driven
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionKind {
    /// Duration + easing curve
    #[default]
    Tween,
    /// Spring physics
    Spring,
}

/// Transition parameters between two named states
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    /// Delay before the transition starts, in seconds
    pub delay_s: f32,
    /// Duration in seconds (tween, or spring settle budget)
    pub duration_s: Option<f32>,
    /// Easing curve for tweened transitions
    pub ease: Option<Easing>,
    /// Spring parameters for spring transitions
    pub spring: Option<SpringConfig>,
    /// Delay between each animated child, in seconds
    pub stagger_children_s: Option<f32>,
    /// Delay before the first child starts, in seconds
    pub delay_children_s: Option<f32>,
}

impl Transition {
    /// A tweened transition with the given duration
    pub fn tween(duration_s: f32) -> Self {
        Self {
            kind: TransitionKind::Tween,
            duration_s: Some(duration_s),
            ease: Some(Easing::EaseOut),
            ..Default::default()
        }
    }

    /// A spring transition with the given parameters
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            kind: TransitionKind::Spring,
            spring: Some(config),
            ..Default::default()
        }
    }

    pub fn delay(mut self, delay_s: f32) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn duration(mut self, duration_s: f32) -> Self {
        self.duration_s = Some(duration_s);
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// One named visual state: offsets, opacity, scale, and how to get there
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionTarget {
    pub x: Len,
    pub y: Len,
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub transition: Option<Transition>,
}

impl MotionTarget {
    /// A target with no visible motion
    pub fn identity() -> Self {
        Self {
            scale: Some(1.0),
            ..Default::default()
        }
    }

    /// Whether the target renders as no visible motion
    pub fn is_identity(&self) -> bool {
        self.x.is_zero()
            && self.y.is_zero()
            && self.opacity.map(|o| o == 1.0).unwrap_or(true)
            && self.scale.map(|s| s == 1.0).unwrap_or(true)
    }

    /// Whether the target only touches opacity
    pub fn is_opacity_only(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.scale.is_none()
    }
}

/// Direction an element enters from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideFrom {
    Left,
    Right,
    Up,
    Down,
    /// No directional offset
    #[default]
    None,
}

/// Entrance descriptor: `hidden` before reveal, `show` after
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceVariants {
    pub hidden: MotionTarget,
    pub show: MotionTarget,
}

/// Hover descriptor for cards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverVariants {
    pub rest: MotionTarget,
    pub hover: MotionTarget,
}

/// Press descriptor for buttons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressVariants {
    pub rest: MotionTarget,
    pub hover: MotionTarget,
    pub tap: MotionTarget,
}

/// Container descriptor that staggers its children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerVariants {
    pub hidden: MotionTarget,
    pub show: MotionTarget,
}

/// The opacity-only descriptor every generator collapses to under reduced
/// motion
fn reduced_motion_fade() -> EntranceVariants {
    EntranceVariants {
        hidden: MotionTarget {
            opacity: Some(0.0),
            ..Default::default()
        },
        show: MotionTarget {
            opacity: Some(1.0),
            transition: Some(Transition::tween(REDUCED_MOTION_FADE_S)),
            ..Default::default()
        },
    }
}

/// Directional pixel offsets for the hidden state
///
/// An element entering from the left starts displaced to the right of its
/// resting position, and vice versa.
fn directional_offset(direction: SlideFrom, distance: f32) -> (Len, Len) {
    match direction {
        SlideFrom::Left => (Len::Px(distance), Len::ZERO),
        SlideFrom::Right => (Len::Px(-distance), Len::ZERO),
        SlideFrom::Up => (Len::ZERO, Len::Px(distance)),
        SlideFrom::Down => (Len::ZERO, Len::Px(-distance)),
        SlideFrom::None => (Len::ZERO, Len::ZERO),
    }
}

/// Fade-in entrance with a directional offset
pub fn fade_in(
    direction: SlideFrom,
    kind: TransitionKind,
    delay_s: f32,
    duration_s: f32,
    device: DeviceClass,
) -> EntranceVariants {
    if device.prefers_reduced_motion {
        return reduced_motion_fade();
    }

    let distance = if device.is_mobile {
        FADE_DISTANCE_MOBILE
    } else {
        FADE_DISTANCE_DESKTOP
    };
    let duration = if device.is_mobile {
        duration_s * MOBILE_DURATION_SCALE
    } else {
        duration_s
    };
    let (x, y) = directional_offset(direction, distance);

    EntranceVariants {
        hidden: MotionTarget {
            x,
            y,
            opacity: Some(0.0),
            ..Default::default()
        },
        show: MotionTarget {
            opacity: Some(1.0),
            transition: Some(Transition {
                kind,
                delay_s,
                duration_s: Some(duration),
                ease: Some(Easing::EaseOut),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

/// Slide-in entrance across the element's own extent
pub fn slide_in(
    direction: SlideFrom,
    kind: TransitionKind,
    delay_s: f32,
    duration_s: f32,
    device: DeviceClass,
) -> EntranceVariants {
    if device.prefers_reduced_motion {
        return reduced_motion_fade();
    }

    let duration = if device.is_mobile {
        duration_s * MOBILE_DURATION_SCALE
    } else {
        duration_s
    };
    let (x, y) = match direction {
        SlideFrom::Left => (Len::Percent(-100.0), Len::ZERO),
        SlideFrom::Right => (Len::Percent(100.0), Len::ZERO),
        SlideFrom::Up => (Len::ZERO, Len::Percent(100.0)),
        SlideFrom::Down => (Len::ZERO, Len::Percent(-100.0)),
        SlideFrom::None => (Len::ZERO, Len::ZERO),
    };

    EntranceVariants {
        hidden: MotionTarget {
            x,
            y,
            ..Default::default()
        },
        show: MotionTarget {
            transition: Some(Transition {
                kind,
                delay_s,
                duration_s: Some(duration),
                ease: Some(Easing::EaseOut),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

/// Text reveal: a short drop-in on a spring
pub fn text_reveal(delay_s: f32, device: DeviceClass) -> EntranceVariants {
    if device.prefers_reduced_motion {
        return reduced_motion_fade();
    }

    let (drop, duration) = if device.is_mobile {
        (-30.0, 1.0)
    } else {
        (-50.0, 1.25)
    };

    EntranceVariants {
        hidden: MotionTarget {
            y: Len::Px(drop),
            opacity: Some(0.0),
            ..Default::default()
        },
        show: MotionTarget {
            opacity: Some(1.0),
            transition: Some(
                Transition::spring(SpringConfig::text_reveal())
                    .duration(duration)
                    .delay(delay_s),
            ),
            ..Default::default()
        },
    }
}

/// Card hover lift, scaled by `depth`
///
/// Collapses to identity on mobile regardless of the reduced-motion flag:
/// there is no hover state to animate on touch devices.
pub fn card_hover(device: DeviceClass, depth: f32) -> HoverVariants {
    if device.prefers_reduced_motion || device.is_mobile {
        return HoverVariants {
            rest: MotionTarget::identity(),
            hover: MotionTarget::identity(),
        };
    }

    let lift = -6.0 * depth;
    let transition = Transition::spring(SpringConfig::card_hover()).duration(0.4);

    HoverVariants {
        rest: MotionTarget {
            y: Len::ZERO,
            scale: Some(1.0),
            transition: Some(transition),
            ..Default::default()
        },
        hover: MotionTarget {
            y: Len::Px(lift),
            scale: Some(1.0 + 0.01 * depth),
            transition: Some(transition),
            ..Default::default()
        },
    }
}

/// Button press feedback
///
/// Collapses to identity on mobile regardless of the reduced-motion flag.
pub fn button_press(device: DeviceClass) -> PressVariants {
    if device.prefers_reduced_motion || device.is_mobile {
        let identity = MotionTarget::identity();
        return PressVariants {
            rest: identity,
            hover: identity,
            tap: identity,
        };
    }

    PressVariants {
        rest: MotionTarget::identity(),
        hover: MotionTarget {
            scale: Some(1.05),
            ..Default::default()
        },
        tap: MotionTarget {
            scale: Some(0.95),
            ..Default::default()
        },
    }
}

/// Stagger container with device-aware child timing
pub fn stagger_container(
    stagger_children_s: f32,
    delay_children_s: f32,
    device: DeviceClass,
) -> StaggerVariants {
    if device.prefers_reduced_motion {
        // Children still fade in; they just all start together
        return StaggerVariants {
            hidden: MotionTarget::default(),
            show: MotionTarget {
                transition: Some(Transition {
                    stagger_children_s: Some(0.0),
                    delay_children_s: Some(0.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        };
    }

    let scale = if device.is_mobile {
        MOBILE_STAGGER_SCALE
    } else {
        1.0
    };

    StaggerVariants {
        hidden: MotionTarget::default(),
        show: MotionTarget {
            transition: Some(Transition {
                stagger_children_s: Some(stagger_children_s * scale),
                delay_children_s: Some(delay_children_s * scale),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

/// Magnetic pointer-follow target
///
/// Unlike the entrance generators this produces a single target: the element
/// continuously chases the given offset on a spring, sinking slightly while
/// pressed.
pub fn magnetic_effect(offset: Vec2, press_depth: f32, device: DeviceClass) -> MotionTarget {
    if device.prefers_reduced_motion {
        return MotionTarget::identity();
    }

    MotionTarget {
        x: Len::Px(offset.x),
        y: Len::Px(offset.y),
        scale: Some(1.0 - press_depth * 0.05),
        transition: Some(Transition::spring(SpringConfig::magnetic())),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced() -> DeviceClass {
        DeviceClass::desktop().with_reduced_motion(true)
    }

    #[test]
    fn test_reduced_motion_forces_opacity_only_everywhere() {
        let fade = fade_in(SlideFrom::Left, TransitionKind::Spring, 0.5, 2.0, reduced());
        assert!(fade.hidden.is_opacity_only());
        assert!(fade.show.is_opacity_only());
        assert_eq!(
            fade.show.transition.unwrap().duration_s,
            Some(REDUCED_MOTION_FADE_S)
        );

        let slide = slide_in(SlideFrom::Up, TransitionKind::Tween, 0.0, 1.0, reduced());
        assert!(slide.hidden.is_opacity_only());

        let text = text_reveal(0.2, reduced());
        assert!(text.hidden.is_opacity_only());

        let hover = card_hover(reduced(), 3.0);
        assert!(hover.rest.is_identity() && hover.hover.is_identity());

        let press = button_press(reduced());
        assert!(press.hover.is_identity() && press.tap.is_identity());

        let stagger = stagger_container(0.1, 0.2, reduced());
        let t = stagger.show.transition.unwrap();
        assert_eq!(t.stagger_children_s, Some(0.0));

        let magnetic = magnetic_effect(Vec2::new(12.0, -8.0), 1.0, reduced());
        assert!(magnetic.is_identity());
    }

    #[test]
    fn test_fade_in_mobile_shrinks_distance_and_duration() {
        let desktop = fade_in(
            SlideFrom::Left,
            TransitionKind::Tween,
            0.0,
            0.75,
            DeviceClass::desktop(),
        );
        let mobile = fade_in(
            SlideFrom::Left,
            TransitionKind::Tween,
            0.0,
            0.75,
            DeviceClass::mobile(),
        );

        assert_eq!(desktop.hidden.x, Len::Px(100.0));
        assert_eq!(mobile.hidden.x, Len::Px(50.0));

        let d = desktop.show.transition.unwrap().duration_s.unwrap();
        let m = mobile.show.transition.unwrap().duration_s.unwrap();
        assert!((m - d * 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_fade_in_direction_controls_sign_and_axis() {
        let device = DeviceClass::desktop();
        let cases = [
            (SlideFrom::Left, Len::Px(100.0), Len::ZERO),
            (SlideFrom::Right, Len::Px(-100.0), Len::ZERO),
            (SlideFrom::Up, Len::ZERO, Len::Px(100.0)),
            (SlideFrom::Down, Len::ZERO, Len::Px(-100.0)),
            (SlideFrom::None, Len::ZERO, Len::ZERO),
        ];
        for (direction, x, y) in cases {
            let v = fade_in(direction, TransitionKind::Tween, 0.0, 0.75, device);
            assert_eq!(v.hidden.x, x);
            assert_eq!(v.hidden.y, y);
            assert_eq!(v.hidden.opacity, Some(0.0));
        }
    }

    #[test]
    fn test_slide_in_uses_percent_offsets() {
        let v = slide_in(
            SlideFrom::Right,
            TransitionKind::Tween,
            0.0,
            1.0,
            DeviceClass::desktop(),
        );
        assert_eq!(v.hidden.x, Len::Percent(100.0));
        // Slide-in moves the element, it does not fade it
        assert_eq!(v.hidden.opacity, None);
    }

    #[test]
    fn test_card_hover_scales_with_depth() {
        let v = card_hover(DeviceClass::desktop(), 2.0);
        assert_eq!(v.hover.y, Len::Px(-12.0));
        assert_eq!(v.hover.scale, Some(1.02));
        assert_eq!(
            v.hover.transition.unwrap().spring,
            Some(SpringConfig::card_hover())
        );
    }

    #[test]
    fn test_card_hover_and_button_press_collapse_on_mobile() {
        let hover = card_hover(DeviceClass::mobile(), 5.0);
        assert!(hover.rest.is_identity() && hover.hover.is_identity());

        let press = button_press(DeviceClass::mobile());
        assert!(press.rest.is_identity());
        assert!(press.hover.is_identity());
        assert!(press.tap.is_identity());
    }

    #[test]
    fn test_button_press_desktop_feedback() {
        let press = button_press(DeviceClass::desktop());
        assert_eq!(press.hover.scale, Some(1.05));
        assert_eq!(press.tap.scale, Some(0.95));
    }

    #[test]
    fn test_stagger_mobile_scaling() {
        let desktop = stagger_container(0.1, 0.2, DeviceClass::desktop());
        let mobile = stagger_container(0.1, 0.2, DeviceClass::mobile());

        let dt = desktop.show.transition.unwrap();
        let mt = mobile.show.transition.unwrap();
        assert_eq!(dt.stagger_children_s, Some(0.1));
        assert!((mt.stagger_children_s.unwrap() - 0.07).abs() < 1e-6);
        assert!((mt.delay_children_s.unwrap() - 0.14).abs() < 1e-6);
    }

    #[test]
    fn test_magnetic_effect_follows_offset() {
        let v = magnetic_effect(Vec2::new(8.0, -4.0), 1.0, DeviceClass::desktop());
        assert_eq!(v.x, Len::Px(8.0));
        assert_eq!(v.y, Len::Px(-4.0));
        assert_eq!(v.scale, Some(0.95));
        assert_eq!(v.transition.unwrap().spring, Some(SpringConfig::magnetic()));
    }
}
