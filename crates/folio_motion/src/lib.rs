//! Folio Motion Library
//!
//! Device-aware animation variants over the Folio animation system:
//!
//! - **Device Capability Probe**: one shared media snapshot, classified into
//!   mobile/tablet/desktop plus the reduced-motion preference
//! - **Variant Generators**: pure functions producing declarative animation
//!   descriptors that adapt to the device classification

pub mod device;
pub mod variants;

pub use device::{DeviceClass, DeviceProbe, MediaSnapshot};
pub use variants::{
    button_press, card_hover, fade_in, magnetic_effect, slide_in, stagger_container, text_reveal,
    EntranceVariants, HoverVariants, Len, MotionTarget, PressVariants, SlideFrom, StaggerVariants,
    Transition, TransitionKind,
};
