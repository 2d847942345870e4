//! Showcase Tour - Modal + Motion Walkthrough
//!
//! Wires the pieces together the way a host would: a device probe publishing
//! media state, a scheduler-driven typewriter headline advanced on a virtual
//! clock, variant generators keyed off the probe's classification, and the
//! project modal driven by simulated input.
//!
//! Run with: cargo run -p folio_showcase --example showcase_tour

use std::sync::{Arc, Mutex};

use folio_animation::{AnimatedTypewriter, AnimationScheduler, TypewriterConfig};
use folio_core::input::{Key, KeyboardEvent};
use folio_core::reactive::ReactiveGraph;
use folio_motion::{fade_in, DeviceProbe, MediaSnapshot, SlideFrom, TransitionKind};
use folio_showcase::{projects_from_json, ClickTarget, ProjectModal, Result};

const CATALOG: &str = r#"[
    {
        "name": "Nebula",
        "description": "Realtime particle renderer",
        "images": ["nebula-1.png", "nebula-2.png", "nebula-3.png"],
        "tags": [{"name": "rust", "color": "orange"}],
        "features": ["GPU instancing", "Bloom pipeline"],
        "metrics": {"stars": 412, "forks": 37},
        "source_code_link": "https://example.com/nebula"
    },
    {
        "name": "Driftwood",
        "description": "Procedural terrain sketchpad",
        "image": "driftwood.png",
        "github_stars": 98,
        "views": 12000,
        "live_demo_link": "https://example.com/driftwood"
    }
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    // Platform integration publishes media state; everything else reads it
    let graph = Arc::new(Mutex::new(ReactiveGraph::new()));
    let probe = DeviceProbe::new(&graph);
    probe.publish(MediaSnapshot::new(1440.0, false));
    let device = probe.class();

    // Headline typewriter, scheduler-owned, advanced on a virtual clock
    let scheduler = AnimationScheduler::new();
    let headline = AnimatedTypewriter::new(
        &scheduler.handle(),
        TypewriterConfig::new(["Selected Work", "Case Studies"]).type_speed(60.0),
    );
    for _ in 0..20 {
        scheduler.advance(100.0);
    }
    if let Some(snapshot) = headline.snapshot() {
        println!("headline: {:?} (phase {:?})", snapshot.text, snapshot.phase);
    }

    // Entrance descriptor for the catalog grid
    let entrance = fade_in(SlideFrom::Up, TransitionKind::Tween, 0.1, 0.75, device);
    println!("grid entrance: {:?}", entrance.hidden);

    // Open the modal and walk it with the keyboard
    let mut modal = ProjectModal::new(projects_from_json(CATALOG)?);
    modal.open_at(0);
    println!("panel entrance: {:?}", modal.panel_variants(device).hidden);

    for key in [Key::ArrowDown, Key::ArrowDown, Key::ArrowUp, Key::ArrowRight] {
        modal.handle_key(KeyboardEvent::pressed(key));
        if let Some(project) = modal.current_project() {
            println!(
                "viewing {} (image {}/{})",
                project.name,
                modal.image_index() + 1,
                project.image_count()
            );
        }
    }

    modal.handle_click(ClickTarget::Backdrop);
    println!("open after backdrop click: {}", modal.is_open());

    Ok(())
}
