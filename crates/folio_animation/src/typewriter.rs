//! Typewriter text sequencer
//!
//! Cycles through a list of strings, typing character by character, pausing
//! on the completed text, then deleting before moving to the next item. A
//! cursor-visibility flag blinks independently of the phase.
//!
//! The sequencer is a finite state machine behind a single tick port:
//! production drives [`Typewriter::tick`] from the animation scheduler, tests
//! drive it with a virtual clock. One phase transition is applied per elapsed
//! interval, so a large `dt` catches up deterministically.

/// Cursor blink period, independent of the typing phase
const CURSOR_BLINK_MS: f32 = 550.0;

/// Bounds for per-character intervals
const MIN_CHAR_INTERVAL_MS: f32 = 20.0;
const MAX_CHAR_INTERVAL_MS: f32 = 500.0;

/// Phase of the typewriter state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Adding one character per interval
    Typing,
    /// Holding the completed text
    Pausing,
    /// Removing one character per interval
    Deleting,
}

/// Configuration for a typewriter sequencer
#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    /// Items to cycle through; empty entries are dropped
    pub items: Vec<String>,
    /// Interval between typed characters (clamped to 20..=500 ms)
    pub type_speed_ms: f32,
    /// Interval between deleted characters (clamped to 20..=500 ms)
    pub delete_speed_ms: f32,
    /// Hold time on the completed text
    pub pause_ms: f32,
    /// Whether to delete and advance to the next item after pausing
    pub loop_items: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            type_speed_ms: 90.0,
            delete_speed_ms: 55.0,
            pause_ms: 1100.0,
            loop_items: true,
        }
    }
}

impl TypewriterConfig {
    /// Create a config over the given items
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the typing interval
    pub fn type_speed(mut self, ms: f32) -> Self {
        self.type_speed_ms = ms;
        self
    }

    /// Set the deleting interval
    pub fn delete_speed(mut self, ms: f32) -> Self {
        self.delete_speed_ms = ms;
        self
    }

    /// Set the hold time on completed text
    pub fn pause(mut self, ms: f32) -> Self {
        self.pause_ms = ms;
        self
    }

    /// Set whether the sequencer deletes and cycles items
    pub fn loop_items(mut self, looping: bool) -> Self {
        self.loop_items = looping;
        self
    }
}

/// A snapshot of the sequencer for the text-rendering consumer
#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterSnapshot {
    /// The currently visible prefix of the active item
    pub text: String,
    /// Whether the cursor is visible this instant
    pub cursor_visible: bool,
    /// Current phase
    pub phase: TypewriterPhase,
    /// Index of the active item
    pub item_index: usize,
}

/// The typewriter state machine
#[derive(Clone, Debug)]
pub struct Typewriter {
    items: Vec<String>,
    type_speed_ms: f32,
    delete_speed_ms: f32,
    pause_ms: f32,
    loop_items: bool,

    item_index: usize,
    sub_index: usize,
    phase: TypewriterPhase,
    phase_elapsed_ms: f32,

    cursor_visible: bool,
    cursor_elapsed_ms: f32,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Self {
        let mut items: Vec<String> = config
            .items
            .into_iter()
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            items.push(String::new());
        }

        Self {
            items,
            type_speed_ms: config
                .type_speed_ms
                .clamp(MIN_CHAR_INTERVAL_MS, MAX_CHAR_INTERVAL_MS),
            delete_speed_ms: config
                .delete_speed_ms
                .clamp(MIN_CHAR_INTERVAL_MS, MAX_CHAR_INTERVAL_MS),
            pause_ms: config.pause_ms.max(1.0),
            loop_items: config.loop_items,
            item_index: 0,
            sub_index: 0,
            phase: TypewriterPhase::Typing,
            phase_elapsed_ms: 0.0,
            cursor_visible: true,
            cursor_elapsed_ms: 0.0,
        }
    }

    /// Advance the sequencer by `dt_ms` of elapsed time
    pub fn tick(&mut self, dt_ms: f32) {
        if dt_ms <= 0.0 {
            return;
        }

        self.cursor_elapsed_ms += dt_ms;
        while self.cursor_elapsed_ms >= CURSOR_BLINK_MS {
            self.cursor_elapsed_ms -= CURSOR_BLINK_MS;
            self.cursor_visible = !self.cursor_visible;
        }

        self.phase_elapsed_ms += dt_ms;
        loop {
            let interval = self.current_interval();
            if self.phase_elapsed_ms < interval {
                break;
            }
            self.phase_elapsed_ms -= interval;
            self.advance_one();
        }
    }

    /// One state transition, the equivalent of a single timer firing
    fn advance_one(&mut self) {
        match self.phase {
            TypewriterPhase::Typing => {
                if self.sub_index >= self.current_len() {
                    self.phase = TypewriterPhase::Pausing;
                } else {
                    self.sub_index += 1;
                }
            }
            TypewriterPhase::Pausing => {
                // Without looping this re-enters Typing at full length, which
                // immediately flips back to Pausing: the sequencer holds the
                // finished text on the same item indefinitely.
                self.phase = if self.loop_items {
                    TypewriterPhase::Deleting
                } else {
                    TypewriterPhase::Typing
                };
            }
            TypewriterPhase::Deleting => {
                if self.sub_index == 0 {
                    self.item_index = (self.item_index + 1) % self.items.len();
                    self.phase = TypewriterPhase::Typing;
                } else {
                    self.sub_index -= 1;
                }
            }
        }
    }

    fn current_interval(&self) -> f32 {
        match self.phase {
            TypewriterPhase::Typing => self.type_speed_ms,
            TypewriterPhase::Pausing => self.pause_ms,
            TypewriterPhase::Deleting => self.delete_speed_ms,
        }
    }

    fn current_item(&self) -> &str {
        &self.items[self.item_index]
    }

    fn current_len(&self) -> usize {
        self.current_item().chars().count()
    }

    /// The visible prefix of the active item
    pub fn text(&self) -> String {
        self.current_item().chars().take(self.sub_index).collect()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    pub fn sub_index(&self) -> usize {
        self.sub_index
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Snapshot for the rendering consumer
    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            text: self.text(),
            cursor_visible: self.cursor_visible,
            phase: self.phase,
            item_index: self.item_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(items: &[&str]) -> TypewriterConfig {
        TypewriterConfig::new(items.iter().copied())
    }

    /// Drive with 1ms ticks so each transition lands on its exact interval
    fn run_ms(tw: &mut Typewriter, ms: u32) {
        for _ in 0..ms {
            tw.tick(1.0);
        }
    }

    #[test]
    fn test_typing_increments_to_length_then_pauses() {
        let mut tw = Typewriter::new(
            ticker(&["Hi", "Yo"])
                .type_speed(100.0)
                .pause(1000.0)
                .loop_items(false),
        );

        assert_eq!(tw.sub_index(), 0);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        run_ms(&mut tw, 100);
        assert_eq!(tw.sub_index(), 1);
        run_ms(&mut tw, 100);
        assert_eq!(tw.sub_index(), 2);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        // The done-typing transition itself takes one more typing interval
        run_ms(&mut tw, 100);
        assert_eq!(tw.phase(), TypewriterPhase::Pausing);
        assert_eq!(tw.sub_index(), 2);
    }

    #[test]
    fn test_non_looping_holds_finished_text_on_same_item() {
        let mut tw = Typewriter::new(
            ticker(&["Hi", "Yo"])
                .type_speed(100.0)
                .pause(500.0)
                .loop_items(false),
        );

        // Type out "Hi" and enter Pausing
        run_ms(&mut tw, 300);
        assert_eq!(tw.phase(), TypewriterPhase::Pausing);

        // Several pause/type round trips: never deletes, never advances items
        for _ in 0..5 {
            run_ms(&mut tw, 500);
            // Pausing -> Typing with sub_index untouched
            run_ms(&mut tw, 100);
            assert_eq!(tw.text(), "Hi");
            assert_eq!(tw.item_index(), 0);
            assert_ne!(tw.phase(), TypewriterPhase::Deleting);
        }
    }

    #[test]
    fn test_looping_single_item_wraps_back_to_start() {
        let mut tw = Typewriter::new(
            ticker(&["Hi"])
                .type_speed(100.0)
                .delete_speed(50.0)
                .pause(400.0)
                .loop_items(true),
        );

        // Type: 2 chars + done transition
        run_ms(&mut tw, 300);
        assert_eq!(tw.phase(), TypewriterPhase::Pausing);

        // Pause -> Deleting
        run_ms(&mut tw, 400);
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);

        // Delete 2 chars + the at-zero transition that wraps the item index
        run_ms(&mut tw, 150);
        assert_eq!(tw.sub_index(), 0);
        assert_eq!(tw.item_index(), 0);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn test_looping_advances_to_next_item() {
        let mut tw = Typewriter::new(
            ticker(&["ab", "cd"])
                .type_speed(100.0)
                .delete_speed(50.0)
                .pause(200.0),
        );

        // ab: type (300) + pause (200) + delete (150)
        run_ms(&mut tw, 650);
        assert_eq!(tw.item_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        assert_eq!(tw.sub_index(), 0);

        run_ms(&mut tw, 200);
        assert_eq!(tw.text(), "cd");
    }

    #[test]
    fn test_cursor_blinks_independent_of_phase() {
        let mut tw = Typewriter::new(ticker(&["Hello"]).pause(10_000.0));
        assert!(tw.cursor_visible());

        tw.tick(550.0);
        assert!(!tw.cursor_visible());

        tw.tick(550.0);
        assert!(tw.cursor_visible());

        // Two periods at once: toggles twice
        tw.tick(1100.0);
        assert!(tw.cursor_visible());
    }

    #[test]
    fn test_speeds_are_clamped() {
        let mut tw = Typewriter::new(ticker(&["abc"]).type_speed(1.0));
        // 1ms requested, clamped to 20ms: after 19ms nothing has happened
        run_ms(&mut tw, 19);
        assert_eq!(tw.sub_index(), 0);
        run_ms(&mut tw, 1);
        assert_eq!(tw.sub_index(), 1);
    }

    #[test]
    fn test_blank_items_are_filtered() {
        let tw = Typewriter::new(ticker(&["", "keep", ""]));
        assert_eq!(tw.item_count(), 1);
        assert_eq!(tw.snapshot().item_index, 0);
    }

    #[test]
    fn test_all_blank_items_substitute_placeholder() {
        let mut tw = Typewriter::new(ticker(&["", ""]));
        assert_eq!(tw.item_count(), 1);
        assert_eq!(tw.text(), "");

        // Empty item: Typing immediately transitions to Pausing and the
        // machine stays well-formed
        run_ms(&mut tw, 2000);
        assert_eq!(tw.sub_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_sub_index_counts_unicode_scalars() {
        let mut tw = Typewriter::new(ticker(&["héllo"]).type_speed(100.0));
        run_ms(&mut tw, 200);
        assert_eq!(tw.text(), "hé");
    }
}
