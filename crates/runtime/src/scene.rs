//! The seam between the session and the presentation layer.

use bluemon_core::Pet;

/// Receives scene transitions the session decides on.
///
/// The session owns the rules; the sink owns the screen. A console
/// frontend switches views here, a test records the calls.
pub trait SceneSink {
    /// A wild encounter fired; the frontend should enter combat
    /// against the given roster.
    fn switch_to_combat(&mut self, roster: Vec<Pet>);

    /// An NPC was bumped into; the frontend should show its dialogue.
    fn run_dialogue(&mut self, name: &str, dialogue: &str);

    /// The menu key was pressed.
    fn switch_to_menu(&mut self, title: &str);

    /// The inventory key was pressed.
    fn toggle_inventory(&mut self);
}
