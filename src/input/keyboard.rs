//! Keyboard shortcuts, independent of the pointer state.

use crate::editor::Editor;
use crate::types::NodeId;

/// Keys the engine reacts to; hosts map their native key events onto this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    /// `=` / `+`: zoom in
    Plus,
    /// `-`: zoom out
    Minus,
    /// `0`: reset view
    Zero,
}

impl Editor {
    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Delete | Key::Backspace => {
                if !self.view.selection.nodes.is_empty() {
                    let doomed: Vec<NodeId> =
                        self.view.selection.nodes.iter().cloned().collect();
                    self.remove_nodes(&doomed);
                }
            }
            Key::Escape => {
                self.cancel_connect();
                if self.input.is_marqueeing() {
                    self.input.reset();
                }
                self.clear_selection();
            }
            Key::Plus => self.zoom_in(),
            Key::Minus => self.zoom_out(),
            Key::Zero => self.reset_view(),
        }
    }
}
