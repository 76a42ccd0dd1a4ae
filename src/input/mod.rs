use egui::{Key, Pos2};

use crate::action::Action;
use crate::gesture::PointerSample;
use crate::layout::ChromeLayout;
use crate::tools::ToolKind;

/// A keyboard shortcut recognized this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Action(Action),
    Tool(ToolKind),
}

const TOOL_KEYS: [Key; 5] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];

/// Converts raw egui input into painter input
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last pointer position seen inside the window
    pub fn last_pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Reads the primary button and pointer position for the stroke gesture
    pub fn pointer_sample(&mut self, input: &egui::InputState, layout: &ChromeLayout) -> PointerSample {
        let pos = input.pointer.latest_pos();
        if pos.is_some() {
            self.last_pointer_pos = pos;
        }
        sample_at(
            pos,
            input.pointer.primary_pressed(),
            input.pointer.primary_down(),
            input.pointer.primary_released(),
            layout,
        )
    }

    pub fn shortcuts(&self, input: &egui::InputState) -> Vec<Shortcut> {
        let mut shortcuts = Vec::new();

        if input.modifiers.command && input.key_pressed(Key::Z) {
            shortcuts.push(Shortcut::Action(Action::Undo));
        }
        if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
            shortcuts.push(Shortcut::Action(Action::IncreaseSize));
        }
        if input.key_pressed(Key::Minus) {
            shortcuts.push(Shortcut::Action(Action::DecreaseSize));
        }
        if input.key_pressed(Key::Delete) {
            shortcuts.push(Shortcut::Action(Action::Clear));
        }
        for (i, key) in TOOL_KEYS.into_iter().enumerate() {
            if input.key_pressed(key) {
                if let Some(kind) = ToolKind::from_icon_index(i + 1) {
                    shortcuts.push(Shortcut::Tool(kind));
                }
            }
        }

        shortcuts
    }
}

/// Builds a sample from screen-space pointer state
pub fn sample_at(
    pos: Option<Pos2>,
    pressed: bool,
    down: bool,
    released: bool,
    layout: &ChromeLayout,
) -> PointerSample {
    PointerSample {
        position: pos.map(|p| layout.to_canvas(p)),
        pressed,
        down,
        released,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::layout::ChromeMetrics;

    #[test]
    fn test_sample_is_drawing_local() {
        let layout = ChromeLayout::new(&ChromeMetrics::default(), 1280, 800).unwrap();
        let sample = sample_at(Some(egui::pos2(88.5, 44.9)), true, true, false, &layout);

        assert_eq!(sample.position, Some(Point::new(10, 10)));
        assert!(sample.pressed && sample.down && !sample.released);
    }

    fn key_press(key: Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    /// Runs one frame with `keys` pressed and returns the shortcuts seen
    fn shortcuts_for(keys: &[Key], modifiers: egui::Modifiers) -> Vec<Shortcut> {
        let ctx = egui::Context::default();
        let handler = InputHandler::new();
        let raw = egui::RawInput {
            events: keys.iter().map(|&key| key_press(key, modifiers)).collect(),
            modifiers,
            ..Default::default()
        };
        let mut shortcuts = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            shortcuts = ctx.input(|i| handler.shortcuts(i));
        });
        shortcuts
    }

    #[test]
    fn test_undo_needs_command_modifier() {
        assert!(shortcuts_for(&[Key::Z], egui::Modifiers::NONE).is_empty());
        assert_eq!(
            shortcuts_for(&[Key::Z], egui::Modifiers::COMMAND),
            vec![Shortcut::Action(Action::Undo)]
        );
    }

    #[test]
    fn test_size_and_clear_keys() {
        let none = egui::Modifiers::NONE;
        assert_eq!(
            shortcuts_for(&[Key::Plus], none),
            vec![Shortcut::Action(Action::IncreaseSize)]
        );
        assert_eq!(
            shortcuts_for(&[Key::Equals], none),
            vec![Shortcut::Action(Action::IncreaseSize)]
        );
        assert_eq!(
            shortcuts_for(&[Key::Minus], none),
            vec![Shortcut::Action(Action::DecreaseSize)]
        );
        assert_eq!(
            shortcuts_for(&[Key::Delete], none),
            vec![Shortcut::Action(Action::Clear)]
        );
    }

    #[test]
    fn test_number_keys_pick_tools_by_icon_index() {
        let all = shortcuts_for(
            &[Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5],
            egui::Modifiers::NONE,
        );
        let expected: Vec<Shortcut> = ToolKind::ALL.into_iter().map(Shortcut::Tool).collect();
        assert_eq!(all, expected);

        assert!(shortcuts_for(&[Key::Num6], egui::Modifiers::NONE).is_empty());
    }

    #[test]
    fn test_sample_without_pointer() {
        let layout = ChromeLayout::new(&ChromeMetrics::default(), 1280, 800).unwrap();
        let sample = sample_at(None, false, false, true, &layout);
        assert_eq!(sample.position, None);
    }
}
