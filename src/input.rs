use eframe::egui::{Context, Key, KeyboardShortcut, Modifiers, Pos2, Rect, Response, pos2};

use crate::canvas::CanvasSize;
use crate::command::Command;

/// Pointer events in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp(Pos2),
    /// The pointer left the canvas (or the window)
    PointerLeave,
}

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Map a screen position inside `canvas_rect` to canvas pixels, undoing any
/// display scaling.
pub fn screen_to_canvas(canvas_rect: Rect, size: CanvasSize, screen: Pos2) -> Pos2 {
    let rel = screen - canvas_rect.min;
    let sx = size.width as f32 / canvas_rect.width().max(f32::EPSILON);
    let sy = size.height as f32 / canvas_rect.height().max(f32::EPSILON);
    pos2(rel.x * sx, rel.y * sy)
}

/// Turns raw egui pointer state over the canvas into `CanvasEvent`s.
pub struct InputHandler {
    canvas_rect: Rect,
    canvas_size: CanvasSize,
    last_pointer_pos: Option<Pos2>,
    was_inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            canvas_size: CanvasSize::new(1, 1),
            last_pointer_pos: None,
            was_inside: false,
        }
    }

    /// Where the canvas is drawn this frame and how big it is in pixels.
    pub fn set_canvas(&mut self, rect: Rect, size: CanvasSize) {
        self.canvas_rect = rect;
        self.canvas_size = size;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        screen_to_canvas(self.canvas_rect, self.canvas_size, pos)
    }

    /// Collect this frame's canvas events. `response` is the canvas widget;
    /// the pointer only counts as over the canvas while no other layer, such
    /// as a colour picker popup, covers it.
    pub fn process_input(&mut self, ctx: &Context, response: &Response) -> Vec<CanvasEvent> {
        let on_top = response.hovered() || response.dragged();
        ctx.input(|input| {
            self.translate(
                input.pointer.hover_pos(),
                on_top,
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        })
    }

    /// Core of `process_input`, separated from egui's input state.
    pub fn translate(
        &mut self,
        hover: Option<Pos2>,
        on_top: bool,
        pressed: bool,
        released: bool,
    ) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let inside = on_top && hover.is_some_and(|p| self.canvas_rect.contains(p));

        if let Some(pos) = hover.filter(|_| inside) {
            if pressed {
                events.push(CanvasEvent::PointerDown(self.to_canvas(pos)));
            }
            // a press starts a stroke without painting; motion paints
            if !pressed && self.last_pointer_pos != Some(pos) {
                events.push(CanvasEvent::PointerMove(self.to_canvas(pos)));
            }
            if released {
                events.push(CanvasEvent::PointerUp(self.to_canvas(pos)));
            }
        } else if self.was_inside {
            events.push(CanvasEvent::PointerLeave);
        }

        self.was_inside = inside;
        self.last_pointer_pos = hover;
        events
    }

    /// Undo/redo shortcuts pressed this frame.
    pub fn shortcut_commands(&self, ctx: &Context) -> Vec<Command> {
        let mut commands = Vec::new();
        ctx.input_mut(|input| {
            // redo first: the undo shortcut would also match with shift held
            if input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT) {
                commands.push(Command::Redo);
            }
            if input.consume_shortcut(&UNDO) {
                commands.push(Command::Undo);
            }
        });
        commands
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandler")
            .field("canvas_rect", &self.canvas_rect)
            .field("was_inside", &self.was_inside)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, RawInput, vec2};

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas(
            Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0)),
            CanvasSize::new(800, 600),
        );
        handler
    }

    #[test]
    fn test_scaled_mapping() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0));
        let p = screen_to_canvas(rect, CanvasSize::new(800, 600), pos2(300.0, 200.0));
        assert_eq!(p, pos2(400.0, 300.0));
    }

    #[test]
    fn test_press_move_release() {
        let mut input = handler();
        let events = input.translate(Some(pos2(110.0, 60.0)), true, true, false);
        assert_eq!(events, vec![CanvasEvent::PointerDown(pos2(20.0, 20.0))]);
        // stationary pointer emits nothing
        assert!(input.translate(Some(pos2(110.0, 60.0)), true, false, false).is_empty());
        let events = input.translate(Some(pos2(120.0, 60.0)), true, false, true);
        assert_eq!(
            events,
            vec![
                CanvasEvent::PointerMove(pos2(40.0, 20.0)),
                CanvasEvent::PointerUp(pos2(40.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_leaving_the_canvas() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), true, true, false);
        let events = input.translate(Some(pos2(10.0, 10.0)), true, false, false);
        assert_eq!(events, vec![CanvasEvent::PointerLeave]);
        assert!(input.translate(None, true, false, false).is_empty());
    }

    #[test]
    fn test_presses_outside_are_ignored() {
        let mut input = handler();
        assert!(input.translate(Some(pos2(5.0, 5.0)), true, true, false).is_empty());
    }

    #[test]
    fn test_covered_canvas_ignores_presses() {
        let mut input = handler();
        // a popup over the canvas owns the pointer
        assert!(input.translate(Some(pos2(110.0, 60.0)), false, true, false).is_empty());
        assert!(input.translate(Some(pos2(130.0, 60.0)), false, false, true).is_empty());
    }

    #[test]
    fn test_covering_mid_stroke_leaves_the_canvas() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), true, true, false);
        let events = input.translate(Some(pos2(120.0, 60.0)), false, false, false);
        assert_eq!(events, vec![CanvasEvent::PointerLeave]);
    }

    fn shortcuts_for(key: Key, modifiers: Modifiers) -> Vec<Command> {
        let ctx = Context::default();
        let raw = RawInput {
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            modifiers,
            ..Default::default()
        };
        let handler = InputHandler::new();
        let mut commands = Vec::new();
        let _ = ctx.run(raw, |ctx| commands = handler.shortcut_commands(ctx));
        commands
    }

    #[test]
    fn test_undo_redo_shortcuts() {
        let ctrl = Modifiers::CTRL.plus(Modifiers::COMMAND);
        assert_eq!(shortcuts_for(Key::Z, ctrl), vec![Command::Undo]);
        assert_eq!(shortcuts_for(Key::Z, ctrl.plus(Modifiers::SHIFT)), vec![Command::Redo]);
        assert_eq!(shortcuts_for(Key::Y, ctrl), vec![Command::Redo]);
        assert!(shortcuts_for(Key::Z, Modifiers::NONE).is_empty());
    }
}
