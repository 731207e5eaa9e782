// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - the document plus the interaction state around it

mod keyboard;
mod shape_menu;

use super::edit_types::Update;
use super::mouse::{Modifiers, MouseDelegate, MouseEvent};
use crate::model::{Document, DocumentError, SavedDocument, ShapeKind};
use crate::tools::{Mode, ToolBox};
use kurbo::{Point, Size};

/// Editing session for one canvas
///
/// Owns the document and routes pointer and key input to the tool of the
/// current mode. Everything runs on the event thread; handlers mutate the
/// document directly and report back whether the canvas needs a repaint.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Shapes in paint order plus the active shape
    document: Document,

    /// Tool for the current mode
    current_tool: ToolBox,

    /// Kind of the most recent build mode, used when a new shape has to be
    /// started while editing
    last_build_kind: ShapeKind,

    /// Whether the rotate modifier key is currently held
    rotate_modifier_held: bool,

    /// Last known pointer position, shown in the overlay
    cursor: Point,

    /// Size of the canvas in pixels
    canvas_size: Size,
}

impl EditSession {
    /// Create a session with an empty document in the given mode
    pub fn new(mode: Mode) -> Self {
        let last_build_kind = mode.shape_kind().unwrap_or(ShapeKind::Polygon);
        let mut document = Document::new();
        document.clear(last_build_kind);
        Self {
            document,
            current_tool: ToolBox::for_mode(mode),
            last_build_kind,
            rotate_modifier_held: false,
            cursor: Point::ZERO,
            canvas_size: Size::ZERO,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mode(&self) -> Mode {
        self.current_tool.id()
    }

    pub fn cursor_pos(&self) -> Point {
        self.cursor
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
    }

    pub fn rotate_modifier_held(&self) -> bool {
        self.rotate_modifier_held
    }

    /// Kind used for shapes started outside of a build mode
    fn new_shape_kind(&self) -> ShapeKind {
        self.mode().shape_kind().unwrap_or(self.last_build_kind)
    }

    // ===== Mode =====

    /// Switch the interaction mode
    ///
    /// Selecting a build mode starts a fresh shape of that mode's kind, also
    /// when it is already the current mode. Selecting Edit again does nothing.
    pub fn set_mode(&mut self, mode: Mode) -> Update {
        if mode == Mode::Edit && self.mode() == Mode::Edit {
            return Update::None;
        }

        self.current_tool.cancel(&mut self.document);
        if mode != self.mode() {
            self.current_tool = ToolBox::for_mode(mode);
        }
        if let Some(kind) = mode.shape_kind() {
            self.last_build_kind = kind;
            self.document.start_new_shape(kind);
        }
        tracing::debug!("Switched to mode {}", mode.label());
        Update::Redraw
    }

    // ===== Pointer Input =====

    pub fn mouse_down(&mut self, event: MouseEvent) -> Update {
        self.cursor = event.pos;
        self.current_tool.mouse_down(event, &mut self.document)
    }

    /// Pointer moved, with or without a button held
    ///
    /// Always asks for a repaint since the cursor readout follows the
    /// pointer.
    pub fn mouse_moved(&mut self, event: MouseEvent) -> Update {
        self.cursor = event.pos;
        self.current_tool
            .mouse_moved(event, &mut self.document)
            .or(Update::Redraw)
    }

    pub fn mouse_up(&mut self, event: MouseEvent) -> Update {
        self.cursor = event.pos;
        self.current_tool.mouse_up(event, &mut self.document)
    }

    /// Wheel moved by `notches`
    ///
    /// Rotates instead of scaling while the rotate modifier key is held or
    /// the event itself carries ctrl.
    pub fn wheel(&mut self, notches: i32, mods: Modifiers) -> Update {
        let rotate = self.rotate_modifier_held || mods.ctrl;
        self.current_tool.wheel(notches, rotate, &mut self.document)
    }

    // ===== Document Lifecycle =====

    /// Replace the document with an empty one holding a single new shape
    pub fn new_document(&mut self) -> Update {
        self.current_tool.cancel(&mut self.document);
        let kind = self.new_shape_kind();
        self.document.clear(kind);
        tracing::info!("Started new document");
        Update::Redraw
    }

    /// Replace the document with a saved one
    ///
    /// On success one new shape is started in the current mode. On error the
    /// session is left untouched.
    pub fn load_document(&mut self, saved: SavedDocument) -> Result<Update, DocumentError> {
        let mut document = Document::from_saved(saved)?;
        document.start_new_shape(self.new_shape_kind());

        self.current_tool.cancel(&mut self.document);
        self.document = document;
        tracing::info!("Loaded document with {} shapes", self.document.len());
        Ok(Update::Redraw)
    }

    /// Snapshot of the document for saving
    pub fn saved_document(&self) -> SavedDocument {
        self.document.to_saved()
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::MouseButton;
    use crate::model::{Primitive, ShapeColor};
    use kurbo::{Rect, Vec2};

    fn left(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, y), Some(MouseButton::Left))
    }

    fn click(session: &mut EditSession, x: f64, y: f64) {
        session.mouse_down(left(x, y));
        session.mouse_up(left(x, y));
    }

    #[test]
    fn new_session_has_one_empty_shape() {
        let session = EditSession::default();
        let doc = session.document();
        assert_eq!(doc.len(), 1);
        let shape = doc.active().unwrap();
        assert_eq!(shape.id().get(), 0);
        assert!(shape.points().is_empty());
        assert!(!shape.is_drawable());
        assert_eq!(session.mode(), Mode::BuildPolygon);
    }

    #[test]
    fn rectangle_clicks_pair_up() {
        let mut session = EditSession::new(Mode::BuildRectangle);
        click(&mut session, 10.0, 10.0);
        click(&mut session, 50.0, 40.0);

        let first = session.document().active().unwrap();
        let first_id = first.id();
        assert_eq!(first.points().len(), 2);
        match first.outline().unwrap().primitive() {
            Primitive::Rect(rect) => assert_eq!(*rect, Rect::new(10.0, 10.0, 50.0, 40.0)),
            other => panic!("expected a rectangle, got {other:?}"),
        }

        click(&mut session, 5.0, 5.0);
        let second = session.document().active().unwrap();
        assert_eq!(second.id().get(), first_id.get() + 1);
        assert_eq!(second.points(), &[Point::new(5.0, 5.0)]);
    }

    #[test]
    fn edit_drag_moves_shape_with_pointer() {
        let mut session = EditSession::new(Mode::BuildRectangle);
        click(&mut session, 10.0, 10.0);
        click(&mut session, 50.0, 40.0);
        let id = session.document().active_id().unwrap();
        let before = session.document().get(id).unwrap().points().to_vec();

        session.set_mode(Mode::Edit);
        session.mouse_down(left(20.0, 20.0));
        session.mouse_moved(MouseEvent::new(Point::new(25.0, 30.0), None));
        session.mouse_up(left(25.0, 30.0));

        // Per-move delta is last - current; points shift by its negation
        let delta = Vec2::new(20.0, 20.0) - Vec2::new(25.0, 30.0);
        let after = session.document().get(id).unwrap().points();
        for (old, new) in before.iter().zip(after) {
            assert_eq!(*new, *old - delta);
        }
        assert_eq!(session.cursor_pos(), Point::new(25.0, 30.0));
    }

    #[test]
    fn entering_build_mode_starts_shape() {
        let mut session = EditSession::new(Mode::Edit);
        let before = session.document().len();

        assert_eq!(session.set_mode(Mode::BuildCircle), Update::Redraw);
        assert_eq!(session.document().len(), before + 1);
        assert_eq!(
            session.document().active().unwrap().kind(),
            ShapeKind::Circle
        );

        // Re-selecting a build mode starts yet another shape
        let first = session.document().active_id();
        assert_eq!(session.set_mode(Mode::BuildCircle), Update::Redraw);
        assert_eq!(session.document().len(), before + 2);
        assert_ne!(session.document().active_id(), first);

        // Re-selecting Edit does nothing
        session.set_mode(Mode::Edit);
        let len = session.document().len();
        assert_eq!(session.set_mode(Mode::Edit), Update::None);
        assert_eq!(session.document().len(), len);
    }

    #[test]
    fn new_document_in_edit_uses_last_build_kind() {
        let mut session = EditSession::new(Mode::BuildRectangle);
        session.set_mode(Mode::Edit);
        session.new_document();

        let doc = session.document();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.active().unwrap().kind(), ShapeKind::Rectangle);
        assert_eq!(doc.active().unwrap().id().get(), 0);
    }

    #[test]
    fn wheel_honours_ctrl_on_event() {
        let mut session = EditSession::new(Mode::BuildPolygon);
        for (x, y) in [(0.0, 0.0), (40.0, 0.0), (0.0, 40.0)] {
            click(&mut session, x, y);
        }
        session.set_mode(Mode::Edit);
        session.mouse_down(left(5.0, 5.0));
        session.mouse_up(left(5.0, 5.0));

        let ctrl = Modifiers { ctrl: true };
        session.wheel(4, ctrl);
        session.wheel(2, Modifiers::default());
        let shape = session.document().active().unwrap();
        assert_eq!(shape.rotation_steps(), 4);
        assert!((shape.scale() - 1.05).abs() < 1e-12);
    }

    #[test]
    fn load_replaces_state_and_starts_shape() {
        let mut source = EditSession::new(Mode::BuildCircle);
        click(&mut source, 10.0, 10.0);
        click(&mut source, 20.0, 10.0);
        let saved = source.saved_document();

        let mut session = EditSession::new(Mode::BuildRectangle);
        session.load_document(saved.clone()).unwrap();
        let doc = session.document();
        assert_eq!(doc.len(), saved.shapes.len() + 1);
        assert_eq!(doc.active().unwrap().kind(), ShapeKind::Rectangle);
        assert_eq!(doc.active().unwrap().id().get(), saved.next_id);
    }

    #[test]
    fn failed_load_leaves_session_untouched() {
        let mut session = EditSession::new(Mode::BuildPolygon);
        click(&mut session, 1.0, 1.0);
        let before = session.saved_document();

        let mut bad = before.clone();
        bad.format = "something-else".to_string();
        assert!(session.load_document(bad).is_err());

        let after = session.saved_document();
        assert_eq!(after.next_id, before.next_id);
        assert_eq!(after.shapes.len(), before.shapes.len());
        assert_eq!(after.shapes[0].points(), before.shapes[0].points());
    }

    #[test]
    fn exhausted_id_counter_fails_to_load() {
        let mut session = EditSession::new(Mode::BuildPolygon);
        let before = session.saved_document();

        let json = r#"{"format":"geocreator-document","shapes":[],"next_id":18446744073709551615}"#;
        let saved = SavedDocument::from_json(json).unwrap();
        assert!(matches!(
            session.load_document(saved),
            Err(DocumentError::Invalid(_))
        ));
        assert_eq!(session.saved_document().next_id, before.next_id);
        assert_eq!(session.document().len(), 1);
    }

    #[test]
    fn wheel_rotation_past_counter_limit_wraps() {
        let json = r#"{"format":"geocreator-document","shapes":[
            {"id":0,"kind":"rectangle","points":[{"x":0.0,"y":0.0},{"x":100.0,"y":100.0}],
             "fill":{"r":10,"g":20,"b":30},"scale":1.0,"rotation_steps":9223372036854775807}
        ],"next_id":1}"#;
        let mut session = EditSession::new(Mode::Edit);
        session
            .load_document(SavedDocument::from_json(json).unwrap())
            .unwrap();

        session.mouse_down(left(50.0, 50.0));
        session.mouse_up(left(50.0, 50.0));
        assert_eq!(session.document().active_id().map(|id| id.get()), Some(0));

        let ctrl = Modifiers { ctrl: true };
        assert_eq!(session.wheel(1, ctrl), Update::Redraw);
        let shape = session.document().active().unwrap();
        assert_eq!(shape.rotation_steps(), i64::MIN);
        assert!(shape.contains(Point::new(50.0, 50.0)));
    }

    #[test]
    fn shape_menu_fill_reaches_active_shape() {
        let mut session = EditSession::default();
        let color = ShapeColor::from_rgb8(10, 20, 30);
        assert_eq!(session.set_active_fill(color), Update::Redraw);
        assert_eq!(session.document().active().unwrap().fill(), color);
    }
}
