// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Test preview - a string set with the font, edited in context.
//!
//! Characters are laid out left to right with a fixed advance per glyph
//! (`advance * kerning`). The selected glyph's first occurrence is drawn
//! with the vert editor instead of as a plain glyph. When the string does
//! not contain the selection, the vert editor is drawn on its own at a
//! separately draggable origin.

use kurbo::{Point, Rect, Vec2};

use super::origin_handle::OriginHandle;
use super::vert_editor::{draw_font_char, vert_editor};
use crate::editing::{EditSession, PointerEvent};
use crate::geometry::vert_to_screen;
use crate::model::{CodePoint, GlyphRecordStore, SignedRect};
use crate::render::Canvas;
use crate::settings;

/// One character of the preview string with a record in the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub code_point: CodePoint,
    /// Index of the record in the store
    pub index: usize,
    /// Baseline origin the glyph is drawn at
    pub origin: Point,
    /// Screen rect of the glyph's vert box
    pub screen: SignedRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayout {
    pub glyphs: Vec<PlacedGlyph>,
    /// Baseline origin after the last glyph
    pub cursor: Point,
}

/// Lay out `text` from `origin`, skipping characters the store has no
/// record for
pub fn layout_preview(
    store: &GlyphRecordStore,
    text: &str,
    origin: Point,
    kerning: f64,
) -> PreviewLayout {
    let mut cursor = origin;
    let mut glyphs = Vec::new();
    for ch in text.chars() {
        let code_point = CodePoint::from(ch);
        let Some((index, record)) = store
            .index_of(code_point)
            .and_then(|i| store.record(i).map(|r| (i, r)))
        else {
            continue;
        };
        glyphs.push(PlacedGlyph {
            code_point,
            index,
            origin: cursor,
            screen: vert_to_screen(record.vert, cursor),
        });
        cursor.x += record.advance * kerning;
    }
    PreviewLayout { glyphs, cursor }
}

/// State of the test preview between frames
#[derive(Debug, Clone)]
pub struct TestPreview {
    pub text: String,
    /// Offset of the string's origin from the window corner
    pub test_offset: Vec2,
    /// Offset of the standalone vert editor from the baseline origin
    pub vert_offset: Vec2,
    test_handle: OriginHandle,
    vert_handle: OriginHandle,
}

impl Default for TestPreview {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl TestPreview {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            test_offset: settings::preview::TEST_OFFSET,
            vert_offset: settings::preview::VERT_OFFSET,
            test_handle: OriginHandle::new(),
            vert_handle: OriginHandle::new(),
        }
    }

    /// True while either origin handle is being dragged
    pub fn is_dragging_origin(&self) -> bool {
        self.test_handle.is_dragging() || self.vert_handle.is_dragging()
    }

    /// Draw one frame of the preview inside `window`
    pub fn frame(
        &mut self,
        session: &mut EditSession,
        window: Rect,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
    ) {
        let (ascent, kerning) = session
            .font()
            .map_or((0.0, 1.0), |font| (font.ascent(), font.kerning()));
        let corner = window.origin();
        let origin = corner + Vec2::new(0.0, ascent);

        let mut drawn_vert = false;
        let mut clicked = None;
        if !self.text.is_empty() {
            self.test_offset += self.test_handle.update(corner + self.test_offset, event, canvas);
            let layout =
                layout_preview(&session.store, &self.text, origin + self.test_offset, kerning);
            for placed in &layout.glyphs {
                if !drawn_vert && session.selection.is_selected(placed.code_point) {
                    vert_editor(session, placed.origin, event, canvas);
                    drawn_vert = true;
                    continue;
                }
                let Some(record) = session.store.record(placed.index).copied() else {
                    continue;
                };
                let screen = draw_font_char(canvas, &record, placed.origin);
                if session.selection.click_selects(&screen, event) {
                    clicked = Some(placed.code_point);
                }
            }
        }

        if !drawn_vert && session.selected_index().is_some() {
            let origin = origin + self.vert_offset;
            self.vert_offset += self.vert_handle.update(origin, event, canvas);
            vert_editor(session, origin, event, canvas);
        }

        if let Some(code) = clicked
            && !session.handles.is_dragging()
            && !self.is_dragging_origin()
        {
            tracing::debug!("Selected U+{:04X} in the preview", code);
            session.selection.select(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontAsset, NativeGlyph};
    use crate::render::DrawList;

    fn native(code_point: CodePoint, advance: f64) -> NativeGlyph {
        NativeGlyph {
            code_point,
            uv_min: Point::ZERO,
            uv_max: Point::new(0.5, 0.5),
            rotated: false,
            vert: SignedRect::new(0.0, -20.0, advance, 20.0),
            advance,
        }
    }

    fn store_with(glyphs: &[NativeGlyph]) -> GlyphRecordStore {
        let mut store = GlyphRecordStore::new();
        store.load(glyphs, 0.0);
        store
    }

    fn session_with(glyphs: Vec<NativeGlyph>, kerning: f64) -> EditSession {
        let mut font = FontAsset::new("Preview");
        font.kerning = kerning;
        font.characters = glyphs;
        let mut session = EditSession::new();
        session.set_font(Some(Box::new(font)));
        session.ensure_loaded().unwrap();
        session
    }

    #[test]
    fn single_glyph_layout() {
        let store = store_with(&[native(65, 40.0)]);
        let layout = layout_preview(&store, "A", Point::new(10.0, 10.0), 1.0);

        assert_eq!(layout.glyphs.len(), 1);
        assert_eq!(layout.glyphs[0].screen, SignedRect::new(10.0, 30.0, 40.0, -20.0));
        assert_eq!(layout.cursor.x, 50.0);
    }

    #[test]
    fn missing_characters_are_skipped() {
        let store = store_with(&[native(65, 40.0), native(66, 10.0)]);
        let layout = layout_preview(&store, "AxB?A", Point::ZERO, 0.5);

        let codes: Vec<_> = layout.glyphs.iter().map(|g| g.code_point).collect();
        assert_eq!(codes, vec![65, 66, 65]);
        let xs: Vec<_> = layout.glyphs.iter().map(|g| g.origin.x).collect();
        assert_eq!(xs, vec![0.0, 20.0, 25.0]);
        assert_eq!(layout.cursor.x, 45.0);
    }

    #[test]
    fn selected_glyph_edited_in_place_once() {
        let mut session = session_with(vec![native(65, 40.0), native(66, 10.0)], 1.0);
        session.selection.select(65);
        let mut preview = TestPreview::new("ABA");
        let mut canvas = DrawList::new();

        preview.frame(
            &mut session,
            Rect::new(10.0, 10.0, 400.0, 400.0),
            &PointerEvent::hover(Point::ZERO),
            &mut canvas,
        );

        // Three glyph draws: editor for the first A, plain B and A
        assert_eq!(canvas.glyphs().count(), 3);
        // Only one vert editor, so one set of axis bars
        assert_eq!(canvas.fills_with(crate::theme::axis::X).count(), 1);
        // The standalone editor's origin handle is not shown
        assert_eq!(canvas.fills_with(crate::theme::origin::HANDLE).count(), 1);
    }

    #[test]
    fn selection_outside_string_uses_fallback_origin() {
        let mut session = session_with(vec![native(65, 40.0), native(66, 10.0)], 1.0);
        session.selection.select(66);
        let mut preview = TestPreview::new("A");
        let mut canvas = DrawList::new();

        preview.frame(
            &mut session,
            Rect::new(10.0, 10.0, 400.0, 400.0),
            &PointerEvent::hover(Point::ZERO),
            &mut canvas,
        );

        let dests: Vec<_> = canvas.glyphs().map(|(dest, _)| *dest).collect();
        assert_eq!(dests.len(), 2);
        // Fallback origin is the window corner + vert offset (ascent 0)
        assert_eq!(dests[1], SignedRect::new(110.0, 230.0, 10.0, -20.0));
        assert_eq!(canvas.fills_with(crate::theme::origin::HANDLE).count(), 2);
    }

    #[test]
    fn clicking_preview_glyph_selects_it() {
        let mut session = session_with(vec![native(65, 40.0), native(66, 10.0)], 1.0);
        let mut preview = TestPreview::new("AB");
        let mut canvas = DrawList::new();

        // String origin is (10, 10) + (30, 30); B sits at x 80..90, y 40..60
        preview.frame(
            &mut session,
            Rect::new(10.0, 10.0, 400.0, 400.0),
            &PointerEvent::down(Point::new(85.0, 50.0)),
            &mut canvas,
        );
        assert_eq!(session.selection.selected(), Some(66));
    }

    #[test]
    fn dragging_test_origin_moves_string() {
        let mut session = session_with(vec![native(65, 40.0)], 1.0);
        let mut preview = TestPreview::new("A");
        let window = Rect::new(0.0, 0.0, 400.0, 400.0);
        let mut canvas = DrawList::new();

        // The handle sits just left of (30, 30)
        let mut pos = Point::new(26.0, 34.0);
        preview.frame(&mut session, window, &PointerEvent::down(pos), &mut canvas);
        let delta = Vec2::new(5.0, 7.0);
        pos += delta;
        preview.frame(&mut session, window, &PointerEvent::drag(pos, delta), &mut canvas);
        preview.frame(&mut session, window, &PointerEvent::up(pos), &mut canvas);

        assert_eq!(preview.test_offset, Vec2::new(35.0, 37.0));
        assert!(!preview.is_dragging_origin());
        assert_eq!(session.selection.selected(), None);
    }
}
