// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Which glyph is selected, and the click rule used by the editor views.
//!
//! The selected code is independent of the store: selecting a character
//! the font does not define is how the user gets to "Add". The controller
//! also remembers the screen rect the selected glyph was last drawn at, so
//! that a click on its handles is not taken as a click on a glyph beneath.

use super::mouse::PointerEvent;
use crate::model::{CodePoint, GlyphRecordStore, SignedRect};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    selected: Option<CodePoint>,
    selected_rect: Option<SignedRect>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<CodePoint> {
        self.selected
    }

    pub fn is_selected(&self, code_point: CodePoint) -> bool {
        self.selected == Some(code_point)
    }

    /// Select a character by number; 0 clears the selection
    pub fn select(&mut self, code_point: CodePoint) {
        let next = (code_point != 0).then_some(code_point);
        if next != self.selected {
            tracing::debug!("Selection changed: {:?} -> {:?}", self.selected, next);
            self.selected = next;
            self.selected_rect = None;
        }
    }

    /// Select the first character of `text`; empty text clears the selection
    pub fn select_text(&mut self, text: &str) {
        self.select(text.chars().next().map_or(0, CodePoint::from));
    }

    pub fn clear(&mut self) {
        self.select(0);
    }

    /// Index of the selected glyph's record, if it has one
    pub fn resolve_index(&self, store: &GlyphRecordStore) -> Option<usize> {
        self.selected.and_then(|code| store.index_of(code))
    }

    /// Screen rect the selected glyph was last drawn at
    pub fn selected_rect(&self) -> Option<SignedRect> {
        self.selected_rect
    }

    pub fn note_selected_rect(&mut self, rect: SignedRect) {
        self.selected_rect = Some(rect);
    }

    pub fn forget_selected_rect(&mut self) {
        self.selected_rect = None;
    }

    /// Whether `event` selects the glyph drawn at `glyph_rect`.
    ///
    /// Only a pointer-down over the glyph counts, and never one over the
    /// selected glyph's own rect: that click belongs to its handles. Views
    /// ask this for every glyph in store order and keep the last match.
    pub fn click_selects(&self, glyph_rect: &SignedRect, event: &PointerEvent) -> bool {
        event.is_down()
            && glyph_rect.contains(event.pos)
            && !self
                .selected_rect
                .is_some_and(|rect| rect.contains(event.pos))
    }
}
