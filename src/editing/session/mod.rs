// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - editing state for one font at a time

mod apply;

pub use apply::{ApplyOutcome, ImportedAssetPolicy, PendingEdits};

use super::handles::DragHandleController;
use super::selection::SelectionController;
use crate::error::EditError;
use crate::model::{
    AssetPersistence, CodePoint, FontAssetSource, FsAssetPersistence, GlyphRecord,
    GlyphRecordStore, SignedRect,
};
use chrono::{DateTime, Local};

/// Editing session for the glyph table of a single font
///
/// The session owns the working copy of the glyph records and everything
/// the editor views need to change them. The records are read from the
/// font lazily, so switching fonts or reverting is cheap.
///
/// A store belongs to exactly one session; open a second session for a
/// second editor.
pub struct EditSession {
    /// Font being edited, if any
    font: Option<Box<dyn FontAssetSource>>,

    /// How apply deals with imported assets
    persistence: Box<dyn AssetPersistence>,

    /// Working copy of the font's character table
    pub store: GlyphRecordStore,

    /// Selected character
    pub selection: SelectionController,

    /// Drag state of the handles on the selected glyph
    pub handles: DragHandleController,

    /// When the records were last written back to the font
    last_applied: Option<DateTime<Local>>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("font", &self.font.as_ref().map(|font| font.name().to_string()))
            .field("store", &self.store)
            .field("selection", &self.selection)
            .field("handles", &self.handles)
            .field("last_applied", &self.last_applied)
            .finish_non_exhaustive()
    }
}

impl EditSession {
    /// Create a session with no font, backed by the filesystem
    pub fn new() -> Self {
        Self::with_persistence(Box::new(FsAssetPersistence))
    }

    pub fn with_persistence(persistence: Box<dyn AssetPersistence>) -> Self {
        Self {
            font: None,
            persistence,
            store: GlyphRecordStore::new(),
            selection: SelectionController::new(),
            handles: DragHandleController::new(),
            last_applied: None,
        }
    }

    pub fn font(&self) -> Option<&dyn FontAssetSource> {
        self.font.as_deref()
    }

    /// True when a font is active
    pub fn can_edit(&self) -> bool {
        self.font.is_some()
    }

    /// True when the records differ from what was last loaded
    pub fn has_changes(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn last_applied(&self) -> Option<DateTime<Local>> {
        self.last_applied
    }

    /// Make `font` the edit target.
    ///
    /// Unapplied edits to the previous font are discarded; use
    /// [`switch_font`](Self::switch_font) to apply them first. The new
    /// font's table is read on the next [`ensure_loaded`](Self::ensure_loaded).
    pub fn set_font(&mut self, font: Option<Box<dyn FontAssetSource>>) {
        if self.store.is_dirty()
            && let Some(old) = &self.font
        {
            tracing::warn!("Discarding unapplied changes to '{}'", old.name());
        }
        match &font {
            Some(font) => tracing::info!("Editing font '{}'", font.name()),
            None => tracing::info!("No font selected"),
        }
        self.font = font;
        self.discard();
    }

    /// Read the font's character table into the store if it is not loaded.
    ///
    /// The ascent is fetched from the font on every load.
    pub fn ensure_loaded(&mut self) -> Result<(), EditError> {
        let font = self.font.as_deref().ok_or(EditError::NoActiveFont)?;
        if !self.store.is_loaded() {
            let ascent = font.ascent();
            self.store.load(&font.character_table(), ascent);
            tracing::info!(
                "Loaded {} glyphs from '{}' (ascent {})",
                self.store.len(),
                font.name(),
                ascent
            );
        }
        Ok(())
    }

    /// Index of the selected glyph's record
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve_index(&self.store)
    }

    pub fn selected_record(&self) -> Option<&GlyphRecord> {
        self.selected_index().and_then(|i| self.store.record(i))
    }

    /// Add a record for the selected character, returning its index
    pub fn add_selected(&mut self) -> Result<usize, EditError> {
        let result = self.add_selected_inner();
        report(&result, "add");
        result
    }

    fn add_selected_inner(&mut self) -> Result<usize, EditError> {
        self.ensure_loaded()?;
        let code = self.selection.selected().ok_or(EditError::NoSelection)?;
        let index = self.store.add(code)?;
        tracing::info!("Added glyph U+{:04X}", code);
        Ok(index)
    }

    /// Remove the selected character's record and clear the selection
    pub fn delete_selected(&mut self) -> Result<GlyphRecord, EditError> {
        let result = self.delete_selected_inner();
        report(&result, "delete");
        result
    }

    fn delete_selected_inner(&mut self) -> Result<GlyphRecord, EditError> {
        self.ensure_loaded()?;
        let code = self.selection.selected().ok_or(EditError::NoSelection)?;
        let removed = self.store.delete(code)?;
        self.selection.clear();
        self.handles.cancel();
        tracing::info!("Deleted glyph U+{:04X}", code);
        Ok(removed)
    }

    pub fn set_uv(&mut self, code_point: CodePoint, uv: SignedRect) -> Result<(), EditError> {
        self.edit(code_point, |r| r.uv = uv)
    }

    pub fn set_vert(&mut self, code_point: CodePoint, vert: SignedRect) -> Result<(), EditError> {
        self.edit(code_point, |r| r.vert = vert)
    }

    pub fn set_rotated(&mut self, code_point: CodePoint, rotated: bool) -> Result<(), EditError> {
        self.edit(code_point, |r| r.rotated = rotated)
    }

    pub fn set_advance(&mut self, code_point: CodePoint, advance: f64) -> Result<(), EditError> {
        self.edit(code_point, |r| r.advance = advance)
    }

    fn edit(
        &mut self,
        code_point: CodePoint,
        f: impl FnOnce(&mut GlyphRecord),
    ) -> Result<(), EditError> {
        let result = self
            .ensure_loaded()
            .and_then(|()| self.store.edit(code_point, f));
        report(&result, "edit");
        result
    }

    /// Drop the working records, forcing a reload from the font
    fn discard(&mut self) {
        self.store.revert();
        self.selection.forget_selected_rect();
        self.handles.cancel();
    }
}

/// Store errors mean the UI allowed something it should not have
fn report<T>(result: &Result<T, EditError>, action: &str) {
    if let Err(e) = result {
        tracing::error!("Failed to {} glyph: {}", action, e);
    }
}
