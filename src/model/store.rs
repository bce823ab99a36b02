// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory glyph table of the font being edited.
//!
//! `GlyphRecordStore` keeps records in the font's table order (which is also
//! draw and hit-test order), keyed by code point. Every mutation sets the
//! dirty flag; `load` and `revert` clear it. After `revert` the store is
//! unloaded and the owning session reloads it from the font on next access.

use super::glyph::{CodePoint, GlyphRecord, NativeGlyph};
use super::SignedRect;
use crate::error::EditError;

#[derive(Debug, Clone, Default)]
pub struct GlyphRecordStore {
    records: Vec<GlyphRecord>,
    loaded: bool,
    dirty: bool,
}

impl GlyphRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all records with the font's native table.
    ///
    /// Duplicate codes in the source keep their first occurrence.
    pub fn load(&mut self, source: &[NativeGlyph], ascent: f64) {
        self.records.clear();
        for native in source {
            if native.code_point == 0 {
                tracing::warn!("Skipping glyph with code 0 in source table");
                continue;
            }
            if self.index_of(native.code_point).is_some() {
                tracing::warn!(
                    "Skipping duplicate glyph U+{:04X} in source table",
                    native.code_point
                );
                continue;
            }
            self.records.push(GlyphRecord::from_native(native, ascent));
        }
        self.loaded = true;
        self.dirty = false;
        tracing::debug!("Loaded {} glyph records", self.records.len());
    }

    /// Native table for writing back to the font. The store is left as is.
    pub fn commit(&self, ascent: f64) -> Vec<NativeGlyph> {
        self.records.iter().map(|r| r.to_native(ascent)).collect()
    }

    /// Drop all records and the dirty flag
    pub fn revert(&mut self) {
        self.records.clear();
        self.loaded = false;
        self.dirty = false;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.records.iter()
    }

    pub fn index_of(&self, code_point: CodePoint) -> Option<usize> {
        self.records.iter().position(|r| r.code_point == code_point)
    }

    pub fn get(&self, code_point: CodePoint) -> Option<&GlyphRecord> {
        self.records.iter().find(|r| r.code_point == code_point)
    }

    pub fn record(&self, index: usize) -> Option<&GlyphRecord> {
        self.records.get(index)
    }

    /// Append a glyph with the default metrics, returning its index
    pub fn add(&mut self, code_point: CodePoint) -> Result<usize, EditError> {
        if code_point == 0 {
            return Err(EditError::InvalidCodePoint(code_point));
        }
        if self.index_of(code_point).is_some() {
            return Err(EditError::DuplicateGlyph(code_point));
        }
        self.records.push(GlyphRecord::new(code_point));
        self.dirty = true;
        Ok(self.records.len() - 1)
    }

    /// Remove a glyph, keeping the order of the others
    pub fn delete(&mut self, code_point: CodePoint) -> Result<GlyphRecord, EditError> {
        let index = self
            .index_of(code_point)
            .ok_or(EditError::GlyphNotFound(code_point))?;
        self.dirty = true;
        Ok(self.records.remove(index))
    }

    /// Mutate the record for `code_point` and mark the store dirty
    pub fn edit(
        &mut self,
        code_point: CodePoint,
        f: impl FnOnce(&mut GlyphRecord),
    ) -> Result<(), EditError> {
        let index = self
            .index_of(code_point)
            .ok_or(EditError::GlyphNotFound(code_point))?;
        self.edit_at(index, f)
    }

    /// Mutate the record at `index` and mark the store dirty.
    ///
    /// The code point is restored afterwards so edits cannot break
    /// uniqueness.
    pub fn edit_at(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut GlyphRecord),
    ) -> Result<(), EditError> {
        let record = self
            .records
            .get_mut(index)
            .ok_or(EditError::NoRecordAt(index))?;
        let code_point = record.code_point;
        f(record);
        record.code_point = code_point;
        self.dirty = true;
        Ok(())
    }

    pub fn set_uv_at(&mut self, index: usize, uv: SignedRect) -> Result<(), EditError> {
        self.edit_at(index, |r| r.uv = uv)
    }

    pub fn set_vert_at(&mut self, index: usize, vert: SignedRect) -> Result<(), EditError> {
        self.edit_at(index, |r| r.vert = vert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::collections::HashSet;

    fn native(code_point: CodePoint, y: f64) -> NativeGlyph {
        NativeGlyph {
            code_point,
            uv_min: Point::new(0.0, 0.0),
            uv_max: Point::new(0.5, 0.5),
            rotated: false,
            vert: SignedRect::new(1.0, y, 40.0, 20.0),
            advance: 40.0,
        }
    }

    #[test]
    fn add_uses_defaults() {
        let mut store = GlyphRecordStore::new();
        let index = store.add(97).unwrap();

        assert_eq!(index, 0);
        assert_eq!(store.index_of(97), Some(0));
        let record = store.get(97).unwrap();
        assert_eq!(record.uv, SignedRect::new(0.375, 0.375, 0.25, 0.25));
        assert_eq!(record.vert, SignedRect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(record.advance, 50.0);
        assert!(!record.rotated);
        assert!(store.is_dirty());
    }

    #[test]
    fn add_then_delete_leaves_empty_store() {
        let mut store = GlyphRecordStore::new();
        store.add(97).unwrap();
        store.delete(97).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.index_of(97), None);
    }

    #[test]
    fn duplicate_add_fails_without_mutation() {
        let mut store = GlyphRecordStore::new();
        store.load(&[native(65, -20.0)], 0.0);
        assert!(!store.is_dirty());

        assert_eq!(store.add(65), Err(EditError::DuplicateGlyph(65)));
        assert_eq!(store.len(), 1);
        assert!(!store.is_dirty());
    }

    #[test]
    fn add_zero_is_rejected() {
        let mut store = GlyphRecordStore::new();
        assert_eq!(store.add(0), Err(EditError::InvalidCodePoint(0)));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_missing_fails() {
        let mut store = GlyphRecordStore::new();
        assert_eq!(store.delete(42).unwrap_err(), EditError::GlyphNotFound(42));
    }

    #[test]
    fn delete_preserves_order() {
        let mut store = GlyphRecordStore::new();
        store.load(
            &[native(65, 0.0), native(66, 0.0), native(67, 0.0), native(68, 0.0)],
            0.0,
        );

        let removed = store.delete(66).unwrap();
        assert_eq!(removed.code_point, 66);

        let codes: Vec<_> = store.iter().map(|r| r.code_point).collect();
        assert_eq!(codes, vec![65, 67, 68]);
    }

    #[test]
    fn codes_stay_unique_under_add_and_delete() {
        let mut store = GlyphRecordStore::new();
        let ops: [(bool, CodePoint); 10] = [
            (true, 65),
            (true, 66),
            (true, 65),
            (false, 65),
            (true, 65),
            (false, 70),
            (true, 67),
            (true, 66),
            (false, 66),
            (true, 66),
        ];
        for (add, code) in ops {
            let _ = if add {
                store.add(code).map(|_| ())
            } else {
                store.delete(code).map(|_| ())
            };
            let codes: HashSet<_> = store.iter().map(|r| r.code_point).collect();
            assert_eq!(codes.len(), store.len());
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn commit_then_load_round_trips_vert() {
        let source = vec![native(65, -36.0), native(66, 12.5), native(67, -0.25)];
        let ascent = 16.0;

        let mut store = GlyphRecordStore::new();
        store.load(&source, ascent);
        assert_eq!(store.get(65).unwrap().vert.y, -20.0);

        let committed = store.commit(ascent);
        assert_eq!(committed, source);

        let mut reloaded = GlyphRecordStore::new();
        reloaded.load(&committed, ascent);
        for (a, b) in store.iter().zip(reloaded.iter()) {
            assert_eq!(a.vert, b.vert);
        }
    }

    #[test]
    fn load_skips_duplicates_and_zero() {
        let mut store = GlyphRecordStore::new();
        store.load(&[native(65, 0.0), native(0, 0.0), native(65, 5.0)], 0.0);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(65).unwrap().vert.y, 0.0);
    }

    #[test]
    fn edit_marks_dirty_and_keeps_code() {
        let mut store = GlyphRecordStore::new();
        store.load(&[native(65, 0.0)], 0.0);

        store
            .edit(65, |r| {
                r.advance = 12.0;
                r.code_point = 66;
            })
            .unwrap();

        assert!(store.is_dirty());
        assert_eq!(store.get(65).unwrap().advance, 12.0);
        assert_eq!(store.edit(99, |_| {}), Err(EditError::GlyphNotFound(99)));
    }

    #[test]
    fn index_edit_out_of_range_fails() {
        let mut store = GlyphRecordStore::new();
        store.load(&[native(65, 0.0)], 0.0);

        let uv = SignedRect::new(0.1, 0.1, 0.2, 0.2);
        assert_eq!(store.set_uv_at(1, uv), Err(EditError::NoRecordAt(1)));
        assert_eq!(
            store.set_vert_at(7, SignedRect::ZERO),
            Err(EditError::NoRecordAt(7))
        );
        assert!(!store.is_dirty());

        store.set_uv_at(0, uv).unwrap();
        assert_eq!(store.get(65).unwrap().uv, uv);
        assert!(store.is_dirty());
    }

    #[test]
    fn revert_unloads() {
        let mut store = GlyphRecordStore::new();
        store.load(&[native(65, 0.0)], 0.0);
        store.add(66).unwrap();

        store.revert();
        assert!(!store.is_loaded());
        assert!(!store.is_dirty());
        assert!(store.is_empty());
    }
}
