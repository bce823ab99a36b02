// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit, apply and revert against font assets on disk

use std::path::PathBuf;

use atlas_glyph_editor::editing::{ApplyOutcome, EditSession, ImportedAssetPolicy};
use atlas_glyph_editor::model::{AtlasTexture, FontAsset, FontAssetSource, NativeGlyph};
use atlas_glyph_editor::{EditError, SignedRect, settings};
use kurbo::Point;
use test_log::test;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "atlas-glyph-editor-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a one-glyph font to `dir` and load it back
fn font_on_disk(dir: &std::path::Path, imported_from: Option<&str>) -> FontAsset {
    let mut font = FontAsset::new("Sample");
    font.ascent = 16.0;
    font.texture = Some(AtlasTexture {
        path: PathBuf::from("atlas.png"),
        width: 256,
        height: 128,
    });
    font.imported_from = imported_from.map(PathBuf::from);
    font.characters = vec![NativeGlyph {
        code_point: 65,
        uv_min: Point::new(0.0, 0.0),
        uv_max: Point::new(0.5, 0.5),
        rotated: false,
        vert: SignedRect::new(0.0, -36.0, 40.0, 20.0),
        advance: 40.0,
    }];
    let path = dir.join("sample.json");
    font.save_as(&path).unwrap();
    FontAsset::load(&path).unwrap()
}

fn session_for(font: FontAsset) -> EditSession {
    let mut session = EditSession::new();
    session.set_font(Some(Box::new(font)));
    session.ensure_loaded().unwrap();
    session
}

#[test]
fn added_glyph_is_applied_with_defaults() {
    let dir = scratch_dir("add");
    let mut session = session_for(font_on_disk(&dir, None));

    // Records are measured from the ascent line
    assert_eq!(
        session.store.get(65).unwrap().vert,
        SignedRect::new(0.0, -20.0, 40.0, 20.0)
    );

    session.selection.select_text("B");
    let index = session.add_selected().unwrap();
    assert_eq!(index, 1);
    assert_eq!(session.add_selected(), Err(EditError::DuplicateGlyph(66)));
    assert!(session.has_changes());

    let outcome = session.apply(ImportedAssetPolicy::CreateCopy).unwrap();
    assert_eq!(outcome, ApplyOutcome::Applied { glyphs: 2 });
    assert!(!session.has_changes());
    assert!(!session.store.is_loaded());
    assert!(session.last_applied().is_some());

    let table = session.font().unwrap().character_table();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table[1].vert,
        settings::new_glyph::VERT.translate(0.0, -16.0)
    );
    assert_eq!(table[1].advance, settings::new_glyph::ADVANCE);

    session.ensure_loaded().unwrap();
    assert_eq!(session.store.get(66).unwrap().vert, settings::new_glyph::VERT);
}

#[test]
fn revert_restores_deleted_glyph() {
    let dir = scratch_dir("revert");
    let mut session = session_for(font_on_disk(&dir, None));

    assert_eq!(session.delete_selected(), Err(EditError::NoSelection));

    session.selection.select(65);
    session.delete_selected().unwrap();
    assert!(session.store.is_empty());
    assert_eq!(session.selection.selected(), None);

    session.revert();
    session.ensure_loaded().unwrap();
    assert_eq!(session.store.len(), 1);
    assert!(!session.has_changes());
    assert!(session.last_applied().is_none());
}

#[test]
fn imported_font_is_copied_before_apply() {
    let dir = scratch_dir("import");
    let mut session = session_for(font_on_disk(&dir, Some("Sample.ttf")));

    session.set_advance(65, 44.0).unwrap();
    let outcome = session.apply(ImportedAssetPolicy::CreateCopy).unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::AppliedToCopy {
            name: "Sample (copy)".to_string(),
            glyphs: 1
        }
    );

    let font = session.font().unwrap();
    let copy_path = dir.join("sample_copy.json");
    assert_eq!(font.asset_path(), Some(copy_path.as_path()));
    assert!(copy_path.exists());
    assert_eq!(font.character_table()[0].advance, 44.0);
    assert!(session.can_edit());

    // The original on disk is untouched
    let original = FontAsset::load(dir.join("sample.json")).unwrap();
    assert_eq!(original.character_table()[0].advance, 40.0);
}

#[test]
fn cancelled_apply_keeps_edits() {
    let dir = scratch_dir("cancel");
    let mut session = session_for(font_on_disk(&dir, Some("Sample.otf")));

    session.set_rotated(65, true).unwrap();
    let outcome = session.apply(ImportedAssetPolicy::Cancel).unwrap();
    assert_eq!(outcome, ApplyOutcome::Cancelled);
    assert!(session.has_changes());
    assert!(session.store.get(65).unwrap().rotated);
    assert!(!session.font().unwrap().character_table()[0].rotated);
    assert!(!dir.join("sample_copy.json").exists());
}
