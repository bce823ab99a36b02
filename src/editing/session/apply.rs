// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Writing the working records back to the font, and throwing them away

use super::EditSession;
use crate::error::EditError;
use crate::model::FontAssetSource;
use anyhow::Result;

/// What to do when applying to an asset an importer will regenerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportedAssetPolicy {
    /// Write an editable copy of the font, switch to it, and apply there
    CreateCopy,
    /// Keep the edits in the session and do nothing
    Cancel,
    /// Apply to the imported asset anyway; the edits are lost on re-import
    ApplyInPlace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The table was written to the active font
    Applied { glyphs: usize },
    /// The table was written to a new copy, which is now the active font
    AppliedToCopy { name: String, glyphs: usize },
    Cancelled,
}

/// What happens to unapplied edits when the font changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingEdits {
    /// Apply them to the current font first
    Apply(ImportedAssetPolicy),
    Discard,
}

impl EditSession {
    /// Change the edit target after settling unapplied edits.
    ///
    /// Returns false when the apply was cancelled. The current font and
    /// its edits are then kept.
    pub fn switch_font(
        &mut self,
        font: Option<Box<dyn FontAssetSource>>,
        pending: PendingEdits,
    ) -> Result<bool> {
        if self.has_changes()
            && let PendingEdits::Apply(policy) = pending
            && self.apply(policy)? == ApplyOutcome::Cancelled
        {
            tracing::info!("Font switch cancelled");
            return Ok(false);
        }
        self.set_font(font);
        Ok(true)
    }

    /// Write the working records to the font's character table.
    ///
    /// `policy` only matters when the font is an immutable imported asset.
    /// On success the store is reverted, so the next access reloads from
    /// the font.
    pub fn apply(&mut self, policy: ImportedAssetPolicy) -> Result<ApplyOutcome> {
        self.ensure_loaded()?;
        let Some(font) = self.font.as_deref() else {
            return Err(EditError::NoActiveFont.into());
        };

        let mut copied = false;
        if self.persistence.is_immutable_imported_asset(font) {
            match policy {
                ImportedAssetPolicy::Cancel => {
                    tracing::info!("Apply to imported font '{}' cancelled", font.name());
                    return Ok(ApplyOutcome::Cancelled);
                }
                ImportedAssetPolicy::ApplyInPlace => {
                    tracing::warn!(
                        "Applying to imported font '{}'; changes are lost on re-import",
                        font.name()
                    );
                }
                ImportedAssetPolicy::CreateCopy => {
                    let copy = self.persistence.create_editable_copy(font)?;
                    tracing::info!("Switching to editable copy '{}'", copy.name());
                    // Keep the records: they are applied to the copy below
                    self.font = Some(copy);
                    copied = true;
                }
            }
        }

        let Some(font) = self.font.as_deref_mut() else {
            return Err(EditError::NoActiveFont.into());
        };
        let table = self.store.commit(font.ascent());
        let glyphs = table.len();
        font.set_character_table(table);
        font.mark_dirty();
        let name = font.name().to_string();

        self.last_applied = Some(chrono::Local::now());
        tracing::info!("Applied {} glyphs to '{}'", glyphs, name);
        self.revert();

        Ok(if copied {
            ApplyOutcome::AppliedToCopy { name, glyphs }
        } else {
            ApplyOutcome::Applied { glyphs }
        })
    }

    /// Discard unapplied edits; the records reload from the font on next
    /// access
    pub fn revert(&mut self) {
        if self.store.is_dirty() {
            tracing::info!("Reverting unapplied changes");
        }
        self.discard();
    }
}
