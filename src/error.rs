// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by glyph store and session mutations.
//!
//! These are precondition violations: the host let the user reach a state
//! where the operation makes no sense. They are reported, never retried.

use thiserror::Error;

use crate::model::CodePoint;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("Glyph U+{0:04X} already exists")]
    DuplicateGlyph(CodePoint),
    #[error("No glyph for U+{0:04X}")]
    GlyphNotFound(CodePoint),
    #[error("U+{0:04X} is not a valid glyph code")]
    InvalidCodePoint(CodePoint),
    #[error("No glyph record at index {0}")]
    NoRecordAt(usize),
    #[error("No font is being edited")]
    NoActiveFont,
    #[error("No character is selected")]
    NoSelection,
}
