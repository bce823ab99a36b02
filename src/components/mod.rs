// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Inspector components for the Atlas Glyph Editor

pub mod glyph_panel;

// Re-export commonly used types
pub use glyph_panel::{
    CharacterCategory, DisplayUnit, GlyphPanel, PanelState, format_code_point, name_line,
};
