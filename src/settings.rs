// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! The constants at the top of this module stay stable across runs. Visual
//! styling (colors) belongs in `theme.rs`. User-tunable options live in
//! [`Config`], which is read from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::DisplayUnit;
use crate::views::WindowMode;

// ============================================================================
// HANDLE SETTINGS
// ============================================================================
/// Thickness of the grab border around a glyph rect (screen pixels)
const GRAB_BORDER: f64 = 4.0;

// ============================================================================
// AXIS INDICATOR SETTINGS
// ============================================================================
/// Thickness of the axis indicator bars
const AXIS_WIDTH: f64 = 2.0;

/// Maximum length of the axis indicators drawn inside a selection
const AXIS_LENGTH: f64 = 20.0;

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
/// Margin between the window border and the editing area
const WINDOW_MARGIN: f64 = 10.0;

// ============================================================================
// TEST PREVIEW SETTINGS
// ============================================================================
/// Initial offset of the test string origin from the window corner
const TEST_OFFSET: (f64, f64) = (30.0, 30.0);

/// Initial offset of the standalone vert editor from the baseline origin
const VERT_OFFSET: (f64, f64) = (100.0, 200.0);

/// Side length of the square origin handles
const ORIGIN_HANDLE_SIZE: f64 = 8.0;

// ============================================================================
// NEW GLYPH DEFAULTS
// ============================================================================
// A freshly added glyph covers the centre of the atlas and a 50x100 box.

const NEW_GLYPH_UV: (f64, f64, f64, f64) = (0.375, 0.375, 0.25, 0.25);
const NEW_GLYPH_VERT: (f64, f64, f64, f64) = (0.0, 0.0, 50.0, 100.0);
const NEW_GLYPH_ADVANCE: f64 = 50.0;

// ============================================================================
// UNICODE NAME SETTINGS
// ============================================================================
const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/UNIDATA/UnicodeData.txt";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Drag handle geometry
pub mod handles {
    /// Thickness of the grab border around a glyph rect
    pub const GRAB_BORDER: f64 = super::GRAB_BORDER;
}

/// Axis indicators drawn on selections and at the baseline origin
pub mod axis {
    pub const WIDTH: f64 = super::AXIS_WIDTH;
    pub const LENGTH: f64 = super::AXIS_LENGTH;
}

/// Editor window layout
pub mod window {
    pub const MARGIN: f64 = super::WINDOW_MARGIN;
}

/// Test string preview
pub mod preview {
    use kurbo::Vec2;

    pub const TEST_OFFSET: Vec2 = Vec2::new(super::TEST_OFFSET.0, super::TEST_OFFSET.1);
    pub const VERT_OFFSET: Vec2 = Vec2::new(super::VERT_OFFSET.0, super::VERT_OFFSET.1);
    pub const ORIGIN_HANDLE_SIZE: f64 = super::ORIGIN_HANDLE_SIZE;
}

/// Values given to glyphs created with "Add"
pub mod new_glyph {
    use crate::model::SignedRect;

    pub const UV: SignedRect = SignedRect::new(
        super::NEW_GLYPH_UV.0,
        super::NEW_GLYPH_UV.1,
        super::NEW_GLYPH_UV.2,
        super::NEW_GLYPH_UV.3,
    );
    pub const VERT: SignedRect = SignedRect::new(
        super::NEW_GLYPH_VERT.0,
        super::NEW_GLYPH_VERT.1,
        super::NEW_GLYPH_VERT.2,
        super::NEW_GLYPH_VERT.3,
    );
    pub const ADVANCE: f64 = super::NEW_GLYPH_ADVANCE;
}

/// Unicode character name lookup
pub mod names {
    pub const UNICODE_DATA_URL: &str = super::UNICODE_DATA_URL;
}

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================

/// User configuration, read from a TOML file.
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draw the outline of every glyph in the UV editor, not just the
    /// hovered and selected ones
    pub show_all: bool,
    /// String rendered by the test preview
    pub test_string: String,
    /// How the inspector shows UV rects
    pub display_unit: DisplayUnit,
    /// Editor shown when the window opens
    pub window_mode: WindowMode,
    /// Logical size of the editor window
    pub window_size: (f64, f64),
    /// Where downloaded character names are cached between runs
    pub name_cache: Option<PathBuf>,
    /// Allow downloading the Unicode character database
    pub fetch_names: bool,
    pub unicode_data_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_all: true,
            test_string: String::new(),
            display_unit: DisplayUnit::Coords,
            window_mode: WindowMode::Texture,
            window_size: (800.0, 600.0),
            name_cache: None,
            fetch_names: false,
            unicode_data_url: names::UNICODE_DATA_URL.to_string(),
        }
    }
}

impl Config {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse config {:?}", path))
    }

    /// Read a configuration file, falling back to defaults when it is
    /// missing or invalid
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}
