// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph records as edited, and as stored in the font's character table.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::SignedRect;
use crate::settings;

/// Character identity of a glyph. Zero means "no character".
pub type CodePoint = u32;

/// One rendered character of a bitmap font, in editor conventions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRecord {
    pub code_point: CodePoint,
    /// Atlas region in unit-square texture coordinates (origin bottom-left,
    /// Y up). A negative size means the glyph is mirrored.
    pub uv: SignedRect,
    /// Placement relative to the baseline origin (Y up)
    pub vert: SignedRect,
    /// The atlas region is stored rotated by 90 degrees
    pub rotated: bool,
    /// Horizontal cursor advance, in vert units
    pub advance: f64,
}

impl GlyphRecord {
    /// A record with the defaults used by "Add"
    pub fn new(code_point: CodePoint) -> Self {
        Self {
            code_point,
            uv: settings::new_glyph::UV,
            vert: settings::new_glyph::VERT,
            rotated: false,
            advance: settings::new_glyph::ADVANCE,
        }
    }

    /// Convert a native table entry. The native vert rect is measured from
    /// a baseline `ascent` units away from ours.
    pub fn from_native(native: &NativeGlyph, ascent: f64) -> Self {
        Self {
            code_point: native.code_point,
            uv: SignedRect::from_min_max(native.uv_min, native.uv_max),
            vert: native.vert.translate(0.0, ascent),
            rotated: native.rotated,
            advance: native.advance,
        }
    }

    pub fn to_native(&self, ascent: f64) -> NativeGlyph {
        NativeGlyph {
            code_point: self.code_point,
            uv_min: self.uv.origin(),
            uv_max: self.uv.max(),
            rotated: self.rotated,
            vert: self.vert.translate(0.0, -ascent),
            advance: self.advance,
        }
    }

    /// The character this record renders, when the code is a scalar value
    pub fn character(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

/// Character table entry in the font asset's own format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NativeGlyph {
    pub code_point: CodePoint,
    pub uv_min: Point,
    pub uv_max: Point,
    #[serde(default)]
    pub rotated: bool,
    pub vert: SignedRect,
    /// Advance (called "width" by older font assets)
    #[serde(alias = "width")]
    pub advance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_conversion_applies_ascent() {
        let native = NativeGlyph {
            code_point: 65,
            uv_min: Point::new(0.0, 0.0),
            uv_max: Point::new(0.5, 0.5),
            rotated: false,
            vert: SignedRect::new(0.0, -36.0, 40.0, 20.0),
            advance: 40.0,
        };

        let record = GlyphRecord::from_native(&native, 16.0);
        assert_eq!(record.vert, SignedRect::new(0.0, -20.0, 40.0, 20.0));
        assert_eq!(record.uv, SignedRect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(record.to_native(16.0), native);
    }

    #[test]
    fn mirrored_uv_survives_native_round_trip() {
        let mut record = GlyphRecord::new(66);
        record.uv = SignedRect::new(0.5, 0.5, -0.25, 0.125);

        let back = GlyphRecord::from_native(&record.to_native(0.0), 0.0);
        assert_eq!(back.uv, record.uv);
    }

    #[test]
    fn character_of_invalid_scalar_is_none() {
        assert_eq!(GlyphRecord::new(0x41).character(), Some('A'));
        assert_eq!(GlyphRecord::new(0xD800).character(), None);
    }
}
