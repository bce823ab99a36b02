// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors
//!
//! All colors use hexadecimal format: Color::from_rgba8(0xRR, 0xGG, 0xBB, 0xAA)

use peniko::Color;

// ============================================================================
// SELECTION
// ============================================================================
const SELECTION_FILL: Color = Color::from_rgba8(0x2d, 0x92, 0xfa, 0x50);
// Handles use the selection color at twice the opacity
const HANDLE_FILL: Color = Color::from_rgba8(0x2d, 0x92, 0xfa, 0xa0);

// ============================================================================
// AXES AND ORIGINS
// ============================================================================
const AXIS_X: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const AXIS_Y: Color = Color::from_rgb8(0x00, 0xff, 0x00);
const ORIGIN_HANDLE: Color = Color::from_rgb8(0x00, 0x00, 0xff);

// ============================================================================
// PUBLIC API
// ============================================================================

/// Glyph selection overlays
pub mod selection {
    use super::*;
    pub const FILL: Color = SELECTION_FILL;
    pub const HANDLE: Color = HANDLE_FILL;
}

/// Axis indicators: X (advance) and Y (ascent)
pub mod axis {
    use super::*;
    pub const X: Color = AXIS_X;
    pub const Y: Color = AXIS_Y;
}

/// Draggable origin handles in the test preview
pub mod origin {
    use super::*;
    pub const HANDLE: Color = ORIGIN_HANDLE;
}
