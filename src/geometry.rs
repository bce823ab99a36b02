// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate transforms between glyph spaces and the screen.
//!
//! Screen space has its origin at the top-left with Y growing downward.
//! UV space is the unit square of the atlas with Y growing upward, and vert
//! space is measured from a baseline origin with Y growing upward. Each
//! forward transform has an exact algebraic inverse, so a rect dragged on
//! screen and written back lands where it was drawn.

use kurbo::{Point, Rect, Size};

use crate::model::SignedRect;

/// Map a UV rect onto the screen rect the atlas is drawn in
pub fn uv_to_screen(uv: SignedRect, target: Rect) -> SignedRect {
    SignedRect::new(
        target.x0 + uv.x * target.width(),
        target.y0 + (1.0 - uv.y) * target.height(),
        uv.width * target.width(),
        -uv.height * target.height(),
    )
}

/// Inverse of [`uv_to_screen`]
pub fn screen_to_uv(screen: SignedRect, target: Rect) -> SignedRect {
    SignedRect::new(
        (screen.x - target.x0) / target.width(),
        1.0 - (screen.y - target.y0) / target.height(),
        screen.width / target.width(),
        screen.height / -target.height(),
    )
}

/// Map a vert rect to the screen, relative to the baseline `origin`
pub fn vert_to_screen(vert: SignedRect, origin: Point) -> SignedRect {
    SignedRect::new(
        vert.x + origin.x,
        origin.y - vert.y,
        vert.width,
        -vert.height,
    )
}

/// Inverse of [`vert_to_screen`]
pub fn screen_to_vert(screen: SignedRect, origin: Point) -> SignedRect {
    SignedRect::new(
        screen.x - origin.x,
        -(screen.y - origin.y),
        screen.width,
        -screen.height,
    )
}

/// Destination rect for a glyph whose atlas region is stored rotated.
///
/// The glyph is drawn into this rect after rotating by -90 degrees around
/// its origin corner.
pub fn rotate_for_display(r: SignedRect) -> SignedRect {
    SignedRect::new(r.x + r.width, r.y + r.height, r.height, -r.width)
}

/// The editing area of a window: its bounds inset by `margin`
pub fn window_rect(size: Size, margin: f64) -> Rect {
    Rect::new(
        margin,
        margin,
        (size.width - margin).max(margin),
        (size.height - margin).max(margin),
    )
}

/// Screen rect for the atlas texture: scaled uniformly so its longest side
/// matches the shortest side of `window`, and centred in it
pub fn fit_texture_rect(window: Rect, texture: Size) -> Rect {
    let longest = texture.width.max(texture.height);
    if longest <= 0.0 {
        return Rect::from_center_size(window.center(), Size::ZERO);
    }
    let scale = window.width().min(window.height()) / longest;
    Rect::from_center_size(window.center(), texture * scale)
}
