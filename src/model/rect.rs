// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangles that keep the sign of their width and height.
//!
//! Glyph UV and vert rects may be mirrored, which the font format encodes as
//! a negative width or height. `kurbo::Rect` stores two corners and is usually
//! kept non-negative, so `SignedRect` holds origin + size instead and only
//! converts to a normalized `kurbo::Rect` for hit testing and drawing.
//!
//! Edge accessors follow the host toolkit convention: `x_min` is always `x`
//! and `x_max` is always `x + width`, whatever the sign of `width`.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Origin + size rectangle whose width and height may be negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SignedRect {
    pub const ZERO: SignedRect = SignedRect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Build from two corners. `min` becomes the origin, so `max < min`
    /// produces a negative size.
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The corner opposite the origin
    pub fn max(&self) -> Point {
        Point::new(self.x_max(), self.y_max())
    }

    pub fn x_min(&self) -> f64 {
        self.x
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_min(&self) -> f64 {
        self.y
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Move the `x_min` edge, keeping `x_max` in place
    pub fn set_x_min(&mut self, value: f64) {
        let x_max = self.x_max();
        self.x = value;
        self.width = x_max - value;
    }

    /// Move the `x_max` edge, keeping `x_min` in place
    pub fn set_x_max(&mut self, value: f64) {
        self.width = value - self.x;
    }

    /// Move the `y_min` edge, keeping `y_max` in place
    pub fn set_y_min(&mut self, value: f64) {
        let y_max = self.y_max();
        self.y = value;
        self.height = y_max - value;
    }

    /// Move the `y_max` edge, keeping `y_min` in place
    pub fn set_y_max(&mut self, value: f64) {
        self.height = value - self.y;
    }

    pub fn is_inverted_x(&self) -> bool {
        self.width < 0.0
    }

    pub fn is_inverted_y(&self) -> bool {
        self.height < 0.0
    }

    /// The same region with a non-negative width and height
    pub fn normalized(&self) -> Self {
        Self::new(
            if self.width >= 0.0 { self.x_min() } else { self.x_max() },
            if self.height >= 0.0 { self.y_min() } else { self.y_max() },
            self.width.abs(),
            self.height.abs(),
        )
    }

    /// Normalized `kurbo::Rect` covering the same region
    pub fn to_kurbo(&self) -> Rect {
        let n = self.normalized();
        Rect::new(n.x, n.y, n.x + n.width, n.y + n.height)
    }

    /// Point containment against the normalized region (half-open, like
    /// `kurbo::Rect::contains`)
    pub fn contains(&self, point: Point) -> bool {
        self.to_kurbo().contains(point)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Component-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &SignedRect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

impl From<Rect> for SignedRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}
