// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing surface the editor views paint into.
//!
//! The host owns the window and the atlas texture; views only issue calls
//! through [`Canvas`]. [`DrawList`] records the calls instead of drawing,
//! which is what the command line tool and the tests use.

use kurbo::{Affine, Rect};
use peniko::Color;

use crate::model::SignedRect;

/// Mouse cursor shown while hovering a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    /// Diagonal resize, top-left to bottom-right
    ResizeUpLeft,
    /// Diagonal resize, top-right to bottom-left
    ResizeUpRight,
    ResizeVertical,
    ResizeHorizontal,
    Move,
}

/// Host drawing primitives
pub trait Canvas {
    /// Fill an axis-aligned rect with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw the whole atlas texture into `rect`
    fn draw_atlas(&mut self, rect: Rect);

    /// Draw the atlas region `tex_coords` (UV space) into `dest`, after
    /// applying `transform` to the destination
    fn draw_glyph(&mut self, dest: SignedRect, tex_coords: SignedRect, transform: Affine);

    /// Show `cursor` while the pointer is over `rect`
    fn set_cursor(&mut self, rect: Rect, cursor: CursorIcon);

    /// Centered informational text
    fn label(&mut self, rect: Rect, text: &str);
}

/// A recorded [`Canvas`] call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Atlas {
        rect: Rect,
    },
    Glyph {
        dest: SignedRect,
        tex_coords: SignedRect,
        transform: Affine,
    },
    Cursor {
        rect: Rect,
        cursor: CursorIcon,
    },
    Label {
        rect: Rect,
        text: String,
    },
}

/// Canvas that records every call in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Destination rects of all glyph draws, in draw order
    pub fn glyphs(&self) -> impl Iterator<Item = (&SignedRect, &Affine)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Glyph {
                dest, transform, ..
            } => Some((dest, transform)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rects filled with exactly `color`
    pub fn fills_with(&self, color: Color) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::FillRect { rect, color: c } if c.to_rgba8() == color.to_rgba8() => {
                Some(rect)
            }
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_atlas(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Atlas { rect });
    }

    fn draw_glyph(&mut self, dest: SignedRect, tex_coords: SignedRect, transform: Affine) {
        self.commands.push(DrawCommand::Glyph {
            dest,
            tex_coords,
            transform,
        });
    }

    fn set_cursor(&mut self, rect: Rect, cursor: CursorIcon) {
        self.commands.push(DrawCommand::Cursor { rect, cursor });
    }

    fn label(&mut self, rect: Rect, text: &str) {
        self.commands.push(DrawCommand::Label {
            rect,
            text: text.to_string(),
        });
    }
}
