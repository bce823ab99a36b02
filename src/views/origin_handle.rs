// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Small draggable square that moves a preview origin

use kurbo::{Point, Rect, Vec2};

use crate::editing::{PointerEvent, PointerKind};
use crate::model::SignedRect;
use crate::render::{Canvas, CursorIcon};
use crate::{settings, theme};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OriginHandle {
    dragging: bool,
}

impl OriginHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The handle square; it sits to the left of `pos`, below it
    pub fn rect(pos: Point) -> Rect {
        let size = settings::preview::ORIGIN_HANDLE_SIZE;
        SignedRect::new(pos.x, pos.y, -size, size).to_kurbo()
    }

    /// Draw the handle at `pos` and return how far it was dragged this frame
    pub fn update(&mut self, pos: Point, event: &PointerEvent, canvas: &mut dyn Canvas) -> Vec2 {
        let rect = Self::rect(pos);
        canvas.fill_rect(rect, theme::origin::HANDLE);
        canvas.set_cursor(rect, CursorIcon::Move);

        if self.dragging {
            match event.kind {
                PointerKind::Drag => return event.delta,
                PointerKind::Up => self.dragging = false,
                PointerKind::Down | PointerKind::Move => {}
            }
        } else if event.is_down() && rect.contains(event.pos) {
            self.dragging = true;
        }
        Vec2::ZERO
    }
}
