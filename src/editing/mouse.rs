// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input delivered by the host, one event per frame

use kurbo::{Point, Vec2};

/// What happened to the pointer this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Moved with the primary button held
    Drag,
    /// Primary button released
    Up,
    /// Moved without a button, or a plain repaint
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Position in screen space
    pub pos: Point,
    /// Movement since the previous event
    pub delta: Vec2,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, pos: Point, delta: Vec2) -> Self {
        Self { kind, pos, delta }
    }

    pub fn down(pos: Point) -> Self {
        Self::new(PointerKind::Down, pos, Vec2::ZERO)
    }

    /// A drag that ends at `pos` after moving by `delta`
    pub fn drag(pos: Point, delta: Vec2) -> Self {
        Self::new(PointerKind::Drag, pos, delta)
    }

    pub fn up(pos: Point) -> Self {
        Self::new(PointerKind::Up, pos, Vec2::ZERO)
    }

    pub fn hover(pos: Point) -> Self {
        Self::new(PointerKind::Move, pos, Vec2::ZERO)
    }

    pub fn is_down(&self) -> bool {
        self.kind == PointerKind::Down
    }
}
