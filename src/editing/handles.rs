// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Resize and move handles for a screen-space rect.
//!
//! Nine handles sit on a normalized copy of the rect: four corners, four
//! sides, and the interior. Each handle moves a set of rect edges. A drag
//! adds the pointer delta to every active edge, which may turn the rect
//! inside out; that is allowed and never clamped.
//!
//! Handles are laid out on the *visible* rect, but edges are stored as
//! `x_min`/`x_max`. When the rect is inverted on an axis, grabbing the
//! visible right side must move `x_min`, so the edge set is mirrored at the
//! moment the drag starts.

use bitflags::bitflags;
use kurbo::Rect;

use super::mouse::{PointerEvent, PointerKind};
use crate::model::SignedRect;
use crate::render::{Canvas, CursorIcon};
use crate::{settings, theme};

bitflags! {
    /// Rect edges moved by a drag, in screen orientation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// `x_min`
        const LEFT = 1 << 0;
        /// `x_max`
        const RIGHT = 1 << 1;
        /// `y_min` (screen Y grows downward)
        const TOP = 1 << 2;
        /// `y_max`
        const BOTTOM = 1 << 3;
    }
}

impl Edges {
    /// Swap LEFT and RIGHT when only one of them is set
    fn mirrored_x(self) -> Self {
        Self::swap_single(self, Self::LEFT, Self::RIGHT)
    }

    /// Swap TOP and BOTTOM when only one of them is set
    fn mirrored_y(self) -> Self {
        Self::swap_single(self, Self::TOP, Self::BOTTOM)
    }

    fn swap_single(edges: Self, a: Self, b: Self) -> Self {
        match (edges.contains(a), edges.contains(b)) {
            (true, false) => (edges - a) | b,
            (false, true) => (edges - b) | a,
            _ => edges,
        }
    }

    /// Map edges of the visible (normalized) rect onto the stored edges
    /// of `rect`
    pub fn for_rect(self, rect: &SignedRect) -> Self {
        let mut edges = self;
        if rect.is_inverted_x() {
            edges = edges.mirrored_x();
        }
        if rect.is_inverted_y() {
            edges = edges.mirrored_y();
        }
        edges
    }

    /// Move the edges of `rect` by `delta`
    fn apply(self, rect: &mut SignedRect, dx: f64, dy: f64) {
        if self.contains(Self::LEFT) {
            rect.set_x_min(rect.x_min() + dx);
        }
        if self.contains(Self::RIGHT) {
            rect.set_x_max(rect.x_max() + dx);
        }
        if self.contains(Self::TOP) {
            rect.set_y_min(rect.y_min() + dy);
        }
        if self.contains(Self::BOTTOM) {
            rect.set_y_max(rect.y_max() + dy);
        }
    }
}

/// One of the nine grab regions of a rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Left,
    BottomLeft,
    Bottom,
    BottomRight,
    Right,
    Center,
}

impl Handle {
    /// All handles in hit-test order; later entries win on overlap
    pub const ALL: [Handle; 9] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Left,
        Handle::BottomLeft,
        Handle::Bottom,
        Handle::BottomRight,
        Handle::Right,
        Handle::Center,
    ];

    /// Edges of the visible rect this handle moves
    pub fn edges(self) -> Edges {
        match self {
            Handle::TopLeft => Edges::LEFT | Edges::TOP,
            Handle::Top => Edges::TOP,
            Handle::TopRight => Edges::RIGHT | Edges::TOP,
            Handle::Left => Edges::LEFT,
            Handle::BottomLeft => Edges::LEFT | Edges::BOTTOM,
            Handle::Bottom => Edges::BOTTOM,
            Handle::BottomRight => Edges::RIGHT | Edges::BOTTOM,
            Handle::Right => Edges::RIGHT,
            Handle::Center => Edges::all(),
        }
    }

    pub fn cursor(self) -> CursorIcon {
        match self {
            Handle::TopLeft | Handle::BottomRight => CursorIcon::ResizeUpLeft,
            Handle::TopRight | Handle::BottomLeft => CursorIcon::ResizeUpRight,
            Handle::Top | Handle::Bottom => CursorIcon::ResizeVertical,
            Handle::Left | Handle::Right => CursorIcon::ResizeHorizontal,
            Handle::Center => CursorIcon::Move,
        }
    }

    /// Grab region of this handle on the normalized rect `r`.
    ///
    /// Sides and the interior shrink by `border` at each end; on rects
    /// smaller than two borders they come out empty and never hit.
    pub fn hit_rect(self, r: Rect, border: f64) -> Rect {
        let b = border;
        let inner_w = r.width() - 2.0 * b;
        let inner_h = r.height() - 2.0 * b;
        let (x, y, w, h) = match self {
            Handle::TopLeft => (r.x0, r.y0, b, b),
            Handle::Top => (r.x0 + b, r.y0, inner_w, b),
            Handle::TopRight => (r.x1 - b, r.y0, b, b),
            Handle::Left => (r.x0, r.y0 + b, b, inner_h),
            Handle::BottomLeft => (r.x0, r.y1 - b, b, b),
            Handle::Bottom => (r.x0 + b, r.y1 - b, inner_w, b),
            Handle::BottomRight => (r.x1 - b, r.y1 - b, b, b),
            Handle::Right => (r.x1 - b, r.y0 + b, b, inner_h),
            Handle::Center => (r.x0 + b, r.y0 + b, inner_w, inner_h),
        };
        Rect::new(x, y, x + w, y + h)
    }
}

/// Interaction state of the handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Edges),
}

/// Drives the nine handles of one rect at a time.
///
/// The controller knows nothing about glyphs: callers pass the screen rect
/// in, and convert it back to glyph space when [`update`](Self::update)
/// reports a change.
#[derive(Debug, Clone)]
pub struct DragHandleController {
    state: DragState,
    border: f64,
}

impl Default for DragHandleController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragHandleController {
    pub fn new() -> Self {
        Self::with_border(settings::handles::GRAB_BORDER)
    }

    pub fn with_border(border: f64) -> Self {
        Self {
            state: DragState::Idle,
            border,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Edges moved by the current drag (empty when idle)
    pub fn active_edges(&self) -> Edges {
        match self.state {
            DragState::Dragging(edges) => edges,
            DragState::Idle => Edges::empty(),
        }
    }

    /// Abandon any drag in progress
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Grab regions of every handle over `rect`
    pub fn handle_rects(&self, rect: &SignedRect) -> impl Iterator<Item = (Handle, Rect)> + use<> {
        let normalized = rect.to_kurbo();
        let border = self.border;
        Handle::ALL
            .into_iter()
            .map(move |h| (h, h.hit_rect(normalized, border)))
    }

    /// The handle under `pos`; the last matching handle wins
    pub fn hit_test(&self, rect: &SignedRect, pos: kurbo::Point) -> Option<Handle> {
        self.handle_rects(rect)
            .filter(|(_, r)| r.contains(pos))
            .map(|(h, _)| h)
            .last()
    }

    /// Draw the handles and register their cursors
    pub fn paint(&self, rect: &SignedRect, canvas: &mut dyn Canvas) {
        for (handle, r) in self.handle_rects(rect) {
            if r.width() <= 0.0 || r.height() <= 0.0 {
                continue;
            }
            canvas.set_cursor(r, handle.cursor());
            if handle != Handle::Center {
                canvas.fill_rect(r, theme::selection::HANDLE);
            }
        }
    }

    /// Feed one pointer event. Returns true when `rect` was changed.
    pub fn update(&mut self, rect: &mut SignedRect, event: &PointerEvent) -> bool {
        if event.is_down()
            && let Some(handle) = self.hit_test(rect, event.pos)
        {
            let edges = handle.edges().for_rect(rect);
            tracing::debug!("Grabbed {:?} handle, moving {:?}", handle, edges);
            self.state = DragState::Dragging(edges);
        }

        let DragState::Dragging(edges) = self.state else {
            return false;
        };
        match event.kind {
            PointerKind::Drag => {
                if event.delta.x == 0.0 && event.delta.y == 0.0 {
                    return false;
                }
                edges.apply(rect, event.delta.x, event.delta.y);
                true
            }
            PointerKind::Up => {
                self.state = DragState::Idle;
                false
            }
            PointerKind::Down | PointerKind::Move => false,
        }
    }

    /// Paint the handles, then process `event`
    pub fn interact(
        &mut self,
        rect: &mut SignedRect,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
    ) -> bool {
        self.paint(rect, canvas);
        self.update(rect, event)
    }
}
