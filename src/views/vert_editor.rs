// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Vert editor - placement of the selected glyph relative to a baseline

use std::f64::consts::FRAC_PI_2;

use kurbo::{Affine, Point};

use crate::editing::{EditSession, PointerEvent};
use crate::geometry::{rotate_for_display, screen_to_vert, vert_to_screen};
use crate::model::{GlyphRecord, SignedRect};
use crate::render::Canvas;
use crate::{settings, theme};

/// Draw one glyph with its baseline origin at `origin`, returning the screen
/// rect of its vert box
pub fn draw_font_char(canvas: &mut dyn Canvas, record: &GlyphRecord, origin: Point) -> SignedRect {
    let screen = vert_to_screen(record.vert, origin);
    if record.rotated {
        let dest = rotate_for_display(screen);
        let transform = Affine::rotate_about(-FRAC_PI_2, dest.origin());
        canvas.draw_glyph(dest, record.uv, transform);
    } else {
        canvas.draw_glyph(screen, record.uv, Affine::IDENTITY);
    }
    screen
}

/// Draw the selected glyph at `origin` with its handles and run one frame of
/// vert editing.
///
/// Returns false when the selection has no record, in which case nothing
/// is drawn.
pub fn vert_editor(
    session: &mut EditSession,
    origin: Point,
    event: &PointerEvent,
    canvas: &mut dyn Canvas,
) -> bool {
    let Some(index) = session.selected_index() else {
        return false;
    };
    let Some(record) = session.store.record(index).copied() else {
        return false;
    };
    let ascent = session.font().map_or(0.0, |font| font.ascent());

    // Ascent line up from the origin, advance line along the baseline
    let y_axis = SignedRect::new(origin.x, origin.y, settings::axis::WIDTH, -ascent);
    canvas.fill_rect(y_axis.to_kurbo(), theme::axis::Y);
    let x_axis = SignedRect::new(origin.x, origin.y, record.advance, settings::axis::WIDTH);
    canvas.fill_rect(x_axis.to_kurbo(), theme::axis::X);

    let mut screen = draw_font_char(canvas, &record, origin);
    session.selection.note_selected_rect(screen);
    if session.handles.interact(&mut screen, event, canvas)
        && let Err(e) = session
            .store
            .set_vert_at(index, screen_to_vert(screen, origin))
    {
        tracing::error!("Failed to move vert rect: {}", e);
        session.handles.cancel();
    }
    true
}
