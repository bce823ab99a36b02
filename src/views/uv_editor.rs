// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! UV editor - glyph regions drawn over the atlas texture
//!
//! Every glyph's UV rect is mapped onto the fitted texture. The selected
//! glyph carries the drag handles; other glyphs highlight on hover and are
//! selected by clicking.

use kurbo::Rect;

use crate::editing::{EditSession, PointerEvent};
use crate::geometry::{screen_to_uv, uv_to_screen};
use crate::model::SignedRect;
use crate::render::Canvas;
use crate::{settings, theme};

/// Highlight a glyph rect, with short axis bars at its origin corner.
///
/// The bars show which way the glyph's X and Y run, which is how mirrored
/// and rotated atlas regions are told apart.
pub fn draw_selection(canvas: &mut dyn Canvas, rect: SignedRect, rotated: bool) {
    canvas.fill_rect(rect.to_kurbo(), theme::selection::FILL);

    let bar = |extent: f64| extent.signum() * extent.abs().min(settings::axis::LENGTH);
    let width = bar(rect.width);
    let height = bar(rect.height);
    let thickness = settings::axis::WIDTH;

    let y_axis = if rotated {
        SignedRect::new(rect.x, rect.y, width, thickness)
    } else {
        SignedRect::new(rect.x, rect.y, thickness, height)
    };
    canvas.fill_rect(y_axis.to_kurbo(), theme::axis::Y);

    let x_axis = if rotated {
        SignedRect::new(rect.x, rect.y, thickness, height)
    } else {
        SignedRect::new(rect.x, rect.y, width, thickness)
    };
    canvas.fill_rect(x_axis.to_kurbo(), theme::axis::X);
}

/// Draw the atlas into `texture_rect` and run one frame of UV editing
pub fn uv_editor(
    session: &mut EditSession,
    texture_rect: Rect,
    event: &PointerEvent,
    show_all: bool,
    canvas: &mut dyn Canvas,
) {
    canvas.draw_atlas(texture_rect);
    // Nothing can be mapped back from a collapsed atlas
    if texture_rect.width() <= 0.0 || texture_rect.height() <= 0.0 {
        session.handles.cancel();
        return;
    }

    let mut clicked = None;
    for index in 0..session.store.len() {
        let Some(record) = session.store.record(index) else {
            continue;
        };
        let code = record.code_point;
        let rotated = record.rotated;
        let mut screen = uv_to_screen(record.uv, texture_rect);
        let selected = session.selection.is_selected(code);

        if selected {
            session.selection.note_selected_rect(screen);
            let moved = session.handles.interact(&mut screen, event, canvas);
            if session.handles.is_dragging() {
                draw_selection(canvas, screen, rotated);
                if moved
                    && let Err(e) = session
                        .store
                        .set_uv_at(index, screen_to_uv(screen, texture_rect))
                {
                    tracing::error!("Failed to move UV rect: {}", e);
                    session.handles.cancel();
                }
            }
        }

        if session.handles.is_dragging() {
            continue;
        }
        if selected || screen.contains(event.pos) {
            draw_selection(canvas, screen, rotated);
            // Later glyphs win when rects overlap
            if session.selection.click_selects(&screen, event) {
                clicked = Some(code);
            }
        } else if show_all {
            draw_selection(canvas, screen, rotated);
        }
    }

    // A down that grabbed the selected glyph's handles keeps the selection
    if let Some(code) = clicked
        && !session.handles.is_dragging()
    {
        tracing::debug!("Selected U+{:04X} in the atlas", code);
        session.selection.select(code);
    }
}
