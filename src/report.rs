// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text summaries printed by the command line tool

use std::fmt::Write;

use kurbo::{Point, Size};

use crate::components::{CharacterCategory, DisplayUnit, format_code_point, name_line};
use crate::editing::{EditSession, PointerEvent};
use crate::model::SignedRect;
use crate::render::{DrawCommand, DrawList};
use crate::{settings, theme};
use crate::unicode_names::NameLookupService;
use crate::views::{EditorView, FrameContent, layout_preview};

fn rect(r: &SignedRect) -> String {
    format!("({:.4}, {:.4}, {:.4}, {:.4})", r.x, r.y, r.width, r.height)
}

/// One line per glyph record, in table order.
///
/// UV rects are shown in `unit`; without a texture they stay in coordinates.
pub fn glyph_table(
    session: &EditSession,
    names: &dyn NameLookupService,
    unit: DisplayUnit,
) -> String {
    let mut out = String::new();
    let texture = session.font().and_then(|f| f.texture_size());
    if let Some(font) = session.font() {
        let _ = writeln!(
            out,
            "{}: {} glyphs, ascent {}, kerning {}",
            font.name(),
            session.store.len(),
            font.ascent(),
            font.kerning()
        );
    }
    for record in session.store.iter() {
        let uv = match texture {
            Some(size) => unit.to_display(record.uv, size),
            None => record.uv,
        };
        let category = record
            .character()
            .map_or("Other", |c| CharacterCategory::of(c).display_name());
        let _ = writeln!(
            out,
            "{} {:<12} {:<32} uv {} vert {}{} advance {}",
            format_code_point(record.code_point),
            category,
            name_line(names, record.code_point),
            rect(&uv),
            rect(&record.vert),
            if record.rotated { " rotated" } else { "" },
            record.advance
        );
    }
    out
}

/// Where each character of `text` lands in the test preview
pub fn preview(session: &EditSession, text: &str) -> String {
    let mut out = String::new();
    let Some(font) = session.font() else {
        return out;
    };
    let margin = settings::window::MARGIN;
    let origin = Point::new(margin, margin + font.ascent()) + settings::preview::TEST_OFFSET;
    let layout = layout_preview(&session.store, text, origin, font.kerning());

    let _ = writeln!(out, "Preview {:?}: {} glyphs", text, layout.glyphs.len());
    for placed in &layout.glyphs {
        let _ = writeln!(
            out,
            "  {} at ({:.2}, {:.2}) -> {}",
            format_code_point(placed.code_point),
            placed.origin.x,
            placed.origin.y,
            rect(&placed.screen)
        );
    }
    let _ = writeln!(out, "  cursor ends at x = {:.2}", layout.cursor.x);
    out
}

/// Run one idle frame of `view` in a window of `size` and describe it
pub fn frame_summary(view: &mut EditorView, session: &mut EditSession, size: Size) -> String {
    let mut canvas = DrawList::new();
    let hover = PointerEvent::hover(Point::ZERO);
    let content = view.frame(session, size, &hover, &mut canvas);

    let mut out = String::new();
    match content {
        FrameContent::NoFont | FrameContent::NoTexture => {
            for label in canvas.labels() {
                let _ = writeln!(out, "{label}");
            }
        }
        FrameContent::Editor(mode) => {
            let _ = writeln!(out, "{:?} view in {}x{}", mode, size.width, size.height);
            for command in &canvas.commands {
                if let DrawCommand::Atlas { rect } = command {
                    let _ = writeln!(
                        out,
                        "  atlas at ({:.1}, {:.1})-({:.1}, {:.1})",
                        rect.x0, rect.y0, rect.x1, rect.y1
                    );
                }
            }
            let _ = writeln!(
                out,
                "  {} highlighted regions, {} glyphs drawn",
                canvas.fills_with(theme::selection::FILL).count(),
                canvas.glyphs().count()
            );
        }
    }
    out
}
