// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor views and the window that hosts them

pub mod origin_handle;
pub mod test_preview;
pub mod uv_editor;
pub mod vert_editor;

pub use origin_handle::OriginHandle;
pub use test_preview::{PlacedGlyph, PreviewLayout, TestPreview, layout_preview};
pub use uv_editor::{draw_selection, uv_editor};
pub use vert_editor::{draw_font_char, vert_editor};

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::editing::{EditSession, PointerEvent};
use crate::geometry::{fit_texture_rect, window_rect};
use crate::render::Canvas;
use crate::settings::{self, Config};

pub const NO_FONT_MESSAGE: &str = "No font selected";
pub const NO_TEXTURE_MESSAGE: &str = "The selected font has no main texture";

/// Which editor fills the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// UV rects over the atlas texture
    #[default]
    Texture,
    /// Test string preview with the vert editor
    Screen,
}

/// What a frame ended up showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameContent {
    NoFont,
    NoTexture,
    Editor(WindowMode),
}

/// The editor window: picks a view for the session and runs it each frame
#[derive(Debug, Clone)]
pub struct EditorView {
    mode: WindowMode,
    mode_changed: bool,
    /// Highlight every glyph in the UV editor, not only hovered ones
    pub show_all: bool,
    pub preview: TestPreview,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl EditorView {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.window_mode,
            mode_changed: false,
            show_all: config.show_all,
            preview: TestPreview::new(config.test_string.clone()),
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: WindowMode) {
        if mode != self.mode {
            self.mode = mode;
            self.mode_changed = true;
        }
    }

    /// Run one frame in a window of `size`
    pub fn frame(
        &mut self,
        session: &mut EditSession,
        size: Size,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
    ) -> FrameContent {
        let window = window_rect(size, settings::window::MARGIN);

        let Some(font) = session.font() else {
            canvas.label(window, NO_FONT_MESSAGE);
            return FrameContent::NoFont;
        };
        let Some(texture_size) = font.texture_size() else {
            canvas.label(window, NO_TEXTURE_MESSAGE);
            return FrameContent::NoTexture;
        };
        if let Err(e) = session.ensure_loaded() {
            tracing::error!("Failed to load glyphs: {}", e);
            return FrameContent::NoFont;
        }

        if self.mode_changed {
            // The selected glyph is drawn somewhere else now
            session.selection.forget_selected_rect();
            session.handles.cancel();
            self.mode_changed = false;
        }

        match self.mode {
            WindowMode::Texture => {
                let texture_rect = fit_texture_rect(window, texture_size);
                uv_editor(session, texture_rect, event, self.show_all, canvas);
            }
            WindowMode::Screen => self.preview.frame(session, window, event, canvas),
        }
        FrameContent::Editor(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AtlasTexture, FontAsset};
    use crate::render::{DrawCommand, DrawList};
    use kurbo::{Point, Rect};
    use std::path::PathBuf;

    fn font(texture: bool) -> Box<FontAsset> {
        let mut font = FontAsset::new("Window");
        if texture {
            font.texture = Some(AtlasTexture {
                path: PathBuf::from("atlas.png"),
                width: 512,
                height: 256,
            });
        }
        Box::new(font)
    }

    #[test]
    fn empty_states_show_labels() {
        let mut view = EditorView::default();
        let mut session = EditSession::new();
        let mut canvas = DrawList::new();
        let hover = PointerEvent::hover(Point::ZERO);
        let size = Size::new(420.0, 220.0);

        assert_eq!(
            view.frame(&mut session, size, &hover, &mut canvas),
            FrameContent::NoFont
        );
        session.set_font(Some(font(false)));
        assert_eq!(
            view.frame(&mut session, size, &hover, &mut canvas),
            FrameContent::NoTexture
        );

        let labels: Vec<_> = canvas.labels().collect();
        assert_eq!(labels, vec![NO_FONT_MESSAGE, NO_TEXTURE_MESSAGE]);
    }

    #[test]
    fn texture_mode_fits_atlas() {
        let mut view = EditorView::default();
        let mut session = EditSession::new();
        session.set_font(Some(font(true)));
        let mut canvas = DrawList::new();

        let content = view.frame(
            &mut session,
            Size::new(420.0, 220.0),
            &PointerEvent::hover(Point::ZERO),
            &mut canvas,
        );
        assert_eq!(content, FrameContent::Editor(WindowMode::Texture));
        assert!(session.store.is_loaded());

        let atlas = canvas.commands.iter().find_map(|c| match c {
            DrawCommand::Atlas { rect } => Some(*rect),
            _ => None,
        });
        // Window is 400x200 after margins; the 2:1 atlas scales to 200x100
        assert_eq!(atlas, Some(Rect::new(110.0, 60.0, 310.0, 160.0)));
    }

    #[test]
    fn tiny_window_leaves_glyphs_alone() {
        let mut view = EditorView::default();
        let mut session = EditSession::new();
        let mut texture_font = font(true);
        texture_font.characters = vec![crate::model::NativeGlyph {
            code_point: 65,
            uv_min: Point::ZERO,
            uv_max: Point::new(0.5, 0.5),
            rotated: false,
            vert: crate::model::SignedRect::new(0.0, -20.0, 40.0, 20.0),
            advance: 40.0,
        }];
        session.set_font(Some(texture_font));
        session.selection.select(65);
        let size = Size::new(20.0, 20.0);

        let mut canvas = DrawList::new();
        let mut pos = Point::new(11.0, 11.0);
        view.frame(&mut session, size, &PointerEvent::down(pos), &mut canvas);
        let delta = kurbo::Vec2::new(3.0, 3.0);
        pos += delta;
        view.frame(&mut session, size, &PointerEvent::drag(pos, delta), &mut canvas);

        assert!(!session.handles.is_dragging());
        assert!(!session.has_changes());
        let uv = session.store.get(65).unwrap().uv;
        assert!(uv.x.is_finite() && uv.y.is_finite());
        assert!(uv.width.is_finite() && uv.height.is_finite());
    }

    #[test]
    fn config_sets_initial_state() {
        let config = Config {
            show_all: false,
            test_string: "Hi".to_string(),
            window_mode: WindowMode::Screen,
            ..Config::default()
        };
        let view = EditorView::from_config(&config);
        assert_eq!(view.mode(), WindowMode::Screen);
        assert!(!view.show_all);
        assert_eq!(view.preview.text, "Hi");
    }
}
