// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph panel for displaying and editing the selected character
//!
//! Shows the code point, Unicode name and category, and the metrics of the
//! selected glyph, with UV rects in either texture coordinates or pixels.
//! The panel is a plain snapshot of the session; edits go back through the
//! setters below so they land in the store like any other edit.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::editing::EditSession;
use crate::error::EditError;
use crate::model::{CodePoint, GlyphRecord, SignedRect};
use crate::unicode_names::{NameLookupService, NameStatus};

pub const UNABLE_TO_EDIT: &str = "Unable to edit current selection";
pub const NO_CHARACTER_SELECTED: &str = "No character selected";
pub const ADD_LABEL: &str = "Add";
pub const UNKNOWN_CHARACTER: &str = "Unknown character";

/// How UV rects are shown in the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// Unit-square texture coordinates, as stored
    #[default]
    Coords,
    /// Texture pixels
    Pixels,
}

impl DisplayUnit {
    /// Convert a stored UV rect for display
    pub fn to_display(self, uv: SignedRect, texture: Size) -> SignedRect {
        match self {
            DisplayUnit::Coords => uv,
            DisplayUnit::Pixels => SignedRect::new(
                uv.x * texture.width,
                uv.y * texture.height,
                uv.width * texture.width,
                uv.height * texture.height,
            ),
        }
    }

    /// Convert an edited display value back to a UV rect
    pub fn to_uv(self, shown: SignedRect, texture: Size) -> SignedRect {
        match self {
            DisplayUnit::Coords => shown,
            DisplayUnit::Pixels => SignedRect::new(
                shown.x / texture.width,
                shown.y / texture.height,
                shown.width / texture.width,
                shown.height / texture.height,
            ),
        }
    }
}

/// What the panel offers for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// No font is being edited
    NoFont,
    NoSelection,
    /// The selected character has no glyph yet
    CanAdd(CodePoint),
    /// Index of the selected glyph's record
    Editing(usize),
}

impl PanelState {
    pub fn of(session: &EditSession) -> Self {
        if !session.can_edit() {
            return PanelState::NoFont;
        }
        match (session.selection.selected(), session.selected_index()) {
            (None, _) => PanelState::NoSelection,
            (Some(_), Some(index)) => PanelState::Editing(index),
            (Some(code), None) => PanelState::CanAdd(code),
        }
    }

    /// Centered message or button label for states without glyph fields
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PanelState::NoFont => Some(UNABLE_TO_EDIT),
            PanelState::NoSelection => Some(NO_CHARACTER_SELECTED),
            PanelState::CanAdd(_) => Some(ADD_LABEL),
            PanelState::Editing(_) => None,
        }
    }
}

/// Broad Unicode category of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterCategory {
    Letter,
    Number,
    Punctuation,
    Symbol,
    /// Combining diacritics
    Mark,
    /// Spaces and line breaks
    Separator,
    Other,
}

impl CharacterCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterCategory::Letter => "Letter",
            CharacterCategory::Number => "Number",
            CharacterCategory::Punctuation => "Punctuation",
            CharacterCategory::Symbol => "Symbol",
            CharacterCategory::Mark => "Mark",
            CharacterCategory::Separator => "Separator",
            CharacterCategory::Other => "Other",
        }
    }

    pub fn of(c: char) -> CharacterCategory {
        match get_general_category(c) {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter => CharacterCategory::Letter,

            GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber => CharacterCategory::Number,

            GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation => CharacterCategory::Punctuation,

            GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol => CharacterCategory::Symbol,

            GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark => CharacterCategory::Mark,

            GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator => CharacterCategory::Separator,

            _ => CharacterCategory::Other,
        }
    }
}

/// "U+0041" style label
pub fn format_code_point(code_point: CodePoint) -> String {
    format!("U+{:04X}", code_point)
}

/// The name shown under the selected character.
///
/// While names are not ready this is the lookup's status message.
pub fn name_line(names: &dyn NameLookupService, code_point: CodePoint) -> String {
    if names.status() != NameStatus::Ready {
        return names.status_message();
    }
    names
        .name_for(code_point)
        .unwrap_or(UNKNOWN_CHARACTER)
        .to_string()
}

/// Snapshot of everything the panel shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPanel {
    pub state: PanelState,
    pub selected: Option<CodePoint>,
    pub code_label: Option<String>,
    /// Text-entry form of the selection
    pub character: Option<char>,
    pub name: Option<String>,
    pub category: Option<CharacterCategory>,
    /// The selected glyph's record, UV converted to `display_unit`
    pub fields: Option<GlyphRecord>,
    pub display_unit: DisplayUnit,
    /// Apply and Revert are only enabled with unapplied changes
    pub can_apply: bool,
}

impl GlyphPanel {
    pub fn new(session: &EditSession, names: &dyn NameLookupService, unit: DisplayUnit) -> Self {
        let state = PanelState::of(session);
        let selected = session.selection.selected();
        let texture = texture_size(session);

        let fields = match state {
            PanelState::Editing(index) => session.store.record(index).map(|record| GlyphRecord {
                uv: unit.to_display(record.uv, texture),
                ..*record
            }),
            _ => None,
        };

        Self {
            state,
            selected,
            code_label: selected.map(format_code_point),
            character: selected.and_then(char::from_u32),
            name: selected.map(|code| name_line(names, code)),
            category: selected
                .and_then(char::from_u32)
                .map(CharacterCategory::of),
            fields,
            display_unit: unit,
            can_apply: session.has_changes(),
        }
    }
}

fn texture_size(session: &EditSession) -> Size {
    session
        .font()
        .and_then(|font| font.texture_size())
        .unwrap_or(Size::new(1.0, 1.0))
}

/// Set the selected glyph's UV rect from a value shown in `unit`
pub fn set_uv_from_display(
    session: &mut EditSession,
    code_point: CodePoint,
    shown: SignedRect,
    unit: DisplayUnit,
) -> Result<(), EditError> {
    let uv = unit.to_uv(shown, texture_size(session));
    session.set_uv(code_point, uv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AtlasTexture, FontAsset, NativeGlyph};
    use kurbo::Point;
    use std::path::PathBuf;

    struct FixedNames(NameStatus);

    impl NameLookupService for FixedNames {
        fn status(&self) -> NameStatus {
            self.0
        }

        fn status_message(&self) -> String {
            match self.0 {
                NameStatus::Ready => "Done.".to_string(),
                _ => "Downloading…".to_string(),
            }
        }

        fn name_for(&self, code_point: CodePoint) -> Option<&str> {
            (code_point == 65).then_some("LATIN CAPITAL LETTER A")
        }
    }

    fn panel_session() -> EditSession {
        let mut font = FontAsset::new("Panel");
        font.texture = Some(AtlasTexture {
            path: PathBuf::from("atlas.png"),
            width: 256,
            height: 128,
        });
        font.characters = vec![NativeGlyph {
            code_point: 65,
            uv_min: Point::new(0.25, 0.5),
            uv_max: Point::new(0.5, 1.0),
            rotated: false,
            vert: SignedRect::new(0.0, -20.0, 40.0, 20.0),
            advance: 40.0,
        }];
        let mut session = EditSession::new();
        session.set_font(Some(Box::new(font)));
        session.ensure_loaded().unwrap();
        session
    }

    #[test]
    fn panel_states() {
        let mut session = EditSession::new();
        assert_eq!(PanelState::of(&session), PanelState::NoFont);
        assert_eq!(PanelState::NoFont.message(), Some(UNABLE_TO_EDIT));

        session = panel_session();
        assert_eq!(PanelState::of(&session), PanelState::NoSelection);

        session.selection.select(66);
        assert_eq!(PanelState::of(&session), PanelState::CanAdd(66));
        assert_eq!(PanelState::CanAdd(66).message(), Some(ADD_LABEL));

        session.selection.select(65);
        assert_eq!(PanelState::of(&session), PanelState::Editing(0));
        assert_eq!(PanelState::Editing(0).message(), None);
    }

    #[test]
    fn pixel_display_scales_by_texture() {
        let texture = Size::new(256.0, 128.0);
        let uv = SignedRect::new(0.25, 0.5, 0.25, 0.5);
        let shown = DisplayUnit::Pixels.to_display(uv, texture);

        assert_eq!(shown, SignedRect::new(64.0, 64.0, 64.0, 64.0));
        assert_eq!(DisplayUnit::Pixels.to_uv(shown, texture), uv);
        assert_eq!(DisplayUnit::Coords.to_display(uv, texture), uv);
    }

    #[test]
    fn name_line_shows_status_until_ready() {
        assert_eq!(name_line(&FixedNames(NameStatus::Loading), 65), "Downloading…");
        assert_eq!(
            name_line(&FixedNames(NameStatus::Ready), 65),
            "LATIN CAPITAL LETTER A"
        );
        assert_eq!(name_line(&FixedNames(NameStatus::Ready), 66), UNKNOWN_CHARACTER);
    }

    #[test]
    fn categories() {
        assert_eq!(CharacterCategory::of('A'), CharacterCategory::Letter);
        assert_eq!(CharacterCategory::of('7'), CharacterCategory::Number);
        assert_eq!(CharacterCategory::of('!'), CharacterCategory::Punctuation);
        assert_eq!(CharacterCategory::of('+'), CharacterCategory::Symbol);
        assert_eq!(CharacterCategory::of(' '), CharacterCategory::Separator);
        assert_eq!(CharacterCategory::of('\u{301}'), CharacterCategory::Mark);
    }

    #[test]
    fn code_point_labels() {
        assert_eq!(format_code_point(65), "U+0041");
        assert_eq!(format_code_point(0x1F600), "U+1F600");
    }

    #[test]
    fn panel_snapshot_for_selected_glyph() {
        let mut session = panel_session();
        session.selection.select(65);
        let panel = GlyphPanel::new(&session, &FixedNames(NameStatus::Ready), DisplayUnit::Pixels);

        assert_eq!(panel.code_label.as_deref(), Some("U+0041"));
        assert_eq!(panel.character, Some('A'));
        assert_eq!(panel.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(panel.category, Some(CharacterCategory::Letter));
        let fields = panel.fields.unwrap();
        assert_eq!(fields.uv, SignedRect::new(64.0, 64.0, 64.0, 64.0));
        assert_eq!(fields.advance, 40.0);
        assert!(!panel.can_apply);
    }

    #[test]
    fn pixel_edits_write_back_coords() {
        let mut session = panel_session();
        set_uv_from_display(
            &mut session,
            65,
            SignedRect::new(0.0, 0.0, 128.0, 64.0),
            DisplayUnit::Pixels,
        )
        .unwrap();

        assert_eq!(
            session.store.get(65).unwrap().uv,
            SignedRect::new(0.0, 0.0, 0.5, 0.5)
        );
        assert!(session.has_changes());
    }
}
