// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod handles;
pub mod mouse;
pub mod selection;
pub mod session;

pub use handles::{DragHandleController, DragState, Edges, Handle};
pub use mouse::{PointerEvent, PointerKind};
pub use selection::SelectionController;
pub use session::{ApplyOutcome, EditSession, ImportedAssetPolicy, PendingEdits};
