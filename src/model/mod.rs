// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph metric data model

pub mod font_asset;
pub mod glyph;
pub mod rect;
pub mod store;

pub use font_asset::{AssetPersistence, AtlasTexture, FontAsset, FontAssetSource, FsAssetPersistence};
pub use glyph::{CodePoint, GlyphRecord, NativeGlyph};
pub use rect::SignedRect;
pub use store::GlyphRecordStore;
