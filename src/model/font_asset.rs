// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Font assets the editor reads glyph tables from and writes them back to.
//!
//! The editor core only talks to fonts through [`FontAssetSource`] and
//! [`AssetPersistence`]. `FontAsset` is the JSON-backed implementation used by
//! the command line tool and the tests: a font description with its atlas
//! texture, metrics, and native character table.

use anyhow::{Context, Result};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::glyph::NativeGlyph;

// ============================================================================
// COLLABORATOR INTERFACES
// ============================================================================

/// Access to a font's native character table and metrics
pub trait FontAssetSource {
    /// Display name of the font
    fn name(&self) -> &str;

    fn character_table(&self) -> Vec<NativeGlyph>;

    /// Distance from the native baseline to the font's top
    fn ascent(&self) -> f64;

    /// Font-wide scalar applied to advances in the test preview
    fn kerning(&self) -> f64;

    fn set_character_table(&mut self, table: Vec<NativeGlyph>);

    /// Flag the asset as modified so the host persists it
    fn mark_dirty(&mut self);

    /// Pixel size of the atlas texture, `None` when the font has none
    fn texture_size(&self) -> Option<Size>;

    /// Image file of the atlas texture
    fn texture_path(&self) -> Option<&Path> {
        None
    }

    /// Where the asset itself lives, if anywhere
    fn asset_path(&self) -> Option<&Path> {
        None
    }

    /// The file this asset was generated from by an importer
    fn imported_from(&self) -> Option<&Path> {
        None
    }
}

/// Asset database operations the editor needs on apply
pub trait AssetPersistence {
    /// True when the asset is regenerated by an importer, so edits to it
    /// are lost on re-import
    fn is_immutable_imported_asset(&self, font: &dyn FontAssetSource) -> bool;

    /// Create an editable copy of `font` next to it
    fn create_editable_copy(&self, font: &dyn FontAssetSource)
    -> Result<Box<dyn FontAssetSource>>;
}

// ============================================================================
// JSON FONT ASSET
// ============================================================================

/// The atlas image of a bitmap font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasTexture {
    pub path: PathBuf,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl AtlasTexture {
    /// Read the texture dimensions from the image header
    pub fn probe(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("Failed to read atlas texture {:?}", path))?;
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// A bitmap font stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontAsset {
    pub name: String,
    #[serde(default)]
    pub ascent: f64,
    #[serde(default = "default_kerning", alias = "tracking")]
    pub kerning: f64,
    #[serde(default)]
    pub texture: Option<AtlasTexture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_from: Option<PathBuf>,
    #[serde(default)]
    pub characters: Vec<NativeGlyph>,

    #[serde(skip)]
    pub path: Option<PathBuf>,
    #[serde(skip)]
    dirty: bool,
}

fn default_kerning() -> f64 {
    1.0
}

impl FontAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ascent: 0.0,
            kerning: default_kerning(),
            texture: None,
            imported_from: None,
            characters: Vec::new(),
            path: None,
            dirty: false,
        }
    }

    /// Load a font asset from a JSON file.
    ///
    /// Texture paths are resolved relative to the asset, and missing
    /// texture dimensions are read from the image.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read font asset {:?}", path))?;
        let mut font: FontAsset = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse font asset {:?}", path))?;

        if let Some(texture) = &mut font.texture {
            if texture.path.is_relative()
                && let Some(dir) = path.parent()
            {
                texture.path = dir.join(&texture.path);
            }
            if texture.width == 0 || texture.height == 0 {
                *texture = AtlasTexture::probe(&texture.path)?;
            }
        }

        font.path = Some(path.to_path_buf());
        tracing::info!(
            "Loaded font asset: {} ({} characters)",
            font.name,
            font.characters.len()
        );
        Ok(font)
    }

    /// Write the asset back to the file it was loaded from
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .path
            .clone()
            .context("Font asset has no file to save to")?;
        self.save_as(&path)?;
        self.dirty = false;
        Ok(())
    }

    pub fn save_as(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize font asset")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to save font asset to {:?}", path))?;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl FontAssetSource for FontAsset {
    fn name(&self) -> &str {
        &self.name
    }

    fn character_table(&self) -> Vec<NativeGlyph> {
        self.characters.clone()
    }

    fn ascent(&self) -> f64 {
        self.ascent
    }

    fn kerning(&self) -> f64 {
        self.kerning
    }

    fn set_character_table(&mut self, table: Vec<NativeGlyph>) {
        self.characters = table;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn texture_size(&self) -> Option<Size> {
        self.texture
            .as_ref()
            .map(AtlasTexture::size)
            .filter(|s| s.width > 0.0 && s.height > 0.0)
    }

    fn texture_path(&self) -> Option<&Path> {
        self.texture.as_ref().map(|t| t.path.as_path())
    }

    fn asset_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn imported_from(&self) -> Option<&Path> {
        self.imported_from.as_deref()
    }
}

// ============================================================================
// FILESYSTEM PERSISTENCE
// ============================================================================

/// Asset persistence for JSON font assets on disk.
///
/// Fonts generated from a TrueType/OpenType file are treated as imported;
/// their editable copies are written as `<stem>_copy.json` beside the asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetPersistence;

impl FsAssetPersistence {
    /// First free `<stem>_copy[N].json` path in `dir`
    fn copy_path(dir: &Path, stem: &str) -> PathBuf {
        let base = format!("{stem}_copy");
        let mut path = dir.join(format!("{base}.json"));
        let mut i = 1;
        while path.exists() {
            path = dir.join(format!("{base}{i}.json"));
            i += 1;
        }
        path
    }
}

impl AssetPersistence for FsAssetPersistence {
    fn is_immutable_imported_asset(&self, font: &dyn FontAssetSource) -> bool {
        font.imported_from()
            .and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                ext == "ttf" || ext == "otf"
            })
            .unwrap_or(false)
    }

    fn create_editable_copy(
        &self,
        font: &dyn FontAssetSource,
    ) -> Result<Box<dyn FontAssetSource>> {
        let source = font
            .asset_path()
            .context("Cannot copy a font asset that has no file")?;
        let dir = source.parent().unwrap_or_else(|| Path::new("."));
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font");

        // Everything the editor reads, but not `imported_from`
        let mut copy = FontAsset::new(format!("{} (copy)", font.name()));
        copy.ascent = font.ascent();
        copy.kerning = font.kerning();
        copy.characters = font.character_table();
        copy.texture = font.texture_size().map(|size| AtlasTexture {
            path: font.texture_path().map(Path::to_path_buf).unwrap_or_default(),
            width: size.width as u32,
            height: size.height as u32,
        });

        let path = Self::copy_path(dir, stem);
        copy.save_as(&path)?;
        tracing::info!("Created editable copy at {}", path.display());
        copy.path = Some(path);
        Ok(Box::new(copy))
    }
}
