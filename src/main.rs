// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Atlas Glyph Editor command line tool

fn main() -> anyhow::Result<()> {
    atlas_glyph_editor::run()
}
