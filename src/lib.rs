// Copyright 2026 the Atlas Glyph Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Atlas Glyph Editor: inspect and edit the glyph metrics of bitmap font atlases

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use kurbo::Size;

pub mod components;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod model;
pub mod render;
pub mod report;
pub mod settings;
pub mod theme;
pub mod unicode_names;
pub mod views;

pub use editing::EditSession;
pub use error::EditError;
pub use model::{FontAsset, GlyphRecord, GlyphRecordStore, SignedRect};
pub use settings::Config;
pub use unicode_names::UnicodeNames;
pub use views::EditorView;

const USAGE: &str = "Usage: atlas-glyph-editor <font.json> [--config <file.toml>]";

/// How long the command line tool waits for character names
const NAME_TIMEOUT: Duration = Duration::from_secs(10);

/// Parsed command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub font: PathBuf,
    pub config: Option<PathBuf>,
}

/// Parse arguments, not including the program name
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut font = None;
    let mut config = None;
    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a file\n{USAGE}");
                };
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("Unknown option {flag}\n{USAGE}"),
            _ if font.is_some() => bail!("Only one font asset can be given\n{USAGE}"),
            _ => font = Some(PathBuf::from(arg)),
        }
    }
    let Some(font) = font else {
        bail!("{USAGE}");
    };
    Ok(CliArgs { font, config })
}

/// Entry point for the command line tool
pub fn run() -> Result<()> {
    // Controlled via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("atlas_glyph_editor=info".parse()?),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load_or_default(args.config.as_deref());

    if !args.font.exists() {
        tracing::error!("Path does not exist: {}", args.font.display());
        bail!("{USAGE}");
    }
    tracing::info!("Loading font asset from: {}", args.font.display());
    let font = FontAsset::load(&args.font)
        .with_context(|| format!("Failed to load {}", args.font.display()))?;

    let mut names = UnicodeNames::from_config(&config);
    let status = names.wait(NAME_TIMEOUT);
    tracing::debug!("Character names: {:?}", status);

    let mut session = EditSession::new();
    session.set_font(Some(Box::new(font)));
    session.ensure_loaded()?;

    print!(
        "{}",
        report::glyph_table(&session, &names, config.display_unit)
    );
    println!();
    print!("{}", report::preview(&session, &config.test_string));
    println!();

    let mut view = EditorView::from_config(&config);
    let (width, height) = config.window_size;
    print!(
        "{}",
        report::frame_summary(&mut view, &mut session, Size::new(width, height))
    );
    Ok(())
}
