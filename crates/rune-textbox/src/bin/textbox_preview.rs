//! Print how a text box wraps its text.
//!
//! Usage: `textbox-preview [WIDTH] [TEXT...]`. Reads `rune.toml` and the
//! `RUNE_TEXTBOX_*` environment overrides. Measures with the font file named
//! by `RUNE_TEXT_FONT` (or `[textbox] font`), else with the installed face
//! closest to `font_family`, else with fixed advances.

use std::sync::Arc;

use anyhow::{Context, Result};
use rune_config::RuneConfig;
use rune_text::{FontCache, FontFace, FontSurface, LayoutSurface, MonospaceSurface};
use rune_textbox::{ElementId, TextBoxSettings, TextElement, TextProps, quirks_from_config};

fn main() -> Result<()> {
    env_logger::init();

    let config = RuneConfig::load();
    let textbox = &config.textbox;
    let quirks = quirks_from_config(textbox);

    let mut args = std::env::args().skip(1);
    let width: f32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid width {arg:?}"))?,
        None => 120.0,
    };
    let text = {
        let rest: Vec<String> = args.collect();
        if rest.is_empty() {
            "The quick brown fox jumps over the lazy dog".to_string()
        } else {
            rest.join(" ")
        }
    };

    let surface: Box<dyn LayoutSurface> = match &textbox.font {
        Some(path) => {
            let face = FontFace::from_path(path, 0)
                .with_context(|| format!("failed to load font {}", path.display()))?;
            log::info!("measuring with {}", path.display());
            Box::new(FontSurface::new(Arc::new(face)).with_quirks(quirks))
        }
        None => match FontSurface::from_family(FontCache::with_system_fonts(), &textbox.font_family) {
            Ok(surface) => Box::new(surface.with_quirks(quirks)),
            Err(err) => {
                log::warn!("{err}; measuring with fixed advances");
                Box::new(MonospaceSurface::new().with_quirks(quirks))
            }
        },
    };

    let props = TextProps::from_config(textbox)
        .with_text(text)
        .with_width(width);
    let element = TextElement::new(
        ElementId(0),
        props,
        surface,
        TextBoxSettings::from_config(textbox),
    );

    let measurement = element.measurement();
    println!(
        "quirks={} width={width} height={} baseline={} lines={}",
        element.quirks(),
        measurement.height,
        measurement.baseline,
        element.lines().len()
    );
    for line in element.lines() {
        println!(
            "{:>3} x={:<7.2} y={:<7.2} {:?}",
            line.visual_line, line.x, line.y, line.text
        );
    }
    Ok(())
}
