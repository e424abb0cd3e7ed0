//! GUI runner - launches the article settings window

use std::path::Path;

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info, warn};

use super::app::ArticleApp;
use crate::config::{Config, WindowSettings};
use crate::domain::catalog::FONT_FAMILY_OPTIONS;

/// Run the main GUI application
pub fn run_gui(config: Config) -> Result<()> {
    let defaults = config.default_settings();
    info!(
        "[article-params] Starting GUI ({}x{})",
        config.window.width, config.window.height
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Article parameters")
            .with_inner_size(config.window.inner_size())
            .with_min_inner_size(WindowSettings::MIN_SIZE)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let font_dir = config.font_dir.clone();
    let app = ArticleApp::new(defaults);

    eframe::run_native(
        "article-params",
        options,
        Box::new(move |cc| {
            if let Some(dir) = &font_dir {
                configure_fonts(&cc.egui_ctx, dir);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Register one named font family per font option whose `<class_name>.ttf` exists in `dir`
fn configure_fonts(ctx: &egui::Context, dir: &Path) {
    let mut fonts = FontDefinitions::default();

    for option in FONT_FAMILY_OPTIONS {
        let Some(class_name) = option.class_name else {
            continue;
        };
        let path = dir.join(format!("{}.ttf", class_name));
        match std::fs::read(&path) {
            Ok(font_data) => {
                fonts
                    .font_data
                    .insert(class_name.to_owned(), FontData::from_owned(font_data).into());

                // Keep the default faces as fallbacks for missing glyphs
                let mut chain = vec![class_name.to_owned()];
                if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
                    chain.extend(proportional.iter().cloned());
                }
                fonts.families.insert(FontFamily::Name(option.value.into()), chain);

                info!("[article-params] Loaded font '{}' from: {}", option.value, path.display());
            }
            Err(e) => {
                debug!("[article-params] No font file for '{}' ({}): {}", option.value, path.display(), e);
            }
        }
    }

    if !fonts.families.keys().any(|f| matches!(f, FontFamily::Name(_))) {
        warn!(
            "[article-params] No fonts found in {}, using the default face",
            dir.display()
        );
    }

    ctx.set_fonts(fonts);
}
