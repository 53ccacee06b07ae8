//! Entry point for running the viewer as a native window.

use eframe::egui;

use crate::config::ViewerConfig;
use crate::loader::Origin;

use super::ViewerApp;

/// Open the viewer in a native window and block until it is closed.
///
/// Endpoint sources are resolved against `cfg.origin`.
pub fn run_viewer(mut cfg: ViewerConfig) -> eframe::Result<()> {
    let origin = Origin::parse(&cfg.origin);
    if origin.is_none() {
        log::warn!("ignoring invalid origin '{}'", cfg.origin);
    }

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1100.0, 750.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| Ok(Box::new(ViewerApp::from_creation_context(cc, &cfg, origin)))),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
fn load_app_icon_svg() -> Option<egui::IconData> {
    let data = include_bytes!("../../icon.svg");

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
