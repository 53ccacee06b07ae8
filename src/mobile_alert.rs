//! One-time notice for users on phones and tablets.
//!
//! Shown on startup when the user agent looks mobile and the `modalSeen` flag
//! is absent from persistent storage (browser `localStorage` on the web, the
//! eframe app-data file natively). Any close control dismisses it for good.

use eframe::egui;
use egui_phosphor::regular as icons;

/// Id of the modal.
pub const MOBILE_ALERT_ID: &str = "mobile-alert";
/// Storage key remembering the dismissal.
pub const MODAL_SEEN_KEY: &str = "modalSeen";

const MOBILE_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Case-insensitive match against `iPhone|iPad|iPod|Android`.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|t| ua.contains(t))
}

#[derive(Debug, Default)]
pub struct MobileAlert {
    open: bool,
}

impl MobileAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether to show the notice. Called once at startup.
    pub fn on_ready(&mut self, user_agent: Option<&str>, storage: Option<&dyn eframe::Storage>) {
        let mobile = user_agent.is_some_and(is_mobile_user_agent);
        let seen = storage
            .and_then(|s| s.get_string(MODAL_SEEN_KEY))
            .is_some();
        if mobile && !seen {
            log::debug!("showing mobile alert");
            self.open = true;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the notice and remember it in `storage`.
    pub fn dismiss(&mut self, storage: Option<&mut (dyn eframe::Storage + 'static)>) {
        self.open = false;
        match storage {
            Some(storage) => {
                storage.set_string(MODAL_SEEN_KEY, "true".to_owned());
                storage.flush();
            }
            None => log::warn!("no persistent storage; the mobile alert will show again"),
        }
    }

    /// Render the modal. Returns `true` when one of its close controls was used.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }
        let mut close = false;
        let response = egui::Modal::new(egui::Id::new(MOBILE_ALERT_ID)).show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} Small screen detected", icons::DEVICE_MOBILE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(icons::X).on_hover_text("Close").clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();
            ui.label(
                "Charts are hard to read on small screens. \
                 For the best experience, open this page on a desktop or laptop.",
            );
            ui.add_space(8.0);
            if ui.button("Got it").clicked() {
                close = true;
            }
        });
        close || response.should_close()
    }
}
