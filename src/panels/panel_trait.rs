use egui::Ui;

use crate::session::ChartSession;

#[derive(Debug, Clone)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            visible: false,
        }
    }
}

/// An optional piece of UI around the chart (side panel and/or menu entries).
pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    /// Menu-only panels return `false` and are never docked.
    fn has_side_view(&self) -> bool {
        true
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui, _session: &mut ChartSession) {}
    fn render_panel(&mut self, _ui: &mut Ui, _session: &mut ChartSession) {}
}
