//! Measuring toolbar: one toggle button per measured quantity.
//!
//! The toolbar owns a length, an area and an angle session and routes pointer
//! events to whichever of them is switched on. With the exclusive policy
//! (the default) switching a tool on switches the others off, cancelling any
//! measurement they had in progress, so at most one session is enabled.

use crate::config::Config;
use crate::draw::MeasureStyle;
use crate::input::PointerEvent;
use crate::measure::{
    Interaction, MeasureMode, MeasureOptions, MeasurementSession, SessionUpdate,
};
use log::info;

/// A toggle button bound to one measuring session.
#[derive(Debug, Clone)]
pub struct ToolButton {
    pub tip_label: String,
    session: MeasurementSession,
}

impl ToolButton {
    pub fn mode(&self) -> MeasureMode {
        self.session.mode()
    }

    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }
}

/// The three measuring tools and their activation policy.
#[derive(Debug, Clone)]
pub struct MeasureToolbar {
    buttons: Vec<ToolButton>,
    exclusive: bool,
    style: MeasureStyle,
}

impl MeasureToolbar {
    /// Builds the toolbar with default labels, style and the exclusive policy.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let options: MeasureOptions = config.measure_options();
        let buttons = MeasureMode::ALL
            .iter()
            .map(|&mode| ToolButton {
                tip_label: config.tip_label(mode).to_string(),
                session: MeasurementSession::with_options(mode, options.clone()),
            })
            .collect();

        Self {
            buttons,
            exclusive: config.toolbar.exclusive,
            style: config.measure_style(),
        }
    }

    pub fn exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn style(&self) -> &MeasureStyle {
        &self.style
    }

    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }

    pub fn session(&self, mode: MeasureMode) -> &MeasurementSession {
        &self.button(mode).session
    }

    pub fn session_mut(&mut self, mode: MeasureMode) -> &mut MeasurementSession {
        &mut self.button_mut(mode).session
    }

    pub fn tip_label(&self, mode: MeasureMode) -> &str {
        &self.button(mode).tip_label
    }

    /// Mode of the first enabled tool, if any.
    pub fn active_mode(&self) -> Option<MeasureMode> {
        self.active_modes().next()
    }

    pub fn active_modes(&self) -> impl Iterator<Item = MeasureMode> + '_ {
        self.buttons
            .iter()
            .filter(|b| b.session.is_enabled())
            .map(ToolButton::mode)
    }

    /// Switches a tool on, honouring the exclusive policy.
    pub fn activate(&mut self, mode: MeasureMode) {
        if self.exclusive {
            for button in self.buttons.iter_mut().filter(|b| b.mode() != mode) {
                if button.session.is_enabled() {
                    info!("Deactivating {} tool", button.mode());
                    button.session.deactivate();
                }
            }
        }

        let session = self.session_mut(mode);
        if !session.is_enabled() {
            info!("Activating {mode} tool");
            session.activate();
        }
    }

    pub fn deactivate(&mut self, mode: MeasureMode) {
        let session = self.session_mut(mode);
        if session.is_enabled() {
            info!("Deactivating {mode} tool");
            session.deactivate();
        }
    }

    /// Flips a tool's button. Returns whether the tool is now enabled.
    pub fn toggle(&mut self, mode: MeasureMode) -> bool {
        if self.session(mode).is_enabled() {
            self.deactivate(mode);
            false
        } else {
            self.activate(mode);
            true
        }
    }

    /// Switches every tool off, e.g. when the toolbar is removed from the map.
    pub fn deactivate_all(&mut self) {
        for mode in MeasureMode::ALL {
            self.deactivate(mode);
        }
    }

    /// Routes an event to every enabled tool.
    ///
    /// Returns the non-empty updates tagged with the tool that produced them.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Vec<(MeasureMode, SessionUpdate)> {
        self.buttons
            .iter_mut()
            .filter(|b| b.session.is_enabled())
            .map(|b| (b.session.mode(), b.session.handle_event(event)))
            .filter(|(_, update)| !update.is_empty())
            .collect()
    }

    fn button(&self, mode: MeasureMode) -> &ToolButton {
        // Built from MeasureMode::ALL in that order.
        &self.buttons[mode_index(mode)]
    }

    fn button_mut(&mut self, mode: MeasureMode) -> &mut ToolButton {
        &mut self.buttons[mode_index(mode)]
    }
}

impl Default for MeasureToolbar {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_index(mode: MeasureMode) -> usize {
    match mode {
        MeasureMode::Length => 0,
        MeasureMode::Area => 1,
        MeasureMode::Angle => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::SessionState;

    #[test]
    fn starts_with_every_tool_off() {
        let toolbar = MeasureToolbar::new();
        assert_eq!(toolbar.active_mode(), None);
        assert_eq!(toolbar.buttons().len(), 3);
        assert_eq!(toolbar.tip_label(MeasureMode::Length), "Measure length");
        assert_eq!(
            toolbar.tip_label(MeasureMode::Angle),
            "Measure angle (center-start-end)"
        );
        for mode in MeasureMode::ALL {
            assert_eq!(toolbar.session(mode).mode(), mode);
        }
    }

    #[test]
    fn exclusive_toggle_cancels_sibling_measurement() {
        let mut toolbar = MeasureToolbar::new();
        assert!(toolbar.toggle(MeasureMode::Length));
        toolbar.dispatch(&PointerEvent::click(0.0, 0.0));
        assert_eq!(
            toolbar.session(MeasureMode::Length).state(),
            SessionState::Active
        );

        assert!(toolbar.toggle(MeasureMode::Area));

        let length = toolbar.session(MeasureMode::Length);
        assert!(!length.is_enabled());
        assert!(length.vertices().is_empty());
        assert_eq!(length.result(), None);
        assert_eq!(toolbar.active_modes().collect::<Vec<_>>(), [MeasureMode::Area]);
    }

    #[test]
    fn toggling_twice_switches_tool_off() {
        let mut toolbar = MeasureToolbar::new();
        assert!(toolbar.toggle(MeasureMode::Angle));
        assert!(!toolbar.toggle(MeasureMode::Angle));
        assert_eq!(toolbar.active_mode(), None);
    }

    #[test]
    fn non_exclusive_toolbar_allows_parallel_tools() {
        let mut config = Config::default();
        config.toolbar.exclusive = false;
        let mut toolbar = MeasureToolbar::from_config(&config);

        toolbar.activate(MeasureMode::Length);
        toolbar.activate(MeasureMode::Area);
        assert_eq!(
            toolbar.active_modes().collect::<Vec<_>>(),
            [MeasureMode::Length, MeasureMode::Area]
        );

        let updates = toolbar.dispatch(&PointerEvent::click(1.0, 1.0));
        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|(_, update)| update.consumed));

        toolbar.deactivate_all();
        assert_eq!(toolbar.active_mode(), None);
    }

    #[test]
    fn dispatch_routes_events_to_active_tool_only() {
        let mut toolbar = MeasureToolbar::new();
        assert!(toolbar.dispatch(&PointerEvent::click(0.0, 0.0)).is_empty());

        toolbar.activate(MeasureMode::Length);
        toolbar.dispatch(&PointerEvent::click(0.0, 0.0));
        let updates = toolbar.dispatch(&PointerEvent::double_click(0.0, 250.0));

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, MeasureMode::Length);
        assert_eq!(updates[0].1.result.as_deref(), Some("0.25 km"));
        assert!(toolbar.session(MeasureMode::Area).vertices().is_empty());
    }

    #[test]
    fn config_labels_and_style_reach_the_tools() {
        let mut config = Config::default();
        config.labels.start = "Start here".to_string();
        config.labels.area_tip = "Fläche".to_string();
        config.style.stroke_width = 4.0;
        let mut toolbar = MeasureToolbar::from_config(&config);

        assert_eq!(toolbar.tip_label(MeasureMode::Area), "Fläche");
        assert_eq!(toolbar.style().stroke.width, 4.0);

        toolbar.activate(MeasureMode::Area);
        toolbar.dispatch(&PointerEvent::moved(3.0, 3.0));
        assert_eq!(toolbar.session(MeasureMode::Area).hint().text, "Start here");
    }
}
