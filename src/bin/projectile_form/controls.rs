use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{DIALOG_H, DIALOG_W, PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::{AppRuntime, Dialog};

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub(crate) struct FrameActions {
    pub(crate) simulate: bool,
    pub(crate) reset: bool,
    pub(crate) dismiss: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            simulate: self.simulate || other.simulate,
            reset: self.reset || other.reset,
            dismiss: self.dismiss || other.dismiss,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        simulate: is_key_pressed(KeyCode::Enter),
        reset: false,
        dismiss: is_key_pressed(KeyCode::Escape),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let editable = state.accepts_input();
    let form = &mut state.form;

    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch Parameters")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            if editable {
                ui.label(None, "Initial Velocity (m/s):");
                ui.input_text(hash!(), "", &mut form.velocity);
                ui.label(None, "Angle (degrees):");
                ui.input_text(hash!(), "", &mut form.angle);
                ui.label(None, "Initial Height (m):");
                ui.input_text(hash!(), "", &mut form.height);
            } else {
                // Read-only copies while a dialog holds the focus.
                ui.label(None, "Initial Velocity (m/s):");
                ui.label(None, &form.velocity);
                ui.label(None, "Angle (degrees):");
                ui.label(None, &form.angle);
                ui.label(None, "Initial Height (m):");
                ui.label(None, &form.height);
            }
            ui.separator();
            if ui.button(None, "Simulate") && editable {
                actions.simulate = true;
            }
            ui.same_line(0.0);
            if ui.button(None, "Reset") && editable {
                actions.reset = true;
            }
            ui.separator();
            ui.label(None, &form.time_of_flight_text());
            ui.label(None, &form.max_height_text());
            ui.label(None, &form.range_text());
        });

    actions
}

pub(crate) fn draw_dialog(dialog: &Dialog, screen_w: f32, screen_h: f32) -> FrameActions {
    let mut actions = FrameActions::default();
    let pos = vec2((screen_w - DIALOG_W) * 0.5, (screen_h - DIALOG_H) * 0.5);

    widgets::Window::new(hash!(), pos, vec2(DIALOG_W, DIALOG_H))
        .label(dialog.title)
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &dialog.message);
            ui.separator();
            if ui.button(None, "OK") {
                actions.dismiss = true;
            }
        });

    actions
}
