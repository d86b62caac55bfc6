use projectile_sim::{SimConfig, SimulatorForm};

use crate::controls::FrameActions;

/// A blocking notification. While one is open the form ignores input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Dialog {
    pub(crate) title: &'static str,
    pub(crate) message: String,
}

pub(crate) struct AppRuntime {
    pub(crate) form: SimulatorForm,
    pub(crate) dialog: Option<Dialog>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            form: SimulatorForm::new(SimConfig::default()),
            dialog: None,
        }
    }

    /// The panel's fields and buttons are live only while no dialog is open.
    pub(crate) fn accepts_input(&self) -> bool {
        self.dialog.is_none()
    }

    pub(crate) fn apply_actions(&mut self, actions: FrameActions) {
        if !self.accepts_input() {
            if actions.dismiss || actions.simulate {
                self.dialog = None;
            }
            return;
        }

        if actions.simulate {
            if let Err(err) = self.form.simulate() {
                self.dialog = Some(Dialog {
                    title: err.title(),
                    message: err.user_message(),
                });
            }
        }

        if actions.reset {
            self.form.reset();
        }
    }
}
