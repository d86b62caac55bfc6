use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH, WINDOW_TITLE,
};
use crate::controls::{FrameActions, draw_control_panel, draw_dialog, hotkey_actions};
use crate::render::{PlotRect, draw_plot};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();
    log::info!("{} ready", WINDOW_TITLE);

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        clear_background(BACKGROUND);

        let rect = PlotRect {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
            bounds: state.form.plot().bounds(),
        };
        draw_plot(state.form.plot(), &rect, ui_font.as_ref());

        let panel_actions = draw_control_panel(&mut state);
        let hotkeys = hotkey_actions();
        let actions = match state.dialog.clone() {
            // The panel stays visible behind the dialog, drawn read-only.
            Some(dialog) => draw_dialog(&dialog, screen_w, screen_h).merge(FrameActions {
                simulate: false,
                reset: false,
                dismiss: hotkeys.dismiss || hotkeys.simulate,
            }),
            None => panel_actions.merge(hotkeys),
        };
        state.apply_actions(actions);

        next_frame().await;
    }
}
