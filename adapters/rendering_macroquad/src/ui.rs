//! Immediate-mode UI helpers for the Macroquad rendering backend.
//!
//! This module hosts all uses of `macroquad::ui` so the rest of the adapter
//! can remain agnostic of Macroquad's UI types. The puzzle has a single
//! widget, the new-game button, drawn below the board.

use macroquad::{
    math::{RectOffset, Vec2},
    ui::{hash, Ui},
};
use tile_slide_rendering::palette;

use crate::to_macroquad_color;

/// Snapshot of the button's layout for the current frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NewGameButtonContext {
    /// Top-left corner of the button window in screen coordinates.
    pub origin: Vec2,
    /// Button dimensions in screen space.
    pub size: Vec2,
}

/// Renders the new-game button and reports whether it was pressed.
pub(crate) fn draw_new_game_button(
    ui: &mut Ui,
    context: NewGameButtonContext,
    caption: &str,
) -> bool {
    let mut skin = ui.default_skin();
    skin.margin = 0.0;

    let transparent = macroquad::color::Color::new(0.0, 0.0, 0.0, 0.0);
    let window_style = ui
        .style_builder()
        .color(transparent)
        .color_hovered(transparent)
        .color_clicked(transparent)
        .build();
    skin.window_style = window_style;

    let fill = to_macroquad_color(palette::BUTTON);
    let hover = to_macroquad_color(palette::BUTTON_HOVER);
    let pressed_fill = to_macroquad_color(palette::BUTTON_HOVER.lighten(0.1));
    let text = to_macroquad_color(palette::TILE_BORDER);
    let button_style = ui
        .style_builder()
        .color(fill)
        .color_hovered(hover)
        .color_clicked(pressed_fill)
        .color_selected(fill)
        .color_selected_hovered(hover)
        .color_inactive(fill)
        .text_color(text)
        .text_color_hovered(text)
        .text_color_clicked(text)
        .font_size(24)
        .margin(RectOffset::new(24.0, 24.0, 12.0, 12.0))
        .build();
    skin.button_style = button_style;

    ui.push_skin(&skin);

    let mut button_pressed = false;
    let _ = ui.window(hash!("new_game_button"), context.origin, context.size, |ui| {
        button_pressed = ui.button(None, caption);
    });

    ui.pop_skin();

    button_pressed
}
