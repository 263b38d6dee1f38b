pub mod end;
pub mod lawn;
pub mod selection;
pub mod title;

use ratatui::prelude::*;

use crate::app::App;
use crate::game::Screen;

/// Backdrop green of the original's menu screens, Pen(0, 138, 0).
pub const MENU_GREEN: Color = Color::Rgb(0, 138, 0);

/// Sky tone of the play screen, Pen(1, 240, 255).
pub const SKY_BLUE: Color = Color::Rgb(1, 240, 255);

/// Terminal cells per tile: a 16x16 tile renders as 2 cells wide, 1 tall,
/// so the 320x240 logical screen becomes a 40x15 cell field.
pub const FIELD_COLS: u16 = 40;
pub const FIELD_ROWS: u16 = 15;

pub fn render(frame: &mut Frame, app: &App) {
    match app.session.screen() {
        Screen::Title => title::render(frame, frame.area(), &app.session),
        Screen::MowerSelection => selection::render(frame, frame.area(), &app.session),
        Screen::Game => lawn::render(frame, frame.area(), &app.session),
        Screen::End => end::render(frame, frame.area(), &app.session),
    }
}

/// Center the fixed-size playfield in the available area, leaving room for
/// the surrounding block border.
pub fn field_area(area: Rect) -> Rect {
    centered_area(area, FIELD_COLS, FIELD_ROWS)
}

/// Center a cols x rows region in the available area, leaving room for the
/// surrounding block border.
pub fn centered_area(area: Rect, cols: u16, rows: u16) -> Rect {
    let w = (cols + 2).min(area.width);
    let h = (rows + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
