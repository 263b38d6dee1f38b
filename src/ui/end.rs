use rand::RngCore;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::grid::RES_Y;
use crate::game::messages::{DEATH_MESSAGE, MOTIVATIONAL_MESSAGES};
use crate::game::GameSession;
use crate::ui::{centered_area, FIELD_COLS, FIELD_ROWS, MENU_GREEN};

/// Widest line across every message the end screen can show. The longest
/// motivational line runs past the 40-cell play field, so the end screen
/// gets a field wide enough to hold it whole.
fn message_cols() -> u16 {
    MOTIVATIONAL_MESSAGES
        .iter()
        .chain(std::iter::once(&DEATH_MESSAGE))
        .flat_map(|message| message.split('\n'))
        .map(|line| line.len() as u16)
        .max()
        .unwrap_or(FIELD_COLS)
        .max(FIELD_COLS)
}

pub fn render<R: RngCore>(frame: &mut Frame, area: Rect, session: &GameSession<R>) {
    let cols = message_cols();
    let field = centered_area(area, cols, FIELD_ROWS);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(0, 90, 0)))
        .style(Style::default().bg(MENU_GREEN));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let text_style = Style::default().fg(Color::White).bg(MENU_GREEN);

    let mut lines = vec![Line::from("")];
    lines.push(Line::styled("Press A to play again", text_style));

    // Message block starts mid-screen, one row per message line.
    let message_row = (RES_Y / 2 / 16) as usize;
    while lines.len() < message_row {
        lines.push(Line::from(""));
    }
    for message_line in session.end_comment().split('\n') {
        lines.push(centered_line(message_line, inner.width, text_style));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(MENU_GREEN));
    frame.render_widget(paragraph, inner);
}

/// Center-justify in cell space so no message character falls off the field.
fn centered_line(text: &str, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.len()) / 2;
    Line::styled(format!("{}{}", " ".repeat(pad), text), style)
}
