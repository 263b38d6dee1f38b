use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{GameSession, MOWER_NAMES};
use crate::ui::{field_area, MENU_GREEN};

pub fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    let field = field_area(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(0, 90, 0)))
        .style(Style::default().bg(MENU_GREEN));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let text_style = Style::default().fg(Color::Black).bg(MENU_GREEN);
    let mut lines = vec![
        Line::styled("Advanced Lawnmower Simulator", text_style.add_modifier(Modifier::BOLD)),
        Line::styled("---------------------------------------", text_style),
        Line::from(""),
        Line::styled("A Gardensoft game", text_style),
        Line::styled("Terminal conversion", text_style),
        Line::from(""),
    ];

    // Mower menu, the selected entry drawn white like the original.
    for (i, name) in MOWER_NAMES.iter().enumerate() {
        let style = if session.mower_choice() as usize == i {
            Style::default()
                .fg(Color::White)
                .bg(MENU_GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        lines.push(Line::styled(format!("{}) {}", i + 1, name), style));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("?", text_style));
    lines.push(Line::from(""));
    lines.push(Line::styled("Controls: A = Select B = Mow", text_style));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(MENU_GREEN));
    frame.render_widget(paragraph, inner);
}
