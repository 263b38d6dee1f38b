use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{GameSession, WORKING_MOWER};
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
    let mut lines = vec![Line::from(""); (inner.height / 2).saturating_sub(1) as usize];

    // Only one mower in the shed actually works.
    if session.mower_choice() == WORKING_MOWER {
        lines.push(Line::styled(
            "The Clivester",
            text_style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled("is in perfect working order.", text_style));
    } else {
        lines.push(Line::styled(
            "I'm Sorry but that is out of order",
            text_style,
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(MENU_GREEN));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::game::buttons::Buttons;
    use crate::game::GameSession;

    fn rendered_for_choice(downs: u8) -> String {
        let mut session = GameSession::new();
        for _ in 0..downs {
            session.update(Buttons::DOWN);
            session.update(Buttons::NONE);
        }
        session.update(Buttons::A);
        session.update(Buttons::NONE);

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| super::render(frame, frame.area(), &session))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content().iter().enumerate() {
            text.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                text.push('\n');
            }
        }
        text
    }

    #[test]
    fn broken_mowers_read_out_of_order() {
        for downs in 0..4 {
            let text = rendered_for_choice(downs);
            assert!(text.contains("out of order"), "choice {downs}:\n{text}");
            assert!(!text.contains("perfect working order"));
        }
    }

    #[test]
    fn the_clivester_reads_in_working_order() {
        let text = rendered_for_choice(4);
        assert!(text.contains("The Clivester"));
        assert!(text.contains("is in perfect working order."));
        assert!(!text.contains("out of order"));
    }
}
