use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::grid::{is_cut, tile_positions, LAWN_TOP, TILE};
use crate::game::{GameSession, FEEDBACK_MOWING};
use crate::ui::{field_area, FIELD_COLS, FIELD_ROWS, SKY_BLUE};

struct TileStyles {
    cut: Style,
    grass: Style,
    grass_chars: [char; 4],
}

impl TileStyles {
    fn for_session(dead: bool) -> Self {
        if dead {
            TileStyles {
                cut: Style::default().fg(Color::Rgb(140, 140, 140)).bg(Color::Rgb(110, 110, 110)),
                grass: Style::default().fg(Color::Rgb(70, 70, 70)).bg(Color::Rgb(50, 50, 50)),
                grass_chars: ['x', '.', 'x', ' '],
            }
        } else {
            TileStyles {
                cut: Style::default().fg(Color::Rgb(90, 190, 70)).bg(Color::Rgb(100, 170, 60)),
                grass: Style::default().fg(Color::Rgb(40, 140, 30)).bg(Color::Rgb(15, 85, 15)),
                grass_chars: ['"', ',', '\'', '.'],
            }
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    let mut rng = rand::thread_rng();
    let field = field_area(area);

    // One background color per frame: sky blue while alive, a random RGB
    // every frame once dead (the original's glitch effect).
    let background = if session.dead() {
        Color::Rgb(rng.gen(), rng.gen(), rng.gen())
    } else {
        SKY_BLUE
    };

    let rumble = if session.dead() {
        ""
    } else if session.mowing() {
        " ≋ RUMBLE ≋ "
    } else {
        " hold B to mow "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(0, 90, 0)))
        .title(" The Clivester ")
        .title_style(Style::default().fg(Color::Rgb(80, 220, 80)).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(rumble).right_aligned())
        .style(Style::default().bg(background));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    // Cell buffer for the whole 40x15 logical screen, sky included.
    let sky = Style::default().bg(background);
    let mut cells =
        vec![vec![(' ', sky); FIELD_COLS as usize]; FIELD_ROWS as usize];

    // Paint the lawn tile by tile, bottom-right to top-left, exactly the
    // order the original walked the grid in.
    let styles = TileStyles::for_session(session.dead());
    let mower = session.mower();
    for tile in tile_positions() {
        let row = (tile.y / TILE) as usize;
        let col = (tile.x / 8) as usize;
        if is_cut(mower, tile) {
            // Cut lawn: flat with faint stripes
            let ch = if (tile.x / TILE) % 2 == 0 { ' ' } else { '░' };
            cells[row][col] = (ch, styles.cut);
            cells[row][col + 1] = (ch, styles.cut);
        } else {
            // Uncut grass, textured like a hedge
            for dx in 0..2usize {
                let hash = (col + dx).wrapping_mul(7).wrapping_add(row * 13) % 4;
                cells[row][col + dx] = (styles.grass_chars[hash], styles.grass);
            }
        }
    }

    draw_mower(&mut cells, session, &mut rng, &styles);

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_mower(
    cells: &mut [Vec<(char, Style)>],
    session: &GameSession,
    rng: &mut impl Rng,
    styles: &TileStyles,
) {
    let mower = session.mower();
    debug_assert!(mower.y >= LAWN_TOP);
    let row = (mower.y / TILE) as usize;

    let mut col = (mower.x / 8) as usize;
    // Full-throttle haptics read as a one-cell shudder.
    if session.feedback() >= FEEDBACK_MOWING && rng.gen_bool(0.5) {
        col += 1;
    }
    let col = col.min(FIELD_COLS as usize - 2);

    let (glyphs, style) = if session.dead() {
        (
            ['✝', ' '],
            Style::default().fg(Color::Rgb(40, 40, 40)).bg(Color::Rgb(90, 90, 90)).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            ['▛', '▜'],
            styles.grass.fg(Color::Rgb(200, 30, 30)).add_modifier(Modifier::BOLD),
        )
    };
    cells[row][col] = (glyphs[0], style);
    cells[row][col + 1] = (glyphs[1], style);
}
