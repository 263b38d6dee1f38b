use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{GameSession, Screen};
use crate::input::InputTracker;

pub struct App {
    pub should_quit: bool,
    pub session: GameSession,
    input: InputTracker,
}

impl App {
    pub fn new(exact_releases: bool) -> Self {
        Self {
            should_quit: false,
            session: GameSession::new(),
            input: InputTracker::new(exact_releases),
        }
    }

    pub fn on_tick(&mut self) {
        let buttons = self.input.poll();
        self.session.update(buttons);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }
            // q quits from the title screen only
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                && self.session.screen() == Screen::Title
            {
                self.should_quit = true;
                return;
            }
        }

        self.input.handle_key(key);
    }
}
