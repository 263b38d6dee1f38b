use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::buttons::Buttons;

/// How long the mow button stays "held" after its last press/repeat event
/// when the terminal cannot report key releases. Long enough to bridge the
/// initial auto-repeat delay of common terminals at a 16 ms tick.
const HOLD_TICKS: u8 = 40;

/// Tap-style buttons read as held for a single poll, so the release edge
/// the menus act on fires on the very next tick.
const TAP_TICKS: u8 = 1;

/// Map a key event to the button it drives, if any.
fn button_for(code: KeyCode) -> Option<Buttons> {
    match code {
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => Some(Buttons::A),
        KeyCode::Char(' ') | KeyCode::Char('b') | KeyCode::Char('B') => Some(Buttons::B),
        KeyCode::Up => Some(Buttons::UP),
        KeyCode::Down => Some(Buttons::DOWN),
        _ => None,
    }
}

/// Turns crossterm key events into the held-button bitmask the game session
/// polls each tick.
///
/// With the kitty keyboard protocol active the tracking is exact: press sets
/// a bit, release clears it. Plain terminals never send releases, so B
/// instead arms a countdown that auto-repeat keeps refreshing, reading as
/// released once the repeats stop, while A/UP/DOWN act as one-tick taps so
/// the menus respond to a keypress immediately.
pub struct InputTracker {
    exact_releases: bool,
    held: Buttons,
    hold_ticks: [u8; 4],
}

impl InputTracker {
    pub fn new(exact_releases: bool) -> Self {
        InputTracker {
            exact_releases,
            held: Buttons::NONE,
            hold_ticks: [0; 4],
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(button) = button_for(key.code) else {
            return;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(button);
                if !self.exact_releases {
                    let ticks = if button == Buttons::B { HOLD_TICKS } else { TAP_TICKS };
                    self.hold_ticks[Self::slot(button)] = ticks;
                }
            }
            KeyEventKind::Release => {
                if self.exact_releases {
                    self.held.remove(button);
                } else {
                    self.hold_ticks[Self::slot(button)] = 0;
                    self.held.remove(button);
                }
            }
        }
    }

    /// The mask for this tick. Call exactly once per tick: it also ages the
    /// hold countdowns when release events are unavailable.
    pub fn poll(&mut self) -> Buttons {
        let mask = self.held;
        if !self.exact_releases {
            for (slot, ticks) in self.hold_ticks.iter_mut().enumerate() {
                if *ticks > 0 {
                    *ticks -= 1;
                    if *ticks == 0 {
                        self.held.remove(Self::button(slot));
                    }
                }
            }
        }
        mask
    }

    fn slot(button: Buttons) -> usize {
        match button {
            Buttons::A => 0,
            Buttons::B => 1,
            Buttons::UP => 2,
            _ => 3,
        }
    }

    fn button(slot: usize) -> Buttons {
        match slot {
            0 => Buttons::A,
            1 => Buttons::B,
            2 => Buttons::UP,
            _ => Buttons::DOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn release(code: KeyCode) -> KeyEvent {
        let mut key = KeyEvent::from(code);
        key.kind = KeyEventKind::Release;
        key
    }

    #[test]
    fn exact_mode_tracks_press_and_release() {
        let mut t = InputTracker::new(true);
        t.handle_key(press(KeyCode::Char(' ')));
        assert!(t.poll().contains(Buttons::B));
        assert!(t.poll().contains(Buttons::B));
        t.handle_key(release(KeyCode::Char(' ')));
        assert!(!t.poll().contains(Buttons::B));
    }

    #[test]
    fn timeout_mode_expires_without_repeats() {
        let mut t = InputTracker::new(false);
        t.handle_key(press(KeyCode::Char('b')));
        for _ in 0..HOLD_TICKS {
            assert!(t.poll().contains(Buttons::B));
        }
        assert!(!t.poll().contains(Buttons::B));
    }

    #[test]
    fn timeout_mode_refreshes_on_repeat() {
        let mut t = InputTracker::new(false);
        t.handle_key(press(KeyCode::Char(' ')));
        for _ in 0..HOLD_TICKS / 2 {
            assert!(t.poll().contains(Buttons::B));
        }
        t.handle_key(press(KeyCode::Char(' ')));
        for _ in 0..HOLD_TICKS {
            assert!(t.poll().contains(Buttons::B));
        }
        assert!(!t.poll().contains(Buttons::B));
    }

    #[test]
    fn menu_buttons_tap_without_releases() {
        // A/UP/DOWN must not linger behind the hold countdown: one poll
        // held, released on the next.
        for code in [KeyCode::Enter, KeyCode::Up, KeyCode::Down] {
            let mut t = InputTracker::new(false);
            t.handle_key(press(code));
            assert_ne!(t.poll(), Buttons::NONE);
            assert_eq!(t.poll(), Buttons::NONE);
        }
    }

    #[test]
    fn menu_tap_advances_title_choice_promptly() {
        use crate::game::GameSession;

        let mut t = InputTracker::new(false);
        let mut s = GameSession::new();
        t.handle_key(press(KeyCode::Down));
        s.update(t.poll());
        s.update(t.poll());
        assert_eq!(s.mower_choice(), 1);

        // Two quick taps are two separate actions, not one.
        t.handle_key(press(KeyCode::Down));
        s.update(t.poll());
        s.update(t.poll());
        t.handle_key(press(KeyCode::Down));
        s.update(t.poll());
        s.update(t.poll());
        assert_eq!(s.mower_choice(), 3);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut t = InputTracker::new(true);
        t.handle_key(press(KeyCode::Char('x')));
        assert_eq!(t.poll(), Buttons::NONE);
    }
}
