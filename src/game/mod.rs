pub mod buttons;
pub mod grid;
pub mod messages;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use self::buttons::{ButtonEdges, Buttons};
use self::grid::{Point, LAWN_TOP, RES_X, RES_Y, TILE};
use self::messages::{pick_motivational, DEATH_MESSAGE};

pub const MOWER_NAMES: [&str; 5] = [
    "Mega-Grass-Thwopper",
    "Speed-Monster Ripper",
    "The Dongster",
    "The Campbell Cutter",
    "The Clivester",
];

/// Index of the one mower that actually starts.
pub const WORKING_MOWER: u8 = 4;

/// Haptic intensity stand-ins; the renderer turns these into mower jitter.
pub const FEEDBACK_OFF: f32 = 0.0;
pub const FEEDBACK_IDLE: f32 = 0.2;
pub const FEEDBACK_MOWING: f32 = 1.0;

/// One-in-N chance per mowing tick of hitting a rock.
const DEATH_ODDS: u32 = 1200;

/// Ticks between the fatal roll and the end screen.
const DEATH_CLOCK_TICKS: i16 = 200;

/// Pixels travelled per mowing tick.
const MOW_SPEED: i32 = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Title,
    MowerSelection,
    Game,
    End,
}

/// The whole game in one struct: which screen is live, where the mower is,
/// and what the end screen should say. Updated once per tick from the
/// currently-held button mask; edge detection happens here, not in the host.
pub struct GameSession<R: RngCore = StdRng> {
    screen: Screen,
    mower: Point,
    mowing: bool,
    dead: bool,
    death_clock: i16,
    mower_choice: u8,
    end_comment: String,
    feedback: f32,
    last_buttons: Buttons,
    rng: R,
}

impl GameSession<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: RngCore> GameSession<R> {
    pub fn with_rng(rng: R) -> Self {
        let mut session = GameSession {
            screen: Screen::Title,
            mower: Point::new(0, 0),
            mowing: false,
            dead: false,
            death_clock: DEATH_CLOCK_TICKS,
            mower_choice: 0,
            end_comment: String::new(),
            feedback: FEEDBACK_OFF,
            last_buttons: Buttons::NONE,
            rng,
        };
        session.reset_game();
        session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mower(&self) -> Point {
        self.mower
    }

    pub fn mowing(&self) -> bool {
        self.mowing
    }

    pub fn dead(&self) -> bool {
        self.dead
    }

    pub fn mower_choice(&self) -> u8 {
        self.mower_choice
    }

    pub fn end_comment(&self) -> &str {
        &self.end_comment
    }

    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Advance one tick given the buttons currently held down.
    pub fn update(&mut self, buttons: Buttons) {
        let edges = ButtonEdges::detect(self.last_buttons, buttons);
        self.last_buttons = buttons;

        match self.screen {
            Screen::Title => self.update_title(edges.released),
            Screen::MowerSelection => self.update_mower_selection(edges.released),
            Screen::Game => self.update_game(edges.pressed, edges.released),
            Screen::End => self.update_end(edges.released),
        }
    }

    fn update_title(&mut self, released: Buttons) {
        if released.contains(Buttons::A) {
            self.screen = Screen::MowerSelection;
        } else if released.contains(Buttons::UP) {
            self.mower_choice = if self.mower_choice > 0 {
                self.mower_choice - 1
            } else {
                WORKING_MOWER
            };
        } else if released.contains(Buttons::DOWN) {
            self.mower_choice = if self.mower_choice < WORKING_MOWER {
                self.mower_choice + 1
            } else {
                0
            };
        }
    }

    fn update_mower_selection(&mut self, released: Buttons) {
        if released.contains(Buttons::A) {
            if self.mower_choice == WORKING_MOWER {
                self.new_game();
            } else {
                self.screen = Screen::Title;
            }
        }
    }

    fn update_game(&mut self, pressed: Buttons, released: Buttons) {
        if self.dead {
            if self.death_clock == 0 {
                self.end_game(true);
            } else {
                self.death_clock -= 1;
            }
            return;
        }

        if pressed.contains(Buttons::B) {
            self.mowing = true;
            self.feedback = FEEDBACK_MOWING;
        } else if released.contains(Buttons::B) {
            self.mowing = false;
            self.feedback = FEEDBACK_IDLE;
        }

        if self.mowing {
            if self.mower.x > 0 {
                self.mower.x -= MOW_SPEED;
            } else if self.mower.y > LAWN_TOP {
                // End of a row: jump back to the right edge, one row up.
                self.mower.x = RES_X - TILE;
                self.mower.y -= TILE;
            } else {
                // Top-left corner reached: the lawn is done.
                self.end_game(false);
                return;
            }

            // If unlucky, the player dies.
            let death_value = self.rng.next_u32() % DEATH_ODDS;
            if death_value == 1 {
                self.dead = true;
                self.mowing = false;
                self.feedback = FEEDBACK_OFF;
                self.death_clock = DEATH_CLOCK_TICKS;
            }
        }
    }

    fn update_end(&mut self, released: Buttons) {
        if released.contains(Buttons::A) {
            self.reset_game();
            self.screen = Screen::Title;
        }
    }

    /// Put every round field back to its starting value.
    pub fn reset_game(&mut self) {
        self.mower = Point::new(RES_X - TILE, RES_Y - TILE);
        self.feedback = FEEDBACK_OFF;
        self.mower_choice = 0;
        self.mowing = false;
        self.dead = false;
    }

    fn new_game(&mut self) {
        self.reset_game();
        self.feedback = FEEDBACK_IDLE;
        self.screen = Screen::Game;
    }

    fn end_game(&mut self, dead: bool) {
        self.feedback = FEEDBACK_OFF;
        self.mowing = false;

        self.end_comment = if dead {
            DEATH_MESSAGE.to_string()
        } else {
            pick_motivational(&mut self.rng).to_string()
        };

        self.screen = Screen::End;
    }
}
