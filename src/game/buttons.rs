/// Bitmask of the buttons the game understands. The terminal key map in
/// `crate::input` decides which physical keys set which bits.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const A: Buttons = Buttons(1 << 0);
    pub const B: Buttons = Buttons(1 << 1);
    pub const UP: Buttons = Buttons(1 << 2);
    pub const DOWN: Buttons = Buttons(1 << 3);

    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Buttons) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;
    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Per-frame button transitions, derived by comparing the current mask
/// against the previous frame's mask.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonEdges {
    pub pressed: Buttons,
    pub released: Buttons,
}

impl ButtonEdges {
    pub fn detect(previous: Buttons, current: Buttons) -> Self {
        let changed = current.0 ^ previous.0;
        ButtonEdges {
            pressed: Buttons(changed & current.0),
            released: Buttons(changed & !current.0),
        }
    }
}
