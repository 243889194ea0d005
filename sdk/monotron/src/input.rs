use bit_field::BitField;

const UP_BIT: usize = 4;
const DOWN_BIT: usize = 3;
const LEFT_BIT: usize = 2;
const RIGHT_BIT: usize = 1;
const FIRE_BIT: usize = 0;

bitflags::bitflags! {
    /// Atari-style joystick state as returned by
    /// [`Console::get_joystick`](crate::Console::get_joystick).
    ///
    /// Bits 5-7 are reserved; `from_bits_truncate` drops them.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Joystick: u8 {
        const FIRE  = 1 << FIRE_BIT;
        const RIGHT = 1 << RIGHT_BIT;
        const LEFT  = 1 << LEFT_BIT;
        const DOWN  = 1 << DOWN_BIT;
        const UP    = 1 << UP_BIT;
    }
}

// Each poll is independent. Debouncing and edge detection are up to the caller.

#[inline]
pub fn is_up(state: u8) -> bool {
    state.get_bit(UP_BIT)
}

#[inline]
pub fn is_down(state: u8) -> bool {
    state.get_bit(DOWN_BIT)
}

#[inline]
pub fn is_left(state: u8) -> bool {
    state.get_bit(LEFT_BIT)
}

#[inline]
pub fn is_right(state: u8) -> bool {
    state.get_bit(RIGHT_BIT)
}

#[inline]
pub fn fire_pressed(state: u8) -> bool {
    state.get_bit(FIRE_BIT)
}

impl Joystick {
    #[inline]
    pub fn is_up(self) -> bool {
        self.contains(Joystick::UP)
    }

    #[inline]
    pub fn is_down(self) -> bool {
        self.contains(Joystick::DOWN)
    }

    #[inline]
    pub fn is_left(self) -> bool {
        self.contains(Joystick::LEFT)
    }

    #[inline]
    pub fn is_right(self) -> bool {
        self.contains(Joystick::RIGHT)
    }

    #[inline]
    pub fn fire_pressed(self) -> bool {
        self.contains(Joystick::FIRE)
    }
}

impl From<u8> for Joystick {
    fn from(state: u8) -> Self {
        Joystick::from_bits_truncate(state)
    }
}
