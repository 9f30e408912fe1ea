use std::fmt;

/// Host key code of F1. F7..F10 follow contiguously.
pub const KEYCODE_F1: u32 = 131;

pub const SLOT_COUNT: usize = 4;

/// A function key that can launch an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShortcutSlot {
    F7,
    F8,
    F9,
    F10,
}

impl ShortcutSlot {
    pub const ALL: [ShortcutSlot; SLOT_COUNT] = [Self::F7, Self::F8, Self::F9, Self::F10];

    /// Position of the slot in `ALL`, usable as a table index.
    pub const fn index(self) -> usize {
        match self {
            Self::F7 => 0,
            Self::F8 => 1,
            Self::F9 => 2,
            Self::F10 => 3,
        }
    }

    /// Function key number (7..=10).
    pub const fn function_number(self) -> u32 {
        self.index() as u32 + 7
    }

    pub const fn keycode(self) -> u32 {
        KEYCODE_F1 + self.function_number() - 1
    }

    pub fn from_keycode(keycode: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.keycode() == keycode)
    }

    /// Name under which the slot's assignment is persisted.
    pub const fn preference_key(self) -> &'static str {
        match self {
            Self::F7 => "shortcut_f7",
            Self::F8 => "shortcut_f8",
            Self::F9 => "shortcut_f9",
            Self::F10 => "shortcut_f10",
        }
    }

    pub fn from_preference_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.preference_key() == key)
    }
}

impl fmt::Display for ShortcutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.function_number())
    }
}

#[cfg(test)]
mod tests;
