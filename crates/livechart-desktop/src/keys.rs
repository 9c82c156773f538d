// File: crates/livechart-desktop/src/keys.rs
// Summary: Keyboard bindings: maps key presses and typed characters to app commands.

use winit::event::{ModifiersState, VirtualKeyCode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Re-read the selected source and redraw.
    Update,
    NextKind,
    PrevKind,
    NextOverlay,
    NextColumn,
    /// Drop the column selection; Update reads the entry field again.
    ManualEntry,
    ToggleStreaming,
    Import,
    Export,
    Backspace,
    ClearEntry,
    Quit,
}

pub fn command_for(key: VirtualKeyCode, mods: ModifiersState) -> Option<Command> {
    use VirtualKeyCode as K;
    let cmd = match key {
        K::Return | K::NumpadEnter => Command::Update,
        K::Tab if mods.shift() => Command::PrevKind,
        K::Tab => Command::NextKind,
        K::F2 => Command::NextOverlay,
        K::F3 if mods.shift() => Command::ManualEntry,
        K::F3 => Command::NextColumn,
        K::F4 => Command::ToggleStreaming,
        K::O if mods.ctrl() => Command::Import,
        K::S if mods.ctrl() => Command::Export,
        K::Q if mods.ctrl() => Command::Quit,
        K::Back => Command::Backspace,
        K::Escape => Command::ClearEntry,
        _ => return None,
    };
    Some(cmd)
}

/// Characters accepted into the manual entry field.
pub fn accepts_char(c: char, mods: ModifiersState) -> bool {
    if mods.ctrl() || mods.alt() || mods.logo() {
        return false;
    }
    c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_reverses_tab() {
        assert_eq!(command_for(VirtualKeyCode::Tab, ModifiersState::empty()), Some(Command::NextKind));
        assert_eq!(command_for(VirtualKeyCode::Tab, ModifiersState::SHIFT), Some(Command::PrevKind));
    }

    #[test]
    fn letters_need_ctrl() {
        assert_eq!(command_for(VirtualKeyCode::O, ModifiersState::empty()), None);
        assert_eq!(command_for(VirtualKeyCode::O, ModifiersState::CTRL), Some(Command::Import));
        assert_eq!(command_for(VirtualKeyCode::S, ModifiersState::CTRL), Some(Command::Export));
    }

    #[test]
    fn entry_characters() {
        let none = ModifiersState::empty();
        assert!("-1.5e3, 2".chars().all(|c| accepts_char(c, none)));
        assert!(!accepts_char('x', none));
        assert!(!accepts_char('\t', none));
        assert!(!accepts_char('1', ModifiersState::CTRL));
    }
}
