//! Key decoding for perch.
//!
//! Every raw key event is decoded exactly once into a [Command] through a
//! [Keymap] built from the `[keys]` config table; the session controller
//! dispatches on the command, never on raw bytes. Crossterm already turns
//! multi-byte arrow sequences into single [KeyCode] values.

use crate::config::Keys;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// One session command, the unit of dispatch in the event loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    CursorUp,
    CursorDown,
    Open,
    Back,
    ToggleHidden,
    ToggleLong,
    ToggleHuman,
    ToggleDirsOnly,
    ToggleFilesOnly,
    CycleSort,
    Refresh,
    Help,
}

/// Key + modifiers as used in the binding map.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
struct Key {
    code: KeyCode,
    modifiers: KeyModifiers,
}

/// Mapping from key to command, built once from the config.
pub struct Keymap {
    map: HashMap<Key, Command>,
}

impl Keymap {
    pub fn from_config(keys: &Keys) -> Self {
        let mut map = HashMap::new();

        bind(keys.quit(), Command::Quit, &mut map);
        bind(keys.cursor_up(), Command::CursorUp, &mut map);
        bind(keys.cursor_down(), Command::CursorDown, &mut map);
        bind(keys.open(), Command::Open, &mut map);
        bind(keys.back(), Command::Back, &mut map);
        bind(keys.toggle_hidden(), Command::ToggleHidden, &mut map);
        bind(keys.toggle_long(), Command::ToggleLong, &mut map);
        bind(keys.toggle_human(), Command::ToggleHuman, &mut map);
        bind(keys.dirs_only(), Command::ToggleDirsOnly, &mut map);
        bind(keys.files_only(), Command::ToggleFilesOnly, &mut map);
        bind(keys.cycle_sort(), Command::CycleSort, &mut map);
        bind(keys.refresh(), Command::Refresh, &mut map);
        bind(keys.help(), Command::Help, &mut map);

        Keymap { map }
    }

    /// Looks up the command for a key event. Shifted characters arrive
    /// with the SHIFT modifier set; retry without it so a binding like
    /// "H" or "?" matches regardless of how the terminal reports shift.
    pub fn lookup(&self, key: KeyEvent) -> Option<Command> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(command) = self.map.get(&k).copied() {
            return Some(command);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses one key notation: a named key ("enter", "esc", "up", ...), a
/// single character, or either prefixed with "ctrl+"/"alt+"/"shift+".
fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    for part in s.split('+') {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], command: Command, map: &mut HashMap<Key, Command>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keys;

    fn default_map() -> Keymap {
        Keymap::from_config(&Keys::default())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_bindings_decode() {
        let keymap = default_map();
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Command::CursorDown)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Down, KeyModifiers::NONE)),
            Some(Command::CursorDown)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(Command::CursorUp)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Command::Open)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn shifted_characters_match_unshifted_binding() {
        let keymap = default_map();
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(Command::ToggleHuman)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Command::Help)
        );
    }

    #[test]
    fn unbound_keys_decode_to_nothing() {
        let keymap = default_map();
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(keymap.lookup(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn parse_key_handles_modifiers() {
        let key = parse_key("ctrl+r").expect("parses");
        assert_eq!(key.code, KeyCode::Char('r'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);

        assert!(parse_key("enter").is_some());
        assert!(parse_key("notakey").is_none());
    }
}
