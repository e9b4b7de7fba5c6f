//! Key bindings registered at startup.
//!
//! A [`Keymap`] maps normalized key chords to [`Command`] identifiers. Global
//! bindings apply everywhere; the rest only when no text field has focus.
//! The controller turns a command into a concrete action for the current
//! screen.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    CloseModals,
    FocusSearch,
    Logout,
    CopySelected,
    CopyPullCommand,
    ShowManifest,
    EditDescription,
    SaveDescription,
    CancelDescription,
    RefreshStats,
    NextItem,
    PreviousItem,
    Open,
    Back,
    ToggleHelp,
}

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::CloseModals => "close overlays",
            Command::FocusSearch => "search",
            Command::Logout => "log out",
            Command::CopySelected => "copy",
            Command::CopyPullCommand => "copy pull command",
            Command::ShowManifest => "manifest",
            Command::EditDescription => "edit description",
            Command::SaveDescription => "save description",
            Command::CancelDescription => "discard edits",
            Command::RefreshStats => "refresh stats",
            Command::NextItem => "next",
            Command::PreviousItem => "previous",
            Command::Open => "open",
            Command::Back => "back",
            Command::ToggleHelp => "help",
        }
    }
}

/// A key with its modifiers, normalized so Cmd and Ctrl compare equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers;
        if modifiers.contains(KeyModifiers::SUPER) {
            modifiers.remove(KeyModifiers::SUPER);
            modifiers.insert(KeyModifiers::CONTROL);
        }
        // The character already carries the case
        if matches!(code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        let code = match code {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn plain(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn is_plain_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

impl From<&KeyEvent> for KeyChord {
    fn from(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct Keymap {
    global: HashMap<KeyChord, Command>,
    navigation: HashMap<KeyChord, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();

        keymap.bind_global(KeyChord::key(KeyCode::Esc), Command::CloseModals);
        keymap.bind_global(KeyChord::ctrl('k'), Command::FocusSearch);
        keymap.bind_global(KeyChord::ctrl('l'), Command::Logout);
        keymap.bind_global(KeyChord::ctrl('s'), Command::SaveDescription);
        keymap.bind_global(KeyChord::ctrl('d'), Command::CancelDescription);
        keymap.bind_global(KeyChord::ctrl('c'), Command::Quit);

        keymap.bind(KeyChord::plain('q'), Command::Quit);
        keymap.bind(KeyChord::plain('/'), Command::FocusSearch);
        keymap.bind(KeyChord::plain('y'), Command::CopySelected);
        keymap.bind(KeyChord::plain('p'), Command::CopyPullCommand);
        keymap.bind(KeyChord::plain('m'), Command::ShowManifest);
        keymap.bind(KeyChord::plain('e'), Command::EditDescription);
        keymap.bind(KeyChord::plain('r'), Command::RefreshStats);
        keymap.bind(KeyChord::plain('?'), Command::ToggleHelp);
        keymap.bind(KeyChord::plain('j'), Command::NextItem);
        keymap.bind(KeyChord::key(KeyCode::Down), Command::NextItem);
        keymap.bind(KeyChord::plain('k'), Command::PreviousItem);
        keymap.bind(KeyChord::key(KeyCode::Up), Command::PreviousItem);
        keymap.bind(KeyChord::key(KeyCode::Enter), Command::Open);
        keymap.bind(KeyChord::plain('l'), Command::Open);
        keymap.bind(KeyChord::key(KeyCode::Backspace), Command::Back);
        keymap.bind(KeyChord::plain('h'), Command::Back);

        keymap
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            global: HashMap::new(),
            navigation: HashMap::new(),
        }
    }

    /// Bind a chord that works even while typing into a field
    pub fn bind_global(&mut self, chord: KeyChord, command: Command) {
        self.global.insert(chord, command);
    }

    /// Bind a chord that only works while no text field has focus
    pub fn bind(&mut self, chord: KeyChord, command: Command) {
        self.navigation.insert(chord, command);
    }

    pub fn resolve(&self, chord: &KeyChord, typing: bool) -> Option<Command> {
        if let Some(command) = self.global.get(chord) {
            return Some(*command);
        }
        if typing {
            return None;
        }
        self.navigation.get(chord).copied()
    }

    /// All bindings, sorted for the help overlay
    pub fn bindings(&self) -> Vec<(KeyChord, Command)> {
        let mut all: Vec<_> = self
            .global
            .iter()
            .chain(self.navigation.iter())
            .map(|(chord, command)| (*chord, *command))
            .collect();
        all.sort_by_key(|(chord, command)| (command.label(), chord.display()));
        all
    }
}
