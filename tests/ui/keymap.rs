use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regconsole::ui::core::{Command, KeyChord, Keymap};

#[test]
fn test_default_bindings() {
    let keymap = Keymap::default();
    let cases = [
        (KeyChord::plain('y'), Command::CopySelected),
        (KeyChord::plain('p'), Command::CopyPullCommand),
        (KeyChord::key(KeyCode::Esc), Command::CloseModals),
        (KeyChord::ctrl('k'), Command::FocusSearch),
        (KeyChord::ctrl('l'), Command::Logout),
        (KeyChord::plain('e'), Command::EditDescription),
        (KeyChord::ctrl('s'), Command::SaveDescription),
        (KeyChord::ctrl('d'), Command::CancelDescription),
        (KeyChord::plain('m'), Command::ShowManifest),
        (KeyChord::plain('r'), Command::RefreshStats),
        (KeyChord::plain('q'), Command::Quit),
    ];
    for (chord, command) in cases {
        assert_eq!(keymap.resolve(&chord, false), Some(command), "{}", chord.display());
    }
}

#[test]
fn test_chord_from_key_event() {
    let event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert_eq!(KeyChord::from(&event), KeyChord::ctrl('s'));
    assert_eq!(KeyChord::ctrl('s').display(), "Ctrl+S");
}

#[test]
fn test_help_lists_every_binding() {
    let bindings = Keymap::default().bindings();
    assert!(bindings
        .iter()
        .any(|(chord, command)| *chord == KeyChord::ctrl('k') && *command == Command::FocusSearch));
    assert!(bindings.len() >= 11);
}
