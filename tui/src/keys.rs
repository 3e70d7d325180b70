use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termsweeper_core::Input;

/// Blocks until the next terminal event, `None` when it means nothing to the game.
pub(crate) fn read_input() -> io::Result<Option<Input>> {
    Ok(map_event(&event::read()?))
}

pub(crate) fn map_event(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(..) => Some(Input::Resize),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Up => Input::Up,
        KeyCode::Down => Input::Down,
        KeyCode::Left => Input::Left,
        KeyCode::Right => Input::Right,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Activate,
        KeyCode::Char('o') => Input::ToggleQuestion,
        KeyCode::Char('x') => Input::ToggleFlag,
        KeyCode::Esc => Input::Escape,
        KeyCode::Char('q') => Input::Quit,
        _ => return None,
    })
}
