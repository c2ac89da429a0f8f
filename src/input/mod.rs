use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, View};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    _ => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Key(k) => match state.view {
            View::Main => handle_main_view(k),
            View::Settings => handle_settings_view(k),
        },
    }
}

fn handle_main_view(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::OpenSettings),
        KeyCode::Char('o') => Some(Action::OffsetUp),
        KeyCode::Char('p') => Some(Action::OffsetDown),
        _ => None,
    }
}

fn handle_settings_view(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::CloseSettings),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SettingsUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SettingsDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SettingsActivate),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SettingsAdjust(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SettingsAdjust(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_main_view_keys() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('s'))), Some(Action::OpenSettings));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('o'))), Some(Action::OffsetUp));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('p'))), Some(Action::OffsetDown));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), None);

        let ctrl_c = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_input_to_action(&state, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_settings_view_keys() {
        let mut state = AppState::new();
        state.view = View::Settings;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::CloseSettings));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), Some(Action::SettingsDown));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Up)), Some(Action::SettingsUp));
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('h'))),
            Some(Action::SettingsAdjust(-1))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Enter)),
            Some(Action::SettingsActivate)
        );
        // Main view keys are inert here.
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_resize() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, InputEvent::Resize), Some(Action::Resize));
    }
}
