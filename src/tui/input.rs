// Keyboard input handling.
//
// Translates crossterm key events into `Action`s based on the current input
// mode. Screen gating (e.g. the filter keys only meaning something on the
// players screen) lives in `App::handle_action`; this layer only decides
// what a key means in the current mode.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, Mode, Route};

/// Map a key event to an action. Returns `None` for keys with no meaning in
/// the current mode.
pub fn map_key(key_event: KeyEvent, mode: &Mode) -> Option<Action> {
    // On Windows, crossterm emits Press and Release events for each physical
    // keypress; ignoring non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    match mode {
        Mode::Normal => map_normal(key_event),
        Mode::Search => map_text_entry(key_event),
        Mode::Login => map_form_entry(key_event),
        Mode::Form => map_form_entry(key_event),
        Mode::ConfirmDelete(_) => map_confirm(key_event),
    }
}

fn map_normal(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') => Some(Action::Quit),

        // Navigation tabs.
        KeyCode::Char('1') => Some(Action::Go(Route::Home)),
        KeyCode::Char('2') => Some(Action::Go(Route::Teams)),
        KeyCode::Char('3') => Some(Action::Go(Route::Players)),
        KeyCode::Char('4') => Some(Action::Go(Route::Fixtures)),
        KeyCode::Char('5') => Some(Action::Go(Route::Results)),
        KeyCode::Char('a') => Some(Action::Go(Route::Admin)),
        KeyCode::Char('l') => Some(Action::Go(Route::Login)),
        KeyCode::Char('o') => Some(Action::Logout),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),

        // List movement.
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter => Some(Action::Select),

        // Players screen filters and sorting.
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Char('t') => Some(Action::CycleTeamFilter),
        KeyCode::Char('p') => Some(Action::CyclePositionFilter),
        KeyCode::Char('s') => Some(Action::CycleSortKey),
        KeyCode::Char('d') => Some(Action::ToggleSortDir),
        KeyCode::Char('c') => Some(Action::ClearFilters),

        // Admin screen.
        KeyCode::Char('n') => Some(Action::NewPlayer),
        KeyCode::Char('e') => Some(Action::EditPlayer),
        KeyCode::Char('x') => Some(Action::DeletePlayer),

        _ => None,
    }
}

/// Single-line text entry (the player search box).
fn map_text_entry(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::ConfirmInput),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

/// Multi-field forms (login and the player editor).
fn map_form_entry(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::ConfirmInput),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Left => Some(Action::CycleLeft),
        KeyCode::Right => Some(Action::CycleRight),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

/// Delete confirmation: y/Enter confirm, n/Esc cancel, everything else is
/// blocked.
fn map_confirm(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmInput),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelInput),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // -- Normal mode --

    #[test]
    fn digits_navigate() {
        assert_eq!(
            map_key(key(KeyCode::Char('1')), &Mode::Normal),
            Some(Action::Go(Route::Home))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('2')), &Mode::Normal),
            Some(Action::Go(Route::Teams))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('3')), &Mode::Normal),
            Some(Action::Go(Route::Players))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('4')), &Mode::Normal),
            Some(Action::Go(Route::Fixtures))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('5')), &Mode::Normal),
            Some(Action::Go(Route::Results))
        );
    }

    #[test]
    fn a_goes_to_admin_and_l_to_login() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), &Mode::Normal),
            Some(Action::Go(Route::Admin))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('l')), &Mode::Normal),
            Some(Action::Go(Route::Login))
        );
    }

    #[test]
    fn vim_style_movement() {
        assert_eq!(map_key(key(KeyCode::Char('k')), &Mode::Normal), Some(Action::Up));
        assert_eq!(map_key(key(KeyCode::Char('j')), &Mode::Normal), Some(Action::Down));
        assert_eq!(map_key(key(KeyCode::Up), &Mode::Normal), Some(Action::Up));
        assert_eq!(map_key(key(KeyCode::Down), &Mode::Normal), Some(Action::Down));
    }

    #[test]
    fn q_quits_in_normal_mode_only() {
        assert_eq!(map_key(key(KeyCode::Char('q')), &Mode::Normal), Some(Action::Quit));
        assert_eq!(
            map_key(key(KeyCode::Char('q')), &Mode::Search),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('q')), &Mode::Login),
            Some(Action::InputChar('q'))
        );
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        for mode in [
            Mode::Normal,
            Mode::Search,
            Mode::Login,
            Mode::Form,
            Mode::ConfirmDelete("p1".into()),
        ] {
            assert_eq!(
                map_key(ctrl_key(KeyCode::Char('c')), &mode),
                Some(Action::Quit),
                "Ctrl+C in {mode:?}"
            );
        }
    }

    #[test]
    fn unknown_key_is_ignored() {
        assert_eq!(map_key(key(KeyCode::F(5)), &Mode::Normal), None);
    }

    // -- Search mode --

    #[test]
    fn search_mode_captures_text() {
        assert_eq!(
            map_key(key(KeyCode::Char('t')), &Mode::Search),
            Some(Action::InputChar('t'))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), &Mode::Search),
            Some(Action::Backspace)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &Mode::Search),
            Some(Action::ConfirmInput)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), &Mode::Search),
            Some(Action::CancelInput)
        );
    }

    #[test]
    fn search_mode_does_not_navigate() {
        // '3' is a nav key in normal mode but text in search mode.
        assert_eq!(
            map_key(key(KeyCode::Char('3')), &Mode::Search),
            Some(Action::InputChar('3'))
        );
    }

    // -- Form modes --

    #[test]
    fn form_mode_moves_between_fields() {
        assert_eq!(map_key(key(KeyCode::Tab), &Mode::Form), Some(Action::NextField));
        assert_eq!(
            map_key(key(KeyCode::BackTab), &Mode::Form),
            Some(Action::PrevField)
        );
        assert_eq!(map_key(key(KeyCode::Down), &Mode::Form), Some(Action::NextField));
        assert_eq!(map_key(key(KeyCode::Up), &Mode::Form), Some(Action::PrevField));
    }

    #[test]
    fn form_mode_cycles_pickers_with_arrows() {
        assert_eq!(map_key(key(KeyCode::Left), &Mode::Form), Some(Action::CycleLeft));
        assert_eq!(
            map_key(key(KeyCode::Right), &Mode::Form),
            Some(Action::CycleRight)
        );
    }

    #[test]
    fn login_mode_tab_switches_fields() {
        assert_eq!(map_key(key(KeyCode::Tab), &Mode::Login), Some(Action::NextField));
        assert_eq!(
            map_key(key(KeyCode::Char('x')), &Mode::Login),
            Some(Action::InputChar('x'))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &Mode::Login),
            Some(Action::ConfirmInput)
        );
    }

    // -- Delete confirmation --

    #[test]
    fn confirm_mode_accepts_y_and_enter() {
        let mode = Mode::ConfirmDelete("p1".into());
        assert_eq!(map_key(key(KeyCode::Char('y')), &mode), Some(Action::ConfirmInput));
        assert_eq!(map_key(key(KeyCode::Char('Y')), &mode), Some(Action::ConfirmInput));
        assert_eq!(map_key(key(KeyCode::Enter), &mode), Some(Action::ConfirmInput));
    }

    #[test]
    fn confirm_mode_cancels_on_n_and_esc() {
        let mode = Mode::ConfirmDelete("p1".into());
        assert_eq!(map_key(key(KeyCode::Char('n')), &mode), Some(Action::CancelInput));
        assert_eq!(map_key(key(KeyCode::Esc), &mode), Some(Action::CancelInput));
    }

    #[test]
    fn confirm_mode_blocks_everything_else() {
        let mode = Mode::ConfirmDelete("p1".into());
        assert_eq!(map_key(key(KeyCode::Char('x')), &mode), None);
        assert_eq!(map_key(key(KeyCode::Down), &mode), None);
        assert_eq!(map_key(key(KeyCode::Char('q')), &mode), None);
    }

    // -- KeyEventKind filtering --

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, &Mode::Normal), None);
    }

    #[test]
    fn repeat_events_are_ignored() {
        let repeat = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(repeat, &Mode::Normal), None);
    }
}
