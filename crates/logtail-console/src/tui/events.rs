/*
[INPUT]:  Crossterm key events
[OUTPUT]: Session messages and view-state changes on App
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::InputRequest;

use logtail_console::session::Msg;

use super::app::{App, Focus, Tab};

const PAGE_ROWS: isize = 10;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return true,
        KeyCode::F(2) => {
            app.next_tab();
            return false;
        }
        KeyCode::F(5) => {
            app.handle(Msg::TogglePolling);
            app.status_message = if app.state().is_polling() {
                "polling resumed".to_string()
            } else {
                "polling stopped".to_string()
            };
            return false;
        }
        KeyCode::F(6) => {
            app.scroll_to_top();
            app.handle(Msg::OlderDay);
            app.status_message = format!("viewing {}", app.state().day());
            return false;
        }
        KeyCode::F(7) => {
            let today = app.today();
            if app.state().day() >= today {
                app.status_message = "already on today".to_string();
            } else {
                app.scroll_to_top();
                app.handle(Msg::NewerDay { today });
                app.status_message = format!("viewing {}", app.state().day());
            }
            return false;
        }
        KeyCode::F(8) => {
            app.handle(Msg::ClearLogs);
            app.status_message = "clearing server log".to_string();
            return false;
        }
        KeyCode::F(9) => {
            if let Some(id) = app.newest_alert() {
                app.handle(Msg::DismissAlert(id));
            }
            return false;
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Logs => handle_logs_key(app, key, ctrl),
        Tab::History => handle_history_key(app, key),
        Tab::Diagnostics => {}
    }
    false
}

fn handle_logs_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Tab => return app.cycle_focus(true),
        KeyCode::BackTab => return app.cycle_focus(false),
        _ => {}
    }

    match app.focus {
        Focus::Command => match key.code {
            KeyCode::Enter => {
                let cmd = app.command_input.value().to_string();
                app.scroll_to_top();
                app.handle(Msg::Submit(cmd));
            }
            KeyCode::Up => app.handle(Msg::HistoryOlder),
            KeyCode::Down => app.handle(Msg::HistoryNewer),
            KeyCode::Esc => app.handle(Msg::ClearInput),
            KeyCode::Char('b') if ctrl => app.handle(Msg::WrapBoardCommand),
            _ => {
                if let Some(request) = input_request(key, ctrl) {
                    app.edit_command(request);
                }
            }
        },
        Focus::Search => match key.code {
            KeyCode::Esc => {
                app.scroll_to_top();
                app.handle(Msg::ClearSearch);
            }
            KeyCode::Enter => app.focus = Focus::Table,
            _ => {
                if let Some(request) = input_request(key, ctrl) {
                    app.edit_search(request);
                }
            }
        },
        Focus::Table => match key.code {
            KeyCode::Up => app.scroll(-1),
            KeyCode::Down => app.scroll(1),
            KeyCode::PageUp => app.scroll(-PAGE_ROWS),
            KeyCode::PageDown => app.scroll(PAGE_ROWS),
            KeyCode::Home => app.scroll_to_top(),
            KeyCode::End => app.scroll_to_bottom(),
            _ => {}
        },
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.handle(Msg::HistoryOlder),
        KeyCode::Down => app.handle(Msg::HistoryNewer),
        KeyCode::Char('r') => {
            app.handle(Msg::RefreshHistory);
            app.status_message = "history refreshed".to_string();
        }
        KeyCode::Enter => {
            app.set_tab(Tab::Logs);
            app.focus = Focus::Command;
        }
        _ => {}
    }
}

/// Single-line editing keys shared by the command and search inputs.
fn input_request(key: KeyEvent, ctrl: bool) -> Option<InputRequest> {
    use InputRequest::*;

    match key.code {
        KeyCode::Char('w') if ctrl => Some(DeletePrevWord),
        KeyCode::Char('u') if ctrl => Some(DeleteLine),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(InsertChar(c)),
        KeyCode::Backspace => Some(DeletePrevChar),
        KeyCode::Delete => Some(DeleteNextChar),
        KeyCode::Left if ctrl => Some(GoToPrevWord),
        KeyCode::Right if ctrl => Some(GoToNextWord),
        KeyCode::Left => Some(GoToPrevChar),
        KeyCode::Right => Some(GoToNextChar),
        KeyCode::Home => Some(GoToStart),
        KeyCode::End => Some(GoToEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::offline()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(!handle_key_event(app, press(KeyCode::Char(c))));
        }
    }

    #[tokio::test]
    async fn typing_updates_session_input_and_wrap_uses_it() {
        let mut app = test_app();
        type_text(&mut app, "lamp");
        assert_eq!(app.state().command_input(), "lamp");

        handle_key_event(&mut app, ctrl('b'));
        assert_eq!(app.state().command_input(), "helper.sendCmd(\"lamp\")");
        assert_eq!(app.command_input.value(), "helper.sendCmd(\"lamp\")");

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.command_input.value(), "");
    }

    #[tokio::test]
    async fn search_focus_filters_and_escape_clears() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Search);

        type_text(&mut app, "Door");
        assert_eq!(app.state().search(), "Door");

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.state().search(), "");
        assert_eq!(app.search_input.value(), "");
    }

    #[tokio::test]
    async fn submit_echoes_one_row() {
        let mut app = test_app();
        type_text(&mut app, "ls");
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state().table().len(), 1);
        assert_eq!(app.state().command_input(), "ls");
    }

    #[tokio::test]
    async fn function_keys_drive_polling_and_days() {
        let mut app = test_app();
        assert_eq!(app.state().polling_label(), "Stop");
        handle_key_event(&mut app, press(KeyCode::F(5)));
        assert_eq!(app.state().polling_label(), "Continue");

        let today = app.state().day();
        handle_key_event(&mut app, press(KeyCode::F(7)));
        assert_eq!(app.state().day(), today);
        assert_eq!(app.status_message, "already on today");

        handle_key_event(&mut app, press(KeyCode::F(6)));
        assert_eq!(app.state().day(), today.pred_opt().expect("date"));
        assert!(app.state().viewing_history());

        handle_key_event(&mut app, press(KeyCode::F(7)));
        assert_eq!(app.state().day(), today);
        assert!(app.state().is_polling());
    }

    #[tokio::test]
    async fn tabs_cycle_and_quit_keys_quit() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::F(2)));
        assert_eq!(app.current_tab, Tab::History);
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.current_tab, Tab::Logs);
        assert_eq!(app.focus, Focus::Command);

        assert!(handle_key_event(&mut app, ctrl('q')));
        assert!(handle_key_event(&mut app, ctrl('c')));
        assert!(!handle_key_event(&mut app, press(KeyCode::Char('q'))));
    }
}
