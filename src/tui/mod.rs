// Terminal front end: layout, input mapping, and widget rendering.
//
// The loop owns the terminal. Key presses are mapped to `Action`s and fed
// to the `App`; a render tick redraws the whole frame at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode, NoticeKind, Route};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

fn render_frame(frame: &mut Frame, app: &App) {
    let layout = build_layout(frame.area());

    widgets::header::render(frame, layout.header, app);
    render_notice(frame, layout.notice, app);
    render_body(frame, layout.body, app);
    render_help_bar(frame, layout.help_bar, app);
}

fn render_body(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    match &app.route {
        Route::Home => widgets::home::render(frame, area, app),
        Route::Teams => widgets::teams::render(frame, area, app),
        Route::TeamDetail(id) => widgets::team_detail::render(frame, area, app, id),
        Route::Players => widgets::players::render(frame, area, app),
        Route::PlayerDetail(id) => widgets::player_detail::render(frame, area, app, id),
        Route::Fixtures => widgets::schedule::render_fixtures(frame, area, app),
        Route::Results => widgets::schedule::render_results(frame, area, app),
        Route::GameDetail(id) => widgets::game_detail::render(frame, area, app, id),
        Route::Login => widgets::login::render(frame, area, app),
        Route::Admin => widgets::admin::render(frame, area, app),
        Route::NotFound(target) => widgets::not_found::render(frame, area, target),
    }
}

fn render_notice(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn help_text(app: &App) -> &'static str {
    match &app.mode {
        Mode::Search => " Type to search | Enter: keep | Esc: clear",
        Mode::Login => " Type credentials | Tab: switch field | Enter: sign in | Esc: cancel",
        Mode::Form => {
            " Tab/Shift-Tab: fields | Left/Right: pickers | Enter: save | Esc: cancel"
        }
        Mode::ConfirmDelete(_) => " y: delete | n: keep",
        Mode::Normal => match &app.route {
            Route::Players => {
                " q:Quit | 1-5:Screens | /:Search | t/p:Filter | s/d:Sort | c:Clear | Enter:Open"
            }
            Route::Admin => " q:Quit | n:New | e:Edit | x:Delete | o:Sign out | Esc:Back",
            _ => " q:Quit | 1-5:Screens | a:Admin | Up/Down:Move | Enter:Open | Esc:Back",
        },
    }
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        help_text(app),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the app asks to quit.
///
/// Initializes the terminal, installs a panic hook that restores it on
/// crash, then selects between keyboard input and the render tick.
pub async fn run(app: &mut App, tick: Duration) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Chain our restore in front of the original hook.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(tick);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(action) = input::map_key(key_event, &app.mode) {
                            app.handle_action(action).await;
                        }
                        if app.should_quit {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize and mouse events fall through to the next draw.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, app))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
