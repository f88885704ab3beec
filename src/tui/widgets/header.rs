// Header: app title, navigation tabs, and the session indicator.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Route};

const TABS: [(&str, &str); 6] = [
    ("1", "Home"),
    ("2", "Teams"),
    ("3", "Players"),
    ("4", "Fixtures"),
    ("5", "Results"),
    ("a", "Admin"),
];

fn tab_active(route: &Route, label: &str) -> bool {
    match route {
        Route::Home => label == "Home",
        Route::Teams | Route::TeamDetail(_) => label == "Teams",
        Route::Players | Route::PlayerDetail(_) => label == "Players",
        Route::Fixtures => label == "Fixtures",
        Route::Results | Route::GameDetail(_) => label == "Results",
        Route::Admin => label == "Admin",
        _ => false,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " Courtside ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
    ];

    for (key, label) in TABS {
        let style = if tab_active(&app.route, label) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {key}:{label} "), style));
    }

    let session = match app.session.user() {
        Some(user) => format!(" {} (o:sign out) ", user.username),
        None => " l:sign in ".to_string(),
    };
    spans.push(Span::raw("| "));
    spans.push(Span::styled(session, Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.route.title()),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::test_app;

    #[test]
    fn active_tab_follows_detail_routes() {
        assert!(tab_active(&Route::TeamDetail("rm".into()), "Teams"));
        assert!(tab_active(&Route::PlayerDetail("p1".into()), "Players"));
        assert!(tab_active(&Route::GameDetail("g5".into()), "Results"));
        assert!(!tab_active(&Route::Login, "Home"));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
    }
}
