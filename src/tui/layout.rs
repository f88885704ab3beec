// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones shared by every screen:
//
// +--------------------------------------------------+
// | Header (3 rows: title + navigation + session)     |
// +--------------------------------------------------+
// | Notice (1 row)                                    |
// +--------------------------------------------------+
// | Body (fill)                                       |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top rows: app title, navigation tabs, session indicator.
    pub header: Rect,
    /// One-line toast area under the header.
    pub notice: Rect,
    /// The active screen's content.
    pub body: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the shared layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // notice
            Constraint::Min(8),    // body
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        header: vertical[0],
        notice: vertical[1],
        body: vertical[2],
        help_bar: vertical[3],
    }
}

/// Split the body into a list column and a detail column, used by the
/// screens that show a table next to a side panel.
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);
    (horizontal[0], horizontal[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("header", layout.header),
            ("notice", layout.notice),
            ("body", layout.body),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_fixed_row_heights() {
        let layout = build_layout(test_area());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.notice.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_zones_stack_vertically() {
        let layout = build_layout(test_area());
        assert!(layout.header.y < layout.notice.y);
        assert!(layout.notice.y < layout.body.y);
        assert!(layout.body.y < layout.help_bar.y);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        for rect in [layout.header, layout.notice, layout.body, layout.help_bar] {
            assert!(rect.x + rect.width <= area.width);
            assert!(rect.y + rect.height <= area.height);
        }
    }

    #[test]
    fn split_body_list_column_is_wider() {
        let layout = build_layout(test_area());
        let (list, detail) = split_body(layout.body);
        assert!(list.width > detail.width);
        assert_eq!(list.height, detail.height);
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 14);
        let layout = build_layout(area);
        for rect in [layout.header, layout.notice, layout.body, layout.help_bar] {
            assert!(rect.width > 0 && rect.height > 0);
        }
    }
}
