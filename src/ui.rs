use chrono::{DateTime, Local, Utc};
use ratatui::prelude::*;

use crate::models::{ConnectionStatus, CounterAction};

/// Color tag for a history action
pub fn action_color(action: CounterAction) -> Color {
    match action {
        CounterAction::Increment => Color::Green,
        CounterAction::Decrement => Color::Red,
        CounterAction::Reset => Color::Gray,
    }
}

/// Connection indicator for the title bar
pub fn connection_span(status: ConnectionStatus) -> Span<'static> {
    let color = if status.is_connected() {
        Color::Green
    } else {
        Color::Red
    };
    Span::styled(format!("● {}", status.label()), Style::default().fg(color))
}

/// Server timestamps arrive in UTC; display them in local time
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_colors() {
        assert_eq!(action_color(CounterAction::Increment), Color::Green);
        assert_eq!(action_color(CounterAction::Decrement), Color::Red);
        assert_eq!(action_color(CounterAction::Reset), Color::Gray);
    }

    #[test]
    fn test_connection_labels() {
        assert_eq!(connection_span(ConnectionStatus::Connected).content, "● Connected");
        assert_eq!(connection_span(ConnectionStatus::Degraded).content, "● Offline");
    }
}
