//! Tally TUI - terminal client for a server-persisted counter
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use constants::{APP_NAME, APP_VERSION};
use messages::ui_events::key_to_ui_event;
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::{ApiClient, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "tally.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();
    tracing::info!(base_url = %config.base_url, history_limit = config.history_limit, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(ApiClient::new(config.base_url.clone()), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(&config, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.loading, current_state.show_help)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Full-screen placeholder until the first load settles
    if state.loading && !state.load_settled {
        draw_initial_loading(f, area);
        return;
    }

    let mut constraints = vec![Constraint::Length(1)]; // Title bar
    if state.error.is_some() {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    constraints.push(Constraint::Length(7)); // Count panel
    constraints.push(if state.show_history {
        Constraint::Min(5) // History panel
    } else {
        Constraint::Min(0) // Spacer
    });
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    draw_title_bar(f, state, chunks[idx]);
    idx += 1;

    if let Some(message) = &state.error {
        draw_error_banner(f, message, chunks[idx]);
        idx += 1;
    }

    draw_count_panel(f, state, chunks[idx]);
    idx += 1;

    if state.show_history {
        draw_history_panel(f, state, chunks[idx]);
    }
    idx += 1;

    draw_status_bar(f, state, chunks[idx]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_initial_loading(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(loading, chunks[1]);
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} v{} ", APP_NAME, APP_VERSION),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::raw("  "),
        ui::connection_span(state.connection),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_error_banner(f: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let banner = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(Color::Red)))
        .block(block);
    f.render_widget(banner, area);
}

fn draw_count_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.loading { " [...]" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" Counter{} ", loading));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Current Count", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            state.count.to_string(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Synced with the counter service",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(panel, area);
}

fn draw_history_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Actions (j/k scroll) ");

    let mut lines: Vec<Line> = Vec::new();
    for entry in &state.history {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<9}", entry.action.as_str()),
                Style::default().fg(ui::action_color(entry.action)).bold(),
            ),
            Span::raw(format!(" value: {:<8}", entry.value)),
            Span::styled(
                ui::format_timestamp(entry.created_at),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No history yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let history = Paragraph::new(lines)
        .block(block)
        .scroll((state.history_scroll, 0));
    f.render_widget(history, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.loading {
        " Processing... "
    } else {
        " +:inc | -:dec | r:reset | g:refresh | h:history | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    let help_text = r#"
 TALLY TUI - Keyboard Shortcuts

 COUNTER
   + / = / Up         Increment (+1)
   - / Down           Decrement (-1)
   r                  Reset to 0
   g                  Refresh from server

 HISTORY
   h                  Show / hide recent actions
   j / k              Scroll history

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
