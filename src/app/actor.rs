//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that drives the state machine and publishes render snapshots
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Fetch the counter on startup, then publish the initial snapshot
        let load = self.state.start_load();
        let _ = self.network_tx.send(load);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), "Applying network response");
                    if let Some(follow_up) = self.state.handle_response(response) {
                        let _ = self.network_tx.send(follow_up);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Counter triggers
            UiEvent::Increment => {
                let cmd = self.state.start_increment();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::Decrement => {
                let cmd = self.state.start_decrement();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::Reset => {
                let cmd = self.state.start_reset();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::Refresh => {
                let cmd = self.state.start_load();
                let _ = self.network_tx.send(cmd);
            }

            // History panel
            UiEvent::ToggleHistory => {
                if let Some(cmd) = self.state.toggle_history() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::HistoryScrollUp => self.state.history_scroll_up(),
            UiEvent::HistoryScrollDown => self.state.history_scroll_down(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
