//! Render state - immutable snapshot sent from App layer to UI for drawing

use crate::models::{ConnectionStatus, HistoryEntry};

/// Complete state needed by the UI to render one frame
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Last server-confirmed counter value
    pub count: i64,
    /// A counter call is in flight
    pub loading: bool,
    /// The initial load has settled (success or failure)
    pub load_settled: bool,
    pub error: Option<String>,
    pub connection: ConnectionStatus,

    // History panel
    pub show_history: bool,
    pub history: Vec<HistoryEntry>,
    pub history_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            count: 0,
            loading: true,
            load_settled: false,
            error: None,
            connection: ConnectionStatus::Connected,
            show_history: false,
            history: Vec::new(),
            history_scroll: 0,
            show_help: false,
        }
    }
}
