//! Network actor - runs counter API calls as spawned Tokio tasks

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{execute_counter_request, execute_history_request, ApiClient};

/// Network actor that processes counter and history commands
pub struct NetworkActor {
    api: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    in_flight: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            in_flight: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Counter { id, op }) => {
                            let api = self.api.clone();
                            let response_tx = self.response_tx.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(id, op = op.as_str(), "Executing counter request");
                                let result = execute_counter_request(&api, op, id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::FetchHistory { id, limit }) => {
                            let api = self.api.clone();
                            let response_tx = self.response_tx.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(id, limit, "Fetching history");
                                let result = execute_history_request(&api, id, limit).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.in_flight.join_next() => {}
            }
        }
    }
}
