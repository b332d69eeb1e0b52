use std::sync::{mpsc, Arc};
use std::thread;

use crate::inference::InferenceClient;
use crate::types::{EngineEvent, ScanMode};

enum EngineCommand {
    Invoke { mode: ScanMode },
}

/// Handle to the engine thread: commands go in over a channel, terminal
/// events come back on the receiver returned by `spawn`. The caller's state
/// machine keeps at most one invocation in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine thread, which owns a tokio runtime and serves
    /// commands against the given client until the handle is dropped.
    pub fn spawn(client: Arc<dyn InferenceClient>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = Arc::clone(&client);
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client, command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn invoke(&self, mode: ScanMode) {
        let _ = self.cmd_tx.send(EngineCommand::Invoke { mode });
    }
}

async fn handle_command(
    client: Arc<dyn InferenceClient>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Invoke { mode } => {
            let result = client.invoke(&mode).await;
            let _ = event_tx.send(EngineEvent::InvocationFinished { mode, result });
        }
    }
}
