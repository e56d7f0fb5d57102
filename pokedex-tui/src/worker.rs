//! Background worker thread — the blocking network fetch runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! worker answers every Fetch with exactly one Fetched response carrying
//! the dispatch's sequence token, success or failure alike, so the main
//! thread always sees the request resolve.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use pokedex_core::{CatalogProvider, Pokemon};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Fetch { seq: u64, index: u32 },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
///
/// Errors cross the channel as display strings; the UI only ever shows
/// them as text.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Fetched {
        seq: u64,
        index: u32,
        outcome: Result<Pokemon, String>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    provider: Arc<dyn CatalogProvider>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("pokedex-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, provider);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    provider: Arc<dyn CatalogProvider>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Fetch { seq, index }) => {
                let outcome = provider.fetch(index).map_err(|e| e.to_string());
                if tx
                    .send(WorkerResponse::Fetched {
                        seq,
                        index,
                        outcome,
                    })
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}
