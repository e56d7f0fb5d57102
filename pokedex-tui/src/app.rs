//! Application state — single-owner, main-thread only.
//!
//! All UI state lives here: the current index, the request lifecycle, and
//! the overlay. The worker thread communicates via channels; completions
//! carry the sequence token of the dispatch that caused them, and anything
//! stale is dropped before it can touch the state.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use pokedex_core::Pokemon;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Lifecycle of the current fetch attempt.
///
/// Idle exists only before the first request; after that the state cycles
/// Loading -> {Loaded | Failed} -> Loading for the life of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Loaded(Pokemon),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The loaded entry, if any.
    pub fn pokemon(&self) -> Option<&Pokemon> {
        match self {
            RequestState::Loaded(p) => Some(p),
            _ => None,
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Detail,
    ErrorHistory,
    Help,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

const ERROR_HISTORY_CAP: usize = 50;

/// Top-level application state.
pub struct AppState {
    /// Current catalog index (always >= 1).
    pub index: u32,
    pub request: RequestState,
    pub overlay: Overlay,
    pub running: bool,

    /// Monotonic request token. Only the completion bearing the latest
    /// token is authoritative; older ones are discarded.
    seq: u64,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            index: 1,
            request: RequestState::Idle,
            overlay: Overlay::None,
            running: true,
            seq: 0,
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
        }
    }

    /// Set the index and dispatch a fetch for it. This is the only place
    /// a request leaves the app, so every index change costs exactly one
    /// fetch.
    pub fn request_index(&mut self, index: u32) {
        self.index = index;
        self.seq += 1;
        self.request = RequestState::Loading;
        let _ = self.worker_tx.send(WorkerCommand::Fetch {
            seq: self.seq,
            index,
        });
    }

    /// Pager: advance to the next entry. Ignored while a request is in
    /// flight (single-flight).
    pub fn next(&mut self) {
        if self.next_enabled() {
            self.request_index(self.index + 1);
        }
    }

    /// Pager: go back one entry. Ignored at index 1 or while loading.
    pub fn prev(&mut self) {
        if self.prev_enabled() {
            self.request_index(self.index - 1);
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.index > 1 && !self.request.is_loading()
    }

    pub fn next_enabled(&self) -> bool {
        !self.request.is_loading()
    }

    pub fn view_enabled(&self) -> bool {
        self.request.pokemon().is_some()
    }

    /// Apply a worker completion. Completions whose token is not the
    /// latest belong to a superseded index and are dropped.
    pub fn on_fetched(&mut self, seq: u64, index: u32, outcome: Result<Pokemon, String>) {
        if seq != self.seq {
            return;
        }
        match outcome {
            Ok(pokemon) => {
                self.set_status(format!("#{index} {}", pokemon.display_name()));
                self.request = RequestState::Loaded(pokemon);
            }
            Err(message) => {
                self.push_error(message.clone(), format!("index {index}"));
                self.request = RequestState::Failed(message);
            }
        }
    }

    /// Open the detail overlay. Ignored unless an entry is loaded.
    pub fn open_detail(&mut self) {
        if self.view_enabled() {
            self.overlay = Overlay::Detail;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Token of the most recent dispatch.
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// Push an error to the history, capping its length.
    pub fn push_error(&mut self, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use pokedex_core::StatValue;

    fn test_app() -> (AppState, Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx), cmd_rx)
    }

    fn bulbasaur() -> Pokemon {
        Pokemon {
            index: 1,
            name: "bulbasaur".into(),
            sprite_url: Some("u1".into()),
            abilities: vec!["overgrow".into()],
            stats: vec![StatValue {
                name: "hp".into(),
                value: 45,
            }],
        }
    }

    #[test]
    fn request_transitions_to_loading() {
        let (mut app, cmd_rx) = test_app();
        app.request_index(1);
        assert!(app.request.is_loading());
        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::Fetch { seq, index } => {
                assert_eq!(seq, app.latest_seq());
                assert_eq!(index, 1);
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn success_loads_entry() {
        let (mut app, _cmd_rx) = test_app();
        app.request_index(1);
        app.on_fetched(app.latest_seq(), 1, Ok(bulbasaur()));
        assert_eq!(app.request.pokemon().unwrap().name, "bulbasaur");
        assert!(!app.request.is_loading());
    }

    #[test]
    fn failure_surfaces_message_verbatim() {
        let (mut app, _cmd_rx) = test_app();
        app.request_index(1);
        app.on_fetched(app.latest_seq(), 1, Err("Network Error".into()));
        assert_eq!(app.request, RequestState::Failed("Network Error".into()));
        assert!(app.request.pokemon().is_none());
        assert_eq!(app.error_history.len(), 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let (mut app, _cmd_rx) = test_app();
        app.request_index(1);
        let first = app.latest_seq();
        app.request_index(2);

        // The superseded request resolves late; it must not win.
        app.on_fetched(first, 1, Ok(bulbasaur()));
        assert!(app.request.is_loading());

        let mut p = bulbasaur();
        p.index = 2;
        p.name = "ivysaur".into();
        app.on_fetched(app.latest_seq(), 2, Ok(p));
        assert_eq!(app.request.pokemon().unwrap().name, "ivysaur");
    }

    #[test]
    fn prev_is_noop_at_index_one() {
        let (mut app, cmd_rx) = test_app();
        app.request_index(1);
        app.on_fetched(app.latest_seq(), 1, Ok(bulbasaur()));
        app.prev();
        assert_eq!(app.index, 1);
        // Only the initial fetch was sent.
        cmd_rx.try_recv().unwrap();
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn pager_ignored_while_loading() {
        let (mut app, cmd_rx) = test_app();
        app.request_index(5);
        assert!(!app.next_enabled());
        assert!(!app.prev_enabled());
        app.next();
        app.prev();
        assert_eq!(app.index, 5);
        cmd_rx.try_recv().unwrap();
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn next_moves_forward_with_one_fetch() {
        let (mut app, cmd_rx) = test_app();
        app.request_index(5);
        app.on_fetched(app.latest_seq(), 5, Ok(bulbasaur()));
        cmd_rx.try_recv().unwrap();

        app.next();
        assert_eq!(app.index, 6);
        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::Fetch { index, .. } => assert_eq!(index, 6),
            other => panic!("expected Fetch, got {other:?}"),
        }
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn detail_requires_loaded_entry() {
        let (mut app, _cmd_rx) = test_app();
        assert!(!app.view_enabled());
        app.open_detail();
        assert_eq!(app.overlay, Overlay::None);

        app.request_index(1);
        app.open_detail();
        assert_eq!(app.overlay, Overlay::None);

        app.on_fetched(app.latest_seq(), 1, Ok(bulbasaur()));
        app.open_detail();
        assert_eq!(app.overlay, Overlay::Detail);

        app.close_overlay();
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn error_history_caps() {
        let (mut app, _cmd_rx) = test_app();
        for i in 0..60 {
            app.push_error(format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }
}
