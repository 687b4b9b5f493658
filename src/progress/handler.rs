//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while the hook runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    Started { repo_path: String },

    PhaseStarted { phase: String },

    PhaseComplete { phase: String, duration: Duration },

    /// A phase ended the run early
    Halted { phase: String, outcome: String },

    /// Content checks are about to run over this many files
    InspectionStarted { files: usize },

    BuildStarted {
        solution: String,
        /// File name of the solution
        name: String,
        index: usize,
        total: usize,
    },

    BuildComplete {
        solution: String,
        succeeded: bool,
        duration: Duration,
    },

    Completed {
        warnings: usize,
        errors: usize,
        total_time: Duration,
    },
}

pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        NoOpHandler.on_progress(&ProgressEvent::Started {
            repo_path: "/repo".to_string(),
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            repo_path: "/repo".to_string(),
        });
        handler.on_progress(&ProgressEvent::PhaseStarted {
            phase: "Toolchain".to_string(),
        });
        handler.on_progress(&ProgressEvent::Completed {
            warnings: 1,
            errors: 0,
            total_time: Duration::from_millis(20),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::BuildStarted {
            solution: "/repo/dotnet/App.sln".to_string(),
            name: "App.sln".to_string(),
            index: 1,
            total: 2,
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("BuildStarted"));
        assert!(debug_str.contains("index: 1"));
    }
}
