//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { repo_path } => {
                info!(repo = %repo_path, "Starting pre-commit validation");
            }
            ProgressEvent::PhaseStarted { phase } => {
                debug!(phase = %phase, "Starting phase");
            }
            ProgressEvent::PhaseComplete { phase, duration } => {
                debug!(
                    phase = %phase,
                    duration_ms = duration.as_millis(),
                    "Phase complete"
                );
            }
            ProgressEvent::Halted { phase, outcome } => {
                info!(phase = %phase, outcome = %outcome, "Pipeline halted");
            }
            ProgressEvent::InspectionStarted { files } => {
                info!(files, "Inspecting staged C# files");
            }
            ProgressEvent::BuildStarted {
                solution,
                index,
                total,
                ..
            } => {
                info!(
                    solution = %solution,
                    progress = format!("{}/{}", index, total),
                    "Building solution"
                );
            }
            ProgressEvent::BuildComplete {
                solution,
                succeeded,
                duration,
            } => {
                if *succeeded {
                    info!(
                        solution = %solution,
                        duration_ms = duration.as_millis(),
                        "Build succeeded"
                    );
                } else {
                    warn!(
                        solution = %solution,
                        duration_ms = duration.as_millis(),
                        "Build failed"
                    );
                }
            }
            ProgressEvent::Completed {
                warnings,
                errors,
                total_time,
            } => {
                if *errors > 0 {
                    warn!(
                        warnings,
                        errors,
                        total_time_ms = total_time.as_millis(),
                        "Validation complete with errors"
                    );
                } else {
                    info!(
                        warnings,
                        total_time_ms = total_time.as_millis(),
                        "Validation complete"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        let events = vec![
            ProgressEvent::Started {
                repo_path: "/repo".to_string(),
            },
            ProgressEvent::PhaseStarted {
                phase: "Build".to_string(),
            },
            ProgressEvent::PhaseComplete {
                phase: "Build".to_string(),
                duration: Duration::from_millis(5),
            },
            ProgressEvent::Halted {
                phase: "Filter".to_string(),
                outcome: "no_candidates".to_string(),
            },
            ProgressEvent::InspectionStarted { files: 2 },
            ProgressEvent::BuildStarted {
                solution: "/repo/dotnet/App.sln".to_string(),
                name: "App.sln".to_string(),
                index: 1,
                total: 1,
            },
            ProgressEvent::BuildComplete {
                solution: "App.sln".to_string(),
                succeeded: true,
                duration: Duration::from_secs(3),
            },
            ProgressEvent::BuildComplete {
                solution: "App.sln".to_string(),
                succeeded: false,
                duration: Duration::from_secs(3),
            },
            ProgressEvent::Completed {
                warnings: 2,
                errors: 0,
                total_time: Duration::from_secs(4),
            },
            ProgressEvent::Completed {
                warnings: 0,
                errors: 1,
                total_time: Duration::from_secs(4),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
