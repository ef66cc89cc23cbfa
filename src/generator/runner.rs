//! Sequential task runner with a fixed inter-request cooldown
//!
//! Tasks run strictly in definition order, one at a time. A failed task is
//! logged and recorded, never fatal; the cooldown between tasks keeps the
//! run inside the generation service's request-rate limit.

use crate::config::RunnerConfig;
use crate::generator::provider::ImageProvider;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One unit of work: a name (also the output filename stem) and a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub prompt: String,
}

impl Task {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Final state of a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success { path: PathBuf },
    Failure { reason: String },
}

/// Outcome of one task, recorded exactly once, never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    pub name: String,
    pub outcome: TaskOutcome,
}

impl TaskResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, TaskOutcome::Success { .. })
    }
}

/// Aggregate outcome of one run, in task order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<TaskResult>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generated, {} failed",
            self.succeeded(),
            self.failed()
        )
    }
}

/// Sequential task runner
///
/// Generic over the provider so tests can substitute a scripted executor.
pub struct TaskRunner {
    output_dir: PathBuf,
    inter_delay: Duration,
    extension: String,
}

impl TaskRunner {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            inter_delay: Duration::from_millis(config.inter_delay_ms),
            extension: config.extension.clone(),
        }
    }

    /// Run every task to completion, in order
    ///
    /// Exactly one [`TaskResult`] is produced per task. Individual failures
    /// are logged and recorded but never abort the run. The cooldown runs
    /// after every task except the last.
    pub async fn run(&self, tasks: &[Task], provider: &dyn ImageProvider) -> RunSummary {
        let mut summary = RunSummary::default();

        for (index, task) in tasks.iter().enumerate() {
            tracing::info!("Generating {}...", task.name);

            let outcome = match provider.generate(&task.prompt).await {
                Ok(bytes) => match self.write_artifact(&task.name, &bytes) {
                    Ok(path) => {
                        tracing::info!("Saved {}", path.display());
                        TaskOutcome::Success { path }
                    }
                    Err(err) => {
                        tracing::error!("Failed to save {}: {}", task.name, err);
                        TaskOutcome::Failure {
                            reason: format!("write failed: {}", err),
                        }
                    }
                },
                Err(err) => {
                    tracing::error!("Failed to generate {}: {}", task.name, err);
                    TaskOutcome::Failure {
                        reason: err.to_string(),
                    }
                }
            };

            summary.results.push(TaskResult {
                name: task.name.clone(),
                outcome,
            });

            // Rate limiting: cooldown between requests, never after the last
            if index + 1 < tasks.len() {
                tracing::debug!("Waiting {:?} before next request", self.inter_delay);
                tokio::time::sleep(self.inter_delay).await;
            }
        }

        summary
    }

    fn write_artifact(&self, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(format!("{}.{}", name, self.extension));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let summary = RunSummary {
            results: vec![
                TaskResult {
                    name: "a".to_string(),
                    outcome: TaskOutcome::Success {
                        path: PathBuf::from("a.png"),
                    },
                },
                TaskResult {
                    name: "b".to_string(),
                    outcome: TaskOutcome::Failure {
                        reason: "boom".to_string(),
                    },
                },
                TaskResult {
                    name: "c".to_string(),
                    outcome: TaskOutcome::Success {
                        path: PathBuf::from("c.png"),
                    },
                },
            ],
        };

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.to_string(), "2 generated, 1 failed");
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::default();
        assert_eq!(summary.succeeded(), 0);
        assert_eq!(summary.failed(), 0);
    }
}
