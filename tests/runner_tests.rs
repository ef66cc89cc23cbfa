//! Integration tests for the sequential task runner
//!
//! The provider is scripted in-process so every property of the run loop is
//! observable without a network: result count and order, partial-failure
//! tolerance, artifact contents, and the inter-request cooldown.

use async_trait::async_trait;
use brandgen::config::RunnerConfig;
use brandgen::generator::{ImageProvider, ProviderError, Task, TaskOutcome, TaskRunner};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Provider that replays a fixed script of responses, one per call
struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<Vec<u8>, ProviderError>>>,
    prompts_seen: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<Result<Vec<u8>, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts_seen: Mutex::new(Vec::new()),
        }
    }

    fn prompts_seen(&self) -> Vec<String> {
        self.prompts_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        self.prompts_seen.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("provider called more times than scripted")
    }
}

fn runner_in(dir: &TempDir, delay_ms: u64) -> TaskRunner {
    TaskRunner::new(&RunnerConfig {
        output_dir: dir.path().to_path_buf(),
        inter_delay_ms: delay_ms,
        extension: "png".to_string(),
    })
}

fn tasks(names: &[&str]) -> Vec<Task> {
    names
        .iter()
        .map(|name| Task::new(*name, format!("prompt for {}", name)))
        .collect()
}

#[tokio::test]
async fn all_success_produces_one_result_per_task_in_order() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![
        Ok(b"aa".to_vec()),
        Ok(b"bb".to_vec()),
        Ok(b"cc".to_vec()),
    ]);

    let summary = runner_in(&dir, 0)
        .run(&tasks(&["problem", "spawn", "hero"]), &provider)
        .await;

    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.succeeded(), 3);
    assert_eq!(summary.failed(), 0);

    let names: Vec<&str> = summary.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["problem", "spawn", "hero"]);

    // The provider saw the payloads in task-definition order
    assert_eq!(
        provider.prompts_seen(),
        vec![
            "prompt for problem",
            "prompt for spawn",
            "prompt for hero"
        ]
    );

    assert_eq!(std::fs::read(dir.path().join("problem.png")).unwrap(), b"aa");
    assert_eq!(std::fs::read(dir.path().join("spawn.png")).unwrap(), b"bb");
    assert_eq!(std::fs::read(dir.path().join("hero.png")).unwrap(), b"cc");
}

#[tokio::test]
async fn failure_in_the_middle_does_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![
        Ok(b"first".to_vec()),
        Err(ProviderError::RemoteError("quota exceeded".to_string())),
        Ok(b"third".to_vec()),
    ]);

    let summary = runner_in(&dir, 0)
        .run(&tasks(&["a", "b", "c"]), &provider)
        .await;

    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);

    // The single failure sits at the position of the failing task
    match &summary.results[1].outcome {
        TaskOutcome::Failure { reason } => assert!(reason.contains("quota exceeded")),
        other => panic!("expected failure at position 1, got {:?}", other),
    }

    assert!(dir.path().join("a.png").exists());
    assert!(!dir.path().join("b.png").exists());
    assert!(dir.path().join("c.png").exists());
}

#[tokio::test]
async fn every_provider_failure_class_is_recoverable() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![
        Err(ProviderError::RemoteError("server said no".to_string())),
        Err(ProviderError::InvalidResponse(
            "No image data in response".to_string(),
        )),
        Err(ProviderError::ConnectionError("dns failure".to_string())),
    ]);

    let summary = runner_in(&dir, 0)
        .run(&tasks(&["x", "y", "z"]), &provider)
        .await;

    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.failed(), 3);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn artifact_bytes_are_written_losslessly() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![Ok(vec![0x01, 0x02, 0x03])]);

    let summary = runner_in(&dir, 0)
        .run(&tasks(&["alpha"]), &provider)
        .await;

    assert_eq!(summary.succeeded(), 1);
    let written = std::fs::read(dir.path().join("alpha.png")).unwrap();
    assert_eq!(written, vec![0x01, 0x02, 0x03]);
}

#[tokio::test]
async fn cooldown_runs_between_tasks() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![
        Ok(b"1".to_vec()),
        Ok(b"2".to_vec()),
        Ok(b"3".to_vec()),
    ]);

    let start = Instant::now();
    runner_in(&dir, 60).run(&tasks(&["a", "b", "c"]), &provider).await;

    // Two cooldowns for three tasks
    assert!(start.elapsed() >= Duration::from_millis(120));
}

#[tokio::test]
async fn no_cooldown_after_the_last_task() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![Ok(b"only".to_vec())]);

    let start = Instant::now();
    runner_in(&dir, 500).run(&tasks(&["solo"]), &provider).await;

    // A single task sleeps zero times; generation itself is instant here
    assert!(start.elapsed() < Duration::from_millis(250));
}

#[tokio::test]
async fn empty_task_list_produces_empty_summary() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![]);

    let summary = runner_in(&dir, 500).run(&[], &provider).await;

    assert!(summary.results.is_empty());
    assert_eq!(summary.to_string(), "0 generated, 0 failed");
    assert!(provider.prompts_seen().is_empty());
}

#[tokio::test]
async fn write_failure_is_a_per_task_failure() {
    // Point the output directory at an existing file so the write fails
    let dir = TempDir::new().unwrap();
    let blocking_file = dir.path().join("not-a-dir");
    std::fs::write(&blocking_file, b"occupied").unwrap();

    let runner = TaskRunner::new(&RunnerConfig {
        output_dir: blocking_file,
        inter_delay_ms: 0,
        extension: "png".to_string(),
    });
    let provider = ScriptedProvider::new(vec![Ok(b"img".to_vec()), Ok(b"img".to_vec())]);

    let summary = runner.run(&tasks(&["a", "b"]), &provider).await;

    // The run continues past the I/O failure and still covers every task
    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.failed(), 2);
    for result in &summary.results {
        match &result.outcome {
            TaskOutcome::Failure { reason } => assert!(reason.contains("write failed")),
            other => panic!("expected write failure, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn partial_failure_is_reported_not_fatal() {
    // The process exit code stays 0 after the run starts; failures only show
    // up in the summary counts. This test pins that reporting contract.
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(vec![
        Ok(b"1".to_vec()),
        Err(ProviderError::Timeout),
        Ok(b"3".to_vec()),
        Err(ProviderError::ConnectionError("reset".to_string())),
    ]);

    let summary = runner_in(&dir, 0)
        .run(&tasks(&["a", "b", "c", "d"]), &provider)
        .await;

    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 2);
    assert_eq!(summary.to_string(), "2 generated, 2 failed");
}
