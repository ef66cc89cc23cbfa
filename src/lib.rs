//! Brandgen - Brand asset generator
//!
//! Brandgen renders the project's branded marketing images by calling the
//! Imagen text-to-image API once per named prompt, strictly in sequence,
//! with a fixed cooldown between requests to stay inside the service's rate
//! limit. Individual failures are logged and skipped; the run always
//! completes and reports aggregate counts.
//!
//! # Módulos Principales
//!
//! - [`config`] - Explicit configuration (endpoint, credential, runner behavior)
//! - [`generator`] - Provider boundary, sequential runner and prompt table
//!
//! # Ejemplo de Uso
//!
//! ```rust,no_run
//! use brandgen::config::AppConfig;
//! use brandgen::generator::{default_tasks, ImagenProvider, TaskRunner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let provider = ImagenProvider::new(&config)?;
//! let runner = TaskRunner::new(&config.runner);
//!
//! let summary = runner.run(&default_tasks(), &provider).await;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod generator;

pub use config::AppConfig;
pub use generator::{
    default_tasks, ImageProvider, ImagenProvider, RunSummary, Task, TaskOutcome, TaskResult,
    TaskRunner,
};
