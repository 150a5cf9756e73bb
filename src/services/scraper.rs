//! Launches the external crawler that refreshes the scraped data pipeline.

use serde::Serialize;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{error, info};

use crate::config::ScraperConfig;

pub const DIRECTORY_NOT_FOUND: &str = "Project directory not found!";
pub const EXECUTION_FAILED: &str = "Spider execution failed. Check terminal.";
pub const EXECUTION_SUCCEEDED: &str = "Data Pipeline Updated Successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeOutcome {
    pub success: bool,
    pub message: String,
}

impl ScrapeOutcome {
    fn succeeded() -> Self {
        Self {
            success: true,
            message: EXECUTION_SUCCEEDED.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub struct ScrapeTrigger {
    config: ScraperConfig,
}

impl ScrapeTrigger {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Run the crawler to completion inside its project directory.
    pub async fn run(&self) -> ScrapeOutcome {
        let dir = &self.config.project_dir;
        info!(
            project_dir = %dir.display(),
            program = %self.config.program,
            "starting scraper"
        );

        if !dir.is_dir() {
            error!(project_dir = %dir.display(), "scraper project directory missing");
            return ScrapeOutcome::failed(DIRECTORY_NOT_FOUND);
        }

        let output = Command::new(&self.config.program)
            .args(&self.config.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                info!("scraper finished successfully");
                ScrapeOutcome::succeeded()
            }
            Ok(output) => {
                error!(
                    status = %output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr),
                    "scraper exited with failure"
                );
                ScrapeOutcome::failed(EXECUTION_FAILED)
            }
            Err(e) => {
                error!(error = %e, "failed to launch scraper");
                ScrapeOutcome::failed(e.to_string())
            }
        }
    }
}
