use std::ffi::OsStr;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::errors::{AppError, AppResult};

/// Runs external extraction tools (tesseract, ffmpeg) with a hard timeout.
#[derive(Clone, Debug)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn execute<S: AsRef<OsStr>>(&self, program: &str, args: &[S]) -> AppResult<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        log::debug!(
            "Executing {} with {} args (timeout {}s)",
            program,
            args.len(),
            self.timeout.as_secs()
        );

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                AppError::ExtractionError(format!(
                    "{} timed out after {} seconds",
                    program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| AppError::InternalError(format!("failed to start {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("{} failed: {}", program, stderr.trim());
            return Err(AppError::ExtractionError(format!(
                "{} failed: {}",
                program,
                stderr.trim()
            )));
        }

        log::debug!("{} succeeded with {} bytes of output", program, output.stdout.len());

        Ok(output)
    }
}
