use std::future::Future;

use tokio::io::{AsyncWriteExt, BufWriter, Stdout};
use tracing::{error, warn};

use super::error::AppError;

/// Exit code for a clean run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the command fails
pub const EXIT_FAILURE: i32 = 1;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering and flushing
/// - Exit codes (0 = success, 1 = error, 128 + signal number on a signal)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `main_fn` against buffered stdout and return the process exit code
    ///
    /// The writer is flushed after a successful run. A signal arriving first
    /// drops the in-flight command; the ledger document is only ever replaced
    /// by rename, so it stays at its last committed state.
    pub async fn run<F, Fut>(self, main_fn: F) -> i32
    where
        F: FnOnce(BufWriter<Stdout>) -> Fut,
        Fut: Future<Output = Result<BufWriter<Stdout>, AppError>>,
    {
        let writer = BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer) => self.finish(result).await,
            signal_code = wait_for_signal() => signal_code,
        }
    }

    async fn finish(&self, result: Result<BufWriter<Stdout>, AppError>) -> i32 {
        match result {
            Ok(mut writer) => match writer.flush().await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("{}: error: {}", self.name, AppError::from(e));
                    EXIT_FAILURE
                }
            },
            Err(e) => {
                error!(error = %e, "Command failed");
                eprintln!("{}: error: {}", self.name, e);
                EXIT_FAILURE
            }
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
#[cfg(unix)]
async fn wait_for_signal() -> i32 {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut sigterm, mut sigint, mut sighup) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
        signal(SignalKind::hangup()),
    ) {
        (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
        _ => {
            warn!("Failed to install signal handlers");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            eprintln!("Received SIGTERM");
            143 // 128 + 15
        }
        _ = sigint.recv() => {
            eprintln!("Received SIGINT");
            130 // 128 + 2
        }
        _ = sighup.recv() => {
            eprintln!("Received SIGHUP");
            129 // 128 + 1
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> i32 {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("Failed to install Ctrl+C handler");
        return std::future::pending().await;
    }
    eprintln!("Received Ctrl+C");
    130
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::engine::EngineError;

    #[test]
    fn cli_app_new() {
        let app = CliApp::new("test-app");
        assert_eq!(app.name(), "test-app");
    }

    #[tokio::test]
    async fn successful_run_exits_zero() {
        let code = CliApp::new("test-app").run(|writer| async move { Ok::<_, AppError>(writer) }).await;
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[tokio::test]
    async fn failed_run_exits_one() {
        let code = CliApp::new("test-app")
            .run(|_writer| async {
                let rejected = EngineError::Domain(DomainError::InsufficientFunds);
                Err::<BufWriter<Stdout>, _>(AppError::from(rejected))
            })
            .await;
        assert_eq!(code, EXIT_FAILURE);
    }
}
