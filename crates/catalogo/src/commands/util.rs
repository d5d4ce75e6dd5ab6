//! Shared helpers for command handlers.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use catalogo_core::{Catalog, Resource, Sliced, Status};

use crate::cli::RecordInput;
use crate::error::CliError;

/// Parse the record given inline or via `--from-file`.
pub fn read_record<R: Resource>(input: &RecordInput) -> Result<R, CliError> {
    match (&input.json, &input.from_file) {
        (Some(json), _) => Ok(serde_json::from_str(json)?),
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        (None, None) => Err(CliError::Validation {
            field: "record".into(),
            reason: "expected a JSON record or --from-file".into(),
        }),
    }
}

// ── Progress spinner ────────────────────────────────────────────────

/// Spinner on stderr that follows one slice while it is pending.
///
/// Driven by a store subscription: it shows the slice's pending message
/// and clears itself once the slice settles or [`finish`](Self::finish)
/// is called, whichever comes first.
pub struct Progress {
    running: Option<(JoinHandle<()>, oneshot::Sender<()>)>,
}

impl Progress {
    pub fn start<R: Sliced>(catalog: &Catalog, enabled: bool) -> Self {
        if !enabled {
            return Self { running: None };
        }

        let mut stream = catalog.subscribe();
        let (done_tx, mut done_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(80));

            loop {
                tokio::select! {
                    changed = stream.changed() => {
                        let Some(snapshot) = changed else { break };
                        let slice = R::slice(&snapshot);
                        if slice.status != Status::Pending {
                            break;
                        }
                        bar.set_message(slice.message.clone());
                    }
                    _ = &mut done_rx => break,
                }
            }
            bar.finish_and_clear();
        });

        Self {
            running: Some((task, done_tx)),
        }
    }

    /// Stop the spinner and wait for it to clear.
    ///
    /// Returns promptly even when nothing was ever dispatched.
    pub async fn finish(mut self) {
        if let Some((task, done)) = self.running.take() {
            let _ = done.send(());
            let _ = task.await;
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some((task, _)) = self.running.take() {
            task.abort();
        }
    }
}
