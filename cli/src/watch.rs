//! Rebuild sources when they change on disk.
//!
//! Each job's input file is watched on its own. Modification events are
//! collected per file and the file is converted once no new event has
//! arrived for the debounce delay, so a save made of several writes is
//! converted in its final state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use litdoc::{ConversionJob, FileConverter};

/// Trailing-edge debounce of file events.
#[derive(Debug)]
struct Debouncer {
    delay: Duration,
    pending: HashMap<PathBuf, Instant>,
}

impl Debouncer {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    /// Note an event for `path`; restarts its quiet period.
    fn record(&mut self, path: PathBuf, now: Instant) {
        self.pending.insert(path, now);
    }

    /// How long to wait for the next event before some path becomes due.
    /// `None` when nothing is pending.
    fn next_wait(&self, now: Instant) -> Option<Duration> {
        self.pending
            .values()
            .map(|last| (*last + self.delay).saturating_duration_since(now))
            .min()
    }

    /// Remove and return paths that have been quiet for the full delay.
    fn due(&mut self, now: Instant) -> Vec<PathBuf> {
        let delay = self.delay;
        let mut ready: Vec<PathBuf> = self
            .pending
            .iter()
            .filter(|(_, last)| now.duration_since(**last) >= delay)
            .map(|(path, _)| path.clone())
            .collect();
        ready.sort();
        for path in &ready {
            self.pending.remove(path);
        }
        ready
    }
}

/// Watch every job's input and convert it again when it is modified.
///
/// Blocks until the watcher channel closes.
pub fn watch(jobs: &[ConversionJob], debounce_ms: u64) -> notify::Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;

    let mut by_input: HashMap<PathBuf, &ConversionJob> = HashMap::new();
    for job in jobs {
        watcher.watch(&job.input, RecursiveMode::NonRecursive)?;
        by_input.insert(canonical(&job.input), job);
    }

    let converter = FileConverter::new();
    let mut debouncer = Debouncer::new(Duration::from_millis(debounce_ms));

    loop {
        let received = match debouncer.next_wait(Instant::now()) {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(event)) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    for path in event.paths.iter().map(|p| canonical(p)) {
                        if by_input.contains_key(&path) {
                            debouncer.record(path, Instant::now());
                        }
                    }
                }
            }
            Ok(Err(e)) => log::warn!("Watch error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        for path in debouncer.due(Instant::now()) {
            if let Some(job) = by_input.get(&path) {
                rebuild(job, &converter);
            }
        }
    }

    Ok(())
}

fn rebuild(job: &ConversionJob, converter: &FileConverter) {
    println!(
        "{} {} -> {}",
        "Recreating:".cyan(),
        job.input.display(),
        job.output.display()
    );
    if let Err(e) = job.run(converter) {
        eprintln!("{}: {}", "Error".red().bold(), e);
    }
}

/// Event paths and configured paths may differ by symlinks or `..`.
fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
