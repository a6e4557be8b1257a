//! Batch conversion of many source files.
//!
//! Source pairs from the configuration are resolved once into
//! [`SourceEntry`] values (single file, directory, or invalid) and expanded
//! eagerly into a [`JobPlan`]. The batch driver then runs each
//! [`ConversionJob`] in order and collects a [`BatchReport`]; one failing
//! job never stops the rest.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::convert::{ConvertResult, FileConverter};
use crate::error::{ErrorKind, Result};
use crate::render::{RenderOptions, RenderStats};

/// One unit of work: convert `input` into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: RenderOptions,
}

impl ConversionJob {
    /// Create a new conversion job.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: RenderOptions,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options,
        }
    }

    /// Run the job with the given converter.
    pub fn run(&self, converter: &FileConverter) -> Result<ConvertResult> {
        converter.convert(&self.input, &self.output, &self.options)
    }
}

/// A configured source pair, classified once when it is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// A single source file mapped to a single output file.
    File { input: PathBuf, output: PathBuf },

    /// A source directory mapped into an output directory.
    Directory {
        input: PathBuf,
        output: PathBuf,
        /// Directory prefix repeated under the output directory
        prefix: PathBuf,
    },

    /// A pair that cannot be converted.
    Invalid {
        input: PathBuf,
        output: PathBuf,
        reason: String,
    },
}

impl SourceEntry {
    /// Classify a configured `input -> output` pair.
    ///
    /// Relative paths are resolved against `base`.
    pub fn resolve(input: &str, output: &str, base: &Path) -> Self {
        let in_path = base.join(input);
        let out_path = base.join(output);

        if in_path.is_file() {
            SourceEntry::File {
                input: in_path,
                output: out_path,
            }
        } else if in_path.is_dir() {
            if out_path.is_file() {
                return SourceEntry::Invalid {
                    input: in_path,
                    output: out_path,
                    reason: "input is a directory but output is a file".to_string(),
                };
            }
            let prefix = directory_prefix(&in_path, base);
            SourceEntry::Directory {
                input: in_path,
                output: out_path,
                prefix,
            }
        } else {
            SourceEntry::Invalid {
                input: in_path,
                output: out_path,
                reason: "input path does not exist".to_string(),
            }
        }
    }

    /// Expand this entry into the plan.
    ///
    /// Directory entries pick every file below the input directory whose
    /// extension is listed in `extensions`, sorted by path.
    pub fn expand_into(&self, plan: &mut JobPlan, extensions: &[String], options: &RenderOptions) {
        match self {
            SourceEntry::File { input, output } => {
                plan.jobs.push(ConversionJob::new(input, output, options.clone()));
            }
            SourceEntry::Directory {
                input,
                output,
                prefix,
            } => {
                let walker = WalkDir::new(input).sort_by_file_name();
                for entry in walker {
                    let entry = match entry {
                        Ok(entry) => entry,
                        Err(e) => {
                            let path = e.path().unwrap_or(input).to_path_buf();
                            plan.reject(path, output.clone(), e.to_string());
                            continue;
                        }
                    };
                    if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
                        continue;
                    }
                    let Ok(relative) = entry.path().strip_prefix(input) else {
                        continue;
                    };
                    let target = output.join(prefix).join(relative).with_extension("md");
                    plan.jobs.push(ConversionJob::new(entry.path(), target, options.clone()));
                }
            }
            SourceEntry::Invalid {
                input,
                output,
                reason,
            } => plan.reject(input.clone(), output.clone(), reason.clone()),
        }
    }
}

/// Output-side prefix for a directory source: the input path relative to
/// `base`, or just its final component when it lies outside `base`.
fn directory_prefix(input: &Path, base: &Path) -> PathBuf {
    match input.strip_prefix(base) {
        Ok(rel) if rel.components().all(|c| matches!(c, Component::Normal(_))) => {
            rel.to_path_buf()
        }
        _ => input
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_default(),
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// A source pair that was rejected while planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSource {
    pub input: PathBuf,
    pub output: PathBuf,
    pub reason: String,
}

/// Eagerly resolved conversion work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPlan {
    /// Jobs to run, in order
    pub jobs: Vec<ConversionJob>,

    /// Pairs that could not be turned into jobs
    pub rejected: Vec<RejectedSource>,
}

impl JobPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, input: PathBuf, output: PathBuf, reason: String) {
        log::warn!(
            "Improper input or output path for {} and {}: {}",
            input.display(),
            output.display(),
            reason
        );
        self.rejected.push(RejectedSource {
            input,
            output,
            reason,
        });
    }

    /// Check if the plan has nothing to do and nothing to report.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.rejected.is_empty()
    }
}

/// A failed job recorded in a batch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFailure {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: ErrorKind,
    pub message: String,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Successful conversions, in job order
    pub succeeded: Vec<ConvertResult>,

    /// Failed jobs and rejected sources
    pub failed: Vec<JobFailure>,
}

impl BatchReport {
    /// Check if every job succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of recorded jobs.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Rendering statistics summed over successful jobs.
    pub fn stats(&self) -> RenderStats {
        let mut stats = RenderStats::new();
        for result in &self.succeeded {
            stats.merge(&result.stats);
        }
        stats
    }

    fn record_rejected(&mut self, rejected: &RejectedSource) {
        self.failed.push(JobFailure {
            input: rejected.input.clone(),
            output: rejected.output.clone(),
            kind: ErrorKind::InvalidSource,
            message: rejected.reason.clone(),
        });
    }
}

/// Run every job in order, collecting successes and failures.
pub fn convert_all(jobs: &[ConversionJob]) -> BatchReport {
    convert_all_with(jobs, |_, _| {})
}

/// Run every job in order, calling `observer` after each one.
pub fn convert_all_with<F>(jobs: &[ConversionJob], mut observer: F) -> BatchReport
where
    F: FnMut(&ConversionJob, &Result<ConvertResult>),
{
    let converter = FileConverter::new();
    let mut report = BatchReport::default();

    for job in jobs {
        let outcome = job.run(&converter);
        observer(job, &outcome);

        match outcome {
            Ok(result) => report.succeeded.push(result),
            Err(e) => {
                log::warn!("Failed to convert {}: {}", job.input.display(), e);
                report.failed.push(JobFailure {
                    input: job.input.clone(),
                    output: job.output.clone(),
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

/// Run a plan: rejected sources are reported as failures, then every job runs.
pub fn run_plan<F>(plan: &JobPlan, observer: F) -> BatchReport
where
    F: FnMut(&ConversionJob, &Result<ConvertResult>),
{
    let mut report = convert_all_with(&plan.jobs, observer);
    for rejected in &plan.rejected {
        report.record_rejected(rejected);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["py".to_string()]
    }

    #[test]
    fn test_resolve_file_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();

        let entry = SourceEntry::resolve("a.py", "docs/a.md", dir.path());
        assert!(matches!(entry, SourceEntry::File { .. }));
    }

    #[test]
    fn test_resolve_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let entry = SourceEntry::resolve("missing.py", "docs/missing.md", dir.path());
        assert!(matches!(entry, SourceEntry::Invalid { .. }));

        let mut plan = JobPlan::new();
        entry.expand_into(&mut plan, &exts(), &RenderOptions::new());
        assert!(plan.jobs.is_empty());
        assert_eq!(plan.rejected.len(), 1);
    }

    #[test]
    fn test_resolve_directory_onto_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("docs.md"), "").unwrap();

        let entry = SourceEntry::resolve("src", "docs.md", dir.path());
        assert!(matches!(entry, SourceEntry::Invalid { .. }));
    }

    #[test]
    fn test_directory_prefix() {
        let base = Path::new("/work");
        assert_eq!(
            directory_prefix(Path::new("/work/src/pkg"), base),
            PathBuf::from("src/pkg")
        );
        assert_eq!(
            directory_prefix(Path::new("/elsewhere/lib"), base),
            PathBuf::from("lib")
        );
        assert_eq!(
            directory_prefix(&base.join("../lib"), base),
            PathBuf::from("lib")
        );
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a.py"), &exts()));
        assert!(has_extension(Path::new("A.PY"), &exts()));
        assert!(!has_extension(Path::new("a.pyc"), &exts()));
        assert!(!has_extension(Path::new("Makefile"), &exts()));
    }

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        assert!(report.is_success());
        report.record_rejected(&RejectedSource {
            input: "a".into(),
            output: "b".into(),
            reason: "nope".into(),
        });
        assert!(!report.is_success());
        assert_eq!(report.total(), 1);
        assert_eq!(report.failed[0].kind, ErrorKind::InvalidSource);
    }
}
