//! Integration tests for configuration and source resolution.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use litdoc::batch::{run_plan, SourceEntry};
use litdoc::config::{Config, LoadRequest};
use litdoc::error::ErrorKind;
use litdoc::render::RenderOptions;
use tempfile::TempDir;

fn config_with(sources: &[(&str, &str)]) -> Config {
    let sources: IndexMap<String, String> = sources
        .iter()
        .map(|(i, o)| (i.to_string(), o.to_string()))
        .collect();
    Config::new(RenderOptions::new(), sources)
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/sub")).unwrap();
    fs::write(dir.path().join("src/a.py"), "# A\na = 1\n").unwrap();
    fs::write(dir.path().join("src/sub/b.py"), "# B\nb = 1\n").unwrap();
    fs::write(dir.path().join("src/notes.txt"), "not python\n").unwrap();
    dir
}

#[test]
fn test_directory_expansion() {
    let dir = project();
    let config = config_with(&[("src/", "docs/")]);

    let plan = config.plan(dir.path());

    let outputs: Vec<PathBuf> = plan
        .jobs
        .iter()
        .map(|j| j.output.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        outputs,
        vec![PathBuf::from("docs/src/a.md"), PathBuf::from("docs/src/sub/b.md")]
    );
    assert_eq!(plan.jobs[0].input, dir.path().join("src/").join("a.py"));
    assert!(plan.rejected.is_empty());
}

#[test]
fn test_directory_expansion_extensions() {
    let dir = project();
    fs::write(dir.path().join("src/c.rs"), "// C\nfn c() {}\n").unwrap();

    let mut config = config_with(&[("src", "docs")]);
    config.extensions = vec!["rs".to_string(), "txt".to_string()];

    let plan = config.plan(dir.path());
    let names: Vec<_> = plan
        .jobs
        .iter()
        .map(|j| j.output.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["c.md", "notes.md"]);
}

#[test]
fn test_resolution_is_tagged_once() {
    let dir = project();
    assert!(matches!(
        SourceEntry::resolve("src/a.py", "docs/a.md", dir.path()),
        SourceEntry::File { .. }
    ));
    assert!(matches!(
        SourceEntry::resolve("src", "docs", dir.path()),
        SourceEntry::Directory { .. }
    ));
    assert!(matches!(
        SourceEntry::resolve("nowhere", "docs", dir.path()),
        SourceEntry::Invalid { .. }
    ));
}

#[test]
fn test_invalid_sources_reported_as_failures() {
    let dir = project();
    let config = config_with(&[("missing.py", "docs/missing.md"), ("src/a.py", "docs/a.md")]);

    let plan = config.plan(dir.path());
    assert_eq!(plan.jobs.len(), 1);
    assert_eq!(plan.rejected.len(), 1);

    let report = run_plan(&plan, |_, _| {});
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].kind, ErrorKind::InvalidSource);
    assert!(dir.path().join("docs/a.md").exists());
}

#[test]
fn test_jobs_follow_source_order() {
    let dir = project();
    let config = config_with(&[("src/sub/b.py", "docs/b.md"), ("src/a.py", "docs/a.md")]);

    let plan = config.plan(dir.path());
    let names: Vec<_> = plan
        .jobs
        .iter()
        .map(|j| j.input.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["b.py", "a.py"]);
}

#[test]
fn test_build_from_config_file() {
    let dir = project();
    let config_path = dir.path().join("litdoc.yml");
    fs::write(
        &config_path,
        "highlights: true\ntitle: true\nsources:\n  src/: site/\n",
    )
    .unwrap();

    let request = LoadRequest {
        cwd: dir.path().to_path_buf(),
        ..Default::default()
    };
    let config = Config::load(&request).unwrap();
    let report = run_plan(&config.plan(dir.path()), |_, _| {});

    assert!(report.is_success());
    assert_eq!(report.succeeded.len(), 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("site/src/a.md")).unwrap(),
        "# a.py\n\nA\n\n```python\na = 1\n```\n"
    );
    assert!(dir.path().join("site/src/sub/b.md").exists());
}

#[test]
fn test_config_pairs_and_yaml_output() {
    let dir = project();
    let request = LoadRequest {
        src: vec!["src/a.py:docs/a.md".to_string()],
        options: RenderOptions::new().with_inline(true),
        config: None,
        cwd: dir.path().to_path_buf(),
    };

    let config = Config::load(&request).unwrap();
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("inline: true"));
    assert!(yaml.contains("src/a.py: docs/a.md"));
}

#[test]
fn test_missing_configuration() {
    let dir = TempDir::new().unwrap();
    let request = LoadRequest {
        cwd: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = Config::load(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
}

#[test]
fn test_malformed_pair() {
    let dir = TempDir::new().unwrap();
    let request = LoadRequest {
        src: vec!["just-a-path.py".to_string()],
        cwd: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = Config::load(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSource);
}
