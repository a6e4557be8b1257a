//! Configuration loading.
//!
//! A [`Config`] maps user-facing settings onto the converter: the render
//! flags and the `sources` table of `input -> output` paths. It is read from
//! a YAML file or assembled from `input:output` pairs given on the command
//! line, then resolved eagerly into a [`JobPlan`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::batch::{JobPlan, SourceEntry};
use crate::error::{Error, Result};
use crate::render::RenderOptions;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "litdoc.yml";

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

/// Resolved litdoc configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering flags shared by every job
    #[serde(flatten)]
    pub render: RenderOptions,

    /// File extensions collected when a source is a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Source path to documentation path, in the order given
    #[serde(default)]
    pub sources: IndexMap<String, String>,
}

/// Inputs for [`Config::load`], as gathered by a front end.
#[derive(Debug, Clone, Default)]
pub struct LoadRequest {
    /// `input:output` pairs
    pub src: Vec<String>,

    /// Flags given alongside the pairs
    pub options: RenderOptions,

    /// Explicit configuration file
    pub config: Option<PathBuf>,

    /// Directory searched for [`DEFAULT_CONFIG_FILE`]
    pub cwd: PathBuf,
}

impl Config {
    /// Create a configuration from render flags and source pairs.
    pub fn new(render: RenderOptions, sources: IndexMap<String, String>) -> Self {
        Self {
            render,
            extensions: default_extensions(),
            sources,
        }
    }

    /// Load configuration.
    ///
    /// An explicit config file wins. Without one, `litdoc.yml` in the working
    /// directory is used when no source pairs were given; otherwise the pairs
    /// and flags build the configuration. Flags set in the request are also
    /// switched on when loading from a file.
    pub fn load(request: &LoadRequest) -> Result<Self> {
        let default_file = request.cwd.join(DEFAULT_CONFIG_FILE);

        let mut config = if let Some(ref path) = request.config {
            Self::from_file(path)?
        } else if request.src.is_empty() && default_file.exists() {
            Self::from_file(&default_file)?
        } else if request.src.is_empty() {
            return Err(Error::ConfigurationMissing);
        } else {
            let mut sources = IndexMap::new();
            for pair in &request.src {
                let (input, output) = parse_source_pair(pair)?;
                sources.insert(input, output);
            }
            Self::new(request.options.clone(), sources)
        };

        config.render.inline |= request.options.inline;
        config.render.title |= request.options.title;
        config.render.linenums |= request.options.linenums;
        config.render.highlights |= request.options.highlights;
        config.render.toc |= request.options.toc;

        if config.sources.is_empty() {
            return Err(Error::ConfigurationMissing);
        }
        Ok(config)
    }

    /// Read a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_yaml(&text)
    }

    /// Parse YAML configuration text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolve every source pair against `base` and expand it into jobs.
    pub fn plan(&self, base: &Path) -> JobPlan {
        let mut plan = JobPlan::new();
        for (input, output) in &self.sources {
            let entry = SourceEntry::resolve(input, output, base);
            entry.expand_into(&mut plan, &self.extensions, &self.render);
        }
        plan
    }
}

/// Split an `input:output` pair.
pub fn parse_source_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once(':') {
        Some((input, output)) if !input.trim().is_empty() && !output.trim().is_empty() => {
            Ok((input.trim().to_string(), output.trim().to_string()))
        }
        _ => Err(Error::InvalidSource(format!(
            "expected INPUT:OUTPUT, got '{}'",
            pair
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_pair() {
        assert_eq!(
            parse_source_pair("src/a.py:docs/a.md").unwrap(),
            ("src/a.py".to_string(), "docs/a.md".to_string())
        );
        assert!(matches!(
            parse_source_pair("no-separator"),
            Err(Error::InvalidSource(_))
        ));
        assert!(parse_source_pair(":docs").is_err());
    }

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml(
            "inline: true\nhighlights: true\nsources:\n  src/: docs/\n  tool.py: docs/tool.md\n",
        )
        .unwrap();

        assert!(config.render.inline);
        assert!(config.render.highlights);
        assert!(!config.render.title);
        assert_eq!(config.extensions, vec!["py".to_string()]);
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources["tool.py"], "docs/tool.md");
    }

    #[test]
    fn test_sources_keep_file_order() {
        let config =
            Config::from_yaml("sources:\n  zeta.py: z.md\n  alpha.py: a.md\n  mid/: docs/\n")
                .unwrap();
        let inputs: Vec<&str> = config.sources.keys().map(String::as_str).collect();
        assert_eq!(inputs, vec!["zeta.py", "alpha.py", "mid/"]);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.find("zeta.py").unwrap() < yaml.find("alpha.py").unwrap());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = Config::from_yaml("inline: [not, a, bool]\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut sources = IndexMap::new();
        sources.insert("a.py".to_string(), "a.md".to_string());
        let config = Config::new(RenderOptions::new().with_title(true), sources);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("title: true"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_requires_sources() {
        let dir = tempfile::tempdir().unwrap();
        let request = LoadRequest {
            cwd: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(
            Config::load(&request),
            Err(Error::ConfigurationMissing)
        ));
    }

    #[test]
    fn test_load_from_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let request = LoadRequest {
            src: vec!["a.py:a.md".to_string(), "b.py:b.md".to_string()],
            options: RenderOptions::new().with_linenums(true),
            config: None,
            cwd: dir.path().to_path_buf(),
        };
        let config = Config::load(&request).unwrap();
        assert!(config.render.linenums);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_load_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "title: true\nsources:\n  a.py: a.md\n",
        )
        .unwrap();

        let request = LoadRequest {
            options: RenderOptions::new().with_toc(true),
            cwd: dir.path().to_path_buf(),
            ..Default::default()
        };
        let config = Config::load(&request).unwrap();
        assert!(config.render.title);
        assert!(config.render.toc);
    }

    #[test]
    fn test_load_pairs_ignore_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "sources:\n  a.py: a.md\n",
        )
        .unwrap();

        let request = LoadRequest {
            src: vec!["b.py:b.md".to_string()],
            cwd: dir.path().to_path_buf(),
            ..Default::default()
        };
        let config = Config::load(&request).unwrap();
        assert!(config.sources.contains_key("b.py"));
        assert!(!config.sources.contains_key("a.py"));
    }

    #[test]
    fn test_load_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let request = LoadRequest {
            config: Some(dir.path().join("missing.yml")),
            cwd: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(Config::load(&request), Err(Error::Read { .. })));
    }

    #[test]
    fn test_load_empty_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        std::fs::write(&path, "inline: true\n").unwrap();

        let request = LoadRequest {
            config: Some(path),
            cwd: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(
            Config::load(&request),
            Err(Error::ConfigurationMissing)
        ));
    }
}
