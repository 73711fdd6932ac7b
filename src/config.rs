//! Run configuration
//!
//! Options come from the command line and, optionally, a YAML file:
//!
//! ```yaml
//! root: /srv/apps
//! fat_jars: "**/target/*.jar"
//! exclusions:
//!   - "**/*-sources.jar"
//! out_dir: /var/cache/appcds
//! jobs: 4
//! convert: true
//! ```
//!
//! Command line values win over the file; exclusion lists are merged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::ProcessArgs;
use crate::error::{
    Result, config_not_found, config_parse_failed, config_read_failed, invalid_config,
};

/// Output directory used when none is configured
pub const DEFAULT_OUT_DIR: &str = "appcds";

/// Contents of a `--config` file
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub fat_jars: Option<String>,
    pub exclusions: Vec<String>,
    pub out_dir: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub convert: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_not_found(path));
        }
        let text = std::fs::read_to_string(path).map_err(|e| config_read_failed(path, e))?;
        Self::from_yaml(&text, &path.display().to_string())
    }

    /// Parse YAML text; `origin` names the source in errors.
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| config_parse_failed(origin, e))
    }
}

/// Fully resolved options of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub fat_jars: String,
    pub exclusions: Vec<String>,
    pub out_dir: PathBuf,
    pub jobs: usize,
    pub convert: bool,
}

impl Settings {
    /// Merge command line arguments over the config file they name, if any.
    pub fn from_args(args: &ProcessArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }

    pub fn resolve(args: &ProcessArgs, file: FileConfig) -> Result<Self> {
        let fat_jars = args
            .fat_jars
            .clone()
            .or(file.fat_jars)
            .ok_or_else(|| invalid_config("a fat JAR glob is required (--fat-jars)"))?;

        let root = match args.root.clone().or(file.root) {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        let jobs = args.jobs.map(usize::from).or(file.jobs).unwrap_or(1);
        if jobs == 0 {
            return Err(invalid_config("jobs must be at least 1"));
        }

        let mut exclusions = file.exclusions;
        for pattern in &args.exclusions {
            if !exclusions.contains(pattern) {
                exclusions.push(pattern.clone());
            }
        }

        Ok(Self {
            root,
            fat_jars,
            exclusions,
            out_dir: args
                .out_dir
                .clone()
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            jobs,
            convert: !args.no_convert && file.convert.unwrap_or(true),
        })
    }
}
