//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::application::related::{
    DEFAULT_CATEGORY_WEIGHT, DEFAULT_LIMIT, DEFAULT_TAG_WEIGHT, RankOptions, Weights,
    validate_limit,
};
use crate::domain::dates::DEFAULT_DATE_PATTERN;

mod cli;

pub use cli::{
    CliArgs, Command, GlobalOverrides, IndexArgs, ListArgs, RankingOverrides, RelatedArgs,
    TaxonomyArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "tagwise";
const ENV_PREFIX: &str = "TAGWISE";
const DEFAULT_CONTENT_DIR: &str = "src/content/blog";
const DEFAULT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub content: ContentSettings,
    pub related: RelatedSettings,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone)]
pub struct ContentSettings {
    pub directory: PathBuf,
    pub include_drafts: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RelatedSettings {
    pub limit: usize,
    pub weights: Weights,
    pub fill_unscored: bool,
}

impl RelatedSettings {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            limit: self.limit,
            weights: self.weights,
            fill_unscored: self.fill_unscored,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub date_format: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_cli(cli);

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    content: RawContentSettings,
    related: RawRelatedSettings,
    logging: RawLoggingSettings,
    output: RawOutputSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentSettings {
    directory: Option<PathBuf>,
    include_drafts: Option<bool>,
    extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawRelatedSettings {
    limit: Option<i64>,
    category_weight: Option<u32>,
    tag_weight: Option<u32>,
    fill_unscored: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawOutputSettings {
    date_format: Option<String>,
}

impl RawSettings {
    fn apply_cli(&mut self, cli: &CliArgs) {
        self.apply_global_overrides(&cli.overrides);
        match &cli.command {
            Command::Related(args) => {
                self.apply_ranking_overrides(&args.ranking);
                self.apply_date_format(args.date_format.as_ref());
            }
            Command::Index(args) => self.apply_ranking_overrides(&args.ranking),
            Command::Taxonomy(args) => self.apply_date_format(args.date_format.as_ref()),
            Command::List(args) => self.apply_date_format(args.date_format.as_ref()),
        }
    }

    fn apply_global_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(directory) = overrides.content_dir.as_ref() {
            self.content.directory = Some(directory.clone());
        }
        if let Some(include) = overrides.include_drafts {
            self.content.include_drafts = Some(include);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }

    fn apply_ranking_overrides(&mut self, overrides: &RankingOverrides) {
        if let Some(limit) = overrides.limit {
            self.related.limit = Some(limit);
        }
        if let Some(weight) = overrides.category_weight {
            self.related.category_weight = Some(weight);
        }
        if let Some(weight) = overrides.tag_weight {
            self.related.tag_weight = Some(weight);
        }
        if let Some(fill) = overrides.fill_unscored {
            self.related.fill_unscored = Some(fill);
        }
    }

    fn apply_date_format(&mut self, pattern: Option<&String>) {
        if let Some(pattern) = pattern {
            self.output.date_format = Some(pattern.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            content,
            related,
            logging,
            output,
        } = raw;

        Ok(Self {
            content: build_content_settings(content)?,
            related: build_related_settings(related)?,
            logging: build_logging_settings(logging)?,
            output: build_output_settings(output)?,
        })
    }
}

fn build_content_settings(content: RawContentSettings) -> Result<ContentSettings, LoadError> {
    let directory = content
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
    if directory.as_os_str().is_empty() {
        return Err(LoadError::invalid("content.directory", "path must not be empty"));
    }

    let extensions: Vec<String> = content
        .extensions
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect())
        .into_iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();
    if extensions.is_empty() {
        return Err(LoadError::invalid(
            "content.extensions",
            "at least one file extension is required",
        ));
    }

    Ok(ContentSettings {
        directory,
        include_drafts: content.include_drafts.unwrap_or(false),
        extensions,
    })
}

fn build_related_settings(related: RawRelatedSettings) -> Result<RelatedSettings, LoadError> {
    let limit = match related.limit {
        Some(value) => validate_limit(value)
            .map_err(|err| LoadError::invalid("related.limit", err.to_string()))?,
        None => DEFAULT_LIMIT,
    };

    let weights = Weights {
        category: related.category_weight.unwrap_or(DEFAULT_CATEGORY_WEIGHT),
        tag: related.tag_weight.unwrap_or(DEFAULT_TAG_WEIGHT),
    };
    if weights.category == 0 && weights.tag == 0 {
        return Err(LoadError::invalid(
            "related.tag_weight",
            "category and tag weights cannot both be zero",
        ));
    }

    Ok(RelatedSettings {
        limit,
        weights,
        fill_unscored: related.fill_unscored.unwrap_or(false),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_output_settings(output: RawOutputSettings) -> Result<OutputSettings, LoadError> {
    let date_format = output
        .date_format
        .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string());
    time::format_description::parse(&date_format).map_err(|err| {
        LoadError::invalid("output.date_format", format!("failed to parse: {err}"))
    })?;

    Ok(OutputSettings { date_format })
}
