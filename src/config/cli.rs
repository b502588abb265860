use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

use crate::application::{output::OutputFormat, sort::SortOrder, taxonomy::Taxonomy};

/// Command-line arguments for the tagwise binary.
#[derive(Debug, Parser)]
#[command(
    name = "tagwise",
    version,
    about = "Related-content ranking and taxonomy lookups for a static blog"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "TAGWISE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the items related to one slug.
    Related(RelatedArgs),
    /// Print a JSON map from every slug to its related slugs.
    Index(IndexArgs),
    /// List the items filed under a category or tag.
    Taxonomy(TaxonomyArgs),
    /// List the whole collection.
    List(ListArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the content collection directory.
    #[arg(
        long = "content-dir",
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        global = true
    )]
    pub content_dir: Option<PathBuf>,

    /// Include items marked `draft: true`.
    #[arg(
        long = "include-drafts",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub include_drafts: Option<bool>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RankingOverrides {
    /// Maximum number of related items per slug.
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Score added when categories match.
    #[arg(long = "category-weight", value_name = "POINTS")]
    pub category_weight: Option<u32>,

    /// Score added per shared tag.
    #[arg(long = "tag-weight", value_name = "POINTS")]
    pub tag_weight: Option<u32>,

    /// Pad short results with unrelated items.
    #[arg(
        long = "fill-unscored",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub fill_unscored: Option<bool>,
}

#[derive(Debug, Args, Clone)]
pub struct RelatedArgs {
    /// Slug of the item to find neighbours for.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    #[command(flatten)]
    pub ranking: RankingOverrides,

    /// Seed the shuffle for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// `time` format description used for dates.
    #[arg(long = "date-format", value_name = "PATTERN")]
    pub date_format: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct IndexArgs {
    #[command(flatten)]
    pub ranking: RankingOverrides,

    /// Seed the shuffle for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the index to a file instead of stdout.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TaxonomyArgs {
    /// `category` or `tags`.
    #[arg(value_name = "TAXONOMY")]
    pub taxonomy: Taxonomy,

    /// Category or tag to look up; compared after slugifying.
    #[arg(value_name = "KEY")]
    pub key: String,

    #[arg(long, value_name = "ORDER", default_value_t = SortOrder::Date)]
    pub sort: SortOrder,

    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// `time` format description used for dates.
    #[arg(long = "date-format", value_name = "PATTERN")]
    pub date_format: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ListArgs {
    #[arg(long, value_name = "ORDER", default_value_t = SortOrder::Date)]
    pub sort: SortOrder,

    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// `time` format description used for dates.
    #[arg(long = "date-format", value_name = "PATTERN")]
    pub date_format: Option<String>,
}
