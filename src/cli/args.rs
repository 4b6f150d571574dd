//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Page-level SEO metadata for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path. Must exist when given; otherwise docseo.toml is
    /// searched upward from cwd and defaults apply if none is found
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override `site.url`.
    ///
    /// Useful for previews and CI where the deployed URL differs from the
    /// configured one, without editing docseo.toml.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the <head> entries of a page
    #[command(visible_alias = "h")]
    Head {
        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Print the JSON-LD structured data of a page
    #[command(visible_alias = "j")]
    Jsonld {
        #[command(flatten)]
        page: PageArgs,

        /// Pretty-print instead of the compact form embedded in pages
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the config file
    #[command(visible_alias = "c")]
    Check,
}

/// Output format of the `head` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<head>` inner HTML
    #[default]
    Html,
    /// Derived metadata and head entries as JSON
    Json,
}

/// Page selection and per-call overrides, shared by `head` and `jsonld`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Content file with frontmatter. Use `-` to read from stdin.
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Route path (e.g. /guide/setup). Derived from FILE when omitted.
    #[arg(short, long)]
    pub path: Option<String>,

    /// Content root, used to derive the route from FILE
    #[arg(long, default_value = "content", value_hint = clap::ValueHint::DirPath)]
    pub content: PathBuf,

    /// Title override
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description override
    #[arg(short, long)]
    pub description: Option<String>,

    /// Keyword override (repeatable or comma-separated)
    #[arg(short, long = "keyword", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Image override (absolute URL or site-relative path)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
