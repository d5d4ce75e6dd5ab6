//! Clap derive structures for the `catalogo` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this file may
//! only depend on clap, clap_complete and std.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// catalogo -- manage products, categories and customers of a catalog backend
#[derive(Debug, Parser)]
#[command(
    name = "catalogo",
    version,
    about = "Manage a product catalog backend from the command line",
    long_about = "Lists, creates, updates and removes catalog records.\n\n\
        Each command runs one operation through the catalog state store and\n\
        prints the resulting slice message and records.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "CATALOGO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'u', env = "CATALOGO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: `defaults.output` from the config file, else table]
    #[arg(long, short = 'o', env = "CATALOGO_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "CATALOGO_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "CATALOGO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// The selected output format, table when none was chosen.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage products
    #[command(alias = "prod", alias = "p")]
    Products(ResourceArgs),

    /// Manage product categories
    #[command(alias = "cat")]
    Categories(ResourceArgs),

    /// Manage customers
    #[command(alias = "cust")]
    Customers(ResourceArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Resource commands ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ResourceArgs {
    #[command(subcommand)]
    pub command: ResourceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// Fetch every record from the backend
    #[command(alias = "ls")]
    List,

    /// Create a record
    Add(RecordInput),

    /// Update the record with the same `codigo`
    Update(RecordInput),

    /// Remove the record with the same `codigo`
    #[command(alias = "rm")]
    Remove(RecordInput),
}

/// A record given inline or read from a file.
#[derive(Debug, Args)]
pub struct RecordInput {
    /// Record as JSON, e.g. '{"codigo": 1, "nome": "Coffee"}'
    #[arg(required_unless_present = "from_file")]
    pub json: Option<String>,

    /// Read the record from a JSON file
    #[arg(long, short = 'F', conflicts_with = "json")]
    pub from_file: Option<PathBuf>,
}

// ── Config commands ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Create or replace a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Backend base URL for the profile
        #[arg(long = "url", default_value = "http://localhost:4000")]
        url: String,

        /// Request timeout in seconds for the profile
        #[arg(long = "profile-timeout")]
        profile_timeout: Option<u64>,

        /// Replace an existing profile of the same name
        #[arg(long)]
        force: bool,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
