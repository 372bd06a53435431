use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tradedesk_business::{RecordId, ResourceConfig, resources};

#[derive(Parser)]
#[command(name = "tradedesk")]
#[command(about = "Admin client for the import/export trade API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the REST API (overrides the config file)
    #[arg(long, global = true, env = "TRADEDESK_API_URL")]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the resources this client manages
    Resources,
    /// Load a resource and print it as a table
    List {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,

        /// Only show records whose searchable fields contain this text
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },
    /// Fetch one record and print its fields
    Show {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,

        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },
    /// Create a record
    Create {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,

        /// Field value as `field=value`; repeat for several fields
        #[arg(long = "set", short = 's', value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Update a record; unset fields keep their current value
    Edit {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,

        #[arg(value_parser = parse_record_id)]
        id: RecordId,

        /// Field value as `field=value`; repeat for several fields
        #[arg(long = "set", short = 's', value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Delete a record after confirmation
    Delete {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,

        #[arg(value_parser = parse_record_id)]
        id: RecordId,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Interactive session on one resource
    Shell {
        #[arg(value_parser = parse_resource)]
        resource: &'static ResourceConfig,
    },
    /// Print the aggregate reports
    Reports {
        /// Number of products in the top exported products report
        #[arg(long, short = 'l', default_value_t = tradedesk_business::reports::DEFAULT_TOP_LIMIT)]
        limit: u32,

        /// Year for the revenue report (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Check whether the API is reachable
    Status,
    /// Show or change the persisted configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location and the effective API URL
    Show,
    /// Persist the API base URL
    SetUrl { url: String },
}

pub fn parse_resource(name: &str) -> Result<&'static ResourceConfig, String> {
    resources::find(name).ok_or_else(|| {
        let known: Vec<&str> = resources::all().iter().map(|r| r.key).collect();
        format!("unknown resource `{name}` (expected one of: {})", known.join(", "))
    })
}

pub fn parse_record_id(raw: &str) -> Result<RecordId, String> {
    raw.parse()
        .map_err(|_err| format!("`{raw}` is not a valid record id"))
}

/// `field=value`. The value may be empty and may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `field=value`, got `{raw}`"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    Ok((field.to_owned(), value.to_owned()))
}
