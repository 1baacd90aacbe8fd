//! Command-line surface for the dashboard.
//!
//! `render` replays a batch of form submissions into a fresh session and
//! prints the recomputed dashboard; `whoami` and `config` help inspect the
//! environment the dashboard runs in.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use sd_common::schema::is_compatible;
use sd_common::{OutputFormat, Role, SCHEMA_VERSION};
use sd_config::{resolve_config, ResolvedConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dashboard::{recompute, DashboardResponse, Rejection};
use crate::exit_codes::ExitCode;
use crate::forms::{submit_leadgen, submit_sales, FormKind, LeadGenForm, SalesForm, SubmitError};
use crate::identity::{IdentityProvider, StaticRoleProvider};
use crate::render::render_text;
use crate::store::DataStore;
use crate::sync::sheet_sync_status;

#[derive(Parser, Debug)]
#[command(name = "salesdash", version, about = "Sales activity dashboard")]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (overrides SALESDASH_CONFIG and the XDG config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Email of the user submitting data
    #[arg(long, global = true, env = "SALESDASH_EMAIL", default_value = "")]
    pub email: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a batch of form entries and print the dashboard
    Render(RenderArgs),
    /// Show the role for --email and the forms it may submit
    Whoami,
    /// Inspect or check configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with `leadgen` and `sales` arrays of form entries
    #[arg(long, value_name = "PATH")]
    pub records: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration and where it came from
    Show,
    /// Check a config file for parse and semantic errors
    Validate {
        /// Config file to check
        path: PathBuf,
    },
}

/// Batch of form entries read by `render`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordsFile {
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub leadgen: Vec<LeadGenForm>,
    #[serde(default)]
    pub sales: Vec<SalesForm>,
}

impl RecordsFile {
    pub fn load(path: &Path) -> sd_common::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: RecordsFile = serde_json::from_str(&content)?;
        if let Some(version) = &file.schema_version {
            if !is_compatible(version) {
                return Err(sd_common::Error::SchemaValidation(format!(
                    "records file schema {version} is incompatible with {SCHEMA_VERSION}"
                )));
            }
        }
        Ok(file)
    }
}

/// Run a parsed command line, printing results to stdout.
pub fn run(cli: &Cli) -> ExitCode {
    match &cli.command {
        Commands::Render(args) => run_render(cli, args),
        Commands::Whoami => run_whoami(cli),
        Commands::Config(args) => match &args.command {
            ConfigCommands::Show => run_config_show(cli),
            ConfigCommands::Validate { path } => run_config_validate(cli, path),
        },
    }
}

fn load_config(cli: &Cli) -> Result<ResolvedConfig, ExitCode> {
    resolve_config(cli.config.as_deref()).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::ConfigError
    })
}

fn report(err: sd_common::Error) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::for_error(&err)
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::Clean
        }
        Err(e) => report(e.into()),
    }
}

fn run_render(cli: &Cli, args: &RenderArgs) -> ExitCode {
    let resolved = match load_config(cli) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let config = &resolved.config;
    let records = match RecordsFile::load(&args.records) {
        Ok(r) => r,
        Err(e) => return report(e),
    };

    let role = StaticRoleProvider::from_config(config).role_for(&cli.email);
    let mut store = DataStore::new();
    let mut rejected = Vec::new();
    let mut forbidden = 0usize;

    let mut note = |form: FormKind, index: usize, err: SubmitError| {
        if err.is_forbidden() {
            forbidden += 1;
        }
        rejected.push(Rejection {
            form,
            index,
            reason: err.to_string(),
        });
    };

    for (index, form) in records.leadgen.iter().enumerate() {
        if let Err(e) = submit_leadgen(&mut store, role, form) {
            note(FormKind::LeadGen, index, e);
        }
    }
    for (index, form) in records.sales.iter().enumerate() {
        if let Err(e) = submit_sales(&mut store, role, form) {
            note(FormKind::Sales, index, e);
        }
    }

    let submitted = records.leadgen.len() + records.sales.len();
    info!(
        session = %store.session_id(),
        %role,
        submitted,
        accepted = store.len(),
        rejected = rejected.len(),
        "records replayed"
    );

    let dashboard = recompute(&store, config);
    let has_findings = dashboard.has_findings();
    let response = DashboardResponse::new(&store, dashboard, sheet_sync_status(&config.sheets))
        .with_rejections(rejected);

    let printed = match cli.format {
        OutputFormat::Json => print_json(&response),
        OutputFormat::Text => {
            println!("{}", render_text(&response));
            ExitCode::Clean
        }
    };
    if printed != ExitCode::Clean {
        return printed;
    }

    if submitted > 0 && forbidden == submitted {
        warn!(%role, "every submission was forbidden");
        ExitCode::Forbidden
    } else if has_findings {
        ExitCode::AlertsRaised
    } else {
        ExitCode::Clean
    }
}

#[derive(Debug, Serialize)]
struct WhoamiResponse<'a> {
    email: &'a str,
    role: Role,
    can_submit_leadgen: bool,
    can_submit_sales: bool,
}

fn run_whoami(cli: &Cli) -> ExitCode {
    let resolved = match load_config(cli) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let role = StaticRoleProvider::from_config(&resolved.config).role_for(&cli.email);
    let resp = WhoamiResponse {
        email: &cli.email,
        role,
        can_submit_leadgen: role.can_submit_leadgen(),
        can_submit_sales: role.can_submit_sales(),
    };

    match cli.format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Text => {
            if role == Role::ReadOnly {
                println!("Unknown user - read-only access");
            } else {
                println!("Logged in as {} ({})", resp.email, role);
            }
            let yes_no = |b: bool| if b { "yes" } else { "no" };
            println!("lead generation input: {}", yes_no(resp.can_submit_leadgen));
            println!("sales rep input: {}", yes_no(resp.can_submit_sales));
            ExitCode::Clean
        }
    }
}

#[derive(Debug, Serialize)]
struct ConfigShowResponse<'a> {
    source: String,
    path: Option<&'a Path>,
    using_defaults: bool,
    config: &'a sd_config::DashboardConfig,
}

fn run_config_show(cli: &Cli) -> ExitCode {
    let resolved = match load_config(cli) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let resp = ConfigShowResponse {
        source: resolved.source.to_string(),
        path: resolved.source.path(),
        using_defaults: resolved.using_defaults(),
        config: &resolved.config,
    };
    match cli.format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Text => {
            println!("source: {}", resp.source);
            print_json(resp.config)
        }
    }
}

#[derive(Debug, Serialize)]
struct ConfigValidateResponse<'a> {
    path: &'a Path,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run_config_validate(cli: &Cli, path: &Path) -> ExitCode {
    let outcome = sd_config::resolve::load(path);
    let resp = ConfigValidateResponse {
        path,
        valid: outcome.is_ok(),
        error: outcome.as_ref().err().map(ToString::to_string),
    };
    let printed = match cli.format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Text => {
            match &resp.error {
                None => println!("{}: valid", path.display()),
                Some(e) => println!("{}: invalid: {e}", path.display()),
            }
            ExitCode::Clean
        }
    };
    match outcome {
        Ok(_) => printed,
        Err(_) => ExitCode::ConfigError,
    }
}
