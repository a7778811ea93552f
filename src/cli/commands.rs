use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::load_routes;
use crate::path::{compile, MatchedPath, ParamName, PathParam};
use crate::router::Router;

/// Command-line interface for routepath
#[derive(Parser)]
#[command(name = "routepath")]
#[command(about = "Compile route templates and match request paths", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Match one path against one template
    Match {
        /// Route template, e.g. `/users/{id}`
        #[arg(short, long)]
        template: String,

        /// Request path, optionally with a query string
        path: String,
    },
    /// Match one path against a route table file and report the first match
    Route {
        /// Route table file (YAML, TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Request path, optionally with a query string
        path: String,
    },
    /// List the routes of a route table file with their variables
    Inspect {
        /// Route table file (YAML, TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Report suspicious templates in a route table file
    Lint {
        /// Route table file (YAML, TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Exit with an error code if any issue is found
        #[arg(long, default_value_t = false)]
        fail_on_warning: bool,
    },
}

#[derive(Serialize)]
struct MatchReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a str>,
    template: &'a str,
    path: &'a str,
    params: &'a [PathParam],
}

impl<'a> MatchReport<'a> {
    fn new(route: Option<&'a str>, template: &'a str, matched: &'a MatchedPath) -> Self {
        Self {
            route,
            template,
            path: matched.raw(),
            params: matched.params(),
        }
    }
}

#[derive(Serialize)]
struct RouteReport<'a> {
    name: &'a str,
    template: &'a str,
    variables: Vec<ParamName>,
    issues: Vec<String>,
}

/// Run a parsed command line, writing to stdout.
pub fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ok = execute(&cli.command, &mut out)?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run a command, writing its output to `out`.
///
/// Returns `Ok(false)` for an expected negative outcome (no match, lint issues
/// with `--fail-on-warning`), and `Err` for operational failures such as an
/// unreadable config file.
pub fn execute(command: &Commands, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Commands::Match { template, path } => {
            let pattern = compile(template);
            match pattern.match_path(path.as_str()) {
                Some(matched) => {
                    let report = MatchReport::new(None, pattern.raw(), &matched);
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "no match: {path} !~ {template}")?;
                    Ok(false)
                }
            }
        }
        Commands::Route { config, path } => {
            let router = Router::from_config(&load_routes(config)?);
            match router.route(path) {
                Some(m) => {
                    let report = MatchReport::new(Some(m.route_name()), m.route.template(), &m.path);
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                    Ok(true)
                }
                None => {
                    writeln!(out, "no match: {path} ({} routes)", router.len())?;
                    Ok(false)
                }
            }
        }
        Commands::Inspect { config } => {
            let router = Router::from_config(&load_routes(config)?);
            let reports: Vec<RouteReport<'_>> = router
                .routes()
                .map(|r| RouteReport {
                    name: &r.name,
                    template: r.template(),
                    variables: r.var_names(),
                    issues: r.pattern.issues().iter().map(ToString::to_string).collect(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &reports)
                .context("failed to write route listing")?;
            writeln!(out)?;
            Ok(true)
        }
        Commands::Lint {
            config,
            fail_on_warning,
        } => {
            let router = Router::from_config(&load_routes(config)?);
            let issues = router.issues();
            for (route, issue) in &issues {
                writeln!(out, "[warning] {route}: {issue}")?;
            }
            writeln!(
                out,
                "{} routes checked, {} issues",
                router.len(),
                issues.len()
            )?;
            Ok(!(*fail_on_warning && !issues.is_empty()))
        }
    }
}
