// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use matchday::{
    CoreError, EligibilityReason, MatchAnnotation, ScheduleReport, ScopeFilter, Snapshot,
    annotate_match, detect_conflicts, eligibility_reason, evaluate_in_scope,
};
use matchday_domain::{ALL_TAG, MatchId, Player};
use serde::Serialize;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, info};

/// Matchday - schedule conflict and roster eligibility checks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot. Use `-` to read from stdin.
    #[arg(short, long, default_value = "-")]
    snapshot: String,

    /// Age group selector applied before evaluation
    #[arg(short, long, default_value = ALL_TAG)]
    group: String,

    /// Level selector applied before evaluation
    #[arg(short, long, default_value = ALL_TAG)]
    level: String,

    /// Only report the lineup candidates of this match
    #[arg(short = 'm', long = "match")]
    match_id: Option<String>,

    /// Validate every record before evaluating and fail on the first violation
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
enum CliError {
    /// The snapshot could not be read.
    #[error("Failed to read snapshot from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for the expected shape.
    #[error("Failed to decode snapshot: {0}")]
    Decode(serde_json::Error),

    /// The report could not be encoded.
    #[error("Failed to encode report: {0}")]
    Encode(serde_json::Error),

    /// Strict validation failed.
    #[error("Snapshot failed validation: {0}")]
    Invalid(#[from] CoreError),

    /// The requested match is not part of the scoped snapshot.
    #[error("Match '{0}' is not in the scoped snapshot")]
    UnknownMatch(String),
}

/// A lineup candidate and why they qualify.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Candidate<'a> {
    player: &'a Player,
    reason: EligibilityReason,
}

/// Output of a single-match query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchDetail<'a> {
    annotation: MatchAnnotation,
    candidates: Vec<Candidate<'a>>,
}

impl Args {
    fn scope(&self) -> ScopeFilter {
        ScopeFilter::new(&self.group, &self.level)
    }
}

/// Reads the snapshot text from a file, or from stdin for `-`.
fn read_source(path: &str) -> Result<String, CliError> {
    let read_err = |source: std::io::Error| CliError::Read {
        path: path.to_string(),
        source,
    };

    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_err)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::Encode)
}

/// Evaluates a snapshot according to the arguments and renders the output.
fn run(args: &Args, input: &str) -> Result<String, CliError> {
    let snapshot: Snapshot = serde_json::from_str(input).map_err(CliError::Decode)?;
    debug!(
        matches = snapshot.matches.len(),
        players = snapshot.players.len(),
        competitions = snapshot.competitions.len(),
        "Loaded snapshot"
    );

    if args.strict {
        snapshot.validate()?;
    }

    match &args.match_id {
        None => {
            let report: ScheduleReport = evaluate_in_scope(&snapshot, &args.scope());
            to_json(&report, args.pretty)
        }
        Some(match_id) => {
            // The scope narrows the schedule; candidates come from every player.
            let scoped: Snapshot = snapshot.scoped(&args.scope());
            let id = MatchId::new(match_id);
            let m = scoped
                .find_match(&id)
                .ok_or_else(|| CliError::UnknownMatch(match_id.clone()))?;

            let conflicts = detect_conflicts(&scoped.matches);
            let candidates: Vec<Candidate<'_>> = snapshot
                .players
                .iter()
                .filter_map(|player| {
                    eligibility_reason(m, player).map(|reason| Candidate { player, reason })
                })
                .collect();

            let detail = MatchDetail {
                annotation: annotate_match(m, &scoped, &snapshot.players, &conflicts),
                candidates,
            };
            to_json(&detail, args.pretty)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        snapshot = %args.snapshot,
        group = %args.group,
        level = %args.level,
        "Evaluating schedule"
    );

    let input: String = read_source(&args.snapshot)?;
    let output: String = run(&args, &input)?;
    println!("{output}");

    Ok(())
}
