//! Interactive session: one route query per input line.
//!
//! Each line holds `from,to,vehicle`. Successful queries are rendered and
//! recorded in a [`RecentSearches`] log, which is printed after every answer.
//! Bad lines are reported on stderr and the session carries on. A line
//! reading `quit` or `exit` ends the session early.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::debug;

use waypath_lib::{RecentSearches, RouteRequest, RouteSummary};

use super::route::plan_for;
use super::AppContext;
use crate::output::OutputFormat;

/// Outcome counts for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub rejected: usize,
}

/// Handle the session subcommand.
pub fn handle_session<R: BufRead>(context: &mut AppContext, input: R) -> Result<SessionStats> {
    let mut recent = RecentSearches::new();
    let mut stats = SessionStats::default();

    for (offset, line) in input.lines().enumerate() {
        let line_number = offset + 1;
        let line = line.context("failed to read session input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let Some(request) = parse_query(line, context) else {
            report(context, line_number, "expected `from,to,vehicle`");
            stats.rejected += 1;
            continue;
        };

        let plan = match plan_for(context, &request) {
            Ok(plan) => plan,
            Err(err) => {
                report(context, line_number, &err.to_string());
                stats.rejected += 1;
                continue;
            }
        };

        recent.record_plan(&plan);
        stats.answered += 1;

        let summary = RouteSummary::from_plan(&plan);
        if context.format == OutputFormat::Json {
            print!("{}", OutputFormat::render_session_json(&summary, &recent)?);
        } else {
            print!("{}", context.format.render_route(&summary, &context.palette)?);
            print!("{}", context.format.render_recent(&recent, &context.palette)?);
            println!();
        }
    }

    debug!(
        answered = stats.answered,
        rejected = stats.rejected,
        "session finished"
    );
    Ok(stats)
}

fn parse_query(line: &str, context: &AppContext) -> Option<RouteRequest> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [from, to, vehicle] => {
            Some(RouteRequest::new(*from, *to, *vehicle).with_pricing(context.pricing))
        }
        _ => None,
    }
}

fn report(context: &AppContext, line_number: usize, message: &str) {
    let palette = &context.palette;
    eprintln!(
        "{}",
        palette.paint(palette.red, &format!("line {line_number}: {message}"))
    );
}
