//! Output formatting for route, catalog and history rendering.
//!
//! Every renderer returns a `String` so command handlers decide where the
//! text goes; stdout carries results only.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::json;

use waypath_lib::output::{format_amount, format_hours};
use waypath_lib::{RecentSearches, RouteRenderMode, RouteSummary, VehicleProfile};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route list.
    #[default]
    Text,
    /// Markdown with a route table.
    Rich,
    /// Pretty-printed JSON (one compact object per query in sessions).
    Json,
    /// Best route only, one location per line.
    Basic,
}

impl OutputFormat {
    pub fn render_route(self, summary: &RouteSummary, palette: &ColorPalette) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(summary, palette)),
            OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => {
                let mut text = serde_json::to_string_pretty(summary)
                    .context("failed to serialise route summary")?;
                text.push('\n');
                Ok(text)
            }
            OutputFormat::Basic => Ok(render_basic(summary)),
        }
    }

    pub fn render_locations<S: AsRef<str>>(self, locations: &[S]) -> Result<String> {
        let mut buffer = String::new();
        match self {
            OutputFormat::Text => {
                let _ = writeln!(buffer, "Locations ({}):", locations.len());
                for location in locations {
                    let _ = writeln!(buffer, " - {}", location.as_ref());
                }
            }
            OutputFormat::Rich => {
                let _ = writeln!(buffer, "**Locations** ({})", locations.len());
                for location in locations {
                    let _ = writeln!(buffer, "* {}", location.as_ref());
                }
            }
            OutputFormat::Json => {
                let names: Vec<&str> = locations.iter().map(AsRef::as_ref).collect();
                buffer = serde_json::to_string_pretty(&names)
                    .context("failed to serialise locations")?;
                buffer.push('\n');
            }
            OutputFormat::Basic => {
                for location in locations {
                    let _ = writeln!(buffer, "{}", location.as_ref());
                }
            }
        }
        Ok(buffer)
    }

    pub fn render_vehicles(self, profiles: &[VehicleProfile]) -> Result<String> {
        let mut buffer = String::new();
        match self {
            OutputFormat::Text => {
                let _ = writeln!(buffer, "Available vehicles ({}):", profiles.len());
                let _ = writeln!(buffer, "{:<12} {:>14}", "Name", "Speed (km/h)");
                for profile in profiles {
                    let _ = writeln!(buffer, "{:<12} {:>14.1}", profile.name, profile.speed_kmh);
                }
            }
            OutputFormat::Rich => {
                let _ = writeln!(buffer, "| Vehicle | Speed (km/h) |");
                let _ = writeln!(buffer, "|---|---:|");
                for profile in profiles {
                    let _ = writeln!(buffer, "| {} | {:.1} |", profile.name, profile.speed_kmh);
                }
            }
            OutputFormat::Json => {
                buffer = serde_json::to_string_pretty(profiles)
                    .context("failed to serialise vehicle catalog")?;
                buffer.push('\n');
            }
            OutputFormat::Basic => {
                for profile in profiles {
                    let _ = writeln!(buffer, "{} {}", profile.name, profile.speed_kmh);
                }
            }
        }
        Ok(buffer)
    }

    pub fn render_recent(self, recent: &RecentSearches, palette: &ColorPalette) -> Result<String> {
        let mut buffer = String::new();
        match self {
            OutputFormat::Json => {
                let entries: Vec<_> = recent.iter().collect();
                buffer =
                    serde_json::to_string(&entries).context("failed to serialise recent searches")?;
                buffer.push('\n');
            }
            OutputFormat::Rich => {
                let _ = writeln!(buffer, "**Recent searches**");
                for entry in recent.iter() {
                    let _ = writeln!(buffer, "* {entry}");
                }
            }
            OutputFormat::Text | OutputFormat::Basic => {
                let _ = writeln!(buffer, "Recent searches:");
                for (index, entry) in recent.iter().enumerate() {
                    let line = format!("{:>3}. {entry}", index + 1);
                    let _ = writeln!(buffer, "{}", palette.paint(palette.gray, &line));
                }
            }
        }
        Ok(buffer)
    }

    /// One compact JSON line carrying a session answer and the recent log.
    pub fn render_session_json(summary: &RouteSummary, recent: &RecentSearches) -> Result<String> {
        let entries: Vec<_> = recent.iter().collect();
        let mut line = serde_json::to_string(&json!({
            "route": summary,
            "recent": entries,
        }))
        .context("failed to serialise session answer")?;
        line.push('\n');
        Ok(line)
    }
}

/// Plain-text rendering with the best route and map link highlighted.
fn render_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let plain = summary.render(RouteRenderMode::PlainText);
    let mut buffer = String::with_capacity(plain.len());
    for line in plain.lines() {
        let styled = if line.starts_with("Routes:") {
            palette.paint(palette.white_bold, line)
        } else if line.starts_with("Best route:") || line.ends_with("(best)") {
            palette.paint(palette.green, line)
        } else if line.starts_with("Map:") {
            palette.paint(palette.gray, line)
        } else {
            line.to_string()
        };
        let _ = writeln!(buffer, "{styled}");
    }
    buffer
}

/// Best route as `+`/`|`/`-` prefixed steps.
fn render_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    let steps = &summary.best.path;
    for (i, step) in steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == steps.len() {
            '-'
        } else {
            '|'
        };
        let _ = writeln!(buffer, "{prefix} {step}");
    }
    let _ = writeln!(
        buffer,
        "{:.2} km, {} hours, ₹{}",
        summary.best.distance_km,
        format_hours(summary.best.travel_time_hours),
        format_amount(summary.best.travel_cost)
    );
    buffer
}
