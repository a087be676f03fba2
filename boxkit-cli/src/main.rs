//! Boxkit CLI
//!
//! Inspect box-model state derived from a style snapshot, and replay edits
//! through the update dispatcher.

mod edit;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boxkit_style::{Geometry, Rect, StyleSnapshot, UpdateDispatcher, UpdateLog};

use crate::edit::parse_edit;

#[derive(Parser, Debug)]
#[command(name = "boxkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Show derived state for a snapshot
    boxkit inspect snapshot.json

    # Set all padding, then one side
    boxkit edit snapshot.json padding=12px paddingTop=4px

    # Switch width to fill against a measured parent
    boxkit edit snapshot.json --size 180x64 --parent 800x600 width:mode=fill

    # Re-unit one margin
    boxkit edit snapshot.json marginLeft:unit=rem
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print box-model and dimension state for a snapshot
    Inspect {
        /// Snapshot JSON file (`{"computed": {...}, "defined": {...}}`)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apply edits in order and print what each one writes
    Edit {
        /// Snapshot JSON file
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Measured element size
        #[arg(long, value_name = "WxH", value_parser = parse_size)]
        size: Option<Rect>,

        /// Measured parent size
        #[arg(long, value_name = "WxH", value_parser = parse_size)]
        parent: Option<Rect>,

        /// The parent supports percentage sizing
        #[arg(long)]
        percent: bool,

        /// Geometry JSON file, instead of --size/--parent/--percent
        #[arg(long, value_name = "FILE", conflicts_with_all = ["size", "parent", "percent"])]
        geometry: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Edits such as `padding=12px`, `width:mode=fill`, `marginTop:unit=rem`
        #[arg(value_name = "EDIT", required = true)]
        edits: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { snapshot, json } => inspect(&snapshot, json),
        Command::Edit {
            snapshot,
            size,
            parent,
            percent,
            geometry,
            json,
            edits,
        } => {
            let geometry = match geometry {
                Some(path) => Some(load_geometry(&path)?),
                None => size.map(|element| {
                    let geometry = Geometry::element(element).with_percent_sizing(percent);
                    match parent {
                        Some(parent) => geometry.with_parent(parent),
                        None => geometry,
                    }
                }),
            };
            edit(&snapshot, geometry, &edits, json)
        }
    }
}

fn inspect(path: &Path, json: bool) -> Result<()> {
    let mut dispatcher = UpdateDispatcher::new(UpdateLog::new());
    dispatcher.set_snapshot(load_snapshot(path)?);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report::state_json(&dispatcher))?
        );
    } else {
        report::print_state(&dispatcher);
    }
    Ok(())
}

fn edit(path: &Path, geometry: Option<Geometry>, edits: &[String], json: bool) -> Result<()> {
    let parsed = edits
        .iter()
        .map(|arg| parse_edit(arg).with_context(|| format!("invalid edit '{arg}'")))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = parsed.len(), "parsed edits");

    let mut dispatcher = UpdateDispatcher::new(UpdateLog::new());
    dispatcher.set_snapshot(load_snapshot(path)?);
    if let Some(geometry) = geometry {
        dispatcher.set_geometry(geometry);
    }

    let mut emitted = Vec::new();
    for (arg, edit) in edits.iter().zip(&parsed) {
        dispatcher.apply(edit);
        let updates = dispatcher.sink_mut().drain();
        tracing::debug!(edit = %arg, writes = updates.len(), "applied edit");
        if updates.is_empty() && !json {
            report::print_dropped(arg);
        }

        // Close the loop: the next edit sees the snapshot the sink would produce.
        let next = updates
            .iter()
            .fold(dispatcher.snapshot().clone(), |snapshot, update| {
                snapshot.with_updates(update.properties())
            });
        dispatcher.set_snapshot(next);

        if !json {
            updates.iter().for_each(report::print_update);
        }
        emitted.push(serde_json::json!({ "edit": arg, "updates": updates }));
    }

    if json {
        let document = serde_json::json!({
            "edits": emitted,
            "state": report::state_json(&dispatcher),
            "snapshot": dispatcher.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!();
        report::print_state(&dispatcher);
    }
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<StyleSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = StyleSnapshot::from_json(&text)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        computed = snapshot.computed.len(),
        defined = snapshot.defined.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn load_geometry(path: &Path) -> Result<Geometry> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read geometry {}", path.display()))?;
    let geometry = Geometry::from_json(&text)
        .with_context(|| format!("failed to load geometry {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?geometry, "loaded geometry");
    Ok(geometry)
}

/// Parse `WxH` (e.g. `180x64`) into a rectangle at the origin.
fn parse_size(arg: &str) -> Result<Rect, String> {
    let (width, height) = arg
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{arg}'"))?;
    let width: f32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height: f32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(format!("size must be non-negative, got '{arg}'"));
    }
    Ok(Rect::sized(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("180x64"), Ok(Rect::sized(180.0, 64.0)));
        assert_eq!(parse_size("12.5X8"), Ok(Rect::sized(12.5, 8.0)));
        assert!(parse_size("180").is_err());
        assert!(parse_size("ax4").is_err());
        assert!(parse_size("-1x4").is_err());
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let path = std::env::temp_dir()
            .join(format!("boxkit-snapshot-{}.json", std::process::id()));
        fs::write(&path, r#"{ "computed": { "padding": "8px" } }"#).unwrap();
        let snapshot = load_snapshot(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(snapshot.computed.get("padding").map(String::as_str), Some("8px"));
    }

    #[test]
    fn test_load_snapshot_names_missing_file() {
        let path = Path::new("does-not-exist/snapshot.json");
        let err = load_snapshot(path).unwrap_err();
        assert!(err.to_string().contains("does-not-exist/snapshot.json"));
    }

    #[test]
    fn test_cli_parses_edit_command() {
        let cli = Cli::try_parse_from([
            "boxkit",
            "edit",
            "snapshot.json",
            "--size",
            "180x64",
            "--percent",
            "padding=12px",
            "width:mode=fill",
        ])
        .unwrap();
        let Command::Edit {
            size,
            percent,
            edits,
            ..
        } = cli.command
        else {
            panic!("expected edit command");
        };
        assert_eq!(size, Some(Rect::sized(180.0, 64.0)));
        assert!(percent);
        assert_eq!(edits, ["padding=12px", "width:mode=fill"]);
    }

    #[test]
    fn test_geometry_conflicts_with_size() {
        let result = Cli::try_parse_from([
            "boxkit",
            "edit",
            "snapshot.json",
            "--geometry",
            "g.json",
            "--size",
            "1x1",
            "padding=1px",
        ]);
        assert!(result.is_err());
    }
}
