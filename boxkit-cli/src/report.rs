//! Text and JSON rendering of dispatcher state.

use owo_colors::OwoColorize;
use serde_json::{Value, json};

use boxkit_style::{Axis, BoxType, EmittedUpdate, StyleSink, UpdateDispatcher};

/// Print every box type and both axes in human-readable form.
pub fn print_state<S: StyleSink>(dispatcher: &UpdateDispatcher<S>) {
    for box_type in BoxType::ALL {
        let Some(state) = dispatcher.box_state(box_type) else {
            continue;
        };
        let label = dispatcher
            .classification(box_type)
            .and_then(|c| c.label().map(str::to_string))
            .unwrap_or_default();
        let icon = dispatcher
            .pictogram(box_type)
            .map(|p| p.identifier())
            .unwrap_or_default();

        println!(
            "{} {} {}",
            format!("{:<8}", box_type.to_string()).bold(),
            label.cyan(),
            format!("[{icon}]").dimmed()
        );
        for (property, edge) in state.edges() {
            println!("  {:<24}{}", property.as_str(), edge.display_value);
        }
        for (property, color) in state.colors() {
            println!("  {:<24}{}", property.as_str(), color);
        }
    }

    for axis in Axis::ALL {
        let Some(state) = dispatcher.dimension_state(axis) else {
            continue;
        };
        println!("{}", format!("{:<8}", axis.to_string()).bold());
        for (property, entry) in state.iter() {
            println!(
                "  {:<24}{:<10}{}",
                property.as_str(),
                entry.display_value,
                entry.sizing_mode.green()
            );
        }
    }
}

/// Print one emitted write.
pub fn print_update(update: &EmittedUpdate) {
    let kind = match update {
        EmittedUpdate::Single(_) => "update",
        EmittedUpdate::Batch(_) => "batch",
    };
    let body = update
        .properties()
        .iter()
        .map(|(property, value)| format!("{property}={value}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} {body}", kind.yellow());
}

/// Print an edit that produced no write.
pub fn print_dropped(edit: &str) {
    println!("{} {edit}", "dropped".red());
}

/// The full state as a JSON document.
pub fn state_json<S: StyleSink>(dispatcher: &UpdateDispatcher<S>) -> Value {
    let boxes: Vec<Value> = BoxType::ALL
        .into_iter()
        .filter_map(|box_type| {
            let state = dispatcher.box_state(box_type)?;
            Some(json!({
                "boxType": box_type,
                "state": state,
                "classification": dispatcher.classification(box_type),
                "pictogram": dispatcher.pictogram(box_type),
            }))
        })
        .collect();
    let dimensions: Vec<Value> = Axis::ALL
        .into_iter()
        .filter_map(|axis| dispatcher.dimension_state(axis).map(|state| json!(state)))
        .collect();

    json!({ "boxes": boxes, "dimensions": dimensions })
}
