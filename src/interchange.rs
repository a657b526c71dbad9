use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{FlowError, Result},
    model::Flow,
    step,
    store::FlowCollection,
};

pub const INVALID_FORMAT: &str = "Invalid file format. Expected { \"flows\": [...] }";

/// The interchange document: flow names and step sequences only. Internal ids
/// are not portable across sessions and are omitted on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowsDocument {
    pub flows: Vec<FlowEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEntry {
    pub name: String,
    pub steps: Vec<String>,
}

/// Import behavior knobs.
///
/// Exported files are trusted by default: steps are taken verbatim without
/// re-running the syntax checks. Set `validate_steps` to re-check every step
/// and fail the whole import on the first invalid one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    pub validate_steps: bool,
}

pub fn export(collection: &FlowCollection) -> FlowsDocument {
    FlowsDocument {
        flows: collection
            .iter()
            .map(|flow| FlowEntry {
                name: flow.name.clone(),
                steps: flow.steps.clone(),
            })
            .collect(),
    }
}

/// Render the document the way the editor writes `flows.json`: pretty-printed.
pub fn export_json(collection: &FlowCollection) -> String {
    serde_json::to_string_pretty(&export(collection)).expect("flows document serialization")
}

/// Decode an interchange document into a fresh collection, replacing (not
/// merging with) whatever the caller currently holds. Every imported flow gets
/// a newly generated id so imports can never collide with existing flows.
pub fn import(text: &str) -> Result<FlowCollection> {
    import_with(text, ImportOptions::default())
}

pub fn import_with(text: &str, options: ImportOptions) -> Result<FlowCollection> {
    let value: Value =
        serde_json::from_str(text).map_err(|_| FlowError::Import(INVALID_FORMAT.to_string()))?;
    let Some(flows) = value.get("flows").filter(|flows| flows.is_array()) else {
        return Err(FlowError::Import(INVALID_FORMAT.to_string()));
    };
    let entries: Vec<FlowEntry> = serde_json::from_value(flows.clone())
        .map_err(|_| FlowError::Import(INVALID_FORMAT.to_string()))?;

    if options.validate_steps {
        for entry in &entries {
            for raw in &entry.steps {
                step::validate(raw)?;
            }
        }
    }

    tracing::debug!(flows = entries.len(), "imported flows document");
    Ok(FlowCollection::from_flows(entries.into_iter().map(
        |entry| {
            let mut flow = Flow::new(entry.name);
            flow.steps = entry.steps;
            flow
        },
    )))
}
