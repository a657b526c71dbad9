use crate::{model::Flow, store::FlowCollection};

/// Case-insensitive substring search over flow names and step descriptors.
/// A read-only projection: the collection and history are untouched, and an
/// empty term matches every flow.
pub fn filter<'a>(collection: &'a FlowCollection, term: &str) -> Vec<&'a Flow> {
    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|flow| {
            flow.name.to_lowercase().contains(&needle)
                || flow
                    .steps
                    .iter()
                    .any(|raw| raw.to_lowercase().contains(&needle))
        })
        .collect()
}
