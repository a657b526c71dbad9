use std::fmt;
use uuid::Uuid;

/// Opaque flow identity. Generated once at creation, never reused or mutated;
/// not part of the interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowId(Uuid);

impl FlowId {
    pub(crate) fn generate() -> Self {
        FlowId(Uuid::new_v4())
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named, ordered sequence of step descriptors. Steps have no identity of
/// their own; their position in `steps` is their address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    pub id: FlowId,
    pub name: String,
    pub steps: Vec<String>,
}

impl Flow {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Flow {
            id: FlowId::generate(),
            name: name.into(),
            steps: Vec::new(),
        }
    }
}
