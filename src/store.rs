use indexmap::IndexMap;

use crate::{
    error::{FlowError, Result},
    model::{Flow, FlowId},
    step,
};

/// The ordered set of flows currently open for editing. Insertion order is
/// display order. Every mutation clones and returns a new collection; a
/// committed snapshot is never touched again, so a failed operation leaves the
/// caller's state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowCollection {
    flows: IndexMap<FlowId, Flow>,
}

impl FlowCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_flows(flows: impl IntoIterator<Item = Flow>) -> Self {
        FlowCollection {
            flows: flows.into_iter().map(|flow| (flow.id, flow)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn get(&self, id: FlowId) -> Option<&Flow> {
        self.flows.get(&id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Flow> {
        self.flows.get_index(index).map(|(_, flow)| flow)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.flows.values()
    }

    /// Append a new empty flow with a freshly generated id. The id is returned
    /// alongside the collection so callers can address the flow afterwards.
    pub fn create_flow(&self, name: &str) -> Result<(Self, FlowId)> {
        if name.trim().is_empty() {
            return Err(FlowError::InvalidName);
        }
        let flow = Flow::new(name);
        let id = flow.id;
        let mut next = self.clone();
        next.flows.insert(id, flow);
        Ok((next, id))
    }

    /// Replace a flow's display name, preserving its steps and position.
    pub fn rename_flow(&self, id: FlowId, name: &str) -> Result<Self> {
        let mut next = self.clone();
        let flow = next.flows.get_mut(&id).ok_or(FlowError::NotFound(id))?;
        if name.trim().is_empty() {
            return Err(FlowError::InvalidName);
        }
        flow.name = name.to_string();
        Ok(next)
    }

    /// Remove a flow. Deleting an id that is not present is a no-op, not an
    /// error: deletion is idempotent.
    pub fn delete_flow(&self, id: FlowId) -> Self {
        let mut next = self.clone();
        next.flows.shift_remove(&id);
        next
    }

    /// Insert a validated step at `at` (default: append), shifting later steps
    /// right. The raw descriptor is checked before the flow is even looked up,
    /// so an invalid step never lands in any flow.
    pub fn insert_step(&self, id: FlowId, raw: &str, at: Option<usize>) -> Result<Self> {
        step::validate(raw)?;
        let mut next = self.clone();
        let flow = next.flows.get_mut(&id).ok_or(FlowError::NotFound(id))?;
        let index = at.unwrap_or(flow.steps.len());
        if index > flow.steps.len() {
            return Err(FlowError::IndexOutOfRange(index, flow.steps.len()));
        }
        flow.steps.insert(index, raw.to_string());
        Ok(next)
    }

    /// Replace the step at `index` in place, position preserved.
    pub fn edit_step(&self, id: FlowId, index: usize, raw: &str) -> Result<Self> {
        step::validate(raw)?;
        let mut next = self.clone();
        let flow = next.flows.get_mut(&id).ok_or(FlowError::NotFound(id))?;
        let len = flow.steps.len();
        let slot = flow
            .steps
            .get_mut(index)
            .ok_or(FlowError::IndexOutOfRange(index, len))?;
        *slot = raw.to_string();
        Ok(next)
    }

    /// Remove the step at `index`, shifting later steps left.
    pub fn delete_step(&self, id: FlowId, index: usize) -> Result<Self> {
        let mut next = self.clone();
        let flow = next.flows.get_mut(&id).ok_or(FlowError::NotFound(id))?;
        if index >= flow.steps.len() {
            return Err(FlowError::IndexOutOfRange(index, flow.steps.len()));
        }
        flow.steps.remove(index);
        Ok(next)
    }

    /// Move one step between positions, possibly across flows. The step is
    /// removed first and then inserted, so `target_index` addresses the
    /// post-removal sequence — a within-flow move to the same index is the
    /// identity, matching drag-and-drop feedback.
    pub fn move_step(
        &self,
        source_id: FlowId,
        source_index: usize,
        target_id: FlowId,
        target_index: usize,
    ) -> Result<Self> {
        if !self.flows.contains_key(&source_id) {
            return Err(FlowError::NotFound(source_id));
        }
        if !self.flows.contains_key(&target_id) {
            return Err(FlowError::NotFound(target_id));
        }
        let source_len = self.flows[&source_id].steps.len();
        if source_index >= source_len {
            return Err(FlowError::IndexOutOfRange(source_index, source_len));
        }
        let target_len = if source_id == target_id {
            source_len - 1
        } else {
            self.flows[&target_id].steps.len()
        };
        if target_index > target_len {
            return Err(FlowError::IndexOutOfRange(target_index, target_len));
        }

        let mut next = self.clone();
        let value = next
            .flows
            .get_mut(&source_id)
            .expect("source flow exists")
            .steps
            .remove(source_index);
        next.flows
            .get_mut(&target_id)
            .expect("target flow exists")
            .steps
            .insert(target_index, value);
        Ok(next)
    }

    /// Swap in an edited copy of a flow with the same id, preserving position.
    pub(crate) fn replace_flow(&self, flow: Flow) -> Result<Self> {
        let mut next = self.clone();
        let slot = next
            .flows
            .get_mut(&flow.id)
            .ok_or(FlowError::NotFound(flow.id))?;
        *slot = flow;
        Ok(next)
    }
}
