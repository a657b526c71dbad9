use crate::{
    error::{FlowError, Result},
    model::{Flow, FlowId},
    step,
    store::FlowCollection,
};

/// Working copy of a single flow while it is being edited.
///
/// The session holds a draft detached from the committed collection: step
/// edits and reorders accumulate on the draft with the same validation rules
/// as the store, and nothing reaches the collection until [`save`]. Dropping
/// the session without saving is cancel. Whether the saved collection becomes
/// an undo point is up to the caller and its [`HistoryLog`].
///
/// [`save`]: EditSession::save
/// [`HistoryLog`]: crate::history::HistoryLog
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: Flow,
}

impl EditSession {
    /// Start editing the flow with `id`, copying it into a draft.
    pub fn begin(collection: &FlowCollection, id: FlowId) -> Result<Self> {
        let flow = collection.get(id).ok_or(FlowError::NotFound(id))?;
        Ok(EditSession {
            draft: flow.clone(),
        })
    }

    pub fn draft(&self) -> &Flow {
        &self.draft
    }

    pub fn rename(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FlowError::InvalidName);
        }
        self.draft.name = name.to_string();
        Ok(())
    }

    /// Validate and append a step to the draft.
    pub fn add_step(&mut self, raw: &str) -> Result<()> {
        step::validate(raw)?;
        self.draft.steps.push(raw.to_string());
        Ok(())
    }

    /// Validate and replace the draft step at `index`.
    pub fn edit_step(&mut self, index: usize, raw: &str) -> Result<()> {
        step::validate(raw)?;
        let len = self.draft.steps.len();
        let slot = self
            .draft
            .steps
            .get_mut(index)
            .ok_or(FlowError::IndexOutOfRange(index, len))?;
        *slot = raw.to_string();
        Ok(())
    }

    pub fn remove_step(&mut self, index: usize) -> Result<()> {
        if index >= self.draft.steps.len() {
            return Err(FlowError::IndexOutOfRange(index, self.draft.steps.len()));
        }
        self.draft.steps.remove(index);
        Ok(())
    }

    /// Reorder within the draft: remove at `from`, then insert at `to` against
    /// the shortened sequence. `from == to` is the identity.
    pub fn move_step(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.draft.steps.len();
        if from >= len {
            return Err(FlowError::IndexOutOfRange(from, len));
        }
        if to > len - 1 {
            return Err(FlowError::IndexOutOfRange(to, len - 1));
        }
        let value = self.draft.steps.remove(from);
        self.draft.steps.insert(to, value);
        Ok(())
    }

    /// Write the draft back over the flow with the same id, preserving its
    /// position in the collection. Fails with `NotFound` if the flow was
    /// deleted while the session was open.
    pub fn save(self, collection: &FlowCollection) -> Result<FlowCollection> {
        collection.replace_flow(self.draft)
    }
}
