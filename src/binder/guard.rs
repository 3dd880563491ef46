use std::collections::HashSet;

use crate::page::FieldId;

/// The set of fields a binder has already claimed.
///
/// Each binder owns one of these for the lifetime of the page, so "each
/// field is bound exactly once" is an explicit invariant instead of an
/// ad-hoc attribute on the element. A field stays claimed even when its
/// mount hit degraded mode: widget availability is checked once, with no
/// retry on later discovery passes.
#[derive(Debug, Default)]
pub struct BoundSet {
    ids: HashSet<FieldId>,
}

impl BoundSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a field. Returns `false` when it was already claimed.
    pub fn claim(&mut self, id: FieldId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
