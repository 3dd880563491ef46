//! In-memory page model.
//!
//! The binders do not talk to a real DOM. They operate on a [`Page`]: a
//! minimal model of the admin form: text fields with data attributes,
//! forms grouping them, and widget containers inserted next to fields.
//! A host adapter (whatever renders the actual page) mirrors this state;
//! everything above it stays testable without a browser.

use std::collections::BTreeMap;
use std::fmt;

/// Identifies a text field on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

/// Identifies a form on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormId(u64);

/// Identifies a widget container inserted next to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerId(u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where to look for enhanceable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The whole page, as on initial load.
    Document,
    /// A dynamically inserted subtree, as carried by a formset-added event.
    Subtree(Vec<FieldId>),
}

/// A text field, built with the usual `with_*` chain before being added
/// to a page.
#[derive(Debug, Clone, Default)]
pub struct Field {
    name: String,
    value: String,
    attrs: BTreeMap<String, String>,
}

impl Field {
    /// Create a field with the given form name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the initial serialized value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set a data attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
struct FieldState {
    field: Field,
    visible: bool,
    form: Option<FormId>,
}

#[derive(Debug, Clone, Copy)]
struct ContainerState {
    anchor: FieldId,
}

/// The page: fields, forms, and mounted widget containers.
#[derive(Debug, Default)]
pub struct Page {
    fields: BTreeMap<FieldId, FieldState>,
    forms: BTreeMap<FormId, Vec<FieldId>>,
    containers: BTreeMap<ContainerId, ContainerState>,
    next_id: u64,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Add an empty form.
    pub fn add_form(&mut self) -> FormId {
        let id = FormId(self.next_id());
        self.forms.insert(id, Vec::new());
        id
    }

    /// Add a field outside any form.
    pub fn add_field(&mut self, field: Field) -> FieldId {
        let id = FieldId(self.next_id());
        self.fields.insert(
            id,
            FieldState {
                field,
                visible: true,
                form: None,
            },
        );
        id
    }

    /// Add a field to a form.
    pub fn add_field_to_form(&mut self, form: FormId, field: Field) -> Result<FieldId, crate::Error> {
        if !self.forms.contains_key(&form) {
            return Err(crate::Error::UnknownForm(form));
        }
        let id = self.add_field(field);
        if let Some(members) = self.forms.get_mut(&form) {
            members.push(id);
        }
        if let Some(state) = self.fields.get_mut(&id) {
            state.form = Some(form);
        }
        Ok(id)
    }

    fn state(&self, id: FieldId) -> Result<&FieldState, crate::Error> {
        self.fields.get(&id).ok_or(crate::Error::UnknownField(id))
    }

    fn state_mut(&mut self, id: FieldId) -> Result<&mut FieldState, crate::Error> {
        self.fields
            .get_mut(&id)
            .ok_or(crate::Error::UnknownField(id))
    }

    /// The field's form name.
    pub fn field_name(&self, id: FieldId) -> Result<&str, crate::Error> {
        Ok(&self.state(id)?.field.name)
    }

    /// The field's current value string.
    pub fn field_value(&self, id: FieldId) -> Result<&str, crate::Error> {
        Ok(&self.state(id)?.field.value)
    }

    /// Overwrite the field's value string.
    pub fn set_field_value(
        &mut self,
        id: FieldId,
        value: impl Into<String>,
    ) -> Result<(), crate::Error> {
        self.state_mut(id)?.field.value = value.into();
        Ok(())
    }

    /// Whether the field is currently visible.
    pub fn is_visible(&self, id: FieldId) -> Result<bool, crate::Error> {
        Ok(self.state(id)?.visible)
    }

    /// Show or hide the field. Hidden fields still submit with the form.
    pub fn set_visible(&mut self, id: FieldId, visible: bool) -> Result<(), crate::Error> {
        self.state_mut(id)?.visible = visible;
        Ok(())
    }

    /// A data attribute value, if present.
    pub fn attr(&self, id: FieldId, name: &str) -> Result<Option<&str>, crate::Error> {
        Ok(self.state(id)?.field.attrs.get(name).map(String::as_str))
    }

    /// The form containing the field, if any.
    pub fn form_of(&self, id: FieldId) -> Result<Option<FormId>, crate::Error> {
        Ok(self.state(id)?.form)
    }

    /// The fields of a form, in insertion order.
    pub fn fields_in_form(&self, form: FormId) -> Result<Vec<FieldId>, crate::Error> {
        self.forms
            .get(&form)
            .cloned()
            .ok_or(crate::Error::UnknownForm(form))
    }

    /// Fields within `scope` whose `attr` data attribute is set to `"1"`.
    ///
    /// Document scope walks fields in page order; subtree scope preserves
    /// the order carried by the event and skips ids the page doesn't know.
    pub fn flagged_fields(&self, scope: &Scope, attr: &str) -> Vec<FieldId> {
        let flagged = |id: FieldId| {
            self.fields
                .get(&id)
                .is_some_and(|s| s.field.attrs.get(attr).map(String::as_str) == Some("1"))
        };
        match scope {
            Scope::Document => self
                .fields
                .keys()
                .copied()
                .filter(|id| flagged(*id))
                .collect(),
            Scope::Subtree(ids) => ids.iter().copied().filter(|id| flagged(*id)).collect(),
        }
    }

    /// Insert a widget container immediately after the field.
    pub fn insert_container_after(&mut self, anchor: FieldId) -> Result<ContainerId, crate::Error> {
        // Validate the anchor before allocating an id.
        let _ = self.state(anchor)?;
        let id = ContainerId(self.next_id());
        self.containers.insert(id, ContainerState { anchor });
        Ok(id)
    }

    /// Remove a previously inserted container. Unknown ids are a no-op;
    /// removal happens on the degraded-mode unwind path where the container
    /// may never have been observed by the host.
    pub fn remove_container(&mut self, id: ContainerId) {
        self.containers.remove(&id);
    }

    /// Number of mounted containers on the page.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Whether any container is anchored to the field.
    pub fn has_container_for(&self, anchor: FieldId) -> bool {
        self.containers.values().any(|c| c.anchor == anchor)
    }
}
