//! The top-level form controller.

use serde_json::Value;

use schemaform_model::{
    FieldPath, IdSchema, PathSegment, Result, Schema, SchemaDocument, SchemaError,
    ValidationIssue,
};

use schemaform_engine::{check_document, derive_default_state, resolve_ref, to_id_schema};
use schemaform_validate::validate_document;

use crate::field::FieldNode;
use crate::state;

/// Callback invoked exactly once per submit action with the final state and
/// the freshly computed issue list. Issues never block the invocation; the
/// host decides what to do with a non-empty list.
pub type SubmitHandler = Box<dyn FnMut(&Value, &[ValidationIssue])>;

/// Options recognized by [`SchemaForm`].
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Label for the submit affordance.
    pub submit_text: String,
    /// Disables live validation and error display entirely. Submit-time
    /// validation still runs so the callback always receives an issue list.
    pub validate: bool,
    /// Validate on every change instead of only at submit time.
    pub live_validate: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            submit_text: "Submit".to_string(),
            validate: true,
            live_validate: true,
        }
    }
}

impl FormOptions {
    pub fn with_submit_text(mut self, label: &str) -> Self {
        self.submit_text = label.to_string();
        self
    }

    pub fn with_validate(mut self, enable: bool) -> Self {
        self.validate = enable;
        self
    }

    pub fn with_live_validate(mut self, enable: bool) -> Self {
        self.live_validate = enable;
        self
    }
}

/// Owns the authoritative form state and wires edits, validation and submit.
///
/// All mutation happens by wholesale replacement of the state tree; the
/// controller never hands out mutable references into it.
pub struct SchemaForm {
    document: SchemaDocument,
    id: String,
    name: String,
    state: Value,
    id_schema: IdSchema,
    issues: Vec<ValidationIssue>,
    options: FormOptions,
    submit_enabled: bool,
    on_submit: Option<SubmitHandler>,
}

impl SchemaForm {
    /// Construct a form instance.
    ///
    /// Resolves the schema, derives the default state from `initial_data`
    /// and builds the identifier tree. Configuration errors (unresolvable or
    /// cyclic `$ref`) abort construction here, before any rendering.
    pub fn new(
        document: SchemaDocument,
        id: &str,
        name: &str,
        initial_data: Option<&Value>,
        options: FormOptions,
    ) -> Result<Self> {
        check_document(&document)?;
        let state = derive_default_state(&document.root, initial_data, &document.definitions)?;
        let id_schema = to_id_schema(&document.root, None, &document.definitions, Some(&state))?;
        Ok(Self {
            document,
            id: id.to_string(),
            name: name.to_string(),
            state,
            id_schema,
            issues: Vec::new(),
            options,
            submit_enabled: false,
            on_submit: None,
        })
    }

    /// Register the submit callback.
    pub fn on_submit(mut self, handler: impl FnMut(&Value, &[ValidationIssue]) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &Value {
        &self.state
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn id_schema(&self) -> &IdSchema {
        &self.id_schema
    }

    pub fn submit_text(&self) -> &str {
        &self.options.submit_text
    }

    /// Whether the submit affordance is currently enabled. Disabled until
    /// the first edit, and again right after a submit until the next edit.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Build the render tree for the current state.
    pub fn field_tree(&self) -> Result<FieldNode> {
        FieldNode::build(
            &self.document.root,
            &self.state,
            &self.id_schema,
            &self.name,
            &self.document.definitions,
        )
    }

    /// Accept a whole replacement state bubbled up from the field tree.
    pub fn handle_change(&mut self, state: Value) {
        self.state = state;
        self.submit_enabled = true;
        match to_id_schema(&self.document.root, None, &self.document.definitions, Some(&self.state))
        {
            Ok(id_schema) => self.id_schema = id_schema,
            // unreachable after the construction-time document check
            Err(error) => tracing::debug!(%error, "keeping stale identifier tree"),
        }
        if self.options.validate && self.options.live_validate {
            self.issues = validate_document(&self.state, &self.document);
        }
    }

    /// Apply a primitive edit by path, the merge-and-bubble shortcut for
    /// hosts that drive fields by identifier.
    pub fn set_value(&mut self, path: &FieldPath, value: Value) {
        let next = state::apply_change(&self.state, path, value);
        self.handle_change(next);
    }

    /// Append a freshly derived default element to the array at `path`.
    pub fn push_item(&mut self, array_path: &FieldPath) -> Result<()> {
        let next = {
            let array_schema = self.schema_at(array_path)?;
            let item_schema = array_schema
                .items
                .as_deref()
                .ok_or_else(|| SchemaError::UnknownPath(array_path.to_string()))?;
            state::append_default_item(
                &self.state,
                array_path,
                item_schema,
                &self.document.definitions,
            )?
        };
        self.handle_change(next);
        Ok(())
    }

    /// Remove the element at `index` from the array at `path`. Later
    /// siblings' identifiers shift down by one.
    pub fn remove_item(&mut self, array_path: &FieldPath, index: usize) {
        let next = state::remove_item(&self.state, array_path, index);
        self.handle_change(next);
    }

    /// Run the submit action: always re-validate, disable the affordance
    /// against duplicate submits, and deliver `(state, issues)` to the
    /// callback. A non-empty issue list does not block delivery.
    pub fn handle_submit(&mut self) {
        let issues = validate_document(&self.state, &self.document);
        self.submit_enabled = false;
        if let Some(mut handler) = self.on_submit.take() {
            handler(&self.state, &issues);
            self.on_submit = Some(handler);
        }
    }

    fn schema_at(&self, path: &FieldPath) -> Result<&Schema> {
        let definitions = &self.document.definitions;
        let mut current = resolve_ref(&self.document.root, definitions)?;
        for segment in path.segments() {
            let child = match segment {
                PathSegment::Name(name) => current
                    .properties
                    .as_ref()
                    .and_then(|properties| properties.get(name)),
                PathSegment::Index(_) => current.items.as_deref(),
            };
            let child = child.ok_or_else(|| SchemaError::UnknownPath(path.to_string()))?;
            current = resolve_ref(child, definitions)?;
        }
        Ok(current)
    }
}
