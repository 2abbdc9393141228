use crate::dom::{Document, FieldId, FieldView, FormId, ReadyState};
use crate::validator::FormValidator;
use crate::FormError;

/// Page events the binder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The document's structure is now available
    ContentLoaded,
    /// A form is about to be submitted
    Submit { form: FormId },
    /// A field lost focus
    Blur { field: FieldId },
    /// A field's value was edited
    Input { field: FieldId },
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl Dispatch {
    fn cancelled() -> Self {
        Self {
            default_prevented: true,
            propagation_stopped: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InstallState {
    Idle,
    Pending,
    Installed,
}

/// Wires submit, blur and input handling to the forms present when the
/// document became ready.
///
/// Forms added after installation are not bound. Handlers run synchronously
/// and always finish validating before a submission is cancelled.
#[derive(Debug, Clone)]
pub struct EventBinder {
    validator: FormValidator,
    state: InstallState,
    bound: Vec<FormId>,
}

impl EventBinder {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            state: InstallState::Idle,
            bound: Vec::new(),
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Binds every form of `doc`, or waits for [`FormEvent::ContentLoaded`]
    /// if the document is still loading. Runs at most once; returns `true`
    /// when this call bound the forms.
    pub fn install(&mut self, doc: &Document) -> bool {
        match (self.state, doc.ready_state()) {
            (InstallState::Installed, _) => false,
            (_, ReadyState::Loading) => {
                log::debug!("[binder] document still loading, deferring");
                self.state = InstallState::Pending;
                false
            }
            (_, ReadyState::Interactive) => {
                self.bind_all(doc);
                true
            }
        }
    }

    pub fn is_installed(&self) -> bool {
        self.state == InstallState::Installed
    }

    pub fn bound_forms(&self) -> &[FormId] {
        &self.bound
    }

    pub fn is_bound(&self, form: FormId) -> bool {
        self.bound.contains(&form)
    }

    pub fn dispatch(&mut self, doc: &mut Document, event: FormEvent) -> Result<Dispatch, FormError> {
        match event {
            FormEvent::ContentLoaded => {
                if self.state == InstallState::Pending {
                    self.bind_all(doc);
                }
                Ok(Dispatch::default())
            }
            FormEvent::Submit { form } => self.on_submit(doc, form),
            FormEvent::Blur { field } => self.on_blur(doc, field).map(|_| Dispatch::default()),
            FormEvent::Input { field } => self.on_input(doc, field).map(|_| Dispatch::default()),
        }
    }

    /// Validates the whole form. An invalid form has its submission cancelled
    /// and focus moved to the first field in error.
    pub fn on_submit(&self, doc: &mut Document, form: FormId) -> Result<Dispatch, FormError> {
        if !self.is_bound(form) {
            return Ok(Dispatch::default());
        }
        if self.validator.validate_form(doc, form)? {
            return Ok(Dispatch::default());
        }

        if let Some(field) = self.validator.first_invalid(doc, form)? {
            log::debug!(
                "[binder] submit of '{}' blocked, focusing {}",
                doc.form_name(form)?,
                field
            );
            doc.focus(field)?;
            doc.scroll_into_view(field)?;
        }
        Ok(Dispatch::cancelled())
    }

    /// Validates a rule-bearing field when it loses focus.
    /// Returns `None` when the field is not handled.
    pub fn on_blur(&self, doc: &mut Document, field: FieldId) -> Result<Option<bool>, FormError> {
        if !self.handles(doc, field)? {
            return Ok(None);
        }
        self.validator.validate_field(doc, field).map(Some)
    }

    /// Re-validates a rule-bearing field on edit, but only while it shows an
    /// error; untouched fields are left alone.
    pub fn on_input(&self, doc: &mut Document, field: FieldId) -> Result<Option<bool>, FormError> {
        if !self.handles(doc, field)? || !self.validator.has_error(doc, field)? {
            return Ok(None);
        }
        self.validator.validate_field(doc, field).map(Some)
    }

    fn handles(&self, doc: &Document, field: FieldId) -> Result<bool, FormError> {
        let input = doc.field(field)?;
        Ok(input.has_rules() && self.is_bound(input.form()))
    }

    fn bind_all(&mut self, doc: &Document) {
        self.bound = doc.forms().collect();
        self.state = InstallState::Installed;
        log::debug!("[binder] bound {} form(s)", self.bound.len());
    }
}
