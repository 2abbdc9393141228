//! In-memory document model.
//!
//! The validator only needs a handful of capabilities from the page it runs
//! against: read a field's value, rule spec and label, find the container an
//! error indicator belongs to, toggle presentation classes, and move focus.
//! `Document` provides them for a flat form/group/input tree; other rendering
//! layers can mirror it.

use crate::FormError;
use crate::base::display_name;
use getset::{CopyGetters, Getters};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form#{}", self.0)
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Tel,
    Number,
    Hidden,
    TextArea,
    Select,
}

impl InputType {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "email" => Self::Email,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "number" => Self::Number,
            "hidden" => Self::Hidden,
            "textarea" => Self::TextArea,
            "select" => Self::Select,
            _ => Self::Text,
        }
    }
}

/// Whether the document's structure is still being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
}

/// Ordered set of presentation tokens on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The rendered node that shows a field's current failure message.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct ErrorIndicator {
    class: String,
    icon: String,
    message: String,
}

impl ErrorIndicator {
    pub(crate) fn new(class: &str, icon: &str, message: &str) -> Self {
        Self {
            class: class.to_string(),
            icon: icon.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    /// Text content as a browser would render it: the glyph, then the message.
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.message)
    }
}

/// The logical group wrapping one or more inputs. Holds at most one indicator.
#[derive(Debug, Clone, CopyGetters)]
pub struct Container {
    #[getset(get_copy = "pub")]
    form: FormId,
    indicator: Option<ErrorIndicator>,
}

impl Container {
    pub fn indicator(&self) -> Option<&ErrorIndicator> {
        self.indicator.as_ref()
    }

    pub(crate) fn indicator_mut(&mut self) -> &mut Option<ErrorIndicator> {
        &mut self.indicator
    }
}

/// Markup description of an input, used to add fields to a `Document`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub name: Option<String>,
    pub id: Option<String>,
    pub input_type: InputType,
    pub value: Option<String>,
    pub label: Option<String>,
    pub rules: Option<String>,
}

impl Input {
    /// A text input with the given `name` and an empty value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(String::new()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn kind(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn no_value(mut self) -> Self {
        self.value = None;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }
}

/// Read access to a field, independent of how the page stores it.
pub trait FieldView {
    fn value(&self) -> Option<&str>;
    fn rule_spec(&self) -> Option<&str>;
    fn label(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn element_id(&self) -> Option<&str>;
    fn input_type(&self) -> InputType;
    fn container(&self) -> ContainerId;

    fn display_name(&self) -> String {
        display_name(self.label(), self.name(), self.element_id())
    }

    fn has_rules(&self) -> bool {
        self.rule_spec().is_some()
    }
}

/// An input element living in a `Document`.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Field {
    #[getset(get_copy = "pub")]
    form: FormId,
    container: ContainerId,
    #[getset(get = "pub")]
    classes: ClassList,
    input: Input,
}

impl Field {
    pub(crate) fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }
}

impl FieldView for Field {
    fn value(&self) -> Option<&str> {
        self.input.value.as_deref()
    }
    fn rule_spec(&self) -> Option<&str> {
        self.input.rules.as_deref()
    }
    fn label(&self) -> Option<&str> {
        self.input.label.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.input.name.as_deref()
    }
    fn element_id(&self) -> Option<&str> {
        self.input.id.as_deref()
    }
    fn input_type(&self) -> InputType {
        self.input.input_type
    }
    fn container(&self) -> ContainerId {
        self.container
    }
}

#[derive(Debug, Clone)]
struct FormNode {
    name: String,
    fields: Vec<FieldId>,
}

/// A page: forms, their groups and inputs in document order, plus focus state.
#[derive(Debug, Clone)]
pub struct Document {
    forms: Vec<FormNode>,
    containers: Vec<Container>,
    fields: Vec<Field>,
    focused: Option<FieldId>,
    scrolled_into_view: Option<FieldId>,
    ready_state: ReadyState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document whose structure is already available.
    pub fn new() -> Self {
        Self {
            forms: Vec::new(),
            containers: Vec::new(),
            fields: Vec::new(),
            focused: None,
            scrolled_into_view: None,
            ready_state: ReadyState::Interactive,
        }
    }

    /// A document that is still parsing; see `finish_loading`.
    pub fn loading() -> Self {
        Self {
            ready_state: ReadyState::Loading,
            ..Self::new()
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn finish_loading(&mut self) {
        self.ready_state = ReadyState::Interactive;
    }

    pub fn add_form(&mut self, name: impl Into<String>) -> FormId {
        self.forms.push(FormNode {
            name: name.into(),
            fields: Vec::new(),
        });
        FormId(self.forms.len() - 1)
    }

    /// Adds an empty group (the container error indicators attach to).
    pub fn add_group(&mut self, form: FormId) -> Result<ContainerId, FormError> {
        self.form_node(form)?;
        self.containers.push(Container {
            form,
            indicator: None,
        });
        Ok(ContainerId(self.containers.len() - 1))
    }

    /// Adds an input wrapped in its own group.
    pub fn add_input(&mut self, form: FormId, input: Input) -> Result<FieldId, FormError> {
        let group = self.add_group(form)?;
        self.add_input_in(group, input)
    }

    /// Adds an input to an existing group; inputs sharing a group share its indicator.
    pub fn add_input_in(&mut self, group: ContainerId, input: Input) -> Result<FieldId, FormError> {
        let form = self.container(group)?.form;
        let id = FieldId(self.fields.len());
        self.fields.push(Field {
            form,
            container: group,
            classes: ClassList::default(),
            input,
        });
        self.forms[form.0].fields.push(id);
        Ok(id)
    }

    pub fn forms(&self) -> impl Iterator<Item = FormId> + use<> {
        (0..self.forms.len()).map(FormId)
    }

    pub fn form_name(&self, form: FormId) -> Result<&str, FormError> {
        Ok(&self.form_node(form)?.name)
    }

    pub fn form_by_name(&self, name: &str) -> Option<FormId> {
        self.forms.iter().position(|f| f.name == name).map(FormId)
    }

    /// All inputs of `form` in document order.
    pub fn fields_of(&self, form: FormId) -> Result<&[FieldId], FormError> {
        Ok(&self.form_node(form)?.fields)
    }

    /// First input of `form` whose `name` attribute equals `name`.
    pub fn field_named(&self, form: FormId, name: &str) -> Option<FieldId> {
        self.form_node(form)
            .ok()?
            .fields
            .iter()
            .copied()
            .find(|&id| self.fields[id.0].name() == Some(name))
    }

    /// First input in the document whose id, or else name, equals `key`.
    pub fn find(&self, key: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.element_id() == Some(key))
            .or_else(|| self.fields.iter().position(|f| f.name() == Some(key)))
            .map(FieldId)
    }

    pub fn field(&self, field: FieldId) -> Result<&Field, FormError> {
        self.fields
            .get(field.0)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))
    }

    pub(crate) fn field_mut(&mut self, field: FieldId) -> Result<&mut Field, FormError> {
        self.fields
            .get_mut(field.0)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))
    }

    pub fn container(&self, container: ContainerId) -> Result<&Container, FormError> {
        self.containers
            .get(container.0)
            .ok_or_else(|| FormError::UnknownContainer(container.to_string()))
    }

    pub(crate) fn container_mut(
        &mut self,
        container: ContainerId,
    ) -> Result<&mut Container, FormError> {
        self.containers
            .get_mut(container.0)
            .ok_or_else(|| FormError::UnknownContainer(container.to_string()))
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), FormError> {
        self.field_mut(field)?.input.value = Some(value.into());
        Ok(())
    }

    /// The indicator currently shown in the field's container, if any.
    pub fn error_indicator(&self, field: FieldId) -> Option<&ErrorIndicator> {
        let container = self.field(field).ok()?.container;
        self.containers.get(container.0)?.indicator()
    }

    /// Inputs placed in `container`, in document order.
    pub fn fields_in(&self, container: ContainerId) -> impl Iterator<Item = FieldId> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.container == container)
            .map(|(i, _)| FieldId(i))
    }

    /// Number of error indicators present in the whole document.
    pub fn indicator_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.indicator.is_some())
            .count()
    }

    pub fn focus(&mut self, field: FieldId) -> Result<(), FormError> {
        self.field(field)?;
        self.focused = Some(field);
        Ok(())
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn scroll_into_view(&mut self, field: FieldId) -> Result<(), FormError> {
        self.field(field)?;
        self.scrolled_into_view = Some(field);
        Ok(())
    }

    pub fn scrolled_into_view(&self) -> Option<FieldId> {
        self.scrolled_into_view
    }

    fn form_node(&self, form: FormId) -> Result<&FormNode, FormError> {
        self.forms
            .get(form.0)
            .ok_or_else(|| FormError::UnknownForm(form.to_string()))
    }
}
