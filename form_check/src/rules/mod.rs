use crate::{FormError, RuleCall, RuleSpec};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub(crate) mod format;
pub(crate) mod length;
pub(crate) mod matching;
pub(crate) mod presence;

/// A named validation predicate.
///
/// A rule receives the field value (`None` when the input has no value at all),
/// the display name used in messages, and the parameters written after the rule
/// name in the spec. `Err` carries the user-facing message.
/// It must be `Send + Sync` to be stored in the static built-in set.
pub trait Rule: Send + Sync {
    fn check(&self, value: Option<&str>, display_name: &str, params: &[String])
    -> Result<(), String>;

    fn box_clone(&self) -> Box<dyn Rule>;
}

impl<F> Rule for F
where
    F: Fn(Option<&str>, &str, &[String]) -> Result<(), String> + Clone + Send + Sync + 'static,
{
    fn check(
        &self,
        value: Option<&str>,
        display_name: &str,
        params: &[String],
    ) -> Result<(), String> {
        self(value, display_name, params)
    }

    fn box_clone(&self) -> Box<dyn Rule> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Rule> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

macro_rules! rule_set {
    ($($name:literal => $rule:path),* $(,)?) => {{
        let mut rules = RuleSet::empty();
        $(
            rules.rules.insert($name.to_string(), Box::new($rule) as Box<dyn Rule>);
        )*
        rules
    }};
}

static BUILTIN_RULES: Lazy<RuleSet> = Lazy::new(|| {
    rule_set! {
        "required" => presence::required,
        "email" => format::email,
        "phone" => format::phone,
        "minLength" => length::min_length,
        "maxLength" => length::max_length,
        "password" => length::password,
        "match" => matching::matches,
        "number" => format::number,
        "positive" => format::positive,
    }
});

/// Immutable-by-default mapping from rule name to rule, in registration order.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Box<dyn Rule>>,
}

impl RuleSet {
    /// A set with no rules at all; every rule name is then skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The recognized rules, built once per process.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN_RULES
    }

    /// Registers an additional named rule. Existing names are never replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rule: impl Rule + 'static,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(FormError::DuplicateRule(name));
        }
        self.rules.insert(name, Box::new(rule));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|r| r.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs one rule invocation. Unrecognized rule names pass.
    pub fn apply(
        &self,
        call: &RuleCall,
        value: Option<&str>,
        display_name: &str,
    ) -> Result<(), String> {
        match self.get(&call.name) {
            Some(rule) => rule.check(value, display_name, &call.params),
            None => {
                log::trace!("[rules] skipping unrecognized rule '{}'", call.name);
                Ok(())
            }
        }
    }

    /// Reports the first rule name in `spec` this set does not know.
    /// Validation itself never calls this; it is an authoring check.
    pub fn lint(&self, field: &str, spec: &RuleSpec) -> Result<(), FormError> {
        match spec.iter().find(|call| !self.contains(&call.name)) {
            Some(call) => Err(FormError::UnknownRule {
                field: field.to_string(),
                rule: call.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rules.keys()).finish()
    }
}
