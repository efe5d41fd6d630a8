use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::coerce::to_text;
use super::{FieldError, Location, RequestInput};

/// Message used when a check has no `with_message`
pub const DEFAULT_MESSAGE: &str = "Invalid value";

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("valid regex"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid regex"));

/// Predicate over the raw (unconverted) field value; `None` means absent.
pub type CustomCheck = fn(Option<&Value>) -> bool;

/// A single test applied to one field.
///
/// All built-in checks look at the field's text form, see [`to_text`].
#[derive(Clone, Copy, Debug)]
pub enum Check {
    /// Text form is not empty
    NotEmpty,
    /// Text form is a plain decimal number, optionally signed
    IsNumeric,
    /// Text form is an optionally signed run of digits
    IsInt,
    /// Text form is one of `true`, `false`, `1`, `0`
    IsBoolean,
    /// Caller-supplied predicate on the raw value
    Custom(CustomCheck),
}

impl Check {
    pub fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Check::Custom(predicate) => predicate(value),
            Check::NotEmpty => !to_text(value).is_empty(),
            Check::IsNumeric => NUMERIC.is_match(&to_text(value)),
            Check::IsInt => INTEGER.is_match(&to_text(value)),
            Check::IsBoolean => matches!(to_text(value).as_str(), "true" | "false" | "1" | "0"),
        }
    }
}

#[derive(Clone, Debug)]
struct Rule {
    check: Check,
    message: Cow<'static, str>,
}

/// Ordered checks for one request field.
///
/// Every check runs, failures are not short-circuited, so one field can report
/// several errors.
///
/// ```
/// use axum_helpers::validation::FieldChain;
///
/// let price = FieldChain::body("price")
///     .is_numeric()
///     .with_message("Valor no válido")
///     .not_empty()
///     .with_message("El precio del producto no puede estar vacío");
/// assert_eq!(price.field(), "price");
/// ```
#[derive(Clone, Debug)]
pub struct FieldChain {
    field: &'static str,
    location: Location,
    rules: Vec<Rule>,
}

impl FieldChain {
    pub fn new(field: &'static str, location: Location) -> Self {
        Self {
            field,
            location,
            rules: Vec::new(),
        }
    }

    /// Chain over a top-level key of the JSON body
    pub fn body(field: &'static str) -> Self {
        Self::new(field, Location::Body)
    }

    /// Chain over a path parameter
    pub fn param(field: &'static str) -> Self {
        Self::new(field, Location::Params)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn check(mut self, check: Check) -> Self {
        self.rules.push(Rule {
            check,
            message: Cow::Borrowed(DEFAULT_MESSAGE),
        });
        self
    }

    pub fn not_empty(self) -> Self {
        self.check(Check::NotEmpty)
    }

    pub fn is_numeric(self) -> Self {
        self.check(Check::IsNumeric)
    }

    pub fn is_int(self) -> Self {
        self.check(Check::IsInt)
    }

    pub fn is_boolean(self) -> Self {
        self.check(Check::IsBoolean)
    }

    pub fn custom(self, predicate: CustomCheck) -> Self {
        self.check(Check::Custom(predicate))
    }

    /// Set the message of the most recently added check.
    ///
    /// # Panics
    /// When called before any check was added.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        let rule = self
            .rules
            .last_mut()
            .expect("with_message called before any check");
        rule.message = message.into();
        self
    }

    /// Run every check against `input`, appending one error per failed check.
    pub fn run(&self, input: &RequestInput, errors: &mut Vec<FieldError>) {
        let value = input.value(self.location, self.field);

        for rule in &self.rules {
            if !rule.check.passes(value.as_ref()) {
                errors.push(FieldError::new(
                    self.field,
                    self.location,
                    value.clone(),
                    rule.message.clone(),
                ));
            }
        }
    }
}

/// Run chains in order and collect every failure.
pub fn run_chains(chains: &[FieldChain], input: &RequestInput) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for chain in chains {
        chain.run(input, &mut errors);
    }
    errors
}
