//! Filter sets describing `WHERE`-clause equality and membership constraints.

use crate::error::StoreResult;
use crate::ident::validate_ident;
use crate::stmt::ParamList;
use crate::value::Value;

/// One filter constraint: scalar equality or sequence membership.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterTerm {
    /// column = value
    Eq(Value),
    /// column IN (values...)
    In(Vec<Value>),
}

/// An ordered mapping from column name to filter term.
///
/// Terms are joined with `AND`, in insertion order, so generated SQL is
/// deterministic. An empty `IN` list can match nothing and builds as `1=0`
/// to keep the statement valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    terms: Vec<(String, FilterTerm)>,
}

impl FilterSet {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an equality constraint: column = value.
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.terms.push((column.to_string(), FilterTerm::Eq(value.into())));
        self
    }

    /// Add a membership constraint: column IN (values...).
    pub fn any(mut self, column: &str, values: Vec<Value>) -> Self {
        self.terms.push((column.to_string(), FilterTerm::In(values)));
        self
    }

    /// Whether the set holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Build the conjunction with `$n` placeholders, collecting parameters.
    pub(crate) fn build(&self, params: &mut ParamList) -> StoreResult<String> {
        let mut parts = Vec::with_capacity(self.terms.len());
        for (column, term) in &self.terms {
            validate_ident(column)?;
            match term {
                FilterTerm::Eq(value) => {
                    let idx = value.push_param(params);
                    parts.push(format!("{} = ${}", column, idx));
                }
                FilterTerm::In(values) => {
                    if values.is_empty() {
                        parts.push("1=0".to_string());
                        continue;
                    }
                    let placeholders: Vec<String> = values
                        .iter()
                        .map(|v| format!("${}", v.push_param(params)))
                        .collect();
                    parts.push(format!("{} IN ({})", column, placeholders.join(", ")));
                }
            }
        }
        Ok(parts.join(" AND "))
    }

    /// Render the conjunction in embedded-literal form.
    pub(crate) fn render_literal(&self) -> StoreResult<String> {
        let mut parts = Vec::with_capacity(self.terms.len());
        for (column, term) in &self.terms {
            validate_ident(column)?;
            match term {
                FilterTerm::Eq(value) => {
                    parts.push(format!("{} = {}", column, value.render_literal()));
                }
                FilterTerm::In(values) => {
                    if values.is_empty() {
                        parts.push("1=0".to_string());
                        continue;
                    }
                    let literals: Vec<String> =
                        values.iter().map(Value::render_literal).collect();
                    parts.push(format!("{} IN ({})", column, literals.join(", ")));
                }
            }
        }
        Ok(parts.join(" AND "))
    }
}
