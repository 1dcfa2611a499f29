use crate::serializer::literal;

use sqlactive_core::stmt::Value;

/// The result of compiling one node of a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Fragment {
    /// SQL text and the values bound by its placeholders.
    Sql { text: String, params: Vec<Value> },

    /// A value not yet rendered.
    Value(Value),
}

impl Fragment {
    pub(super) fn sql(text: impl Into<String>) -> Fragment {
        Fragment::Sql {
            text: text.into(),
            params: vec![],
        }
    }

    pub(super) fn is_null(&self) -> bool {
        matches!(self, Fragment::Value(Value::Null))
    }

    /// Renders the fragment to SQL text.
    ///
    /// Values become literals when `inline` is set and the value has a literal
    /// form. Otherwise they become a `?` placeholder binding the value.
    pub(super) fn render(self, inline: bool) -> (String, Vec<Value>) {
        match self {
            Fragment::Sql { text, params } => (text, params),
            Fragment::Value(value) => {
                if inline {
                    if let Some(text) = literal::render(&value) {
                        return (text, vec![]);
                    }
                }

                ("?".to_string(), vec![value])
            }
        }
    }
}
