use super::{Compiler, Fragment};
use crate::serializer::literal;

use sqlactive_core::{
    stmt::{ExprMethod, Value},
    Error, Result,
};

/// Where the pattern value sits inside the `LIKE` pattern.
#[derive(Clone, Copy)]
enum Wildcard {
    Contains,
    StartsWith,
    EndsWith,
}

impl Compiler<'_> {
    pub(super) fn method(&self, expr: &ExprMethod) -> Result<Fragment> {
        let target = expr
            .target
            .as_deref()
            .map(|target| self.expr(target))
            .transpose()?;

        let mut args = expr
            .args
            .iter()
            .map(|arg| self.expr(arg))
            .collect::<Result<Vec<_>>>()?;

        // A receiver-less call passes the receiver as the first argument
        let target = match target {
            Some(target) => Some(target),
            None if is_recognized(&expr.name) && !args.is_empty() => Some(args.remove(0)),
            None => None,
        };

        match (expr.name.as_str(), target) {
            (ExprMethod::LIKE, Some(target)) => {
                let pattern = single_arg(expr, args)?;
                Ok(self.infix(target, "LIKE", pattern))
            }
            (ExprMethod::EQUALS, Some(target)) => {
                let (target, mut params) = target.render(self.inline_literals);
                let (value, value_params) = single_arg(expr, args)?.render(self.inline_literals);
                params.extend(value_params);

                Ok(Fragment::Sql {
                    text: format!("({target} = ({value}))"),
                    params,
                })
            }
            (ExprMethod::CONTAINS, Some(target)) => {
                self.wildcard(expr, target, args, Wildcard::Contains)
            }
            (ExprMethod::STARTS_WITH, Some(target)) => {
                self.wildcard(expr, target, args, Wildcard::StartsWith)
            }
            (ExprMethod::ENDS_WITH, Some(target)) => {
                self.wildcard(expr, target, args, Wildcard::EndsWith)
            }
            (_, target) => Ok(self.function_call(&expr.name, target, args)),
        }
    }

    fn infix(&self, lhs: Fragment, op: &str, rhs: Fragment) -> Fragment {
        let (lhs, mut params) = lhs.render(self.inline_literals);
        let (rhs, rhs_params) = rhs.render(self.inline_literals);
        params.extend(rhs_params);

        Fragment::Sql {
            text: format!("({lhs} {op} {rhs})"),
            params,
        }
    }

    fn wildcard(
        &self,
        expr: &ExprMethod,
        target: Fragment,
        args: Vec<Fragment>,
        wildcard: Wildcard,
    ) -> Result<Fragment> {
        let (prefix, suffix) = match wildcard {
            Wildcard::Contains => ("%", "%"),
            Wildcard::StartsWith => ("", "%"),
            Wildcard::EndsWith => ("%", ""),
        };

        let pattern = match single_arg(expr, args)? {
            Fragment::Value(Value::Null) => {
                return Err(Error::invalid_expression(format!(
                    "`{}` needs a non-null argument",
                    expr.name
                )))
            }
            Fragment::Value(value) => {
                let Some(text) = pattern_text(&value) else {
                    return Err(Error::invalid_expression(format!(
                        "`{}` cannot match against {value:?}",
                        expr.name
                    )));
                };
                Fragment::Value(Value::String(format!("{prefix}{text}{suffix}")))
            }
            // The argument is a column or another computed expression, so the
            // pattern is assembled by the database.
            Fragment::Sql { text, params } => {
                let mut parts = vec![];
                if !prefix.is_empty() {
                    parts.push("'%'".to_string());
                }
                parts.push(text);
                if !suffix.is_empty() {
                    parts.push("'%'".to_string());
                }

                Fragment::Sql {
                    text: format!("({})", parts.join(" || ")),
                    params,
                }
            }
        };

        Ok(self.infix(target, "LIKE", pattern))
    }

    /// Fallback for unrecognized methods: `name(target, args...)`.
    fn function_call(
        &self,
        name: &str,
        target: Option<Fragment>,
        args: Vec<Fragment>,
    ) -> Fragment {
        let mut rendered = vec![];
        let mut params = vec![];

        for arg in target.into_iter().chain(args) {
            let (text, arg_params) = arg.render(self.inline_literals);
            rendered.push(text);
            params.extend(arg_params);
        }

        Fragment::Sql {
            text: format!("{}({})", name.to_lowercase(), rendered.join(", ")),
            params,
        }
    }
}

fn is_recognized(name: &str) -> bool {
    matches!(
        name,
        ExprMethod::LIKE
            | ExprMethod::EQUALS
            | ExprMethod::CONTAINS
            | ExprMethod::STARTS_WITH
            | ExprMethod::ENDS_WITH
    )
}

fn single_arg(expr: &ExprMethod, args: Vec<Fragment>) -> Result<Fragment> {
    let len = args.len();
    let mut args = args.into_iter();

    match (args.next(), len) {
        (Some(arg), 1) => Ok(arg),
        _ => Err(Error::invalid_expression(format!(
            "`{}` takes one argument besides its receiver, got {len}",
            expr.name
        ))),
    }
}

/// Text spliced into a `LIKE` pattern. Strings are used as-is, other primitive
/// literals by their SQL text.
fn pattern_text(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        value if value.is_primitive() => literal::render(value),
        _ => None,
    }
}
