//! Compiles filter expressions into SQL `WHERE` clauses.
//!
//! Every node compiles to a [`Fragment`]: either SQL text with the values it
//! binds, or a bare value that the parent decides how to render. Keeping values
//! unrendered until the parent sees them is what lets a comparison against null
//! be rewritten to `is ?` instead of `= ?`.

mod fragment;
use fragment::Fragment;

mod method;

use crate::serializer::ident;

use sqlactive_core::{
    codec,
    schema::Model,
    stmt::{BinaryOp, Expr, ExprBinaryOp, Value},
    Error, Result,
};

/// A compiled predicate: SQL text and the values bound to its placeholders,
/// in the order the placeholders appear.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Compiles filter expressions against one model.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    model: &'a Model,

    /// When true, bool, number, and string literals are written into the SQL
    /// text. When false, every literal is bound as a parameter.
    inline_literals: bool,
}

impl<'a> Compiler<'a> {
    pub fn new(model: &'a Model) -> Compiler<'a> {
        Compiler {
            model,
            inline_literals: true,
        }
    }

    pub fn inline_literals(mut self, inline_literals: bool) -> Compiler<'a> {
        self.inline_literals = inline_literals;
        self
    }

    pub fn compile(&self, expr: &Expr) -> Result<Predicate> {
        let (sql, params) = self.expr(expr)?.render(self.inline_literals);
        Ok(Predicate { sql, params })
    }

    fn expr(&self, expr: &Expr) -> Result<Fragment> {
        match expr {
            Expr::BinaryOp(expr) => self.binary_op(expr),
            Expr::Captured(expr) => match self.expr(&expr.expr)? {
                Fragment::Value(value) => Ok(Fragment::Value(value)),
                Fragment::Sql { .. } => Err(Error::invalid_expression(format!(
                    "captured `{}` does not resolve to a value",
                    expr.name
                ))),
            },
            Expr::Convert(expr) => match self.expr(&expr.expr)? {
                Fragment::Value(value) => Ok(Fragment::Value(codec::convert(value, &expr.ty)?)),
                sql => Ok(sql),
            },
            Expr::Field(expr) => self.field(&expr.name),
            Expr::Method(expr) => self.method(expr),
            Expr::Value(value) => Ok(Fragment::Value(value.clone())),
        }
    }

    fn field(&self, name: &str) -> Result<Fragment> {
        match self.model.column(name) {
            Some(column) if column.is_stored() => Ok(Fragment::sql(ident::quote(&column.name))),
            Some(_) => Err(Error::invalid_expression(format!(
                "field `{name}` of model `{}` is not stored",
                self.model.name
            ))),
            None => Err(Error::invalid_expression(format!(
                "model `{}` has no field `{name}`",
                self.model.name
            ))),
        }
    }

    fn binary_op(&self, expr: &ExprBinaryOp) -> Result<Fragment> {
        let Some(token) = expr.op.as_sql() else {
            return Err(Error::unsupported_operator(expr.op.to_string()));
        };

        let lhs = self.expr(&expr.lhs)?;
        let rhs = self.expr(&expr.rhs)?;

        if lhs.is_null() {
            return self.null_binary_op(expr.op, rhs);
        }

        if rhs.is_null() {
            return self.null_binary_op(expr.op, lhs);
        }

        let (lhs, mut params) = lhs.render(self.inline_literals);
        let (rhs, rhs_params) = rhs.render(self.inline_literals);
        params.extend(rhs_params);

        Ok(Fragment::Sql {
            text: format!("({lhs} {token} {rhs})"),
            params,
        })
    }

    /// SQL only defines `IS` and `IS NOT` for null, so `=` and `!=` are
    /// rewritten and anything else is rejected.
    fn null_binary_op(&self, op: BinaryOp, other: Fragment) -> Result<Fragment> {
        let keyword = match op {
            BinaryOp::Eq => "is",
            BinaryOp::Ne => "is not",
            _ => return Err(Error::null_comparison(op.to_string())),
        };

        let (other, mut params) = other.render(self.inline_literals);
        params.push(Value::Null);

        Ok(Fragment::Sql {
            text: format!("({other} {keyword} ?)"),
            params,
        })
    }
}
