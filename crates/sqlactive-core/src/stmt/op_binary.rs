use std::fmt;

/// Operators a filter expression can combine two operands with.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,

    /// Logical conjunction
    And,

    /// Logical disjunction
    Or,

    /// Bitwise and
    BitAnd,

    /// Bitwise or
    BitOr,

    // Arithmetic can appear in front-end trees but has no translation.
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }

    /// Returns `true` for `and` and `or`.
    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns `true` for the six comparison operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Ge | Self::Gt | Self::Le | Self::Lt
        )
    }

    /// The SQL token for this operator, or `None` when SQL has no translation.
    pub fn as_sql(self) -> Option<&'static str> {
        use BinaryOp::*;

        Some(match self {
            Eq => "=",
            Ne => "!=",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            And => "and",
            Or => "or",
            BitAnd => "&",
            BitOr => "|",
            Add | Sub | Mul | Div | Rem => return None,
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;

        let token = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            op => op.as_sql().unwrap_or_default(),
        };
        f.write_str(token)
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
