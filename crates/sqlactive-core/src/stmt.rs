mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_captured;
pub use expr_captured::ExprCaptured;

mod expr_convert;
pub use expr_convert::ExprConvert;

mod expr_field;
pub use expr_field::ExprField;

mod expr_method;
pub use expr_method::ExprMethod;

mod num;

mod op_binary;
pub use op_binary::BinaryOp;

mod ty;
pub use ty::Type;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;
