mod eval;

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_compare;
pub use expr_compare::{ExprBinaryOp, ExprInList, ExprIsNull};

mod expr_call;
pub use expr_call::ExprCall;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_index;
pub use expr_index::ExprIndex;

mod expr_list;
pub use expr_list::ExprList;

mod expr_logic;
pub use expr_logic::{ExprAnd, ExprNot, ExprOr};

mod expr_property;
pub use expr_property::ExprProperty;

mod op_binary;
pub use op_binary::BinaryOp;

mod ty;
pub use ty::Type;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod ty_object;
pub use ty_object::{FieldShape, JsonObject, Shape, TypeKey, TypeObject};

mod value;
pub use value::Value;

mod value_cmp;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_object;
pub use value_object::ValueObject;

pub mod visit;
pub use visit::Visit;
