//! Core of sqlwhere: bound values, the expression model, and the compiler
//! that turns expressions into a WHERE fragment plus ordered arguments.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod compile;
pub mod config;
pub mod error;
pub mod expr;
pub mod traits;
pub mod value;

// re-exports
pub use compile::{CompiledWhere, compile_all, compile_all_with, explain_all};
pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, configuration, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::{Expr, Fields},
        traits::FieldValue as _,
        value::Value,
    };
}
