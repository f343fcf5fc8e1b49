//! ## Crate layout
//! - `core`: bound values, expressions, the compiler, and configuration.
//!
//! Build expressions with `Expr`, then hand the compiled fragment and
//! arguments to any executor that accepts positional placeholders:
//!
//! ```ignore
//! use sqlwhere::prelude::*;
//!
//! let filter = [
//!     Expr::in_([("cate", ["1", "2"])]),
//!     Expr::eq([("name", "1")]) | Expr::eq([("name", "2")]),
//! ];
//! let (sql, args) = sqlwhere::compile_all(&filter).into_parts();
//! ```

pub use sqlwhere_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    CompiledWhere, Error, compile_all, compile_all_with,
    config::{CompileConfig, Placeholder},
    explain_all,
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        compile::CompiledWhere,
        expr::{Expr, Fields},
        traits::FieldValue as _,
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
