//! Compilation of expressions into a WHERE fragment plus bound arguments.
//!
//! Output is a pure function of the input: field maps are rendered in key
//! order, `Or` / `And` children and top-level expressions in declared order.

mod writer;

#[cfg(test)]
mod tests;

use crate::{
    config::{CompileConfig, Placeholder},
    expr::{CompareOp, Expr, Fields},
    value::Value,
};
use writer::{ArgMode, SqlWriter};

///
/// CONSTANTS
///

const AND: &str = " AND ";
const OR: &str = " OR ";

///
/// CompiledWhere
///
/// A WHERE fragment with positional placeholders and the arguments bound
/// to them, aligned left to right.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledWhere {
    pub sql: String,
    pub args: Vec<Value>,
}

impl CompiledWhere {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl Expr {
    /// Compile with `?` placeholders.
    #[must_use]
    pub fn compile(&self) -> CompiledWhere {
        self.compile_with(&CompileConfig::default())
    }

    #[must_use]
    pub fn compile_with(&self, config: &CompileConfig) -> CompiledWhere {
        let mut w = SqlWriter::new(ArgMode::Bind(config.placeholder));
        self.write_to(&mut w);

        w.finish()
    }

    /// Render with arguments inlined as SQL literals.
    /// For logs and tests; never send this to a database.
    #[must_use]
    pub fn explain(&self) -> String {
        let mut w = SqlWriter::new(ArgMode::Inline);
        self.write_to(&mut w);

        w.finish_sql()
    }

    fn write_to(&self, w: &mut SqlWriter) {
        match self {
            Self::Eq(fields) => write_compare(w, CompareOp::Eq, fields),
            Self::Ne(fields) => write_compare(w, CompareOp::Ne, fields),
            Self::Gt(fields) => write_compare(w, CompareOp::Gt, fields),
            Self::Gte(fields) => write_compare(w, CompareOp::Gte, fields),
            Self::Lt(fields) => write_compare(w, CompareOp::Lt, fields),
            Self::Lte(fields) => write_compare(w, CompareOp::Lte, fields),
            Self::In(fields) => write_compare(w, CompareOp::In, fields),
            Self::Like(fields) => write_compare(w, CompareOp::Like, fields),
            Self::Between(fields) => write_between(w, fields),
            Self::Or(children) => write_group(w, children, OR),
            Self::And(children) => write_group(w, children, AND),
        }
    }
}

// field OP ?  (or  field IN (?))
fn write_compare(w: &mut SqlWriter, op: CompareOp, fields: &Fields<Value>) {
    w.join(fields.sorted(), AND, |w, (field, value)| {
        w.push_sql(field);
        w.push_sql(" ");
        w.push_sql(op.symbol());
        w.push_sql(" ");

        if op.wraps_operand() {
            w.push_sql("(");
            w.push_arg(value);
            w.push_sql(")");
        } else {
            w.push_arg(value);
        }
    });
}

fn write_between(w: &mut SqlWriter, fields: &Fields<(Value, Value)>) {
    w.join(fields.sorted(), AND, |w, (field, (low, high))| {
        w.push_sql(field);
        w.push_sql(" BETWEEN ");
        w.push_arg(low);
        w.push_sql(AND);
        w.push_arg(high);
    });
}

fn write_group(w: &mut SqlWriter, children: &[Expr], sep: &str) {
    w.group(|w| w.join(children, sep, |w, child| child.write_to(w)));
}

/// Compile top-level expressions joined by AND, with `?` placeholders.
///
/// The top level is not parenthesized. An empty slice yields an empty
/// fragment and no arguments.
#[must_use]
pub fn compile_all(exprs: &[Expr]) -> CompiledWhere {
    compile_all_with(exprs, &CompileConfig::default())
}

#[must_use]
pub fn compile_all_with(exprs: &[Expr], config: &CompileConfig) -> CompiledWhere {
    let mut w = SqlWriter::new(ArgMode::Bind(config.placeholder));
    w.join(exprs, AND, |w, expr| expr.write_to(w));
    let compiled = w.finish();

    tracing::debug!(
        target: "sqlwhere::compile",
        exprs = exprs.len(),
        args = compiled.args.len(),
        placeholder = %config.placeholder,
        "compiled where clause"
    );

    compiled
}

/// `compile_all` with arguments inlined as literals; see `Expr::explain`.
#[must_use]
pub fn explain_all(exprs: &[Expr]) -> String {
    let mut w = SqlWriter::new(ArgMode::Inline);
    w.join(exprs, AND, |w, expr| expr.write_to(w));

    w.finish_sql()
}

/// Count placeholders of the given style in a compiled fragment.
///
/// Assumes field names do not themselves contain placeholder characters.
#[must_use]
pub fn count_placeholders(sql: &str, placeholder: Placeholder) -> usize {
    match placeholder {
        Placeholder::Question => sql.matches('?').count(),
        Placeholder::Dollar => sql
            .match_indices('$')
            .filter(|(i, _)| {
                sql[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit())
            })
            .count(),
    }
}
