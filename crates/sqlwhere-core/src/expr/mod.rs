mod fields;


use crate::{
    error::Error,
    traits::FieldValue,
    value::{Value, ValueError},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::ops::{BitAnd, BitOr};

// re-exports
pub use fields::Fields;

///
/// CompareOp
///
/// Operator applied by a field-keyed expression to each of its fields.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Like,
}

impl CompareOp {
    /// SQL keyword or symbol placed between the field and its placeholder.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::Like => "LIKE",
        }
    }

    /// Whether the placeholder is wrapped in parentheses (`IN (?)`).
    #[must_use]
    pub const fn wraps_operand(self) -> bool {
        matches!(self, Self::In)
    }
}

///
/// Expr
///
/// One composable piece of a WHERE clause.
///
/// Field-keyed variants apply their operator to every field in the map and
/// join the results with AND. `Or` / `And` group child expressions in the
/// order they were declared.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Eq(Fields<Value>),
    Ne(Fields<Value>),
    Gt(Fields<Value>),
    Gte(Fields<Value>),
    Lt(Fields<Value>),
    Lte(Fields<Value>),
    /// Each operand is bound as one argument, lists included.
    In(Fields<Value>),
    Like(Fields<Value>),
    /// `(low, high)` bounds, bound as two arguments.
    Between(Fields<(Value, Value)>),
    Or(Vec<Self>),
    And(Vec<Self>),
}

impl Expr {
    // --- Field-keyed ---

    pub fn eq<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Eq(collect_fields(pairs))
    }

    pub fn ne<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Ne(collect_fields(pairs))
    }

    pub fn gt<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Gt(collect_fields(pairs))
    }

    pub fn gte<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Gte(collect_fields(pairs))
    }

    pub fn lt<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Lt(collect_fields(pairs))
    }

    pub fn lte<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Lte(collect_fields(pairs))
    }

    pub fn in_<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::In(collect_fields(pairs))
    }

    pub fn like<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        Self::Like(collect_fields(pairs))
    }

    pub fn between<I, K, L, H>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, (L, H))>,
        K: Into<String>,
        L: FieldValue,
        H: FieldValue,
    {
        Self::Between(
            pairs
                .into_iter()
                .map(|(field, (low, high))| (field, (low.to_value(), high.to_value())))
                .collect(),
        )
    }

    // --- Combinators ---

    /// Combine two expressions into an `And` group.
    ///
    /// An existing `And` on either side is extended rather than nested, so
    /// `a.and(b).and(c)` compiles to `(a AND b AND c)`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                b.insert(0, a);
                Self::And(b)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two expressions into an `Or` group, flattening like `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                b.insert(0, a);
                Self::Or(b)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    // --- Dynamic input ---

    /// Decode an expression from its JSON form, e.g.
    /// `{"or": [{"eq": {"name": "1"}}, {"eq": {"name": "2"}}]}`.
    ///
    /// Operands that are JSON objects fail with `Error::Value`; malformed
    /// shapes (unknown operators, a `between` without two bounds) fail with
    /// `Error::Json`.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let json: JsonValue = serde_json::from_str(input)?;
        check_operands(&json)?;

        let expr = Self::deserialize(json)?;
        tracing::trace!(target: "sqlwhere::expr", kind = expr.kind(), "decoded filter expression");

        Ok(expr)
    }

    /// Stable lowercase name of the variant, matching its JSON tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Eq(_) => "eq",
            Self::Ne(_) => "ne",
            Self::Gt(_) => "gt",
            Self::Gte(_) => "gte",
            Self::Lt(_) => "lt",
            Self::Lte(_) => "lte",
            Self::In(_) => "in",
            Self::Like(_) => "like",
            Self::Between(_) => "between",
            Self::Or(_) => "or",
            Self::And(_) => "and",
        }
    }
}

// Walk the operator tree and reject object operands before serde sees them,
// so the caller gets the structured error instead of a decode message.
fn check_operands(json: &JsonValue) -> Result<(), ValueError> {
    let JsonValue::Object(map) = json else {
        return Ok(());
    };

    for (tag, body) in map {
        match (tag.as_str(), body) {
            ("or" | "and", JsonValue::Array(children)) => {
                children.iter().try_for_each(check_operands)?;
            }
            (_, JsonValue::Object(fields)) => {
                fields.values().try_for_each(reject_objects)?;
            }
            _ => {}
        }
    }

    Ok(())
}

fn reject_objects(operand: &JsonValue) -> Result<(), ValueError> {
    match operand {
        JsonValue::Object(map) => Err(ValueError::UnsupportedObject {
            keys: map.keys().cloned().collect(),
        }),
        JsonValue::Array(items) => items.iter().try_for_each(reject_objects),
        _ => Ok(()),
    }
}

fn collect_fields<I, K, V>(pairs: I) -> Fields<Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: FieldValue,
{
    pairs
        .into_iter()
        .map(|(field, value)| (field, value.to_value()))
        .collect()
}

///
/// Bit Operations
/// `a & b` and `a | b` build groups the same way as `and` / `or`
///

impl BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}
