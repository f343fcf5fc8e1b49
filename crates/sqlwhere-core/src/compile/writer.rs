use crate::{compile::CompiledWhere, config::Placeholder, value::Value};

///
/// ArgMode
///
/// How `SqlWriter` emits an argument: bound behind a placeholder, or
/// inlined as a literal for diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ArgMode {
    Bind(Placeholder),
    Inline,
}

///
/// SqlWriter
///
/// Accumulates one fragment and its arguments. Every placeholder written
/// pushes exactly one argument, so the two stay aligned at any depth.
///

#[derive(Debug)]
pub(crate) struct SqlWriter {
    sql: String,
    args: Vec<Value>,
    mode: ArgMode,
}

impl SqlWriter {
    pub(crate) const fn new(mode: ArgMode) -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
            mode,
        }
    }

    pub(crate) fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub(crate) fn push_arg(&mut self, value: &Value) {
        match self.mode {
            ArgMode::Bind(placeholder) => {
                self.args.push(value.clone());
                placeholder.write(&mut self.sql, self.args.len());
            }
            ArgMode::Inline => self.sql.push_str(&value.to_string()),
        }
    }

    /// Write `items` separated by `sep`.
    ///
    /// Items that write nothing are dropped together with their separator,
    /// so empty children never leave `AND AND` or a dangling `AND` behind.
    pub(crate) fn join<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        sep: &str,
        mut write_item: impl FnMut(&mut Self, T),
    ) {
        let mut wrote_any = false;

        for item in items {
            let mark = self.sql.len();
            if wrote_any {
                self.sql.push_str(sep);
            }

            let body = self.sql.len();
            write_item(self, item);

            if self.sql.len() == body {
                self.sql.truncate(mark);
            } else {
                wrote_any = true;
            }
        }
    }

    /// Wrap whatever `write_body` writes in parentheses.
    /// An empty body writes nothing at all rather than `()`.
    pub(crate) fn group(&mut self, write_body: impl FnOnce(&mut Self)) {
        let mark = self.sql.len();
        self.sql.push('(');

        let body = self.sql.len();
        write_body(self);

        if self.sql.len() == body {
            self.sql.truncate(mark);
        } else {
            self.sql.push(')');
        }
    }

    pub(crate) fn finish(self) -> CompiledWhere {
        CompiledWhere {
            sql: self.sql,
            args: self.args,
        }
    }

    pub(crate) fn finish_sql(self) -> String {
        self.sql
    }
}

///
/// TESTS
///
