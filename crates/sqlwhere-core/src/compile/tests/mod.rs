
use crate::{
    compile::{compile_all, compile_all_with, count_placeholders, explain_all},
    config::{CompileConfig, Placeholder},
    expr::{Expr, Fields},
    value::Value,
};

// ---- helpers -----------------------------------------------------------

fn txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| txt(s)).collect())
}

fn assert_compiles(expr: &Expr, sql: &str, args: Vec<Value>) {
    let compiled = expr.compile();

    assert_eq!(compiled.sql, sql);
    assert_eq!(compiled.args, args);
}

// ---- field-keyed variants ------------------------------------------------

#[test]
fn eq_single_and_multiple_fields() {
    assert_compiles(&Expr::eq([("cate", "123")]), "cate = ?", vec![txt("123")]);
    assert_compiles(
        &Expr::eq([("cate", "123"), ("id", "456")]),
        "cate = ? AND id = ?",
        vec![txt("123"), txt("456")],
    );
}

#[test]
fn ne_single_and_multiple_fields() {
    assert_compiles(&Expr::ne([("cate", "123")]), "cate != ?", vec![txt("123")]);
    assert_compiles(
        &Expr::ne([("cate", "123"), ("id", "456")]),
        "cate != ? AND id != ?",
        vec![txt("123"), txt("456")],
    );
}

#[test]
fn ordering_operators_render_their_symbols() {
    let cases = [
        (Expr::gt([("cate", "123"), ("id", "456")]), ">"),
        (Expr::gte([("cate", "123"), ("id", "456")]), ">="),
        (Expr::lt([("cate", "123"), ("id", "456")]), "<"),
        (Expr::lte([("cate", "123"), ("id", "456")]), "<="),
    ];

    for (expr, symbol) in cases {
        assert_compiles(
            &expr,
            &format!("cate {symbol} ? AND id {symbol} ?"),
            vec![txt("123"), txt("456")],
        );
    }
}

#[test]
fn in_binds_each_operand_as_one_argument() {
    assert_compiles(
        &Expr::in_([("cate", vec!["123", "456"])]),
        "cate IN (?)",
        vec![list(&["123", "456"])],
    );

    let expr = Expr::In(
        [("id", txt("456")), ("cate", list(&["123", "456"]))]
            .into_iter()
            .collect(),
    );
    assert_compiles(
        &expr,
        "cate IN (?) AND id IN (?)",
        vec![list(&["123", "456"]), txt("456")],
    );
}

#[test]
fn like_single_and_multiple_fields() {
    assert_compiles(&Expr::like([("cate", "tmp")]), "cate LIKE ?", vec![txt("tmp")]);
    assert_compiles(
        &Expr::like([("id", "456"), ("cate", "tmp")]),
        "cate LIKE ? AND id LIKE ?",
        vec![txt("tmp"), txt("456")],
    );
}

#[test]
fn keys_are_sorted_regardless_of_insertion_order() {
    assert_compiles(
        &Expr::eq([("z", 1), ("a", 2)]),
        "a = ? AND z = ?",
        vec![Value::Int(2), Value::Int(1)],
    );

    let expr = Expr::eq([("a", 1), ("z", 1), ("c", 1), ("w", 1), ("ay", 1)]);
    assert_eq!(
        expr.compile().sql,
        "a = ? AND ay = ? AND c = ? AND w = ? AND z = ?"
    );
}

#[test]
fn key_order_is_bytewise() {
    let expr = Expr::eq([("b", 1), ("B", 2), ("_", 3)]);

    assert_eq!(expr.compile().sql, "B = ? AND _ = ? AND b = ?");
}

#[test]
fn blob_operand_is_one_argument() {
    assert_compiles(
        &Expr::eq([("hash", Value::blob([0xde_u8, 0xad]))]),
        "hash = ?",
        vec![Value::Blob(vec![0xde, 0xad])],
    );
    assert_eq!(
        Expr::eq([("hash", Value::blob([0xde_u8, 0xad]))]).explain(),
        "hash = X'dead'"
    );
}

// ---- between ------------------------------------------------------------

#[test]
fn between_binds_low_then_high() {
    let expr = Expr::Between(
        [
            ("money", (Value::Int(100), Value::Int(1000))),
            ("date", (txt("2019-12"), txt("2023-4"))),
        ]
        .into_iter()
        .collect(),
    );

    assert_compiles(
        &expr,
        "date BETWEEN ? AND ? AND money BETWEEN ? AND ?",
        vec![txt("2019-12"), txt("2023-4"), Value::Int(100), Value::Int(1000)],
    );
}

#[test]
fn between_constructor_converts_bounds() {
    assert_compiles(
        &Expr::between([("date", ("2019-12", "2023-4"))]),
        "date BETWEEN ? AND ?",
        vec![txt("2019-12"), txt("2023-4")],
    );
}

// ---- groups -------------------------------------------------------------

#[test]
fn or_group_is_parenthesized() {
    let expr = Expr::Or(vec![Expr::eq([("name", "1")]), Expr::eq([("name", "2")])]);

    assert_compiles(&expr, "(name = ? OR name = ?)", vec![txt("1"), txt("2")]);
}

#[test]
fn and_group_is_parenthesized() {
    let expr = Expr::And(vec![Expr::eq([("a", 1)]), Expr::eq([("b", 2)])]);

    assert_compiles(&expr, "(a = ? AND b = ?)", vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn group_children_keep_declared_order() {
    let expr = Expr::And(vec![Expr::eq([("z", 1)]), Expr::eq([("a", 2)])]);

    assert_compiles(&expr, "(z = ? AND a = ?)", vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn nested_groups_keep_argument_order() {
    let expr = Expr::Or(vec![
        Expr::And(vec![
            Expr::eq([("a", 1)]),
            Expr::between([("b", (2, 3))]),
        ]),
        Expr::in_([("c", [4, 5])]),
    ]);

    assert_compiles(
        &expr,
        "((a = ? AND b BETWEEN ? AND ?) OR c IN (?))",
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::List(vec![Value::Int(4), Value::Int(5)]),
        ],
    );
}

// ---- degenerate input ----------------------------------------------------

#[test]
fn empty_field_maps_compile_to_nothing() {
    for expr in [
        Expr::Eq(Fields::new()),
        Expr::In(Fields::new()),
        Expr::Between(Fields::new()),
    ] {
        assert_compiles(&expr, "", vec![]);
    }
}

#[test]
fn empty_groups_compile_to_nothing() {
    assert_compiles(&Expr::And(vec![]), "", vec![]);
    assert_compiles(&Expr::Or(vec![]), "", vec![]);
    assert_compiles(
        &Expr::And(vec![Expr::Eq(Fields::new()), Expr::Or(vec![])]),
        "",
        vec![],
    );
}

#[test]
fn empty_children_leave_no_stray_separators() {
    let expr = Expr::And(vec![
        Expr::Eq(Fields::new()),
        Expr::eq([("a", 1)]),
        Expr::Like(Fields::new()),
        Expr::eq([("b", 2)]),
        Expr::Or(vec![]),
    ]);

    assert_compiles(&expr, "(a = ? AND b = ?)", vec![Value::Int(1), Value::Int(2)]);
}

// ---- compile_all -------------------------------------------------------

#[test]
fn compile_all_of_nothing_is_empty() {
    let compiled = compile_all(&[]);

    assert!(compiled.is_empty());
    assert!(compiled.args.is_empty());
}

#[test]
fn compile_all_single_in() {
    let compiled = compile_all(&[Expr::in_([("cate", ["1", "2"])])]);

    assert_eq!(compiled.sql, "cate IN (?)");
    assert_eq!(compiled.args, vec![list(&["1", "2"])]);
}

#[test]
fn compile_all_joins_top_level_without_parentheses() {
    let exprs = [
        Expr::in_([("cate", ["123", "456"])]),
        Expr::Or(vec![Expr::eq([("name", "1")]), Expr::eq([("name", "2")])]),
        Expr::gte([("cate", "123")]),
    ];

    let (sql, args) = compile_all(&exprs).into_parts();

    assert_eq!(sql, "cate IN (?) AND (name = ? OR name = ?) AND cate >= ?");
    assert_eq!(
        args,
        vec![list(&["123", "456"]), txt("1"), txt("2"), txt("123")]
    );
}

#[test]
fn compile_all_skips_empty_expressions() {
    let exprs = [
        Expr::Eq(Fields::new()),
        Expr::eq([("a", 1)]),
        Expr::And(vec![]),
    ];

    assert_eq!(compile_all(&exprs).sql, "a = ?");
}

#[test]
fn compile_is_repeatable() {
    let exprs = [
        Expr::eq([("b", 1), ("a", 2)]),
        Expr::Or(vec![Expr::like([("n", "x%")]), Expr::lt([("m", 3)])]),
    ];

    assert_eq!(compile_all(&exprs), compile_all(&exprs));
    assert_eq!(exprs[1].compile(), exprs[1].compile());
}

// ---- placeholder styles --------------------------------------------------

#[test]
fn dollar_placeholders_number_across_nesting() {
    let exprs = [
        Expr::in_([("cate", ["1", "2"])]),
        Expr::Or(vec![Expr::eq([("name", "1")]), Expr::eq([("name", "2")])]),
        Expr::between([("date", ("a", "b"))]),
    ];
    let config = CompileConfig::new(Placeholder::Dollar);

    let compiled = compile_all_with(&exprs, &config);

    assert_eq!(
        compiled.sql,
        "cate IN ($1) AND (name = $2 OR name = $3) AND date BETWEEN $4 AND $5"
    );
    assert_eq!(compiled.args.len(), 5);
    assert_eq!(count_placeholders(&compiled.sql, Placeholder::Dollar), 5);
}

#[test]
fn single_expression_dollar_numbering_starts_at_one() {
    let config = CompileConfig::new(Placeholder::Dollar);
    let compiled = Expr::eq([("b", 1), ("a", 2)]).compile_with(&config);

    assert_eq!(compiled.sql, "a = $1 AND b = $2");
}

#[test]
fn count_placeholders_ignores_dollar_without_digits() {
    assert_eq!(count_placeholders("a$b = $1", Placeholder::Dollar), 1);
    assert_eq!(count_placeholders("a = ? AND b IN (?)", Placeholder::Question), 2);
}

// ---- explain -------------------------------------------------------------

#[test]
fn explain_inlines_literals() {
    let exprs = [
        Expr::eq([("name", "da-bao")]),
        Expr::ne([("cate", 0)]),
        Expr::gte([("age", 10)]),
        Expr::gt([("width", 100)]),
        Expr::lt([("height", 200)]),
        Expr::lte([("max", 300)]),
        Expr::in_([("num", ["1", "2", "3"])]),
        Expr::like([("hobby", "play")]),
        Expr::Or(vec![Expr::eq([("sex", 1)]), Expr::eq([("sex", 2)])]),
        Expr::And(vec![
            Expr::eq([("period", 1)]),
            Expr::eq([("period_unit", 2)]),
        ]),
        Expr::between([("date", ("2019-12", "2023-4"))]),
    ];

    assert_eq!(
        explain_all(&exprs),
        "name = 'da-bao' AND \
         cate != 0 AND \
         age >= 10 AND \
         width > 100 AND \
         height < 200 AND \
         max <= 300 AND \
         num IN ('1','2','3') AND \
         hobby LIKE 'play' AND \
         (sex = 1 OR sex = 2) AND \
         (period = 1 AND period_unit = 2) AND \
         date BETWEEN '2019-12' AND '2023-4'"
    );
}

#[test]
fn explain_of_single_expression_matches_explain_all() {
    let expr = Expr::Or(vec![Expr::eq([("a", "x")]), Expr::gt([("b", 1)])]);

    assert_eq!(expr.explain(), explain_all(std::slice::from_ref(&expr)));
    assert_eq!(expr.explain(), "(a = 'x' OR b > 1)");
}
