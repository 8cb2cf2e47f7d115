use connectors::{
    CompileError, FilterCompiler,
    sql::{SqlFilterCompiler, dialect::SqlDialect},
};
use filter_syntax::BuildError;

use crate::helpers::orders;

fn where_clause(dialect: SqlDialect, filter: &str) -> String {
    SqlFilterCompiler::new(dialect, orders())
        .compile(filter)
        .unwrap()
        .map(|filter| filter.where_clause())
        .unwrap_or_default()
}

#[test]
fn test_date_range_with_amount() {
    assert_eq!(
        where_clause(
            SqlDialect::MySql,
            "a1c25s10d2008-02-01o2a1c25s10d2008-12-01o1l0a2c20s4d1200o2l0"
        ),
        " WHERE ((cdate > DATE('2008-02-01') AND cdate < DATE('2008-12-01')) AND amt > 1200)"
    );
}

#[test]
fn test_dialect_specific_dates() {
    let filter = "a1c1082s10d2001-01-01o5";
    assert_eq!(where_clause(SqlDialect::Postgres, filter), " WHERE cdate = date'2001-01-01'");
    assert_eq!(
        where_clause(SqlDialect::Oracle, filter),
        " WHERE cdate = to_date('2001-01-01', 'YYYY-MM-DD')"
    );
    assert_eq!(where_clause(SqlDialect::SqlServer, filter), " WHERE cdate = '2001-01-01'");
}

#[test]
fn test_like_in_and_not() {
    assert_eq!(
        where_clause(SqlDialect::Postgres, "a3c25s2dA%o7a0m1016s3d194s5d82756o10l0l2"),
        " WHERE NOT ((grade LIKE 'A%' AND id IN (194,82756)))"
    );
}

#[test]
fn test_bpchar_is_not_expanded_for_sql() {
    assert_eq!(where_clause(SqlDialect::Postgres, "a5c1042s2dUSo5"), " WHERE code = 'US'");
}

#[test]
fn test_build_errors_surface() {
    let err = SqlFilterCompiler::new(SqlDialect::Postgres, orders())
        .compile("a2c25s5dhelloo5")
        .unwrap_err();
    assert!(matches!(
        err,
        CompileError::Build(BuildError::InvalidLiteral { ref value, .. }) if value == "hello"
    ));
    assert!(!err.is_syntax());
}

#[test]
fn test_fully_pruned_filter_is_none() {
    let columns = vec![filter_syntax::ColumnDescriptor::new(
        "doc",
        filter_syntax::DataType::Jsonb,
        0,
    )];
    let result = SqlFilterCompiler::new(SqlDialect::Postgres, columns)
        .compile("a0c25s2d{}o5")
        .unwrap();
    assert_eq!(result, None);
}
