//! SQL rules
//!
//! Keywords and function names match case-insensitively.

use crate::syntax::roles::StyleRole;
use crate::syntax::rules::RuleTable;

use super::{add_strings, word_ci};

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TABLE",
    "VIEW", "INDEX", "JOIN", "LEFT", "RIGHT", "INNER", "OUTER", "ON", "AS", "GROUP", "BY",
    "ORDER", "ASC", "DESC", "AND", "OR", "NOT", "NULL", "IN", "LIKE", "BETWEEN", "CASE", "WHEN",
    "THEN", "ELSE", "END", "DISTINCT", "HAVING", "UNION", "ALL", "EXISTS", "VALUES", "INTO",
    "SET", "BEGIN", "TRANSACTION", "COMMIT", "ROLLBACK", "PRIMARY", "FOREIGN", "KEY",
    "REFERENCES", "CONSTRAINT", "DEFAULT", "CHECK", "TRIGGER", "PROCEDURE", "FUNCTION", "CAST",
    "CONVERT", "DECLARE", "EXEC", "EXECUTE", "GO", "IF", "IS", "VARCHAR", "INT", "FLOAT",
    "DATETIME", "TEXT", "BLOB",
];

const FUNCTIONS: &[&str] = &[
    "COUNT", "SUM", "AVG", "MIN", "MAX", "GETDATE", "NOW", "DATE", "SUBSTRING", "LOWER",
    "UPPER", "ABS", "ROUND", "COALESCE", "ISNULL",
];

pub fn add_rules(table: &mut RuleTable) {
    for func in FUNCTIONS {
        table.add_rule(&word_ci(func), StyleRole::Function);
    }
    for kw in KEYWORDS {
        table.add_rule(&word_ci(kw), StyleRole::Keyword);
    }
    add_strings(table);
    table.add_rule(r"--.*", StyleRole::Comment);
}
