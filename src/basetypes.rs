//! Built-in base types
//!
//! Every registry starts with these leaf rules. Their names are reserved:
//!
//! | Name          | Matches                                   | Value |
//! |---------------|-------------------------------------------|-------|
//! | `BOOL`        | `true` or `false`                         | bool  |
//! | `INT`         | optional sign, digits                     | int   |
//! | `FLOAT`       | signed decimal, optional exponent         | float |
//! | `STRICTFLOAT` | decimal that has a dot or an exponent     | float |
//! | `ID`          | letter, `_` or `$`, then word chars or `$` | text  |
//! | `STRING`      | double-quoted, backslash escapes          | text (quotes kept) |
//! | `NUMBER`      | `STRICTFLOAT` or `INT`                    | -     |
//! | `BASETYPE`    | `BOOL`, `ID`, `STRING` or `NUMBER`        | -     |
//!
//! The leaves apply skip, the two choices do not.

use crate::error::GrammarError;
use crate::rule::RuleDef;
use crate::value::ValueKind;

/// Reserved base type names
pub const NAMES: [&str; 8] =
    ["BASETYPE", "BOOL", "FLOAT", "STRICTFLOAT", "ID", "INT", "NUMBER", "STRING"];

const BOOL: &str = "(true)|(false)";
const INT: &str = "[+-]?[0-9]+";
const FLOAT: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?";
const STRICTFLOAT: &str =
    r"[-+]?\d+[eE][-+]?\d+|[-+]?\.\d+(?:[eE][-+]?\d+)?|[-+]?\d+\.\d*(?:[eE][-+]?\d+)?";
const ID: &str = r"[a-zA-Z_$][a-zA-Z0-9_$]*";
const STRING: &str = r#""(?:[^"\\]|\\.)*""#;

/// Check if `name` is reserved for a base type
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    NAMES.contains(&name)
}

/// Base type definitions, in [`NAMES`] order
pub(crate) fn definitions() -> Result<Vec<RuleDef>, GrammarError> {
    Ok(vec![
        RuleDef::choice("BASETYPE", ["BOOL", "ID", "STRING", "NUMBER"]),
        RuleDef::pattern_as("BOOL", BOOL, ValueKind::Bool)?,
        RuleDef::pattern_as("FLOAT", FLOAT, ValueKind::Float)?,
        RuleDef::pattern_as("STRICTFLOAT", STRICTFLOAT, ValueKind::Float)?,
        RuleDef::pattern("ID", ID)?,
        RuleDef::pattern_as("INT", INT, ValueKind::Int)?,
        RuleDef::choice("NUMBER", ["STRICTFLOAT", "INT"]),
        RuleDef::pattern("STRING", STRING)?,
    ])
}
