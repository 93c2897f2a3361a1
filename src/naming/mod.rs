//! Naming-convention analysis for DSL sources
//!
//! Architecture: Domain Services - a second, independent pass over a simpler
//! source kind
//! - Declarations are detected with lightweight syntactic templates, not a
//!   grammar parse; multiple declarations per line, shadowing and nested
//!   generics are not guaranteed to be handled and that is accepted
//! - Functions and variables must be snake_case (all-uppercase constants
//!   always pass), structs and enums must be PascalCase

use crate::domain::violations::{NamingViolation, WardenError, WardenResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Comment marker every DSL file must open with
const HEADER_MARKER: &str = "//";

/// Wildcard identifier, always accepted as a variable name
const WILDCARD: &str = "_";

lazy_static! {
    /// Keyword or type-prefix, then an identifier, then an opening paren
    static ref FN_TEMPLATE: Regex = Regex::new(
        r"(?:fn|int|string|bool|void|[A-Z][A-Za-z0-9]*(?:<[^>]*>)?)\s+([A-Za-z0-9_]+)\s*\("
    )
    .expect("function template is a valid regex");
    /// Variable-declaration keyword followed by an identifier
    static ref VAR_TEMPLATE: Regex =
        Regex::new(r"\bvar\s+([A-Za-z0-9_]+)").expect("var template is a valid regex");
    static ref STRUCT_TEMPLATE: Regex =
        Regex::new(r"\bstruct\s+([A-Za-z0-9_]+)").expect("struct template is a valid regex");
    static ref ENUM_TEMPLATE: Regex =
        Regex::new(r"\benum\s+([A-Za-z0-9_]+)").expect("enum template is a valid regex");
    static ref SNAKE_CASE: Regex =
        Regex::new(r"^[a-z][a-z0-9_]*$").expect("snake_case shape is a valid regex");
    static ref PASCAL_CASE: Regex =
        Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("PascalCase shape is a valid regex");
}

/// Whether a function or variable identifier satisfies the snake_case rule
///
/// All-uppercase identifiers always pass: the constant convention.
pub fn is_snake_case(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    if is_screaming_constant(name) {
        return true;
    }
    SNAKE_CASE.is_match(name)
}

/// Whether a struct or enum identifier satisfies the PascalCase rule
pub fn is_pascal_case(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    PASCAL_CASE.is_match(name)
}

/// At least one uppercase letter and no lowercase at all
fn is_screaming_constant(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase()) && !name.chars().any(|c| c.is_ascii_lowercase())
}

/// Header-comment and declaration-case checker for one DSL file
#[derive(Debug, Clone, Default)]
pub struct NamingAnalyzer;

impl NamingAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Read a file from disk and check it
    pub fn check_file(&self, path: &Path) -> WardenResult<Vec<NamingViolation>> {
        let content = fs::read_to_string(path).map_err(|e| {
            WardenError::analysis(path.display().to_string(), format!("Failed to read file: {e}"))
        })?;
        Ok(self.check(path, &content))
    }

    /// Check one file's content, producing violations in line order
    pub fn check(&self, path: &Path, content: &str) -> Vec<NamingViolation> {
        let mut violations = Vec::new();

        if let Some(first) = content.lines().find(|l| !l.trim().is_empty()) {
            if !first.trim_start().starts_with(HEADER_MARKER) {
                violations.push(NamingViolation::new(
                    path.to_path_buf(),
                    1,
                    "File is missing a header comment (//)",
                ));
            }
        }

        for (index, line) in content.lines().enumerate() {
            let line_number = (index + 1) as u32;

            for caps in FN_TEMPLATE.captures_iter(line) {
                let name = &caps[1];
                if !is_snake_case(name) {
                    violations.push(NamingViolation::new(
                        path.to_path_buf(),
                        line_number,
                        format!("Function name '{name}' should be snake_case"),
                    ));
                }
            }

            for caps in VAR_TEMPLATE.captures_iter(line) {
                let name = &caps[1];
                if name == WILDCARD {
                    continue;
                }
                if !is_snake_case(name) {
                    violations.push(NamingViolation::new(
                        path.to_path_buf(),
                        line_number,
                        format!("Variable name '{name}' should be snake_case"),
                    ));
                }
            }

            for caps in STRUCT_TEMPLATE.captures_iter(line) {
                let name = &caps[1];
                if !is_pascal_case(name) {
                    violations.push(NamingViolation::new(
                        path.to_path_buf(),
                        line_number,
                        format!("Struct name '{name}' should be PascalCase"),
                    ));
                }
            }

            for caps in ENUM_TEMPLATE.captures_iter(line) {
                let name = &caps[1];
                if !is_pascal_case(name) {
                    violations.push(NamingViolation::new(
                        path.to_path_buf(),
                        line_number,
                        format!("Enum name '{name}' should be PascalCase"),
                    ));
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn check(content: &str) -> Vec<NamingViolation> {
        NamingAnalyzer::new().check(&PathBuf::from("dsl/lexer.dsl"), content)
    }

    #[rstest]
    #[case("parse_token", true)]
    #[case("x", true)]
    #[case("next2", true)]
    #[case("T_STAR", true)] // constant convention
    #[case("MAX_DEPTH", true)]
    #[case("ParseToken", false)]
    #[case("parseToken", false)]
    #[case("_leading", false)]
    fn test_snake_case_classification(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_snake_case(name), expected, "{name}");
    }

    #[rstest]
    #[case("Token", true)]
    #[case("AstNode2", true)]
    #[case("token", false)]
    #[case("Ast_Node", false)]
    fn test_pascal_case_classification(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_pascal_case(name), expected, "{name}");
    }

    #[test]
    fn test_missing_header_reported_once_at_line_one() {
        let violations = check("\n\nfn parse() {\n}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line_number, 1);
        assert!(violations[0].message.contains("header comment"));
    }

    #[test]
    fn test_header_check_uses_first_non_empty_line() {
        let violations = check("\n   \n// lexer for the surface syntax\nfn step() {\n}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_function_template_catches_keyword_and_type_prefix() {
        let content = "// header\nfn BadName() {\n}\nint Also_Bad(x) {\n}\nvoid fine_name() {\n}\n";
        let violations = check(content);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("'BadName'"));
        assert_eq!(violations[0].line_number, 2);
        assert!(violations[1].message.contains("'Also_Bad'"));
        assert_eq!(violations[1].line_number, 4);
    }

    #[test]
    fn test_var_wildcard_is_always_accepted() {
        let violations = check("// header\nvar _ = drain();\nvar Count = 0;\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'Count'"));
    }

    #[test]
    fn test_uppercase_constant_function_is_accepted() {
        let violations = check("// header\nfn T_STAR() {\n}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_struct_and_enum_must_be_pascal_case() {
        let content = "// header\nstruct token_info {\n}\nenum parse_state {\n}\nstruct Token {\n}\n";
        let violations = check(content);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("Struct name 'token_info'"));
        assert!(violations[1].message.contains("Enum name 'parse_state'"));
    }

    #[test]
    fn test_generic_return_type_prefix_is_recognized() {
        let violations = check("// header\nVec<Token> CollectAll() {\n}\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'CollectAll'"));
    }

    #[test]
    fn test_clean_file_yields_no_violations() {
        let content = "// string interning table\nstruct Interner {\n}\nfn intern(s) {\n    var slot = probe(s);\n}\n";
        assert!(check(content).is_empty());
    }
}
