//! JQL construction with quoted, escaped literals.

use std::fmt;

/// Quote `value` as a JQL string literal.
pub fn literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// A conjunction of JQL clauses.
#[derive(Debug, Default, Clone)]
pub struct Jql {
    clauses: Vec<String>,
}

impl Jql {
    pub fn new() -> Self {
        Self::default()
    }

    /// `field = "value"`
    pub fn equals(mut self, field: &str, value: &str) -> Self {
        self.clauses.push(format!("{field} = {}", literal(value)));
        self
    }

    /// `field != "value"`
    pub fn not_equals(mut self, field: &str, value: &str) -> Self {
        self.clauses.push(format!("{field} != {}", literal(value)));
        self
    }

    pub fn project(self, key: &str) -> Self {
        self.equals("project", key)
    }

    pub fn status_category(self, category: &str) -> Self {
        self.equals("statusCategory", category)
    }

    pub fn epic_link(self, epic_key: &str) -> Self {
        self.equals(&literal("Epic Link"), epic_key)
    }
}

impl fmt::Display for Jql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses.join(" AND "))
    }
}
