/// Fixture loader
///
/// Cases come from `cursor_cases.json` next to this file, plus a few inline
/// cases for quick validation. A plain string in the JSON array is a comment.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    Case {
        name: String,
        input: String,
        #[serde(default)]
        separator: Option<char>,
        /// Expected error kind when building the cursor
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        ops: Vec<Op>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Advance {
        #[serde(default = "default_true")]
        found: bool,
    },
    /// Advance until exhausted, expecting `count` parameters
    AdvanceAll { count: usize },
    /// Check the current parameter
    Current {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        first: Option<bool>,
        #[serde(default)]
        last: Option<bool>,
    },
    Remove {
        #[serde(default)]
        error: Option<String>,
    },
    InsertBefore {
        key: String,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    InsertAfter {
        key: String,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    InsertFirst {
        key: String,
        #[serde(default)]
        value: Option<String>,
    },
    InsertLast {
        key: String,
        #[serde(default)]
        value: Option<String>,
    },
    Render { expected: String },
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub name: String,
    pub step: usize,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_json_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("cursor_cases.json"))
        .expect("cursor_cases.json should be valid")
}

/// Small inline subset, independent of the JSON file
pub fn get_inline_cases() -> Vec<TestCase> {
    vec![
        TestCase::Case {
            name: "identity".to_string(),
            input: "http://path?a=1&b=2#f".to_string(),
            separator: None,
            error: None,
            ops: vec![
                Op::AdvanceAll { count: 2 },
                Op::Render {
                    expected: "http://path?a=1&b=2#f".to_string(),
                },
            ],
        },
        TestCase::Case {
            name: "insert last without query".to_string(),
            input: "http://path#fragment".to_string(),
            separator: None,
            error: None,
            ops: vec![
                Op::Advance { found: false },
                Op::InsertLast {
                    key: "l".to_string(),
                    value: Some("1".to_string()),
                },
                Op::Render {
                    expected: "http://path?l=1#fragment".to_string(),
                },
            ],
        },
        TestCase::Case {
            name: "separator rejected".to_string(),
            input: "http://path?a=1".to_string(),
            separator: Some('='),
            error: Some("InvalidArgument".to_string()),
            ops: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_cases_count() {
        assert_eq!(get_inline_cases().len(), 3);
    }

    #[test]
    fn test_json_cases_parse() {
        let cases = load_json_cases();
        let named = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Case { .. }))
            .count();
        assert!(named >= 10, "only {named} cases loaded");
    }
}
