/// Loader for `pathinfo_vectors.json`
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A decoding vector
    Vector {
        input: String,
        #[serde(default)]
        pair_separator: Option<String>,
        #[serde(default)]
        key_value_separator: Option<String>,
        #[serde(default)]
        strip_leading: Option<bool>,
        #[serde(default)]
        strip_trailing: Option<bool>,
        /// Expected `[name, [values...]]` entries in field order
        fields: Vec<(String, Vec<String>)>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct VectorResult {
    pub passed: usize,
    pub failures: Vec<VectorFailure>,
}

#[derive(Debug, Clone)]
pub struct VectorFailure {
    pub test_num: usize,
    pub input: String,
    pub expected: Vec<(String, Vec<String>)>,
    pub actual: Vec<(String, Vec<String>)>,
}

impl VectorResult {
    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        )
    }
}

pub fn load_vectors() -> Vec<TestCase> {
    serde_json::from_str(include_str!("pathinfo_vectors.json"))
        .unwrap_or_else(|e| panic!("pathinfo_vectors.json is malformed: {e}"))
}
