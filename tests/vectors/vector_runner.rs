use super::vector_loader::{TestCase, VectorFailure, VectorResult, load_vectors};
/// Runs every vector against `PathInfo`
use pathinfo::{Config, OptionValue, PathInfo};

fn config_for(
    pair_separator: Option<String>,
    key_value_separator: Option<String>,
    strip_leading: Option<bool>,
    strip_trailing: Option<bool>,
) -> Config {
    let mut options: Vec<(&str, OptionValue)> = Vec::new();
    if let Some(sep) = pair_separator {
        options.push(("pair_separator", sep.into()));
    }
    if let Some(sep) = key_value_separator {
        options.push(("key_value_separator", sep.into()));
    }
    if let Some(flag) = strip_leading {
        options.push(("strip_leading_separator", flag.into()));
    }
    if let Some(flag) = strip_trailing {
        options.push(("strip_trailing_separator", flag.into()));
    }
    Config::from_options(options).unwrap_or_else(|e| panic!("bad vector config: {e}"))
}

pub fn run_vectors(tests: Vec<TestCase>) -> VectorResult {
    let mut result = VectorResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Vector {
            input,
            pair_separator,
            key_value_separator,
            strip_leading,
            strip_trailing,
            fields,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let config = config_for(
            pair_separator,
            key_value_separator,
            strip_leading,
            strip_trailing,
        );
        let params = PathInfo::with_config(&input, config);
        let actual: Vec<(String, Vec<String>)> = params
            .iter()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
            .collect();

        if actual == fields {
            result.passed += 1;
        } else {
            result.failures.push(VectorFailure {
                test_num,
                input,
                expected: fields,
                actual,
            });
        }
    }

    result
}

#[test]
fn test_decoding_vectors() {
    let result = run_vectors(load_vectors());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?}\n  expected: {:?}\n  actual:   {:?}",
            failure.test_num, failure.input, failure.expected, failure.actual
        );
    }
    assert!(result.failures.is_empty(), "{}", result.summary());
    assert!(result.passed > 0);
}
