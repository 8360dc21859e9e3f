// Fixture runner: replays fixture operations against `ParamCursor`
use super::fixture_loader::{
    FixtureFailure, FixtureResult, Op, TestCase, get_inline_cases, load_json_cases,
};
use param_cursor::{ParamCursor, Result};

fn error_name(result: Result<()>) -> Option<String> {
    result.err().map(|err| format!("{:?}", err.kind()))
}

fn show(value: Option<&str>) -> String {
    value.map_or_else(|| "<none>".to_string(), |v| format!("{v:?}"))
}

/// Replay one case, returning the first mismatch
fn run_case(
    input: &str,
    separator: Option<char>,
    error: Option<&str>,
    ops: &[Op],
) -> core::result::Result<(), (usize, String, String)> {
    let built = match separator {
        Some(sep) => ParamCursor::with_separator(input, sep),
        None => Ok(ParamCursor::new(input)),
    };
    let mut cursor = match (built, error) {
        (Ok(cursor), None) => cursor,
        (Err(err), Some(expected)) if format!("{:?}", err.kind()) == expected => return Ok(()),
        (Err(err), _) => return Err((0, show(error), format!("{:?}", err.kind()))),
        (Ok(_), Some(expected)) => return Err((0, expected.to_string(), "cursor".to_string())),
    };

    for (i, op) in ops.iter().enumerate() {
        let step = i + 1;
        let mismatch = |expected: String, actual: String| Err((step, expected, actual));
        match op {
            Op::Advance { found } => {
                let actual = cursor.advance();
                if actual != *found {
                    return mismatch(found.to_string(), actual.to_string());
                }
            }
            Op::AdvanceAll { count } => {
                let mut seen = 0;
                while cursor.advance() {
                    seen += 1;
                }
                if seen != *count {
                    return mismatch(count.to_string(), seen.to_string());
                }
            }
            Op::Current {
                key,
                value,
                first,
                last,
            } => {
                if cursor.key() != key.as_deref() {
                    return mismatch(show(key.as_deref()), show(cursor.key()));
                }
                if cursor.value() != value.as_deref() {
                    return mismatch(show(value.as_deref()), show(cursor.value()));
                }
                if let Some(first) = first {
                    if cursor.is_first() != *first {
                        return mismatch(format!("first={first}"), cursor.is_first().to_string());
                    }
                }
                if let Some(last) = last {
                    if cursor.is_last() != *last {
                        return mismatch(format!("last={last}"), cursor.is_last().to_string());
                    }
                }
            }
            Op::Remove { error } => {
                let actual = error_name(cursor.remove());
                if actual != *error {
                    return mismatch(show(error.as_deref()), show(actual.as_deref()));
                }
            }
            Op::InsertBefore { key, value, error } => {
                let actual = error_name(cursor.insert_before(key, value.as_deref()));
                if actual != *error {
                    return mismatch(show(error.as_deref()), show(actual.as_deref()));
                }
            }
            Op::InsertAfter { key, value, error } => {
                let actual = error_name(cursor.insert_after(key, value.as_deref()));
                if actual != *error {
                    return mismatch(show(error.as_deref()), show(actual.as_deref()));
                }
            }
            Op::InsertFirst { key, value } => cursor.insert_first(key, value.as_deref()),
            Op::InsertLast { key, value } => cursor.insert_last(key, value.as_deref()),
            Op::Render { expected } => {
                if cursor.render() != expected.as_str() {
                    return mismatch(expected.clone(), cursor.render().to_string());
                }
            }
        }
    }
    Ok(())
}

pub fn run_fixtures(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();

    for case in cases {
        match case {
            TestCase::Comment(_) => {}
            TestCase::Case {
                name,
                input,
                separator,
                error,
                ops,
            } => match run_case(&input, separator, error.as_deref(), &ops) {
                Ok(()) => result.passed += 1,
                Err((step, expected, actual)) => {
                    result.failed += 1;
                    result.failures.push(FixtureFailure {
                        name,
                        step,
                        expected,
                        actual,
                    });
                }
            },
        }
    }

    result
}

fn assert_all_passed(result: &FixtureResult) {
    assert!(
        result.failures.is_empty(),
        "{}\n{:#?}",
        result.summary(),
        result.failures
    );
    assert!(result.passed > 0, "No fixtures ran");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_inline_fixtures() {
        let result = run_fixtures(get_inline_cases());
        assert_all_passed(&result);
        assert_eq!(result.passed, 3);
    }

    #[test]
    fn test_run_json_fixtures() {
        let result = run_fixtures(load_json_cases());
        assert_all_passed(&result);
    }
}
