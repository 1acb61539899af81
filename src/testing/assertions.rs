//! Assertion checking for scenario expectations

use super::parser::ScenarioExpectations;

/// Error when an assertion fails
#[derive(Debug)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n    Expected: {}\n    Actual: {}", self.message, self.expected, self.actual)
    }
}

/// Check the whole log line by line
pub fn check_output(expected: &[String], actual: &[&str]) -> Result<(), AssertionError> {
    for (i, (exp, act)) in expected.iter().zip(actual).enumerate() {
        if exp != act {
            return Err(AssertionError {
                message: format!("Line {} differs", i + 1),
                expected: format!("{:?}", exp),
                actual: format!("{:?}", act),
            });
        }
    }

    if expected.len() != actual.len() {
        return Err(AssertionError {
            message: "Log length differs".to_string(),
            expected: format!("{} lines", expected.len()),
            actual: format!("{} lines, last: {:?}", actual.len(), actual.last()),
        });
    }

    Ok(())
}

/// Check the final lines of the log
pub fn check_last(expected: &[String], actual: &[&str]) -> Result<(), AssertionError> {
    if expected.len() > actual.len() {
        return Err(AssertionError {
            message: "Log shorter than expected tail".to_string(),
            expected: format!("at least {} lines", expected.len()),
            actual: format!("{} lines", actual.len()),
        });
    }

    let tail = &actual[actual.len() - expected.len()..];
    for (exp, act) in expected.iter().zip(tail) {
        if exp != act {
            return Err(AssertionError {
                message: "Tail of log differs".to_string(),
                expected: format!("{:?}", expected),
                actual: format!("{:?}", tail),
            });
        }
    }

    Ok(())
}

/// Check that each expected line appears somewhere in the log
pub fn check_contains(expected: &[String], actual: &[&str]) -> Result<(), AssertionError> {
    for exp in expected {
        if !actual.iter().any(|line| line == exp) {
            return Err(AssertionError {
                message: format!("Line {:?} not found", exp),
                expected: format!("{:?}", exp),
                actual: format!("{} lines without it", actual.len()),
            });
        }
    }
    Ok(())
}

/// Check every expectation a scenario declares
pub fn check_expectations(expect: &ScenarioExpectations, actual: &[&str]) -> Result<(), AssertionError> {
    if !expect.output.is_empty() {
        check_output(&expect.output, actual)?;
    }
    check_last(&expect.last, actual)?;
    check_contains(&expect.contains, actual)?;

    if let Some(count) = expect.line_count
        && count != actual.len()
    {
        return Err(AssertionError {
            message: "Line count differs".to_string(),
            expected: count.to_string(),
            actual: actual.len().to_string(),
        });
    }

    Ok(())
}
