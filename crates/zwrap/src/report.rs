// SPDX-License-Identifier: AGPL-3.0

//! Command results and exit codes

use serde::{Deserialize, Serialize};

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exitcode {
    Success = 0,
    ValueError = 1,
}

/// Outcome of one evaluated command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainResult {
    pub exitcode: i32,
    /// Rendered result, absent on failure
    pub output: Option<String>,
    /// Error message, absent on success
    pub error: Option<String>,
    /// Error kind name, see `ErrorKind::name`
    pub kind: Option<String>,
}

impl MainResult {
    pub fn success(output: String) -> Self {
        Self {
            exitcode: Exitcode::Success as i32,
            output: Some(output),
            error: None,
            kind: None,
        }
    }

    pub fn failure(err: &zwrap_exceptions::ValueError) -> Self {
        Self {
            exitcode: Exitcode::ValueError as i32,
            output: None,
            error: Some(err.to_string()),
            kind: Some(err.kind().name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zwrap_exceptions::ValueError;

    #[test]
    fn test_success() {
        let result = MainResult::success("5/6".to_string());
        assert_eq!(result.exitcode, 0);
        assert_eq!(result.output.as_deref(), Some("5/6"));
    }

    #[test]
    fn test_failure_json() {
        let result = MainResult::failure(&ValueError::division("Division by zero is not allowed"));
        assert_eq!(result.exitcode, 1);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "division");
        assert!(json["output"].is_null());
    }
}
