//! Parameter vector parsing and formatting.

use crate::{CliError, Result};

/// Parses a whitespace-separated list of real numbers, e.g. `"10 0.5"`.
///
/// An empty or blank string yields an empty vector; the arity check is
/// left to the validator so the error names the distribution.
pub fn parse_params(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| CliError::ParamParse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Joins parameters with `_` for use in file names, e.g. `[10.0, 0.5]` → `10_0.5`.
pub fn params_slug(params: &[f64]) -> String {
    params
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        assert_eq!(parse_params("10 0.5").unwrap(), vec![10.0, 0.5]);
        assert_eq!(parse_params("  -1.5\t2e3  ").unwrap(), vec![-1.5, 2000.0]);
        assert!(parse_params("").unwrap().is_empty());
        assert!(parse_params("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_params_rejects_garbage() {
        match parse_params("1 two 3") {
            Err(CliError::ParamParse { token }) => assert_eq!(token, "two"),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(parse_params("0.5,0.2").is_err());
    }

    #[test]
    fn test_params_slug() {
        assert_eq!(params_slug(&[10.0, 0.5]), "10_0.5");
        assert_eq!(params_slug(&[-1.0]), "-1");
        assert_eq!(params_slug(&[]), "");
    }
}
