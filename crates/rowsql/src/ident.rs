//! SQL identifier validation.
//!
//! Table and column names are embedded directly in statement text, so every
//! name is checked before use: each dot-separated part must match
//! `[A-Za-z_][A-Za-z0-9_$]*`.

use crate::error::{StoreError, StoreResult};

/// Validate a table or column identifier, allowing dotted schema paths.
pub(crate) fn validate_ident(s: &str) -> StoreResult<()> {
    if s.is_empty() {
        return Err(StoreError::identifier("identifier cannot be empty"));
    }
    for part in s.split('.') {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            return Err(StoreError::identifier(format!(
                "empty segment in identifier '{s}'"
            )));
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(StoreError::identifier(format!(
                "identifier '{s}' must start with a letter or underscore"
            )));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(StoreError::identifier(format!(
                "identifier '{s}' contains characters outside [A-Za-z0-9_$]"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_idents() {
        assert!(validate_ident("users").is_ok());
        assert!(validate_ident("_tmp$1").is_ok());
        assert!(validate_ident("public.users").is_ok());
    }

    #[test]
    fn test_invalid_idents() {
        assert!(validate_ident("").is_err());
        assert!(validate_ident("1abc").is_err());
        assert!(validate_ident("users;drop").is_err());
        assert!(validate_ident("a..b").is_err());
        assert!(validate_ident("name'--").is_err());
    }
}
