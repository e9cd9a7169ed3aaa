//! Error code registry with descriptions and help text
//!
//! Ranges:
//! - CN0xxx: Scanner warnings
//! - CN1xxx: Syntax errors
//! - CN2xxx: Evaluation errors
//! - CN3xxx: Emission errors
//! - CN9xxx: Generic

// === Error Code Constants ===

// CN0xxx - Scanner
pub const ILLEGAL_CHARACTER: &str = "CN0001";

// CN1xxx - Syntax Errors
pub const SYNTAX_ERROR: &str = "CN1000";
pub const MISSING_RELOP: &str = "CN1001";
pub const NO_CURRENT_TOKEN: &str = "CN1002";

// CN2xxx - Evaluation Errors
pub const UNDEFINED_VARIABLE: &str = "CN2000";
pub const MALFORMED_NUMBER: &str = "CN2001";
pub const READ_ERROR: &str = "CN2002";
pub const OUTPUT_ERROR: &str = "CN2003";

// CN3xxx - Emission
pub const EMIT_WRITE_ERROR: &str = "CN3000";

/// Error code descriptor with code, description, and optional help text
#[derive(Debug, Clone)]
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub description: &'static str,
    pub help: Option<&'static str>,
}

/// Get info for an error code, if known
pub fn lookup(code: &str) -> Option<ErrorCodeInfo> {
    ERROR_CODES.iter().find(|e| e.code == code).cloned()
}

/// Get help text for an error code
pub fn help_for(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|e| e.help)
}

/// All known error codes with descriptions and help
pub static ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo {
        code: ILLEGAL_CHARACTER,
        description: "Illegal character",
        help: Some("Only letters, digits, whitespace and = + - * / ( ) ; < > are allowed."),
    },
    ErrorCodeInfo {
        code: SYNTAX_ERROR,
        description: "Unexpected token",
        help: None,
    },
    ErrorCodeInfo {
        code: MISSING_RELOP,
        description: "Missing relational operator",
        help: Some("Conditions compare two expressions with one of < <= > >= <> ==."),
    },
    ErrorCodeInfo {
        code: NO_CURRENT_TOKEN,
        description: "No current token",
        help: None,
    },
    ErrorCodeInfo {
        code: UNDEFINED_VARIABLE,
        description: "Undefined variable",
        help: Some("Assign the variable or read it with `rd` before using it."),
    },
    ErrorCodeInfo {
        code: MALFORMED_NUMBER,
        description: "Malformed numeric literal",
        help: None,
    },
    ErrorCodeInfo {
        code: READ_ERROR,
        description: "Read error",
        help: Some("`rd` expects a whitespace-separated number on standard input."),
    },
    ErrorCodeInfo {
        code: OUTPUT_ERROR,
        description: "Output error",
        help: None,
    },
    ErrorCodeInfo {
        code: EMIT_WRITE_ERROR,
        description: "Failed to write emitted C source",
        help: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let info = lookup("CN2000").unwrap();
        assert_eq!(info.description, "Undefined variable");
    }

    #[test]
    fn test_help_for() {
        assert!(help_for(MISSING_RELOP).is_some());
        assert!(help_for(SYNTAX_ERROR).is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ERROR_CODES.iter().enumerate() {
            for b in &ERROR_CODES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
