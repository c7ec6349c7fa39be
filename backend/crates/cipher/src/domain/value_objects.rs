//! Domain Value Objects
//!
//! Immutable value types for the cipher domain.

use std::fmt;

// ============================================================================
// CipherKey
// ============================================================================

/// Error returned when key normalization fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKeyError {
    /// Key is empty after trimming
    Empty,
}

impl fmt::Display for CipherKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Cipher key cannot be empty"),
        }
    }
}

impl std::error::Error for CipherKeyError {}

/// Validated, normalized Vigenère key
///
/// # Invariants
/// - Non-empty after trimming
/// - Upper-cased (the pipeline indexes key characters relative to 'A')
///
/// A zero-length key would make the positional key cycling divide by zero,
/// so emptiness is rejected here at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherKey(String);

impl CipherKey {
    /// Create a new CipherKey from raw input (trims and upper-cases)
    pub fn new(input: impl AsRef<str>) -> Result<Self, CipherKeyError> {
        let normalized = input.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CipherKeyError::Empty);
        }
        Ok(Self(normalized))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CipherKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// CaesarShift
// ============================================================================

/// Caesar shift amount
///
/// Any integer is a valid shift; the pipeline reduces it modulo the
/// alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarShift(i64);

impl CaesarShift {
    pub const DEFAULT: CaesarShift = CaesarShift(3);

    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }
}

impl Default for CaesarShift {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<CaesarShift> for i64 {
    fn from(s: CaesarShift) -> Self {
        s.0
    }
}

// ============================================================================
// Complexity
// ============================================================================

/// Complexity grade reported for a decryption attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// Both scoring conditions held; the attempt counts as a solve
    High,
    /// At most one condition held
    Partial,
}

impl Complexity {
    /// Wire label for the `complexity_score` response field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Complexity::High => "High",
            Complexity::Partial => "Partial",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
