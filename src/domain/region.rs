//! Region entity keyed by a National Olympic Committee code.

use std::fmt;

use serde::Serialize;

/// Validation failures raised when parsing a [`NocCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NocCodeError {
    /// The code was not exactly three characters once trimmed.
    WrongLength,
    /// The code contained characters outside `A-Z`.
    NotAlphabetic,
}

impl fmt::Display for NocCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength => write!(f, "NOC code must be exactly three characters"),
            Self::NotAlphabetic => write!(f, "NOC code must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for NocCodeError {}

/// Three-letter National Olympic Committee code.
///
/// ## Invariants
/// - Exactly three ASCII letters, stored uppercase.
///
/// # Examples
/// ```
/// use paralympics_api::domain::NocCode;
///
/// let code = NocCode::new("gbr").unwrap();
/// assert_eq!(code.as_str(), "GBR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NocCode(String);

impl NocCode {
    /// Parse and normalise a raw code.
    pub fn new(raw: &str) -> Result<Self, NocCodeError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() != 3 {
            return Err(NocCodeError::WrongLength);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NocCodeError::NotAlphabetic);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The canonical uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NocCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures raised when constructing a [`Region`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionValidationError {
    /// The region display name was missing or blank.
    EmptyName,
}

impl fmt::Display for RegionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "region name must not be empty"),
        }
    }
}

impl std::error::Error for RegionValidationError {}

/// Region reference entity.
///
/// Serialised with the NOC code under the historical `NOC` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Natural primary key, immutable after creation.
    #[serde(rename = "NOC")]
    pub noc: NocCode,
    /// Display name.
    pub region: String,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl Region {
    /// Construct a region, validating the display name.
    pub fn new(
        noc: NocCode,
        region: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, RegionValidationError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(RegionValidationError::EmptyName);
        }
        Ok(Self { noc, region, notes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GBR", "GBR")]
    #[case("ita", "ITA")]
    #[case(" usa ", "USA")]
    fn accepts_three_letter_codes(#[case] raw: &str, #[case] canonical: &str) {
        let code = NocCode::new(raw).expect("valid code");
        assert_eq!(code.as_str(), canonical);
    }

    #[rstest]
    #[case("GB", NocCodeError::WrongLength)]
    #[case("GBRA", NocCodeError::WrongLength)]
    #[case("", NocCodeError::WrongLength)]
    #[case("G1R", NocCodeError::NotAlphabetic)]
    #[case("G-R", NocCodeError::NotAlphabetic)]
    fn rejects_malformed_codes(#[case] raw: &str, #[case] expected: NocCodeError) {
        assert_eq!(NocCode::new(raw).unwrap_err(), expected);
    }

    #[test]
    fn region_requires_display_name() {
        let noc = NocCode::new("GBR").expect("valid code");
        let err = Region::new(noc, "  ", None).unwrap_err();
        assert_eq!(err, RegionValidationError::EmptyName);
    }

    #[test]
    fn serialises_noc_under_historical_key() {
        let noc = NocCode::new("GBR").expect("valid code");
        let region = Region::new(noc, "Great Britain", None).expect("valid region");
        let value = serde_json::to_value(&region).expect("serialise region");
        assert_eq!(value["NOC"], "GBR");
        assert_eq!(value["region"], "Great Britain");
    }
}
