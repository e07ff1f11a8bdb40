//! Traveller interest tags.
//!
//! Purpose: hold the interests attached to users, trip requests and generated
//! itineraries as a set, so duplicate tags never reach matching logic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`InterestSet::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestSetValidationError {
    /// Returned when one of the tags is blank once trimmed.
    BlankInterest { index: usize },
}

impl fmt::Display for InterestSetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankInterest { index } => write!(f, "interest at index {index} is blank"),
        }
    }
}

impl std::error::Error for InterestSetValidationError {}

/// Ordered set of lower-cased interest tags.
///
/// Tags are trimmed and lower-cased; later duplicates are dropped.
///
/// # Examples
/// ```
/// use travel_backend::domain::InterestSet;
///
/// let interests = InterestSet::new(["Food", "hiking", " food "]).expect("valid interests");
/// assert_eq!(interests.as_slice(), ["food", "hiking"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct InterestSet(Vec<String>);

impl InterestSet {
    /// Validate and normalise interest tags.
    pub fn new<I, S>(values: I) -> Result<Self, InterestSetValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            let tag = value.as_ref().trim().to_lowercase();
            if tag.is_empty() {
                return Err(InterestSetValidationError::BlankInterest { index });
            }
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(Self(tags))
    }

    /// Tags in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether the set holds the given tag, ignoring case.
    pub fn contains(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.0.iter().any(|existing| *existing == wanted)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<InterestSet> for Vec<String> {
    fn from(value: InterestSet) -> Self {
        value.0
    }
}

impl TryFrom<Vec<String>> for InterestSet {
    type Error = InterestSetValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
