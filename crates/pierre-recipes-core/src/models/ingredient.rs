// ABOUTME: Ingredient model and name normalization
// ABOUTME: Names arriving through the API are trimmed and lower-cased before they are stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single ingredient row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier (UUID v4 string)
    pub id: String,
    /// Display name
    pub name: String,
}

impl Ingredient {
    /// Normalize an ingredient name submitted through the API
    ///
    /// Returns `None` when nothing but whitespace remains.
    #[must_use]
    pub fn normalize_name(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(Ingredient::normalize_name("Potato").as_deref(), Some("potato"));
        assert_eq!(
            Ingredient::normalize_name("  Yellow Onion ").as_deref(),
            Some("yellow onion")
        );
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert!(Ingredient::normalize_name("").is_none());
        assert!(Ingredient::normalize_name("   ").is_none());
    }
}
