//! Runtime page configuration, passed from JS as an optional JSON string.

use serde::Deserialize;

use crate::error::{WishError, WishResult};
use crate::session::DEFAULT_ENVELOPES;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WishConfig {
    /// Catalog document fetched at page start.
    pub catalog_url: String,
    pub min_age: u32,
    pub max_age: u32,
    pub envelope_count: usize,
    /// Age whose wishes fill the envelopes.
    pub envelope_age: u32,
    /// Placeholder wishes in the fallback catalog.
    pub fallback_wish_count: usize,
}

impl Default for WishConfig {
    fn default() -> Self {
        Self {
            catalog_url: "wishes.json".to_string(),
            min_age: 1,
            max_age: 120,
            envelope_count: DEFAULT_ENVELOPES,
            envelope_age: 24,
            fallback_wish_count: DEFAULT_ENVELOPES,
        }
    }
}

impl WishConfig {
    pub fn from_json(text: &str) -> WishResult<Self> {
        let config: WishConfig =
            serde_json::from_str(text).map_err(|e| WishError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WishResult<()> {
        if self.min_age == 0 {
            return Err(WishError::Config("min_age must be at least 1".into()));
        }
        if self.min_age > self.max_age {
            return Err(WishError::Config(format!(
                "min_age {} exceeds max_age {}",
                self.min_age, self.max_age
            )));
        }
        if self.envelope_count == 0 {
            return Err(WishError::Config("envelope_count must be positive".into()));
        }
        Ok(())
    }

    /// Validates the visitor's age input.
    pub fn parse_age(&self, input: &str) -> WishResult<u32> {
        let invalid = || WishError::Validation {
            input: input.to_string(),
            min: self.min_age,
            max: self.max_age,
        };
        let age = input.trim().parse::<u32>().map_err(|_| invalid())?;
        if (self.min_age..=self.max_age).contains(&age) {
            Ok(age)
        } else {
            Err(invalid())
        }
    }
}
