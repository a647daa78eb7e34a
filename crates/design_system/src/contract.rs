//! Style-contract configuration shared by the component tree.
//!
//! The contract names the token namespace that color and type references are
//! interpolated into (`var(--{namespace}-color-accent)`). It is read-only for
//! the lifetime of a render and is provided once near the root of the tree.

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token namespace used by the bundled stylesheets.
pub const DEFAULT_TOKEN_NAMESPACE: &str = "dxy";

#[derive(Debug, Error)]
/// Errors raised while loading a [`StyleContract`].
pub enum ContractError {
    /// The JSON payload could not be decoded.
    #[error("style contract parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The namespace is empty or not a valid custom-property segment.
    #[error("invalid token namespace `{0}`")]
    InvalidNamespace(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Names of the external token namespace the primitives reference.
pub struct StyleContract {
    /// Prefix of the token custom properties (`--{token_namespace}-color-*`).
    pub token_namespace: String,
}

impl Default for StyleContract {
    fn default() -> Self {
        Self {
            token_namespace: DEFAULT_TOKEN_NAMESPACE.to_string(),
        }
    }
}

impl StyleContract {
    /// Decodes and validates a contract from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Parse`] for malformed JSON and
    /// [`ContractError::InvalidNamespace`] when validation fails.
    pub fn from_json_str(raw: &str) -> Result<Self, ContractError> {
        let contract: Self = serde_json::from_str(raw)?;
        contract.validate()?;
        Ok(contract)
    }

    /// Like [`StyleContract::from_json_str`], falling back to the default contract on error.
    pub fn from_json_str_or_default(raw: &str) -> Self {
        match Self::from_json_str(raw) {
            Ok(contract) => contract,
            Err(err) => {
                logging::warn!("style contract load failed: {err}");
                Self::default()
            }
        }
    }

    /// Checks that the namespace is a lowercase kebab-case identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidNamespace`] for empty names, uppercase
    /// characters, punctuation other than `-`, or leading/trailing dashes.
    pub fn validate(&self) -> Result<(), ContractError> {
        let namespace = self.token_namespace.as_str();
        let well_formed = !namespace.is_empty()
            && !namespace.starts_with('-')
            && !namespace.ends_with('-')
            && namespace
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');

        if well_formed {
            Ok(())
        } else {
            Err(ContractError::InvalidNamespace(namespace.to_string()))
        }
    }
}

/// Makes `contract` available to every primitive rendered below the current owner.
pub fn provide_style_contract(contract: StyleContract) {
    provide_context(contract);
}

/// Returns the nearest provided [`StyleContract`], or the default contract.
pub fn use_style_contract() -> StyleContract {
    use_context::<StyleContract>().unwrap_or_default()
}

#[component]
/// Provides a [`StyleContract`] to its children.
pub fn StyleContractProvider(
    /// Contract to provide. Defaults to [`StyleContract::default`].
    #[prop(optional)]
    contract: Option<StyleContract>,
    children: Children,
) -> impl IntoView {
    provide_style_contract(contract.unwrap_or_default());
    children()
}
