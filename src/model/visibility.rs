//! Visibility models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::extensible::{DeclaredFields, ExtensibleRecord};

/// Who can see a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    /// Restriction level (e.g., `public`, `ibm_only`, `private`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    /// The owner of the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Accounts explicitly included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<VisibilityDetail>,
    /// Accounts explicitly excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<VisibilityDetail>,
    /// Whether the visibility has been approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

/// A set of accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityDetail {
    pub accounts: VisibilityDetailAccounts,
}

impl VisibilityDetail {
    /// Creates a detail holding the given accounts.
    #[must_use]
    pub const fn new(accounts: VisibilityDetailAccounts) -> Self {
        Self { accounts }
    }
}

/// Declared fields of [`VisibilityDetailAccounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFields {
    /// The `_accountid_` entry.
    #[serde(rename = "_accountid_", skip_serializing_if = "Option::is_none")]
    pub accountid: Option<String>,
}

impl DeclaredFields for AccountFields {
    const FIELD_NAMES: &'static [&'static str] = &["_accountid_"];
}

/// Accounts keyed by account id, plus the declared `_accountid_` entry.
pub type VisibilityDetailAccounts = ExtensibleRecord<AccountFields, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyError;
    use serde_json::json;

    #[test]
    fn test_visibility_decodes_account_maps() {
        let visibility: Visibility = serde_json::from_value(json!({
            "restrictions": "private",
            "owner": "a/abc",
            "include": {"accounts": {"_accountid_": "abc", "def": "2020-01-01"}},
            "exclude": {"accounts": {}},
            "approved": true
        }))
        .unwrap();

        let include = visibility.include.unwrap();
        assert_eq!(include.accounts.fields().accountid.as_deref(), Some("abc"));
        assert_eq!(include.accounts.get_property("def"), Some(&json!("2020-01-01")));
        assert!(visibility.exclude.unwrap().accounts.is_empty());
    }

    #[test]
    fn test_accountid_cannot_be_set_dynamically() {
        let mut accounts = VisibilityDetailAccounts::new();
        let result = accounts.set_property("_accountid_", json!("x"));

        assert!(matches!(result, Err(PropertyError::DeclaredField { .. })));
    }

    #[test]
    fn test_visibility_detail_encodes_flat_accounts() {
        let accounts = VisibilityDetailAccounts::with_fields(AccountFields {
            accountid: Some("abc".to_string()),
        })
        .with_property("def", json!("2021-02-02"))
        .unwrap();

        let value = serde_json::to_value(VisibilityDetail::new(accounts)).unwrap();

        assert_eq!(
            value,
            json!({"accounts": {"_accountid_": "abc", "def": "2021-02-02"}})
        );
    }
}
