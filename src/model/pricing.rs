//! Pricing models.
//!
//! Pricing is nested several levels deep: a [`PricingGet`] has a
//! [`StartingPrice`] and a list of [`Metrics`], each holding per-country
//! [`Amount`]s, each holding tiered [`Price`]s.

use serde::{Deserialize, Serialize};

/// Pricing for a catalog entry, as returned by the pricing operation.
///
/// # Example
///
/// ```rust
/// use global_catalog::model::PricingGet;
///
/// let pricing: PricingGet = serde_json::from_str(r#"{
///     "type": "paid",
///     "starting_price": {
///         "plan_id": "lite",
///         "amount": [{"counrty": "USA", "currency": "USD", "prices": [{"quantity_tier": 1, "Price": 0.5}]}]
///     }
/// }"#).unwrap();
///
/// let amount = &pricing.starting_price.unwrap().amount[0];
/// assert_eq!(amount.country.as_deref(), Some("USA"));
/// assert_eq!(amount.prices[0].price, Some(0.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingGet {
    /// Type of plan (e.g., `free`, `paid`, `subscription`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    /// Whether the pricing comes from the catalog or the billing service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// The lowest price of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<StartingPrice>,
    /// Per-metric pricing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metrics>,
}

/// Pricing metadata stored on a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSet {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<StartingPrice>,
}

/// The lowest price of a plan or deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartingPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    /// Per-country amounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<Amount>,
}

/// Prices in one country and currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Country code. The service spells the key `counrty`.
    #[serde(rename = "counrty", alias = "country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Tiered prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
}

/// The price for one quantity tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Pricing tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_tier: Option<i64>,
    /// Price in the amount's currency.
    #[serde(rename = "Price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Pricing for one usage metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_unit_quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_unit_display_name: Option<String>,
    /// Usage limit for the metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_cap_qty: Option<i64>,
    /// Per-country amounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<Amount>,
}
