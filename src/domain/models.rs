use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Product identifier as handed out by the catalog API.
///
/// The API is free to encode ids as JSON numbers or strings; both end up here
/// as the same textual id so `42` and `"42"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ProductId(n.to_string()),
            RawId::Text(s) => ProductId(s),
        })
    }
}

/// Lightweight search hit used for the autocomplete list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Suggestion {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl ProductDetail {
    #[must_use]
    pub fn formatted_price(&self, currency: &str) -> String {
        format!("{currency}{:.2}", self.price)
    }
}
