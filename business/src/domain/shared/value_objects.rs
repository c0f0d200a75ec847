use serde::{Deserialize, Serialize};

/// Opaque product identifier as assigned by the hosted catalog.
/// The cart only ever compares it for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_product_id_from_str() {
        let id = ProductId::new("42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new("abc-1");
        assert_eq!(format!("{}", id), "abc-1");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new("1"), ProductId::new("1"));
        assert_ne!(ProductId::new("1"), ProductId::new("2"));
    }

    #[test]
    fn should_convert_from_string() {
        let id: ProductId = "7".to_string().into();
        assert_eq!(id.as_str(), "7");
    }
}
