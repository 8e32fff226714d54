use serde::{Deserialize, Serialize};

/// A single customer order.
///
/// Orders are immutable once created. The coordinator never looks inside an
/// order; the fields exist for the sample data source and for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    /// Order total in cents.
    pub total_cents: u64,
}

impl Order {
    /// Total formatted as `dollars.cents`.
    pub fn total_display(&self) -> String {
        format!("{}.{:02}", self.total_cents / 100, self.total_cents % 100)
    }

    /// Case-insensitive substring match against id, customer and product.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_string().contains(needle)
            || self.customer.to_lowercase().contains(needle)
            || self.product.to_lowercase().contains(needle)
    }
}
