//! Product domain entity.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned identifier (None until the first successful save)
    pub id: Option<i64>,
    pub name: String,
    pub producer: String,
    /// Unit price; exact decimal arithmetic, never floating point
    pub price: Decimal,
    /// Calendar date without a time component
    pub expiration_date: NaiveDate,
    /// Creation timestamp, if the store recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<NaiveDateTime>,
}

impl Product {
    /// Create a product that has not been persisted yet.
    pub fn new(name: String, producer: String, price: Decimal, expiration_date: NaiveDate) -> Self {
        Self {
            id: None,
            name,
            producer,
            price,
            expiration_date,
            creation_time: None,
        }
    }

    /// Attach a creation timestamp.
    pub fn with_creation_time(mut self, creation_time: NaiveDateTime) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    /// Check whether the entity carries a storage-assigned identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn january_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn new_product_has_no_identifier() {
        let product = Product::new(
            "Milk".to_string(),
            "Acme".to_string(),
            dec!(1.99),
            january_first(),
        );

        assert!(!product.is_persisted());
        assert!(product.creation_time.is_none());
    }

    #[test]
    fn price_keeps_two_decimal_places_exactly() {
        let product = Product::new(
            "Milk".to_string(),
            "Acme".to_string(),
            dec!(1.99),
            january_first(),
        );

        assert_eq!(product.price.to_string(), "1.99");
        assert_eq!(product.price, dec!(1.99));
    }

    #[test]
    fn with_creation_time_sets_the_timestamp() {
        let noon = january_first().and_hms_opt(12, 0, 0).unwrap();
        let product = Product::new(
            "Milk".to_string(),
            "Acme".to_string(),
            dec!(1.99),
            january_first(),
        )
        .with_creation_time(noon);

        assert_eq!(product.creation_time, Some(noon));
    }
}
