use crate::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A car on the lot. The id is ignored on insert; the store assigns it.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
pub struct Vehicle {
    #[serde(default)]
    pub id: RecordId,
    pub brand: String,
    pub model: String,
    pub price: f64,
}

impl Vehicle {
    pub fn new(brand: String, model: String, price: f64) -> Self {
        Self {
            id: RecordId::default(),
            brand,
            model,
            price,
        }
    }

    /// Bare record carrying only the id, for delete-by-id.
    pub fn with_id(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Default)]
pub struct Customer {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: RecordId::default(),
            name,
            email,
        }
    }

    pub fn with_id(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// A sale linking a customer to a car. The foreign ids are not checked against
/// existing rows; deleting either side leaves them dangling.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(default)]
    pub id: RecordId,
    pub customer_id: RecordId,
    pub auto_id: RecordId,
    pub purchase_date: DateTime<Utc>,
}

impl Purchase {
    pub fn new(customer_id: RecordId, auto_id: RecordId, purchase_date: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::default(),
            customer_id,
            auto_id,
            purchase_date,
        }
    }

    pub fn with_id(id: RecordId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn purchase_uses_camel_case_on_the_wire() {
        let purchase: Purchase = serde_json::from_value(json!({
            "customerId": 1,
            "autoId": 2,
            "purchaseDate": "2024-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(1, purchase.customer_id);
        assert_eq!(2, purchase.auto_id);
        assert_eq!(0, purchase.id, "missing id defaults to zero");

        let value = serde_json::to_value(&purchase).unwrap();
        assert_eq!(json!(2), value["autoId"]);
    }

    #[test]
    fn vehicle_body_without_id_deserializes() {
        let car: Vehicle = serde_json::from_value(json!({
            "brand": "Toyota",
            "model": "Corolla",
            "price": 20000.0,
        }))
        .unwrap();

        assert_eq!(0, car.id);
        assert_eq!("Toyota", car.brand);
    }
}
