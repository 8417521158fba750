use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stocked material. Low-stock and out-of-stock are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub unit: String,
    pub current_stock: Decimal,
    pub min_stock: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<Decimal>,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        current_stock: Decimal,
        min_stock: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            unit: String::new(),
            current_stock,
            min_stock,
            price_per_unit: None,
        }
    }

    /// Inclusive threshold: stock exactly at the minimum is already low.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock == Decimal::ZERO
    }

    /// Value held in stock; zero when no unit price is known.
    pub fn stock_value(&self) -> Decimal {
        self.price_per_unit.unwrap_or(Decimal::ZERO) * self.current_stock
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub status: EquipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    InUse,
    Maintenance,
    Retired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub license_plate: String,
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
    Service,
    Decommissioned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let mut material = Material::new("Cement", "Pojiva", dec!(5), dec!(10));
        assert!(material.is_low_stock());

        material.current_stock = dec!(10);
        assert!(material.is_low_stock());

        material.current_stock = dec!(11);
        assert!(!material.is_low_stock());
    }

    #[test]
    fn stock_value_defaults_to_zero_without_price() {
        let mut material = Material::new("Písek", "Sypké", dec!(40), dec!(10));
        assert_eq!(material.stock_value(), Decimal::ZERO);

        material.price_per_unit = Some(dec!(12.50));
        assert_eq!(material.stock_value(), dec!(500.00));
    }
}
