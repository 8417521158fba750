//! Materials report: inventory value, stock-level warnings, and
//! per-category breakdown. Stock is a present-state snapshot, so no date
//! filtering applies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Material;
use crate::format::{format_currency, format_missing, LocaleConfig};

use super::aggregate::{group_by, sum, GroupBucket};
use super::DetailTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsReport {
    pub total_items: usize,
    pub total_value: Decimal,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub by_category: Vec<GroupBucket>,
    pub low_stock: Vec<LowStockItem>,
    pub rows: DetailTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockItem {
    pub material_id: Uuid,
    pub name: String,
    pub category: String,
    pub current_stock: Decimal,
    pub min_stock: Decimal,
}

pub fn assemble(materials: &[Material], locale: &LocaleConfig) -> MaterialsReport {
    let refs: Vec<&Material> = materials.iter().collect();

    let total_value = sum(&refs, |m| m.stock_value());
    let low_stock: Vec<LowStockItem> = materials
        .iter()
        .filter(|m| m.is_low_stock())
        .map(|m| LowStockItem {
            material_id: m.id,
            name: m.name.clone(),
            category: m.category.clone(),
            current_stock: m.current_stock,
            min_stock: m.min_stock,
        })
        .collect();
    let out_of_stock_count = materials.iter().filter(|m| m.is_out_of_stock()).count();

    let by_category = group_by(&refs, |m| Some(m.category.clone()), |m| m.stock_value())
        .into_values()
        .collect();

    MaterialsReport {
        total_items: materials.len(),
        total_value,
        low_stock_count: low_stock.len(),
        out_of_stock_count,
        by_category,
        low_stock,
        rows: material_rows(materials, locale),
    }
}

fn material_rows(materials: &[Material], locale: &LocaleConfig) -> DetailTable {
    DetailTable {
        headers: vec![
            "Name".into(),
            "Category".into(),
            "Stock".into(),
            "Minimum".into(),
            "Unit price".into(),
            "Value".into(),
        ],
        rows: materials
            .iter()
            .map(|m| {
                vec![
                    m.name.clone(),
                    m.category.clone(),
                    format!("{} {}", m.current_stock, m.unit),
                    m.min_stock.to_string(),
                    m.price_per_unit
                        .map(|p| format_currency(p, locale))
                        .unwrap_or_else(format_missing),
                    format_currency(m.stock_value(), locale),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn priced(name: &str, category: &str, stock: Decimal, min: Decimal, price: Decimal) -> Material {
        let mut material = Material::new(name, category, stock, min);
        material.price_per_unit = Some(price);
        material
    }

    #[test]
    fn inventory_value_sums_price_times_stock() {
        let materials = vec![
            priced("Cement", "Pojiva", dec!(100), dec!(20), dec!(8.50)),
            priced("Písek", "Sypké", dec!(40), dec!(10), dec!(2)),
        ];
        let report = assemble(&materials, &LocaleConfig::default());
        assert_eq!(report.total_items, 2);
        assert_eq!(report.total_value, dec!(930.00));
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let materials = vec![
            priced("A", "K", dec!(5), dec!(10), dec!(1)),
            priced("B", "K", dec!(10), dec!(10), dec!(1)),
            priced("C", "K", dec!(11), dec!(10), dec!(1)),
        ];
        let report = assemble(&materials, &LocaleConfig::default());
        let names: Vec<&str> = report.low_stock.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(report.low_stock_count, 2);
    }

    #[test]
    fn out_of_stock_is_counted_separately() {
        let materials = vec![
            priced("A", "K", dec!(0), dec!(10), dec!(1)),
            priced("B", "K", dec!(3), dec!(10), dec!(1)),
        ];
        let report = assemble(&materials, &LocaleConfig::default());
        assert_eq!(report.out_of_stock_count, 1);
        assert_eq!(report.low_stock_count, 2);
    }

    #[test]
    fn category_buckets_carry_count_and_value() {
        let materials = vec![
            priced("Cement", "Pojiva", dec!(10), dec!(2), dec!(8)),
            priced("Vápno", "Pojiva", dec!(5), dec!(2), dec!(4)),
            priced("Písek", "Sypké", dec!(40), dec!(10), dec!(2)),
        ];
        let report = assemble(&materials, &LocaleConfig::default());
        let pojiva = report
            .by_category
            .iter()
            .find(|b| b.key == "Pojiva")
            .expect("Pojiva bucket");
        assert_eq!(pojiva.count, 2);
        assert_eq!(pojiva.total, dec!(100));
    }

    #[test]
    fn missing_unit_price_contributes_zero_value() {
        let materials = vec![Material::new("Lepenka", "Izolace", dec!(30), dec!(5))];
        let report = assemble(&materials, &LocaleConfig::default());
        assert_eq!(report.total_value, Decimal::ZERO);
    }
}
