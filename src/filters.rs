//! Filtering and Ordering
//!
//! Every dashboard runs its rows through the same pipeline: a
//! case-insensitive substring search over a per-type field list, a
//! status facet with an "All" sentinel, then a stable sort on a named
//! key. Filtering never mutates the stores.

use std::cmp::Ordering;

use crate::models::{Delivery, InventoryItem, Kiosk, TransactionRecord, Van};
use crate::stats::StockLevel;

/// Sentinel option that disables the status facet.
pub const STATUS_ALL: &str = "All";

/// The fields the free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

/// The label the status facet compares against.
pub trait HasStatus {
    fn status_label(&self) -> &'static str;
}

impl Searchable for Delivery {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code(),
            self.origin.clone(),
            self.destination.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl HasStatus for Delivery {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code(),
            self.name.clone(),
            self.category.clone(),
            self.warehouse.clone(),
        ]
    }
}

impl HasStatus for InventoryItem {
    fn status_label(&self) -> &'static str {
        StockLevel::of(self).as_str()
    }
}

impl Searchable for TransactionRecord {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.code(), self.party.clone(), self.kind.clone()];
        if let Some(hash) = &self.tx_hash {
            fields.push(hash.clone());
        }
        fields
    }
}

impl HasStatus for TransactionRecord {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Van {
    fn search_fields(&self) -> Vec<String> {
        vec![self.code(), self.owner.clone(), self.district.clone()]
    }
}

impl HasStatus for Van {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Searchable for Kiosk {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code(),
            self.entrepreneur.clone(),
            self.village.clone(),
        ]
    }
}

impl HasStatus for Kiosk {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_status<T: HasStatus>(item: &T, status: &str) -> bool {
    status == STATUS_ALL || item.status_label() == status
}

/// Applies both facets, keeping store order.
pub fn apply_filters<T: Searchable + HasStatus + Clone>(
    items: &[T],
    query: &str,
    status: &str,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query) && matches_status(*item, status))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Stable sort; descending reverses the comparator, so equal rows keep
/// their relative order either way.
pub fn sorted_by<T>(
    mut items: Vec<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Vec<T> {
    items.sort_by(|a, b| match direction {
        SortDirection::Ascending => cmp(a, b),
        SortDirection::Descending => cmp(b, a),
    });
    items
}

/// Total order over floats; NaN compares equal rather than poisoning
/// the sort.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn compare_deliveries(a: &Delivery, b: &Delivery, key: &str) -> Ordering {
    match key {
        "origin" => a.origin.cmp(&b.origin),
        "destination" => a.destination.cmp(&b.destination),
        "packages" => a.packages.cmp(&b.packages),
        "cost" => cmp_f64(a.drone_cost, b.drone_cost),
        "date" => a.scheduled_for.cmp(&b.scheduled_for),
        _ => a.id.cmp(&b.id),
    }
}

pub fn compare_inventory(a: &InventoryItem, b: &InventoryItem, key: &str) -> Ordering {
    match key {
        "name" => a.name.cmp(&b.name),
        "category" => a.category.cmp(&b.category),
        "quantity" => a.quantity.cmp(&b.quantity),
        "value" => cmp_f64(a.stock_value(), b.stock_value()),
        "warehouse" => a.warehouse.cmp(&b.warehouse),
        _ => a.id.cmp(&b.id),
    }
}

pub fn compare_transactions(a: &TransactionRecord, b: &TransactionRecord, key: &str) -> Ordering {
    match key {
        "party" => a.party.cmp(&b.party),
        "type" => a.kind.cmp(&b.kind),
        "amount" => cmp_f64(a.amount, b.amount),
        "date" => a.occurred_on.cmp(&b.occurred_on),
        _ => a.id.cmp(&b.id),
    }
}

pub fn compare_vans(a: &Van, b: &Van, key: &str) -> Ordering {
    match key {
        "owner" => a.owner.cmp(&b.owner),
        "district" => a.district.cmp(&b.district),
        "revenue" => cmp_f64(
            a.performance.monthly_revenue,
            b.performance.monthly_revenue,
        ),
        "uptime" => cmp_f64(a.performance.uptime_percent, b.performance.uptime_percent),
        "households" => a.impact.households_served.cmp(&b.impact.households_served),
        _ => a.id.cmp(&b.id),
    }
}

pub fn compare_kiosks(a: &Kiosk, b: &Kiosk, key: &str) -> Ordering {
    match key {
        "entrepreneur" => a.entrepreneur.cmp(&b.entrepreneur),
        "village" => a.village.cmp(&b.village),
        "revenue" => cmp_f64(
            a.performance.monthly_revenue,
            b.performance.monthly_revenue,
        ),
        "uptime" => cmp_f64(a.performance.uptime_percent, b.performance.uptime_percent),
        "households" => a.impact.households_served.cmp(&b.impact.households_served),
        _ => a.id.cmp(&b.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use crate::seed;

    #[test]
    fn test_blank_query_and_all_status_keep_everything() {
        let items = seed::inventory();
        let filtered = apply_filters(&items, "  ", STATUS_ALL);
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = seed::inventory();
        let filtered = apply_filters(&items, "RICE", STATUS_ALL);
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|i| i.name.to_lowercase().contains("rice")));
    }

    #[test]
    fn test_search_matches_display_codes() {
        let deliveries = seed::deliveries();
        let filtered = apply_filters(&deliveries, "dl-0", STATUS_ALL);
        assert_eq!(filtered.len(), deliveries.len());
    }

    #[test]
    fn test_status_facet_is_exact() {
        let deliveries = seed::deliveries();
        let filtered = apply_filters(&deliveries, "", "Completed");
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|d| d.status_label() == "Completed"));
        assert!(filtered.len() < deliveries.len());
    }

    #[test]
    fn test_filtering_preserves_store_order() {
        let deliveries = seed::deliveries();
        let filtered = apply_filters(&deliveries, "", STATUS_ALL);
        let ids: Vec<_> = filtered.iter().map(Entity::id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "seed rows arrive in id order");
    }

    #[test]
    fn test_directions_mirror_each_other() {
        let items = seed::inventory();
        let asc = sorted_by(items.clone(), SortDirection::Ascending, |a, b| {
            compare_inventory(a, b, "quantity")
        });
        let mut desc = sorted_by(items, SortDirection::Descending, |a, b| {
            compare_inventory(a, b, "quantity")
        });
        desc.reverse();
        let asc_ids: Vec<_> = asc.iter().map(|i| i.id).collect();
        let desc_ids: Vec<_> = desc.iter().map(|i| i.id).collect();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_id() {
        let deliveries = seed::deliveries();
        let sorted = sorted_by(deliveries, SortDirection::Ascending, |a, b| {
            compare_deliveries(a, b, "nonsense")
        });
        let ids: Vec<_> = sorted.iter().map(|d| d.id).collect();
        let mut expected = ids.clone();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_float_comparison_tolerates_nan() {
        let values = vec![3.0, f64::NAN, 1.0];
        let sorted = sorted_by(values, SortDirection::Ascending, |a, b| cmp_f64(*a, *b));
        assert_eq!(sorted.len(), 3);
    }
}
