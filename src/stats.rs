//! Dashboard Aggregation
//!
//! Pure folds from record slices into the numbers the dashboards
//! render. Grouping is single-pass and keeps first-occurrence order so
//! charts stay stable across re-renders. Group fractions are 0
//! whenever the total is 0.

use crate::models::{
    Delivery, DeliveryStatus, InventoryItem, Kiosk, PerformanceMetrics, ServiceStatus,
    SocialImpact, TransactionRecord, Van,
};

/// Annual CO2 uptake of one grown tree, in kilograms.
const TREE_ABSORPTION_KG: f64 = 21.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the distribution total, 0 to 1.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub total: f64,
    pub groups: Vec<GroupSlice>,
}

/// Groups `items` by label and sums `value` per group.
pub fn distribution<T>(
    items: &[T],
    label: impl Fn(&T) -> String,
    value: impl Fn(&T) -> f64,
) -> Distribution {
    let mut groups: Vec<GroupSlice> = Vec::new();
    let mut total = 0.0;
    for item in items {
        let name = label(item);
        let amount = value(item);
        total += amount;
        match groups.iter_mut().find(|g| g.label == name) {
            Some(group) => group.value += amount,
            None => groups.push(GroupSlice {
                label: name,
                value: amount,
                percent: 0.0,
            }),
        }
    }
    if total != 0.0 {
        for group in &mut groups {
            group.percent = group.value / total;
        }
    }
    Distribution { total, groups }
}

/// Grouping where each item counts as one.
pub fn count_distribution<T>(items: &[T], label: impl Fn(&T) -> String) -> Distribution {
    distribution(items, label, |_| 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryStats {
    pub total: usize,
    pub in_flight: usize,
    pub packages: u32,
    pub cost_saved: f64,
    pub hours_saved: f64,
    pub co2_saved_kg: f64,
    pub by_status: Distribution,
}

pub fn delivery_stats(deliveries: &[Delivery]) -> DeliveryStats {
    DeliveryStats {
        total: deliveries.len(),
        in_flight: deliveries
            .iter()
            .filter(|d| d.status == DeliveryStatus::InTransit)
            .count(),
        packages: deliveries.iter().map(|d| d.packages).sum(),
        cost_saved: deliveries.iter().map(Delivery::cost_saved).sum(),
        hours_saved: deliveries
            .iter()
            .map(|d| d.traditional_hours - d.drone_hours)
            .sum(),
        co2_saved_kg: deliveries.iter().map(Delivery::co2_saved_kg).sum(),
        by_status: count_distribution(deliveries, |d| d.status.as_str().to_string()),
    }
}

/// Reorder-point banding for an inventory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Critical,
    Low,
    Healthy,
}

impl StockLevel {
    pub const ALL: [StockLevel; 3] = [StockLevel::Critical, StockLevel::Low, StockLevel::Healthy];

    /// Critical at or below half the reorder point, low at or below
    /// the point itself. Division keeps the comparison in range for
    /// any u32 quantity.
    pub fn of(item: &InventoryItem) -> Self {
        if item.quantity <= item.reorder_point / 2 {
            StockLevel::Critical
        } else if item.quantity <= item.reorder_point {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Critical => "Critical",
            StockLevel::Low => "Low",
            StockLevel::Healthy => "Healthy",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Critical => "stock-critical",
            StockLevel::Low => "stock-low",
            StockLevel::Healthy => "stock-healthy",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    pub line_items: usize,
    pub units: u32,
    pub stock_value: f64,
    pub critical: usize,
    pub low: usize,
    pub by_category: Distribution,
}

pub fn inventory_stats(items: &[InventoryItem]) -> InventoryStats {
    InventoryStats {
        line_items: items.len(),
        units: items.iter().map(|i| i.quantity).sum(),
        stock_value: items.iter().map(InventoryItem::stock_value).sum(),
        critical: items
            .iter()
            .filter(|i| StockLevel::of(i) == StockLevel::Critical)
            .count(),
        low: items
            .iter()
            .filter(|i| StockLevel::of(i) == StockLevel::Low)
            .count(),
        by_category: distribution(items, |i| i.category.clone(), |i| f64::from(i.quantity)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStats {
    pub count: usize,
    pub volume: f64,
    pub verified: usize,
    pub by_status: Distribution,
    pub volume_by_kind: Distribution,
}

pub fn transaction_stats(records: &[TransactionRecord]) -> TransactionStats {
    TransactionStats {
        count: records.len(),
        volume: records.iter().map(|t| t.amount).sum(),
        verified: records.iter().filter(|t| t.verified).count(),
        by_status: count_distribution(records, |t| t.status.as_str().to_string()),
        volume_by_kind: distribution(records, |t| t.kind.clone(), |t| t.amount),
    }
}

/// Vans and kiosks carry the same reporting shape, keyed by the area
/// they serve.
pub trait Outlet {
    fn area(&self) -> &str;
    fn status(&self) -> ServiceStatus;
    fn impact(&self) -> &SocialImpact;
    fn performance(&self) -> &PerformanceMetrics;
}

impl Outlet for Van {
    fn area(&self) -> &str {
        &self.district
    }
    fn status(&self) -> ServiceStatus {
        self.status
    }
    fn impact(&self) -> &SocialImpact {
        &self.impact
    }
    fn performance(&self) -> &PerformanceMetrics {
        &self.performance
    }
}

impl Outlet for Kiosk {
    fn area(&self) -> &str {
        &self.village
    }
    fn status(&self) -> ServiceStatus {
        self.status
    }
    fn impact(&self) -> &SocialImpact {
        &self.impact
    }
    fn performance(&self) -> &PerformanceMetrics {
        &self.performance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutletStats {
    pub outlets: usize,
    pub active: usize,
    pub maintenance: usize,
    pub households: u32,
    pub jobs: u32,
    pub monthly_revenue: f64,
    pub avg_uptime: f64,
    pub revenue_by_area: Distribution,
}

pub fn outlet_stats<T: Outlet>(outlets: &[T]) -> OutletStats {
    let avg_uptime = if outlets.is_empty() {
        0.0
    } else {
        outlets
            .iter()
            .map(|o| o.performance().uptime_percent)
            .sum::<f64>()
            / outlets.len() as f64
    };
    let active = outlets
        .iter()
        .filter(|o| o.status() == ServiceStatus::Active)
        .count();
    OutletStats {
        outlets: outlets.len(),
        active,
        maintenance: outlets.len() - active,
        households: outlets.iter().map(|o| o.impact().households_served).sum(),
        jobs: outlets.iter().map(|o| o.impact().jobs_created).sum(),
        monthly_revenue: outlets
            .iter()
            .map(|o| o.performance().monthly_revenue)
            .sum(),
        avg_uptime,
        revenue_by_area: distribution(
            outlets,
            |o| o.area().to_string(),
            |o| o.performance().monthly_revenue,
        ),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SustainabilityStats {
    pub co2_saved_kg: f64,
    pub avg_co2_per_flight_kg: f64,
    pub hours_saved: f64,
    pub cost_saved: f64,
    pub tree_years: f64,
    pub co2_by_destination: Distribution,
}

pub fn sustainability_stats(deliveries: &[Delivery]) -> SustainabilityStats {
    let co2_saved_kg: f64 = deliveries.iter().map(Delivery::co2_saved_kg).sum();
    let avg_co2_per_flight_kg = if deliveries.is_empty() {
        0.0
    } else {
        co2_saved_kg / deliveries.len() as f64
    };
    SustainabilityStats {
        co2_saved_kg,
        avg_co2_per_flight_kg,
        hours_saved: deliveries
            .iter()
            .map(|d| d.traditional_hours - d.drone_hours)
            .sum(),
        cost_saved: deliveries.iter().map(Delivery::cost_saved).sum(),
        tree_years: co2_saved_kg / TREE_ABSORPTION_KG,
        co2_by_destination: distribution(
            deliveries,
            |d| d.destination.clone(),
            Delivery::co2_saved_kg,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_groups_partition_the_total() {
        let items = seed::inventory();
        let dist = distribution(&items, |i| i.category.clone(), |i| f64::from(i.quantity));
        let group_sum: f64 = dist.groups.iter().map(|g| g.value).sum();
        assert!(close(group_sum, dist.total));
        let percent_sum: f64 = dist.groups.iter().map(|g| g.percent).sum();
        assert!(close(percent_sum, 1.0));
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let dist = count_distribution::<Delivery>(&[], |d| d.destination.clone());
        assert_eq!(dist.total, 0.0);
        assert!(dist.groups.is_empty());
    }

    #[test]
    fn test_zero_total_keeps_percentages_at_zero() {
        let items = seed::inventory();
        let dist = distribution(&items, |i| i.category.clone(), |_| 0.0);
        assert!(dist.groups.iter().all(|g| g.percent == 0.0));
    }

    #[test]
    fn test_groups_keep_first_occurrence_order() {
        let labels = ["B", "A", "B", "C", "A"];
        let dist = count_distribution(&labels, |l| l.to_string());
        let order: Vec<&str> = dist.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(dist.groups[0].value, 2.0);
    }

    #[test]
    fn test_stock_levels_band_on_reorder_point() {
        let mut item = seed::inventory().remove(0);
        item.reorder_point = 5;

        item.quantity = 2;
        assert_eq!(StockLevel::of(&item), StockLevel::Critical);
        item.quantity = 5;
        assert_eq!(StockLevel::of(&item), StockLevel::Low);
        item.quantity = 10;
        assert_eq!(StockLevel::of(&item), StockLevel::Healthy);
    }

    #[test]
    fn test_stock_levels_handle_extreme_quantities() {
        let mut item = seed::inventory().remove(0);
        item.quantity = u32::MAX;
        item.reorder_point = 10;
        assert_eq!(StockLevel::of(&item), StockLevel::Healthy);

        item.reorder_point = u32::MAX;
        assert_eq!(StockLevel::of(&item), StockLevel::Low);

        item.quantity = u32::MAX / 2;
        assert_eq!(StockLevel::of(&item), StockLevel::Critical);
    }

    #[test]
    fn test_healthy_additions_leave_the_critical_count_alone() {
        let mut scarce = seed::inventory().remove(0);
        scarce.quantity = 2;
        scarce.reorder_point = 5;
        let mut plenty = seed::inventory().remove(1);
        plenty.id = scarce.id + 1;
        plenty.quantity = 10;
        plenty.reorder_point = 5;

        let stats = inventory_stats(&[scarce, plenty]);
        assert_eq!(stats.line_items, 2);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.low, 0, "critical rows are not double-counted as low");
    }

    #[test]
    fn test_delivery_stats_sum_savings_across_rows() {
        let deliveries = seed::deliveries();
        let stats = delivery_stats(&deliveries);
        assert_eq!(stats.total, deliveries.len());
        let expected: f64 = deliveries
            .iter()
            .map(|d| d.traditional_cost - d.drone_cost)
            .sum();
        assert!(close(stats.cost_saved, expected));
        assert!(stats.hours_saved > 0.0);
        assert!(stats.co2_saved_kg > 0.0);
    }

    #[test]
    fn test_outlet_stats_split_active_from_maintenance() {
        let vans = seed::vans();
        let stats = outlet_stats(&vans);
        assert_eq!(stats.outlets, vans.len());
        assert_eq!(stats.active + stats.maintenance, stats.outlets);
        assert!(stats.avg_uptime > 0.0 && stats.avg_uptime <= 100.0);
        assert!(close(
            stats.revenue_by_area.total,
            stats.monthly_revenue
        ));

        let empty: Vec<crate::models::Van> = Vec::new();
        assert_eq!(outlet_stats(&empty).avg_uptime, 0.0);
    }

    #[test]
    fn test_transaction_stats_track_volume_and_verification() {
        let records = seed::transactions();
        let stats = transaction_stats(&records);
        let expected: f64 = records.iter().map(|t| t.amount).sum();
        assert!(close(stats.volume, expected));
        assert!(close(stats.volume_by_kind.total, stats.volume));
        assert_eq!(
            stats.verified,
            records.iter().filter(|t| t.verified).count()
        );
    }

    #[test]
    fn test_sustainability_averages_over_flights() {
        let deliveries = seed::deliveries();
        let stats = sustainability_stats(&deliveries);
        assert!(close(stats.tree_years * TREE_ABSORPTION_KG, stats.co2_saved_kg));
        assert!(close(
            stats.avg_co2_per_flight_kg * deliveries.len() as f64,
            stats.co2_saved_kg
        ));
        assert_eq!(sustainability_stats(&[]).avg_co2_per_flight_kg, 0.0);
    }
}
