//! Demo Datasets
//!
//! First-run data for every store, themed on the western Maharashtra
//! pilot. Money figures are written the way the ops team supplies them
//! (rupee strings with grouping) and normalized through
//! [`parse_amount`] on the way in, so stored records only ever carry
//! plain numbers.

use crate::models::{
    Delivery, DeliveryStatus, InventoryItem, Kiosk, PerformanceMetrics, ServiceStatus,
    SocialImpact, TransactionRecord, TransactionStatus, Van, Waypoint,
};
use crate::money::parse_amount;

fn stop(name: &str, lat: f64, lng: f64) -> Waypoint {
    Waypoint {
        name: name.to_string(),
        lat: Some(lat),
        lng: Some(lng),
    }
}

/// Village relay point that has not been surveyed yet.
fn relay(name: &str) -> Waypoint {
    Waypoint {
        name: name.to_string(),
        lat: None,
        lng: None,
    }
}

pub fn deliveries() -> Vec<Delivery> {
    vec![
        Delivery {
            id: 1,
            origin: "Pune Hub".to_string(),
            destination: "Velhe".to_string(),
            status: DeliveryStatus::Completed,
            packages: 6,
            drone_cost: parse_amount("₹850"),
            traditional_cost: parse_amount("₹2,400"),
            drone_hours: 0.8,
            traditional_hours: 5.5,
            drone_co2_kg: 1.2,
            traditional_co2_kg: 9.6,
            route: vec![
                stop("Pune Hub", 18.5204, 73.8567),
                relay("Nasrapur Relay"),
                stop("Velhe", 18.2942, 73.6375),
            ],
            scheduled_for: "2026-08-18".to_string(),
        },
        Delivery {
            id: 2,
            origin: "Pune Hub".to_string(),
            destination: "Bhor".to_string(),
            status: DeliveryStatus::Completed,
            packages: 4,
            drone_cost: parse_amount("₹720"),
            traditional_cost: parse_amount("₹1,950"),
            drone_hours: 0.6,
            traditional_hours: 4.0,
            drone_co2_kg: 0.9,
            traditional_co2_kg: 7.1,
            route: vec![
                stop("Pune Hub", 18.5204, 73.8567),
                stop("Bhor", 18.1486, 73.8433),
            ],
            scheduled_for: "2026-08-20".to_string(),
        },
        Delivery {
            id: 3,
            origin: "Nashik Depot".to_string(),
            destination: "Trimbakeshwar".to_string(),
            status: DeliveryStatus::InTransit,
            packages: 9,
            drone_cost: parse_amount("₹1,100"),
            traditional_cost: parse_amount("₹3,200"),
            drone_hours: 1.1,
            traditional_hours: 6.5,
            drone_co2_kg: 1.6,
            traditional_co2_kg: 12.4,
            route: vec![
                stop("Nashik Depot", 19.9975, 73.7898),
                relay("Anjaneri Relay"),
                stop("Trimbakeshwar", 19.9322, 73.5294),
            ],
            scheduled_for: "2026-08-24".to_string(),
        },
        Delivery {
            id: 4,
            origin: "Nashik Depot".to_string(),
            destination: "Jawhar".to_string(),
            status: DeliveryStatus::InTransit,
            packages: 12,
            drone_cost: parse_amount("₹1,450"),
            traditional_cost: parse_amount("₹4,100"),
            drone_hours: 1.4,
            traditional_hours: 8.0,
            drone_co2_kg: 2.1,
            traditional_co2_kg: 15.8,
            route: vec![
                stop("Nashik Depot", 19.9975, 73.7898),
                relay("Mokhada Relay"),
                stop("Jawhar", 19.9126, 73.2271),
            ],
            scheduled_for: "2026-08-25".to_string(),
        },
        Delivery {
            id: 5,
            origin: "Pune Hub".to_string(),
            destination: "Mulshi".to_string(),
            status: DeliveryStatus::Pending,
            packages: 3,
            drone_cost: parse_amount("₹640"),
            traditional_cost: parse_amount("₹1,700"),
            drone_hours: 0.5,
            traditional_hours: 3.5,
            drone_co2_kg: 0.7,
            traditional_co2_kg: 6.2,
            route: vec![
                stop("Pune Hub", 18.5204, 73.8567),
                stop("Mulshi", 18.5326, 73.5121),
            ],
            scheduled_for: "2026-08-27".to_string(),
        },
        Delivery {
            id: 6,
            origin: "Satara Depot".to_string(),
            destination: "Koyna Valley".to_string(),
            status: DeliveryStatus::Pending,
            packages: 8,
            drone_cost: parse_amount("₹1,250"),
            traditional_cost: parse_amount("₹3,600"),
            drone_hours: 1.2,
            traditional_hours: 7.0,
            drone_co2_kg: 1.8,
            traditional_co2_kg: 13.5,
            route: vec![
                stop("Satara Depot", 17.6805, 74.0183),
                relay("Bamnoli Relay"),
                relay("Tapola Relay"),
                stop("Koyna Valley", 17.4054, 73.7442),
            ],
            scheduled_for: "2026-08-28".to_string(),
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "Basmati Rice".to_string(),
            category: "Grains".to_string(),
            quantity: 340,
            reorder_point: 120,
            warehouse: "Pune Hub".to_string(),
            unit_price: parse_amount("₹92"),
        },
        InventoryItem {
            id: 2,
            name: "Wheat Flour".to_string(),
            category: "Grains".to_string(),
            quantity: 95,
            reorder_point: 150,
            warehouse: "Pune Hub".to_string(),
            unit_price: parse_amount("₹48"),
        },
        InventoryItem {
            id: 3,
            name: "ORS Sachets".to_string(),
            category: "Medicines".to_string(),
            quantity: 40,
            reorder_point: 100,
            warehouse: "Nashik Depot".to_string(),
            unit_price: parse_amount("₹21"),
        },
        InventoryItem {
            id: 4,
            name: "Paracetamol Strips".to_string(),
            category: "Medicines".to_string(),
            quantity: 410,
            reorder_point: 200,
            warehouse: "Nashik Depot".to_string(),
            unit_price: parse_amount("₹30"),
        },
        InventoryItem {
            id: 5,
            name: "Toned Milk Packets".to_string(),
            category: "Dairy".to_string(),
            quantity: 180,
            reorder_point: 80,
            warehouse: "Satara Depot".to_string(),
            unit_price: parse_amount("₹27"),
        },
        InventoryItem {
            id: 6,
            name: "Drip Irrigation Kits".to_string(),
            category: "Farm Supplies".to_string(),
            quantity: 26,
            reorder_point: 20,
            warehouse: "Pune Hub".to_string(),
            unit_price: parse_amount("₹2,150"),
        },
        InventoryItem {
            id: 7,
            name: "Urea Bags".to_string(),
            category: "Farm Supplies".to_string(),
            quantity: 75,
            reorder_point: 90,
            warehouse: "Satara Depot".to_string(),
            unit_price: parse_amount("₹267"),
        },
        InventoryItem {
            id: 8,
            name: "Solar Lanterns".to_string(),
            category: "Electronics".to_string(),
            quantity: 58,
            reorder_point: 25,
            warehouse: "Nashik Depot".to_string(),
            unit_price: parse_amount("₹1,499"),
        },
    ]
}

pub fn transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord {
            id: 1,
            kind: "Crop Payment".to_string(),
            party: "Velhe Farmers Co-op".to_string(),
            amount: parse_amount("₹45,000"),
            status: TransactionStatus::Completed,
            verified: true,
            tx_hash: Some("0x3f8a1c92d4e6b7a0c5d9e2f413b8a67d".to_string()),
            occurred_on: "2026-08-12".to_string(),
        },
        TransactionRecord {
            id: 2,
            kind: "Subsidy Disbursal".to_string(),
            party: "Bhor Dairy Union".to_string(),
            amount: parse_amount("₹1,20,000"),
            status: TransactionStatus::Completed,
            verified: true,
            tx_hash: Some("0x91b04e7f2a8c6d1e3f5a7b9c0d2e4f68".to_string()),
            occurred_on: "2026-08-15".to_string(),
        },
        TransactionRecord {
            id: 3,
            kind: "Kiosk Commission".to_string(),
            party: "Kavita Shinde".to_string(),
            amount: parse_amount("₹8,500"),
            status: TransactionStatus::Completed,
            verified: false,
            tx_hash: None,
            occurred_on: "2026-08-19".to_string(),
        },
        TransactionRecord {
            id: 4,
            kind: "Van Lease".to_string(),
            party: "Ramesh Patil".to_string(),
            amount: parse_amount("₹15,000"),
            status: TransactionStatus::InProgress,
            verified: false,
            tx_hash: None,
            occurred_on: "2026-08-22".to_string(),
        },
        TransactionRecord {
            id: 5,
            kind: "Input Purchase".to_string(),
            party: "Mulshi Agro Stores".to_string(),
            amount: parse_amount("₹62,300"),
            status: TransactionStatus::InProgress,
            verified: false,
            tx_hash: None,
            occurred_on: "2026-08-24".to_string(),
        },
        TransactionRecord {
            id: 6,
            kind: "Crop Payment".to_string(),
            party: "Koyna Grape Growers".to_string(),
            amount: parse_amount("₹78,000"),
            status: TransactionStatus::Pending,
            verified: false,
            tx_hash: None,
            occurred_on: "2026-08-25".to_string(),
        },
    ]
}

pub fn vans() -> Vec<Van> {
    vec![
        Van {
            id: 1,
            owner: "Ramesh Patil".to_string(),
            district: "Pune".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 430,
                jobs_created: 3,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹72,500"),
                uptime_percent: 97.2,
            },
        },
        Van {
            id: 2,
            owner: "Sunita Deshmukh".to_string(),
            district: "Satara".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 510,
                jobs_created: 4,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹81,200"),
                uptime_percent: 98.6,
            },
        },
        Van {
            id: 3,
            owner: "Vilas Jadhav".to_string(),
            district: "Nashik".to_string(),
            status: ServiceStatus::Maintenance,
            impact: SocialImpact {
                households_served: 360,
                jobs_created: 2,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹54,800"),
                uptime_percent: 88.4,
            },
        },
        Van {
            id: 4,
            owner: "Asha Chavan".to_string(),
            district: "Pune".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 295,
                jobs_created: 2,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹48,900"),
                uptime_percent: 95.1,
            },
        },
    ]
}

pub fn kiosks() -> Vec<Kiosk> {
    vec![
        Kiosk {
            id: 1,
            entrepreneur: "Kavita Shinde".to_string(),
            village: "Velhe".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 220,
                jobs_created: 2,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹38,400"),
                uptime_percent: 99.1,
            },
        },
        Kiosk {
            id: 2,
            entrepreneur: "Prakash Gaikwad".to_string(),
            village: "Bhor".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 270,
                jobs_created: 3,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹41,750"),
                uptime_percent: 97.8,
            },
        },
        Kiosk {
            id: 3,
            entrepreneur: "Meera Kulkarni".to_string(),
            village: "Jawhar".to_string(),
            status: ServiceStatus::Maintenance,
            impact: SocialImpact {
                households_served: 185,
                jobs_created: 1,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹22,600"),
                uptime_percent: 84.9,
            },
        },
        Kiosk {
            id: 4,
            entrepreneur: "Dattatray More".to_string(),
            village: "Tapola".to_string(),
            status: ServiceStatus::Active,
            impact: SocialImpact {
                households_served: 160,
                jobs_created: 1,
            },
            performance: PerformanceMetrics {
                monthly_revenue: parse_amount("₹27,300"),
                uptime_percent: 96.3,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, RecordId};

    fn assert_unique_ids<T: Entity>(items: &[T]) {
        let mut ids: Vec<RecordId> = items.iter().map(Entity::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_every_collection_has_unique_ids() {
        assert_unique_ids(&deliveries());
        assert_unique_ids(&inventory());
        assert_unique_ids(&transactions());
        assert_unique_ids(&vans());
        assert_unique_ids(&kiosks());
    }

    #[test]
    fn test_rupee_strings_become_plain_numbers() {
        assert!(transactions().iter().all(|t| t.amount > 0.0));
        assert_eq!(transactions()[1].amount, 120_000.0);
        assert_eq!(vans()[0].performance.monthly_revenue, 72_500.0);
    }

    #[test]
    fn test_drone_figures_undercut_traditional_transport() {
        for d in deliveries() {
            assert!(d.drone_cost < d.traditional_cost, "{}", d.code());
            assert!(d.drone_co2_kg < d.traditional_co2_kg, "{}", d.code());
            assert!(d.route.len() >= 2, "{}", d.code());
        }
    }

    #[test]
    fn test_stock_bands_cover_all_three_levels() {
        use crate::stats::StockLevel;
        let items = inventory();
        let has = |level: StockLevel| items.iter().any(|i| StockLevel::of(i) == level);
        assert!(has(StockLevel::Critical));
        assert!(has(StockLevel::Low));
        assert!(has(StockLevel::Healthy));
    }

    #[test]
    fn test_verified_transactions_carry_a_hash() {
        for t in transactions() {
            assert_eq!(t.verified, t.tx_hash.is_some(), "{}", t.code());
        }
    }
}
