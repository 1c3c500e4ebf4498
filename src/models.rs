//! Domain Models
//!
//! Plain records behind every dashboard, plus the app-level blobs
//! (session, toasts, chain status). Money fields are numeric here;
//! currency-formatted source strings are normalized on ingestion and
//! formatted back only in the view layer.

use serde::{Deserialize, Serialize};

/// Record ids are small monotonic integers allocated by the store.
pub type RecordId = u32;

/// Minimal contract for anything kept in a record store.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;
}

// ========================
// Status enums
// ========================

/// Delivery lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Completed,
}

impl DeliveryStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InTransit, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
        }
    }

    /// Next lifecycle stage, if any.
    pub fn advance(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InTransit),
            Self::InTransit => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

/// Transaction lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TransactionStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn advance(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

/// Vans and kiosks are either on the road or in the workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServiceStatus {
    #[default]
    Active,
    Maintenance,
}

impl ServiceStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Maintenance,
            Self::Maintenance => Self::Active,
        }
    }
}

// ========================
// Dashboard records
// ========================

/// One stop on a delivery route. Coordinates are optional; village
/// drop points are often known only by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Drone delivery record, with the traditional-transport figures kept
/// alongside for the savings comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: RecordId,
    pub origin: String,
    pub destination: String,
    pub status: DeliveryStatus,
    pub packages: u32,
    pub drone_cost: f64,
    pub traditional_cost: f64,
    pub drone_hours: f64,
    pub traditional_hours: f64,
    pub drone_co2_kg: f64,
    pub traditional_co2_kg: f64,
    pub route: Vec<Waypoint>,
    /// ISO date (YYYY-MM-DD), which also sorts lexically.
    pub scheduled_for: String,
}

impl Delivery {
    pub fn code(&self) -> String {
        format!("DL-{:03}", self.id)
    }

    pub fn cost_saved(&self) -> f64 {
        self.traditional_cost - self.drone_cost
    }

    pub fn co2_saved_kg(&self) -> f64 {
        self.traditional_co2_kg - self.drone_co2_kg
    }
}

/// Warehouse stock line. The warehouse is a loose name, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub reorder_point: u32,
    pub warehouse: String,
    pub unit_price: f64,
}

impl InventoryItem {
    pub fn code(&self) -> String {
        format!("INV-{:03}", self.id)
    }

    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    /// Quantity after a standard restock: one reorder batch on top,
    /// saturating at the u32 ceiling.
    pub fn restocked(&self) -> u32 {
        self.quantity.saturating_add(self.reorder_point)
    }
}

/// Ledger entry on the transparency screen. `verified` is a manual,
/// cosmetic flag; `tx_hash` holds the marker transaction from a live
/// chain, or a locally generated stand-in in demo mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: String,
    pub party: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub verified: bool,
    pub tx_hash: Option<String>,
    pub occurred_on: String,
}

impl TransactionRecord {
    pub fn code(&self) -> String {
        format!("TXN-{:03}", self.id)
    }
}

/// Social-impact counters shared by vans and kiosks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SocialImpact {
    pub households_served: u32,
    pub jobs_created: u32,
}

/// Month-over-month performance counters shared by vans and kiosks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PerformanceMetrics {
    pub monthly_revenue: f64,
    pub uptime_percent: f64,
}

/// Mobile retail van run by a village entrepreneur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Van {
    pub id: RecordId,
    pub owner: String,
    pub district: String,
    pub status: ServiceStatus,
    pub impact: SocialImpact,
    pub performance: PerformanceMetrics,
}

impl Van {
    pub fn code(&self) -> String {
        format!("VAN-{:02}", self.id)
    }
}

/// Fixed village kiosk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kiosk {
    pub id: RecordId,
    pub entrepreneur: String,
    pub village: String,
    pub status: ServiceStatus,
    pub impact: SocialImpact,
    pub performance: PerformanceMetrics,
}

impl Kiosk {
    pub fn code(&self) -> String {
        format!("KSK-{:02}", self.id)
    }
}

impl Entity for Delivery {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for TransactionRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Van {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Kiosk {
    fn id(&self) -> RecordId {
        self.id
    }
}

// ========================
// Session and app-level state
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: bool,
    pub newsletter: bool,
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            newsletter: false,
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub settings: UserSettings,
}

/// Demo session blob. The token is opaque and unsigned; its presence
/// in storage is the whole "authentication".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "toast info",
            Self::Success => "toast success",
            Self::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// What the ledger screen knows about the local chain. `live` is false
/// when the connector fell back to the bundled demo dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStatus {
    pub network_id: String,
    pub accounts: Vec<String>,
    pub balance_eth: f64,
    pub live: bool,
}

/// Today as an ISO date string, for freshly created records.
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycles_advance_forward_and_stop() {
        assert_eq!(
            DeliveryStatus::Pending.advance(),
            Some(DeliveryStatus::InTransit)
        );
        assert_eq!(
            DeliveryStatus::InTransit.advance(),
            Some(DeliveryStatus::Completed)
        );
        assert_eq!(DeliveryStatus::Completed.advance(), None);
        assert_eq!(TransactionStatus::Completed.advance(), None);
        assert_eq!(ServiceStatus::Active.toggled().toggled(), ServiceStatus::Active);
    }

    #[test]
    fn test_status_labels_survive_serialization() {
        let json = serde_json::to_string(&DeliveryStatus::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
        let back: DeliveryStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DeliveryStatus::InTransit);
        assert_eq!(
            serde_json::to_string(&TransactionStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
    }

    #[test]
    fn test_transaction_kind_serializes_as_type() {
        let record = TransactionRecord {
            id: 7,
            kind: "Crop Payment".to_string(),
            party: "Velhe Farmers Co-op".to_string(),
            amount: 45_000.0,
            status: TransactionStatus::Pending,
            verified: false,
            tx_hash: None,
            occurred_on: "2026-08-25".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"Crop Payment\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_restock_saturates_instead_of_wrapping() {
        let mut item = crate::seed::inventory().remove(0);
        item.quantity = 4;
        item.reorder_point = 25;
        assert_eq!(item.restocked(), 29);

        item.quantity = u32::MAX - 10;
        assert_eq!(item.restocked(), u32::MAX);
    }

    #[test]
    fn test_display_codes_are_zero_padded() {
        let delivery = Delivery {
            id: 3,
            origin: String::new(),
            destination: String::new(),
            status: DeliveryStatus::Pending,
            packages: 0,
            drone_cost: 0.0,
            traditional_cost: 0.0,
            drone_hours: 0.0,
            traditional_hours: 0.0,
            drone_co2_kg: 0.0,
            traditional_co2_kg: 0.0,
            route: Vec::new(),
            scheduled_for: String::new(),
        };
        assert_eq!(delivery.code(), "DL-003");
        let van = Van {
            id: 12,
            owner: String::new(),
            district: String::new(),
            status: ServiceStatus::Active,
            impact: SocialImpact::default(),
            performance: PerformanceMetrics::default(),
        };
        assert_eq!(van.code(), "VAN-12");
    }
}
