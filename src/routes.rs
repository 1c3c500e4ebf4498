//! Pages
//!
//! Client-side page identity. Navigation swaps a `Page` value in the
//! app store; paths exist so a direct URL lands on the right screen
//! and the address bar stays honest.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Pricing,
    Investors,
    Login,
    Register,
    Profile,
    DroneDashboard,
    InventoryDashboard,
    VansDashboard,
    KiosksDashboard,
    ChainDashboard,
    SustainabilityDashboard,
}

/// Dashboard pages in nav order.
pub const DASHBOARDS: [Page; 6] = [
    Page::DroneDashboard,
    Page::InventoryDashboard,
    Page::VansDashboard,
    Page::KiosksDashboard,
    Page::ChainDashboard,
    Page::SustainabilityDashboard,
];

impl Page {
    /// Maps a location pathname to a page. Unknown paths land on Home.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::Home,
            "/pricing" => Page::Pricing,
            "/investors" => Page::Investors,
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/profile" => Page::Profile,
            "/dashboard/drone" => Page::DroneDashboard,
            "/dashboard/inventory" => Page::InventoryDashboard,
            "/dashboard/vans" => Page::VansDashboard,
            "/dashboard/kiosks" => Page::KiosksDashboard,
            "/dashboard/chain" => Page::ChainDashboard,
            "/dashboard/sustainability" => Page::SustainabilityDashboard,
            _ => Page::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Pricing => "/pricing",
            Page::Investors => "/investors",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Profile => "/profile",
            Page::DroneDashboard => "/dashboard/drone",
            Page::InventoryDashboard => "/dashboard/inventory",
            Page::VansDashboard => "/dashboard/vans",
            Page::KiosksDashboard => "/dashboard/kiosks",
            Page::ChainDashboard => "/dashboard/chain",
            Page::SustainabilityDashboard => "/dashboard/sustainability",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Pricing => "Pricing",
            Page::Investors => "Investors",
            Page::Login => "Sign In",
            Page::Register => "Create Account",
            Page::Profile => "Profile",
            Page::DroneDashboard => "Drone Deliveries",
            Page::InventoryDashboard => "Inventory",
            Page::VansDashboard => "Mobile Vans",
            Page::KiosksDashboard => "Village Kiosks",
            Page::ChainDashboard => "Transparency Ledger",
            Page::SustainabilityDashboard => "Sustainability",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        DASHBOARDS.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Page; 12] = [
        Page::Home,
        Page::Pricing,
        Page::Investors,
        Page::Login,
        Page::Register,
        Page::Profile,
        Page::DroneDashboard,
        Page::InventoryDashboard,
        Page::VansDashboard,
        Page::KiosksDashboard,
        Page::ChainDashboard,
        Page::SustainabilityDashboard,
    ];

    #[test]
    fn test_paths_round_trip() {
        for page in ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_trailing_slashes_are_tolerated() {
        assert_eq!(Page::from_path("/pricing/"), Page::Pricing);
        assert_eq!(Page::from_path("/dashboard/drone/"), Page::DroneDashboard);
    }

    #[test]
    fn test_unknown_paths_land_on_home() {
        assert_eq!(Page::from_path("/no-such-page"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn test_dashboards_are_flagged() {
        for page in DASHBOARDS {
            assert!(page.is_dashboard());
        }
        assert!(!Page::Home.is_dashboard());
        assert!(!Page::Login.is_dashboard());
    }
}
