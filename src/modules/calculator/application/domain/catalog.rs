use crate::shared::domain::ServiceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageOption {
    pub name: &'static str,
    pub base_price: i64,
    pub delivery_days: u32,
    pub popular: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddonOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCatalog {
    pub service: ServiceType,
    pub packages: &'static [PackageOption],
    pub addons: &'static [AddonOption],
}

/// Pages included in every web package before the per-page surcharge.
pub const INCLUDED_PAGES: u32 = 5;
pub const EXTRA_PAGE_PRICE: i64 = 2000;

const fn package(name: &'static str, base_price: i64, delivery_days: u32) -> PackageOption {
    PackageOption {
        name,
        base_price,
        delivery_days,
        popular: false,
    }
}

const fn popular(name: &'static str, base_price: i64, delivery_days: u32) -> PackageOption {
    PackageOption {
        name,
        base_price,
        delivery_days,
        popular: true,
    }
}

const fn addon(id: &'static str, name: &'static str, price: i64) -> AddonOption {
    AddonOption { id, name, price }
}

static CATALOG: [ServiceCatalog; 4] = [
    ServiceCatalog {
        service: ServiceType::WebDev,
        packages: &[
            package("Basic", 15_000, 7),
            popular("Professional", 35_000, 14),
            package("Enterprise", 75_000, 30),
        ],
        addons: &[
            addon("cms", "CMS Integration", 5_000),
            addon("ecommerce", "E-commerce (up to 50 products)", 15_000),
            addon("seo", "SEO Optimization", 8_000),
            addon("analytics", "Analytics Setup", 3_000),
            addon("hosting", "1 Year Hosting", 5_000),
            addon("maintenance", "6 Months Maintenance", 12_000),
        ],
    },
    ServiceCatalog {
        service: ServiceType::Saas,
        packages: &[
            package("MVP", 50_000, 21),
            popular("Standard", 100_000, 45),
            package("Enterprise", 200_000, 90),
        ],
        addons: &[
            addon("auth", "Advanced Auth (OAuth, 2FA)", 15_000),
            addon("billing", "Subscription Billing", 20_000),
            addon("dashboard", "Admin Dashboard", 25_000),
            addon("api", "Public API", 30_000),
            addon("notifications", "Email/Push Notifications", 10_000),
            addon("analytics", "Analytics Dashboard", 18_000),
        ],
    },
    ServiceCatalog {
        service: ServiceType::Android,
        packages: &[
            package("Basic", 40_000, 21),
            popular("Professional", 80_000, 45),
            package("Enterprise", 150_000, 75),
        ],
        addons: &[
            addon("ios", "iOS Version", 35_000),
            addon("push", "Push Notifications", 8_000),
            addon("offline", "Offline Mode", 15_000),
            addon("payment", "Payment Integration", 12_000),
            addon("maps", "Maps Integration", 10_000),
            addon("playstore", "Play Store Publishing", 5_000),
        ],
    },
    ServiceCatalog {
        service: ServiceType::Custom,
        packages: &[
            package("Small Project", 25_000, 14),
            popular("Medium Project", 60_000, 30),
            package("Large Project", 120_000, 60),
        ],
        addons: &[
            addon("api", "REST API Development", 20_000),
            addon("integration", "Third-party Integration", 15_000),
            addon("automation", "Automation Scripts", 10_000),
            addon("migration", "Data Migration", 18_000),
            addon("documentation", "Technical Documentation", 8_000),
            addon("support", "3 Months Support", 15_000),
        ],
    },
];

pub fn catalog() -> &'static [ServiceCatalog] {
    &CATALOG
}

pub fn for_service(service: ServiceType) -> &'static ServiceCatalog {
    match service {
        ServiceType::WebDev => &CATALOG[0],
        ServiceType::Saas => &CATALOG[1],
        ServiceType::Android => &CATALOG[2],
        ServiceType::Custom => &CATALOG[3],
    }
}

impl ServiceCatalog {
    pub fn name(&self) -> &'static str {
        self.service.display_name()
    }

    /// Only web projects are priced per page.
    pub fn charges_per_page(&self) -> bool {
        self.service == ServiceType::WebDev
    }
}
