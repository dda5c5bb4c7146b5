use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::{self, EXTRA_PAGE_PRICE, INCLUDED_PAGES};
use super::money::format_inr;
use super::state::CalculatorState;
use crate::shared::domain::ServiceType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BreakdownLine {
    pub label: String,
    pub price: i64,
    pub formatted_price: String,
}

impl BreakdownLine {
    fn new(label: String, price: i64) -> Self {
        Self {
            label,
            price,
            formatted_price: format_inr(price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Estimate {
    pub base_price: i64,
    pub addons_total: i64,
    pub total: i64,
    pub formatted_total: String,
    pub delivery_days: u32,
    pub breakdown: Vec<BreakdownLine>,
}

impl Estimate {
    pub fn empty() -> Self {
        Self {
            base_price: 0,
            addons_total: 0,
            total: 0,
            formatted_total: format_inr(0),
            delivery_days: 0,
            breakdown: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("Package {index} does not exist for {service}")]
    UnknownPackage { service: ServiceType, index: usize },
}

/// Price the current selection. Add-ons are listed in catalog order and
/// unknown add-on ids are ignored.
pub fn estimate(state: &CalculatorState) -> Result<Estimate, EstimateError> {
    let (service, index) = match (state.service, state.package_index) {
        (Some(service), Some(index)) => (service, index),
        _ => return Ok(Estimate::empty()),
    };

    let entry = catalog::for_service(service);
    let package = entry
        .packages
        .get(index)
        .ok_or(EstimateError::UnknownPackage { service, index })?;

    let mut breakdown = Vec::new();
    let mut base_price = package.base_price;

    if entry.charges_per_page() && state.pages > INCLUDED_PAGES {
        let extra_pages = i64::from(state.pages - INCLUDED_PAGES);
        base_price += extra_pages * EXTRA_PAGE_PRICE;
        breakdown.push(BreakdownLine::new(
            format!("{} Package ({} pages)", package.name, state.pages),
            base_price,
        ));
    } else {
        breakdown.push(BreakdownLine::new(
            format!("{} Package", package.name),
            base_price,
        ));
    }

    let mut addons_total = 0;
    for addon in entry.addons.iter().filter(|a| state.has_addon(a.id)) {
        breakdown.push(BreakdownLine::new(addon.name.to_string(), addon.price));
        addons_total += addon.price;
    }

    let total = base_price + addons_total;

    Ok(Estimate {
        base_price,
        addons_total,
        total,
        formatted_total: format_inr(total),
        delivery_days: package.delivery_days,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(
        service: Option<ServiceType>,
        package_index: Option<usize>,
        pages: u32,
        addons: &[&str],
    ) -> CalculatorState {
        CalculatorState {
            service,
            package_index,
            addons: addons.iter().map(|a| a.to_string()).collect(),
            pages,
        }
    }

    #[test]
    fn web_dev_extra_pages_and_seo() {
        let result = estimate(&state(Some(ServiceType::WebDev), Some(0), 8, &["seo"])).unwrap();

        assert_eq!(result.base_price, 21_000);
        assert_eq!(result.addons_total, 8_000);
        assert_eq!(result.total, 29_000);
        assert_eq!(result.formatted_total, "₹29,000");
        assert_eq!(result.delivery_days, 7);
        assert_eq!(
            result.breakdown,
            vec![
                BreakdownLine::new("Basic Package (8 pages)".to_string(), 21_000),
                BreakdownLine::new("SEO Optimization".to_string(), 8_000),
            ]
        );
    }

    #[test]
    fn web_dev_within_included_pages_has_plain_label() {
        let result =
            estimate(&state(Some(ServiceType::WebDev), Some(1), 5, &["cms"])).unwrap();

        assert_eq!(result.total, 40_000);
        assert_eq!(result.breakdown[0].label, "Professional Package");
        assert_eq!(result.breakdown[0].price, 35_000);
    }

    #[test]
    fn pages_are_ignored_outside_web_dev() {
        let result = estimate(&state(Some(ServiceType::Saas), Some(1), 40, &[])).unwrap();

        assert_eq!(result.total, 100_000);
        assert_eq!(result.breakdown[0].label, "Standard Package");
        assert_eq!(result.delivery_days, 45);
    }

    #[test]
    fn addons_follow_catalog_order_not_selection_order() {
        let result = estimate(&state(
            Some(ServiceType::Android),
            Some(0),
            5,
            &["playstore", "ios", "push"],
        ))
        .unwrap();

        let labels: Vec<_> = result.breakdown.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Basic Package",
                "iOS Version",
                "Push Notifications",
                "Play Store Publishing"
            ]
        );
        assert_eq!(result.total, 40_000 + 35_000 + 8_000 + 5_000);
    }

    #[test]
    fn unknown_addons_are_inert() {
        let result = estimate(&state(
            Some(ServiceType::Custom),
            Some(2),
            5,
            &["teleport", "support"],
        ))
        .unwrap();

        assert_eq!(result.addons_total, 15_000);
        assert_eq!(result.breakdown.len(), 2);
    }

    #[test]
    fn missing_service_or_package_is_zero() {
        assert_eq!(estimate(&state(None, Some(0), 5, &["seo"])).unwrap(), Estimate::empty());
        assert_eq!(
            estimate(&state(Some(ServiceType::WebDev), None, 9, &["seo"])).unwrap(),
            Estimate::empty()
        );
    }

    #[test]
    fn out_of_range_package_is_an_error() {
        let err = estimate(&state(Some(ServiceType::Saas), Some(3), 5, &[])).unwrap_err();
        assert_eq!(
            err,
            EstimateError::UnknownPackage {
                service: ServiceType::Saas,
                index: 3
            }
        );
    }

    #[test]
    fn total_is_base_plus_addons() {
        for service in ServiceType::ALL {
            for index in 0..3 {
                for pages in [1, 5, 6, 12] {
                    let s = state(Some(service), Some(index), pages, &["api", "analytics", "seo"]);
                    let e = estimate(&s).unwrap();
                    assert_eq!(e.total, e.base_price + e.addons_total);
                    let sum: i64 = e.breakdown.iter().map(|l| l.price).sum();
                    assert_eq!(sum, e.total);
                }
            }
        }
    }
}
