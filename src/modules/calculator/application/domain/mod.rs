pub mod catalog;
pub mod estimate;
pub mod money;
pub mod state;

pub use catalog::{
    catalog, for_service, AddonOption, PackageOption, ServiceCatalog, EXTRA_PAGE_PRICE,
    INCLUDED_PAGES,
};
pub use estimate::{estimate, BreakdownLine, Estimate, EstimateError};
pub use money::format_inr;
pub use state::{CalculatorAction, CalculatorState};
