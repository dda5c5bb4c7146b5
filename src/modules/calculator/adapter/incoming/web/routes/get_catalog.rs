use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    calculator::application::domain::{
        catalog, format_inr, ServiceCatalog, EXTRA_PAGE_PRICE, INCLUDED_PAGES,
    },
    shared::{api::ApiResponse, domain::ServiceType},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogPackageDto {
    pub index: usize,
    pub name: String,
    pub base_price: i64,
    pub formatted_price: String,
    pub delivery_days: u32,
    pub popular: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogAddonDto {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub formatted_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogServiceDto {
    pub id: ServiceType,
    pub name: String,
    pub packages: Vec<CatalogPackageDto>,
    pub addons: Vec<CatalogAddonDto>,
    /// Whether the page counter affects the price
    pub charges_per_page: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub included_pages: u32,
    pub extra_page_price: i64,
    pub services: Vec<CatalogServiceDto>,
}

impl From<&ServiceCatalog> for CatalogServiceDto {
    fn from(entry: &ServiceCatalog) -> Self {
        Self {
            id: entry.service,
            name: entry.name().to_string(),
            packages: entry
                .packages
                .iter()
                .enumerate()
                .map(|(index, p)| CatalogPackageDto {
                    index,
                    name: p.name.to_string(),
                    base_price: p.base_price,
                    formatted_price: format_inr(p.base_price),
                    delivery_days: p.delivery_days,
                    popular: p.popular,
                })
                .collect(),
            addons: entry
                .addons
                .iter()
                .map(|a| CatalogAddonDto {
                    id: a.id.to_string(),
                    name: a.name.to_string(),
                    price: a.price,
                    formatted_price: format_inr(a.price),
                })
                .collect(),
            charges_per_page: entry.charges_per_page(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/calculator/catalog",
    tag = "calculator",
    responses(
        (status = 200, description = "Fixed pricing catalog", body = CatalogResponse)
    )
)]
#[get("/api/calculator/catalog")]
pub async fn get_catalog_handler() -> impl Responder {
    ApiResponse::success(CatalogResponse {
        included_pages: INCLUDED_PAGES,
        extra_page_price: EXTRA_PAGE_PRICE,
        services: catalog().iter().map(CatalogServiceDto::from).collect(),
    })
}
