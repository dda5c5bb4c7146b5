use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::INCLUDED_PAGES;
use crate::shared::domain::ServiceType;

/// Selections made on the calculator page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalculatorState {
    pub service: Option<ServiceType>,
    pub package_index: Option<usize>,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_pages() -> u32 {
    INCLUDED_PAGES
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            service: None,
            package_index: None,
            addons: Vec::new(),
            pages: INCLUDED_PAGES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculatorAction {
    SelectService { service: ServiceType },
    SelectPackage { index: usize },
    ToggleAddon { id: String },
    IncrementPages,
    DecrementPages,
}

impl CalculatorState {
    pub fn apply(mut self, action: CalculatorAction) -> Self {
        match action {
            CalculatorAction::SelectService { service } => Self {
                service: Some(service),
                ..Self::default()
            },
            CalculatorAction::SelectPackage { index } => {
                self.package_index = Some(index);
                self
            }
            CalculatorAction::ToggleAddon { id } => {
                if let Some(pos) = self.addons.iter().position(|a| *a == id) {
                    self.addons.remove(pos);
                } else {
                    self.addons.push(id);
                }
                self
            }
            CalculatorAction::IncrementPages => {
                self.pages = self.pages.saturating_add(1);
                self
            }
            CalculatorAction::DecrementPages => {
                self.pages = self.pages.saturating_sub(1).max(1);
                self
            }
        }
    }

    pub fn has_addon(&self, id: &str) -> bool {
        self.addons.iter().any(|a| a == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> CalculatorState {
        CalculatorState::default()
            .apply(CalculatorAction::SelectService {
                service: ServiceType::WebDev,
            })
            .apply(CalculatorAction::SelectPackage { index: 1 })
            .apply(CalculatorAction::ToggleAddon {
                id: "seo".to_string(),
            })
            .apply(CalculatorAction::IncrementPages)
    }

    #[test]
    fn starts_empty_with_five_pages() {
        let state = CalculatorState::default();
        assert_eq!(state.service, None);
        assert_eq!(state.package_index, None);
        assert!(state.addons.is_empty());
        assert_eq!(state.pages, 5);
    }

    #[test]
    fn selecting_a_service_resets_everything_else() {
        let state = configured();
        assert_eq!(state.pages, 6);
        assert!(state.has_addon("seo"));

        let state = state.apply(CalculatorAction::SelectService {
            service: ServiceType::Saas,
        });

        assert_eq!(state.service, Some(ServiceType::Saas));
        assert_eq!(state.package_index, None);
        assert!(state.addons.is_empty());
        assert_eq!(state.pages, 5);
    }

    #[test]
    fn reselecting_the_same_service_also_resets() {
        let state = configured().apply(CalculatorAction::SelectService {
            service: ServiceType::WebDev,
        });
        assert_eq!(state.package_index, None);
        assert!(state.addons.is_empty());
    }

    #[test]
    fn toggling_twice_removes_the_addon() {
        let state = configured().apply(CalculatorAction::ToggleAddon {
            id: "seo".to_string(),
        });
        assert!(!state.has_addon("seo"));
    }

    #[test]
    fn pages_never_drop_below_one() {
        let mut state = CalculatorState::default();
        for _ in 0..10 {
            state = state.apply(CalculatorAction::DecrementPages);
        }
        assert_eq!(state.pages, 1);
    }

    #[test]
    fn pages_have_no_ceiling() {
        let mut state = CalculatorState::default();
        for _ in 0..200 {
            state = state.apply(CalculatorAction::IncrementPages);
        }
        assert_eq!(state.pages, 205);
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: CalculatorAction =
            serde_json::from_str(r#"{"type":"select_service","service":"android"}"#).unwrap();
        assert_eq!(
            action,
            CalculatorAction::SelectService {
                service: ServiceType::Android
            }
        );

        let action: CalculatorAction =
            serde_json::from_str(r#"{"type":"decrement_pages"}"#).unwrap();
        assert_eq!(action, CalculatorAction::DecrementPages);
    }
}
