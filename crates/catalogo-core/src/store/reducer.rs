// ── Product state reducer ──
//
// Pure, synchronous state transitions. `ProductStore::dispatch` is the
// only caller outside of tests.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::model::{Product, ProductsList};

/// State of the product list screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductState {
    /// True only while a request is in flight.
    pub is_loading: bool,
    pub filter_active: bool,
    pub product_list: ProductsList,
    /// First product of the last list or search response.
    pub current_product: Option<Product>,
    pub current_page: u32,
}

impl ProductState {
    /// Initial state with the given active-only filter.
    pub fn with_filter(filter_active: bool) -> Self {
        Self {
            filter_active,
            ..Self::default()
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.product_list.has_next_page()
    }
}

/// A state transition.
///
/// Serialized form is `{"type": "RECOVER_PRODUCT_LIST", "payload": {...}}`.
/// Any unknown `type` deserializes to [`StoreAction::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    LoadingTrue,
    LoadingFalse,
    RecoverProductList { list: ProductsList, page: u32 },
    FilterActiveProducts { active: bool },
    #[serde(other)]
    Unrecognized,
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(state: &ProductState, action: StoreAction) -> ProductState {
    match action {
        StoreAction::LoadingTrue => ProductState {
            is_loading: true,
            ..state.clone()
        },
        StoreAction::LoadingFalse => ProductState {
            is_loading: false,
            ..state.clone()
        },
        StoreAction::RecoverProductList { list, page } => ProductState {
            is_loading: false,
            current_product: list.list.first().cloned(),
            product_list: list,
            current_page: page,
            ..state.clone()
        },
        StoreAction::FilterActiveProducts { active } => ProductState {
            filter_active: active,
            current_page: 0,
            ..state.clone()
        },
        StoreAction::Unrecognized => state.clone(),
    }
}
