// catalogo-core: product store, coordinator and theme services.
//
// Consumers build a `CatalogConfig`, hand it to `Catalog`, and observe
// state through `StateStream` subscriptions and the notification channel.

pub mod catalog;
pub mod config;
mod convert;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
pub mod stream;
pub mod task;
pub mod theme;
pub mod validation;

pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_ITEMS_PER_PAGE};
pub use error::{CoreError, FailureKind};
pub use model::{NewProduct, Product, ProductForm, ProductUpdate, ProductsList};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use store::{ProductState, ProductStore, StoreAction, reduce};
pub use stream::StateStream;
pub use task::OperationHandle;
pub use theme::{AppState, ColorScheme, FontSizes, ScreenMetrics, ThemeState, ThemeStore};
pub use validation::{Field, ValidationError};
