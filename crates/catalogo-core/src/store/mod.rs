// ── Product store ──
//
// The reducer and the state container it mutates.

mod product_store;
mod reducer;

pub use product_store::ProductStore;
pub use reducer::{ProductState, StoreAction, reduce};
