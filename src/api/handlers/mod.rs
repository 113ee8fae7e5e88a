//! HTTP request handlers.

pub mod redirect;
pub mod store;

pub use redirect::redirect_handler;
pub use store::store_handler;
