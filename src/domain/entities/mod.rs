//! Core domain entities.
//!
//! The service has a single entity, [`Redirect`], which is both the stored
//! record and the payload exchanged over the wire.

pub mod redirect;

pub use redirect::Redirect;
