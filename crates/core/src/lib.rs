//! Domain logic for the pawmatch adoption app.
//!
//! Everything in this crate is pure and synchronous: the pet record and its
//! seed collection, form validation, the filter/sort engine behind the admin
//! table, and the swipe session state machine. Persistence lives in
//! `pawmatch-store`; the HTTP surface lives in `pawmatch-api`.

pub mod error;
pub mod filter;
pub mod form;
pub mod pet;
pub mod swipe;
pub mod table;
pub mod types;
