//! Request handlers.
//!
//! One submodule per panel: `admin` (table + form), `swipe` (card deck),
//! `view` (panel toggle), plus the health check. Handlers hold no state of
//! their own -- they drive the core view components and the store, and
//! every mutation path re-derives its view from the store rather than
//! patching anything incrementally.

pub mod admin;
pub mod health;
pub mod swipe;
pub mod view;
