//! Cardex
//!
//! Terminal viewer for a trading card catalog: fetches the catalog once, then
//! supports incremental search, name suggestions, pagination and a detail
//! view of the selected card.
//!
//! Pure Core / Impure Shell: `state` holds every transition as plain data
//! manipulation; `source` and `view` own the network and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
