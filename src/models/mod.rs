//! Domain model types for perishable-first delivery routing.
//!
//! Provides the core abstractions: items with a closed set of kinds,
//! routes as validated visit orders over all locations, and the
//! diagnostics computed over a finished route.

mod item;
mod quality;
mod route;

pub use item::{Item, ItemKind};
pub use quality::{RouteQuality, RouteSummary};
pub use route::Route;
