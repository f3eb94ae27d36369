// Café Patterns: four classic design patterns at a café counter.

//! # Café Patterns
//!
//! Each module shows one pattern on its own:
//!
//! - [`manager`]: Singleton (`OnceLock`), one café manager per process
//! - [`factory`]: Factory Method (trait objects, enums), coffee and tea
//! - [`notifier`]: Observer (trait objects), baristas hearing about orders
//! - [`strategy`]: Strategy (trait objects, generics), espresso or latte
//!
//! Labels come from a [`phrasebook::Phrasebook`], English by default.
//!
//! Run the demonstration with:
//! ```bash
//! cargo run --bin cafe_demo
//! ```

pub mod error;
pub mod factory;
pub mod manager;
pub mod notifier;
pub mod phrasebook;
pub mod strategy;

pub use crate::error::{CatalogError, NotifyError};
pub use crate::factory::{Beverage, BeverageCreator, BeverageKind, CoffeeCreator, TeaCreator};
pub use crate::manager::CafeManager;
pub use crate::notifier::{Barista, Listener, ListenerId, OrderSource};
pub use crate::phrasebook::{Locale, Phrasebook};
pub use crate::strategy::{Espresso, Latte, PreparationAlgorithm, PreparationContext};
