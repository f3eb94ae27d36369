// Factory Method: producing the different kinds of drinks.
//
// Each creator decides which concrete beverage it hands out. The enum-based
// `BeverageKind` picks a creator by name when the choice is only known at
// runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::phrasebook::Phrasebook;

// ============================================================================
// Beverages
// ============================================================================

/// A drink that can be prepared.
///
/// Every beverage must say how it is prepared; an implementation that leaves
/// `prepare` out does not compile:
///
/// ```compile_fail
/// use cafe_patterns::factory::{Beverage, BeverageKind};
///
/// #[derive(Debug)]
/// struct Cocoa;
///
/// impl Beverage for Cocoa {
///     fn kind(&self) -> BeverageKind {
///         BeverageKind::Coffee
///     }
/// }
/// ```
pub trait Beverage: fmt::Debug {
    fn kind(&self) -> BeverageKind;
    fn prepare(&self) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct Coffee {
    phrases: &'static Phrasebook,
}

impl Beverage for Coffee {
    fn kind(&self) -> BeverageKind {
        BeverageKind::Coffee
    }

    fn prepare(&self) -> String {
        self.phrases.coffee().to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tea {
    phrases: &'static Phrasebook,
}

impl Beverage for Tea {
    fn kind(&self) -> BeverageKind {
        BeverageKind::Tea
    }

    fn prepare(&self) -> String {
        self.phrases.tea().to_string()
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait BeverageCreator {
    fn create_beverage(&self) -> Box<dyn Beverage>;
}

#[derive(Debug, Clone, Copy)]
pub struct CoffeeCreator {
    phrases: &'static Phrasebook,
}

impl CoffeeCreator {
    pub fn new(phrases: &'static Phrasebook) -> Self {
        Self { phrases }
    }
}

impl Default for CoffeeCreator {
    fn default() -> Self {
        Self::new(Phrasebook::english())
    }
}

impl BeverageCreator for CoffeeCreator {
    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Coffee {
            phrases: self.phrases,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TeaCreator {
    phrases: &'static Phrasebook,
}

impl TeaCreator {
    pub fn new(phrases: &'static Phrasebook) -> Self {
        Self { phrases }
    }
}

impl Default for TeaCreator {
    fn default() -> Self {
        Self::new(Phrasebook::english())
    }
}

impl BeverageCreator for TeaCreator {
    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Tea {
            phrases: self.phrases,
        })
    }
}

// ============================================================================
// Enum-based selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeverageKind {
    Coffee,
    Tea,
}

impl BeverageKind {
    pub const ALL: [BeverageKind; 2] = [BeverageKind::Coffee, BeverageKind::Tea];

    pub fn name(self) -> &'static str {
        match self {
            BeverageKind::Coffee => "coffee",
            BeverageKind::Tea => "tea",
        }
    }

    pub fn creator(self, phrases: &'static Phrasebook) -> Box<dyn BeverageCreator> {
        match self {
            BeverageKind::Coffee => Box::new(CoffeeCreator::new(phrases)),
            BeverageKind::Tea => Box::new(TeaCreator::new(phrases)),
        }
    }

    pub fn brew(self, phrases: &'static Phrasebook) -> Box<dyn Beverage> {
        self.creator(phrases).create_beverage()
    }
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BeverageKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BeverageKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownBeverage(s.to_string()))
    }
}
