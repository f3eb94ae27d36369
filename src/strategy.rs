// Strategy: different ways of preparing a drink.
//
// `PreparationContext` holds one algorithm behind a trait object and can swap
// it at runtime. `StaticPreparation` fixes the algorithm at compile time.

use log::debug;

use crate::phrasebook::Phrasebook;

/// Joins ingredients into the comma-separated clause used by every recipe.
pub fn ingredient_clause(ingredients: &[&str]) -> String {
    ingredients.join(", ")
}

pub trait PreparationAlgorithm {
    fn name(&self) -> &str;
    fn prepare(&self, ingredients: &[&str]) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct Espresso {
    phrases: &'static Phrasebook,
}

impl Espresso {
    pub fn new(phrases: &'static Phrasebook) -> Self {
        Self { phrases }
    }
}

impl Default for Espresso {
    fn default() -> Self {
        Self::new(Phrasebook::english())
    }
}

impl PreparationAlgorithm for Espresso {
    fn name(&self) -> &str {
        "espresso"
    }

    fn prepare(&self, ingredients: &[&str]) -> String {
        self.phrases.espresso(&ingredient_clause(ingredients))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Latte {
    phrases: &'static Phrasebook,
}

impl Latte {
    pub fn new(phrases: &'static Phrasebook) -> Self {
        Self { phrases }
    }
}

impl Default for Latte {
    fn default() -> Self {
        Self::new(Phrasebook::english())
    }
}

impl PreparationAlgorithm for Latte {
    fn name(&self) -> &str {
        "latte"
    }

    fn prepare(&self, ingredients: &[&str]) -> String {
        self.phrases.latte(&ingredient_clause(ingredients))
    }
}

// ============================================================================
// Runtime-swappable context
// ============================================================================

pub struct PreparationContext {
    algorithm: Box<dyn PreparationAlgorithm>,
}

impl PreparationContext {
    pub fn new(algorithm: Box<dyn PreparationAlgorithm>) -> Self {
        Self { algorithm }
    }

    pub fn set_strategy(&mut self, algorithm: Box<dyn PreparationAlgorithm>) {
        debug!(
            "switching preparation from {} to {}",
            self.algorithm.name(),
            algorithm.name()
        );
        self.algorithm = algorithm;
    }

    pub fn prepare_beverage(&self, ingredients: &[&str]) -> String {
        self.algorithm.prepare(ingredients)
    }

    pub fn strategy_name(&self) -> &str {
        self.algorithm.name()
    }
}

// ============================================================================
// Compile-time strategy
// ============================================================================

pub struct StaticPreparation<A> {
    algorithm: A,
}

impl<A: PreparationAlgorithm> StaticPreparation<A> {
    pub fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub fn prepare_beverage(&self, ingredients: &[&str]) -> String {
        self.algorithm.prepare(ingredients)
    }
}
