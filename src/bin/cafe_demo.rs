// Café Patterns demo: Singleton, Factory Method, Observer, Strategy
// Runs each pattern once and prints what the café counter would say.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use cafe_patterns::{
    Barista, BeverageCreator, CafeManager, CoffeeCreator, Espresso, Latte, Locale, OrderSource,
    Phrasebook, PreparationContext, TeaCreator,
};
use colored::Colorize;

// ============================================================================
// Example: Singleton
// ============================================================================

fn singleton_example(phrases: &Phrasebook) {
    let manager1 = CafeManager::global();
    let manager2 = CafeManager::global();
    println!("{}", phrases.manager_identity(CafeManager::is_same(manager1, manager2)));
}

// ============================================================================
// Example: Factory Method
// ============================================================================

fn factory_example(phrases: &'static Phrasebook) {
    let coffee = CoffeeCreator::new(phrases).create_beverage();
    println!("{}", coffee.prepare());

    let tea = TeaCreator::new(phrases).create_beverage();
    println!("{}", tea.prepare());
}

// ============================================================================
// Example: Observer
// ============================================================================

fn observer_example(phrases: &'static Phrasebook) -> Result<()> {
    let mut orders = OrderSource::new();
    let barista = Rc::new(RefCell::new(Barista::new("Olena", phrases)));
    orders
        .attach(barista.clone())
        .context("attaching the barista to the order source")?;

    orders.notify(phrases.new_order());
    Ok(())
}

// ============================================================================
// Example: Strategy
// ============================================================================

fn strategy_example(phrases: &'static Phrasebook) {
    let mut context = PreparationContext::new(Box::new(Espresso::new(phrases)));
    println!("{}", context.prepare_beverage(&phrases.espresso_ingredients()));

    context.set_strategy(Box::new(Latte::new(phrases)));
    println!("{}", context.prepare_beverage(&phrases.latte_ingredients()));
}

fn section(title: &str) {
    println!("{}", format!("=== {} ===", title).bold());
}

fn main() -> Result<()> {
    env_logger::init();

    let phrases = Phrasebook::load(Locale::default()).context("loading the phrasebook")?;

    section("Singleton Pattern");
    singleton_example(phrases);
    println!();

    section("Factory Method Pattern");
    factory_example(phrases);
    println!();

    section("Observer Pattern");
    observer_example(phrases)?;
    println!();

    section("Strategy Pattern");
    strategy_example(phrases);

    Ok(())
}
