// Localized labels for the café counter.
//
// English is compiled in and always available. Other locales are TOML files
// embedded at build time; any field a locale leaves out falls back to English.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use log::info;
use serde::Deserialize;

use crate::error::CatalogError;

const UKRAINIAN_TOML: &str = include_str!("../locales/uk.toml");

const SAME: &str = "{same}";
const MESSAGE: &str = "{message}";
const INGREDIENTS: &str = "{ingredients}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Ukrainian,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Ukrainian => "uk",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "uk" => Ok(Locale::Ukrainian),
            _ => Err(CatalogError::UnknownLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Phrasebook {
    manager_identity: String,
    true_text: String,
    false_text: String,
    coffee: String,
    tea: String,
    order_received: String,
    new_order: String,
    espresso: String,
    latte: String,
    espresso_ingredients: Vec<String>,
    latte_ingredients: Vec<String>,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            manager_identity: "Manager instances are the same: {same}".to_string(),
            true_text: "true".to_string(),
            false_text: "false".to_string(),
            coffee: "Preparing coffee".to_string(),
            tea: "Preparing tea".to_string(),
            order_received: "Barista received the order: {message}".to_string(),
            new_order: "New order: Cappuccino".to_string(),
            espresso: "Preparing espresso with {ingredients}".to_string(),
            latte: "Preparing latte with {ingredients}".to_string(),
            espresso_ingredients: vec!["water".to_string(), "coffee beans".to_string()],
            latte_ingredients: vec!["milk".to_string(), "coffee beans".to_string()],
        }
    }
}

impl Phrasebook {
    /// The built-in English phrasebook.
    pub fn english() -> &'static Phrasebook {
        static ENGLISH: OnceLock<Phrasebook> = OnceLock::new();
        ENGLISH.get_or_init(Phrasebook::default)
    }

    /// Returns the phrasebook for `locale`, parsing it on first use.
    pub fn load(locale: Locale) -> Result<&'static Phrasebook, CatalogError> {
        static UKRAINIAN: OnceLock<Phrasebook> = OnceLock::new();

        match locale {
            Locale::English => Ok(Self::english()),
            Locale::Ukrainian => {
                if let Some(phrases) = UKRAINIAN.get() {
                    return Ok(phrases);
                }
                let parsed = Self::from_toml(locale.code(), UKRAINIAN_TOML)?;
                info!("loaded phrasebook '{}'", locale);
                Ok(UKRAINIAN.get_or_init(|| parsed))
            }
        }
    }

    /// Parses and validates a phrasebook from TOML text.
    pub fn from_toml(locale: &str, text: &str) -> Result<Phrasebook, CatalogError> {
        let phrases: Phrasebook =
            toml::from_str(text).map_err(|source| CatalogError::parse(locale, source))?;
        phrases.validate(locale)?;
        Ok(phrases)
    }

    fn validate(&self, locale: &str) -> Result<(), CatalogError> {
        let templates = [
            ("manager_identity", &self.manager_identity, SAME),
            ("order_received", &self.order_received, MESSAGE),
            ("espresso", &self.espresso, INGREDIENTS),
            ("latte", &self.latte, INGREDIENTS),
        ];

        for (field, template, placeholder) in templates {
            if !template.contains(placeholder) {
                return Err(CatalogError::missing_placeholder(locale, field, placeholder));
            }
        }
        Ok(())
    }

    pub fn manager_identity(&self, same: bool) -> String {
        let word = if same { &self.true_text } else { &self.false_text };
        self.manager_identity.replace(SAME, word)
    }

    pub fn coffee(&self) -> &str {
        &self.coffee
    }

    pub fn tea(&self) -> &str {
        &self.tea
    }

    pub fn order_received(&self, message: &str) -> String {
        self.order_received.replace(MESSAGE, message)
    }

    pub fn new_order(&self) -> &str {
        &self.new_order
    }

    pub fn espresso(&self, clause: &str) -> String {
        self.espresso.replace(INGREDIENTS, clause)
    }

    pub fn latte(&self, clause: &str) -> String {
        self.latte.replace(INGREDIENTS, clause)
    }

    pub fn espresso_ingredients(&self) -> Vec<&str> {
        self.espresso_ingredients.iter().map(String::as_str).collect()
    }

    pub fn latte_ingredients(&self) -> Vec<&str> {
        self.latte_ingredients.iter().map(String::as_str).collect()
    }
}
