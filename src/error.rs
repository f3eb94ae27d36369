// Error types shared by the café components.
//
// Only the phrasebook loader and a bounded order source can fail; every
// pattern operation itself is total.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse phrasebook '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("phrasebook '{locale}': field '{field}' must contain the '{placeholder}' placeholder")]
    MissingPlaceholder {
        locale: String,
        field: &'static str,
        placeholder: &'static str,
    },

    #[error("unknown locale: '{0}' (expected 'en' or 'uk')")]
    UnknownLocale(String),

    #[error("unknown beverage: '{0}' (expected 'coffee' or 'tea')")]
    UnknownBeverage(String),
}

impl CatalogError {
    pub fn parse(locale: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Parse {
            locale: locale.into(),
            source,
        }
    }

    pub fn missing_placeholder(
        locale: impl Into<String>,
        field: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self::MissingPlaceholder {
            locale: locale.into(),
            field,
            placeholder,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("order source is full: at most {limit} listeners may be attached")]
    SubscriberLimit { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_message() {
        let err = CatalogError::UnknownLocale("fr".to_string());
        assert_eq!(err.to_string(), "unknown locale: 'fr' (expected 'en' or 'uk')");
    }

    #[test]
    fn test_missing_placeholder_message() {
        let err = CatalogError::missing_placeholder("uk", "latte", "{ingredients}");
        let msg = err.to_string();
        assert!(msg.contains("'latte'"));
        assert!(msg.contains("{ingredients}"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = toml::from_str::<toml::Value>("coffee = ").unwrap_err();
        let err = CatalogError::parse("uk", source);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to parse phrasebook 'uk'"));
    }

    #[test]
    fn test_subscriber_limit_message() {
        let err = NotifyError::SubscriberLimit { limit: 2 };
        assert!(err.to_string().contains("at most 2 listeners"));
    }
}
