//! Explicit type registry.
//!
//! Configuration entities only carry implementation names (`type`
//! attributes) and their parameters. Hosts turn those into objects through
//! a [`TypeResolver`]; [`TypeRegistry`] is the stock implementation, a map
//! from names to factory functions populated before loading.

use crate::error::Result;
use crate::params::Parameters;
use std::collections::BTreeMap;
use std::fmt;

/// Resolves an implementation name plus parameters into an instance.
pub trait TypeResolver<T> {
    /// Returns `Ok(None)` when nothing is registered under `name`.
    fn resolve(&self, name: &str, params: &Parameters) -> Result<Option<T>>;
}

type Factory<T> = Box<dyn Fn(&Parameters) -> Result<T> + Send + Sync>;

/// Name to factory mapping.
pub struct TypeRegistry<T> {
    factories: BTreeMap<String, Factory<T>>,
}

impl<T> Default for TypeRegistry<T> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
}

impl<T> fmt::Debug for TypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> TypeRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&Parameters) -> Result<T> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl<T> TypeResolver<T> for TypeRegistry<T> {
    fn resolve(&self, name: &str, params: &Parameters) -> Result<Option<T>> {
        match self.factories.get(name) {
            Some(factory) => factory(params).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::model::TransformationConfig;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct HeaderWriter {
        year: String,
    }

    fn registry() -> TypeRegistry<HeaderWriter> {
        let mut registry = TypeRegistry::new();
        registry.register("license-header", |params: &Parameters| {
            let year = params
                .get("year")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ConfigError::invalid("license-header requires a year"))?;
            Ok(HeaderWriter {
                year: year.to_string(),
            })
        });
        registry
    }

    #[test]
    fn test_resolve_registered_type_with_params() {
        let mut transformation = TransformationConfig::new("license-header");
        transformation
            .parameters
            .insert("year".to_string(), json!("2024"));

        let resolved = registry()
            .resolve(&transformation.type_name, &transformation.parameters)
            .unwrap();
        assert_eq!(
            resolved,
            Some(HeaderWriter {
                year: "2024".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_unknown_type_is_not_found() {
        let resolved = registry().resolve("missing", &Parameters::new()).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_factory_errors_propagate() {
        let err = registry()
            .resolve("license-header", &Parameters::new())
            .unwrap_err();
        assert!(err.to_string().contains("requires a year"));
    }

    #[test]
    fn test_register_replaces_and_lists_names() {
        let mut registry = registry();
        registry.register("license-header", |_: &Parameters| {
            Ok(HeaderWriter {
                year: "fixed".to_string(),
            })
        });
        registry.register("a-first", |_: &Parameters| {
            Ok(HeaderWriter {
                year: String::new(),
            })
        });

        assert!(registry.contains("license-header"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a-first", "license-header"]);
        let resolved = registry
            .resolve("license-header", &Parameters::new())
            .unwrap()
            .unwrap();
        assert_eq!(resolved.year, "fixed");
    }
}
