//! Error handler registry used by [`Logger::handle_error`](super::Logger::handle_error)
//!
//! Handlers are keyed by a category string. By default the category of an
//! error is the type name of its statically known type, so registering with
//! [`ErrorRegistry::register_for`] and handling a value of the same type
//! always agree. An [`ErrorClassifier`] can override the key, which is also
//! the only way to route type-erased (`&dyn Error`) values to a specific
//! handler.

use std::any::type_name;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Receives an error after it has been logged.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, error: &(dyn Error + 'static));
}

impl<F> ErrorHandler for F
where
    F: Fn(&(dyn Error + 'static)) + Send + Sync,
{
    fn handle(&self, error: &(dyn Error + 'static)) {
        self(error)
    }
}

/// Maps an error to a handler key. Returning `None` keeps the default key.
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, error: &(dyn Error + 'static)) -> Option<String>;
}

impl<F> ErrorClassifier for F
where
    F: Fn(&(dyn Error + 'static)) -> Option<String> + Send + Sync,
{
    fn classify(&self, error: &(dyn Error + 'static)) -> Option<String> {
        self(error)
    }
}

/// Fallback handler: prints the error to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn handle(&self, error: &(dyn Error + 'static)) {
        eprintln!("Unhandled exception: {}", error);
    }
}

/// Key under which errors of type `E` are dispatched when no classifier
/// claims them.
pub fn error_key<E: ?Sized + 'static>() -> &'static str {
    type_name::<E>()
}

/// Category key to handler map plus a default handler.
#[derive(Clone)]
pub struct ErrorRegistry {
    handlers: HashMap<String, Arc<dyn ErrorHandler>>,
    default_handler: Arc<dyn ErrorHandler>,
    classifier: Option<Arc<dyn ErrorClassifier>>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            default_handler: Arc::new(DefaultErrorHandler),
            classifier: None,
        }
    }

    /// Register a handler for a key. A later registration for the same key
    /// replaces the earlier one.
    pub fn register(&mut self, key: impl Into<String>, handler: Arc<dyn ErrorHandler>) {
        self.handlers.insert(key.into(), handler);
    }

    /// Register a handler for errors whose static type is `E`.
    pub fn register_for<E: Error + 'static>(&mut self, handler: Arc<dyn ErrorHandler>) {
        self.register(error_key::<E>(), handler);
    }

    pub fn set_default(&mut self, handler: Arc<dyn ErrorHandler>) {
        self.default_handler = handler;
    }

    pub fn set_classifier(&mut self, classifier: Arc<dyn ErrorClassifier>) {
        self.classifier = Some(classifier);
    }

    /// Key for a statically typed error.
    pub fn key_for<E: Error + 'static>(&self, error: &E) -> String {
        self.classified(error)
            .unwrap_or_else(|| error_key::<E>().to_string())
    }

    /// Key for a type-erased error; only a classifier can name one.
    pub fn key_for_dyn(&self, error: &(dyn Error + 'static)) -> Option<String> {
        self.classified(error)
    }

    fn classified(&self, error: &(dyn Error + 'static)) -> Option<String> {
        self.classifier
            .as_ref()
            .and_then(|classifier| classifier.classify(error))
    }

    /// Handler registered for `key`, or the default handler.
    pub fn resolve(&self, key: Option<&str>) -> Arc<dyn ErrorHandler> {
        key.and_then(|k| self.handlers.get(k))
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.default_handler))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.handlers.keys().collect();
        keys.sort();
        f.debug_struct("ErrorRegistry")
            .field("handlers", &keys)
            .field("classifier", &self.classifier.is_some())
            .finish()
    }
}
