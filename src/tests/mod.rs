//! Cross-module acceptance tests.
