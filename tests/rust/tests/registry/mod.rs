//! Registry integration tests with a mock HTTP server.

mod finder;
