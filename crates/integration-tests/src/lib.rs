//! End-to-end tests for Pictor live under `tests/`
