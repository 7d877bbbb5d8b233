//! Property-based tests for exact rational arithmetic.
