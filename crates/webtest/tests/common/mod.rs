//! Common test utilities for harness integration tests.
//!
//! This module provides test infrastructure including:
//!
//! - [`app`] - The application under test
//! - [`assertions`] - JSON body assertions

pub mod app;
pub mod assertions;
