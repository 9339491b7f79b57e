//! Core domain models for fitted preprocessing pipelines.
//!
//! This module defines the fundamental data structures used throughout the
//! tabprep backend, representing column-routing structures, step chains, and
//! column selectors.

pub mod domain;
