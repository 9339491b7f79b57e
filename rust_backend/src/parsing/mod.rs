//! Parsers for fitted-pipeline metadata descriptions.
//!
//! The fitting side exports the routing structure of a fitted pipeline as a
//! JSON description; [`json_parser`] turns that description into the domain
//! model.
//!
//! # Example
//!
//! ```no_run
//! use tabprep_rust::parsing::json_parser::parse_router_json;
//! use std::path::Path;
//!
//! let router = parse_router_json(Path::new("router.json"))
//!     .expect("Failed to parse router description");
//! ```

pub mod json_parser;
