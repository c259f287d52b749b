//! Engine Integration Tests
//!
//! End-to-end tests through the public `jsontext` API, organized by area:
//! - scenarios: the canonical request/response walkthroughs
//! - classification: operator vs expression vs invalid
//! - operators: `->`, `->>`, `#>` against real documents
//! - jsonpath: the supported expression subset
//! - shaping: json / array / silverstripe return modes
//! - mutation: bulk updates and document rewriting
//! - config: `jsontext.toml` driven fields
//! - properties: proptest invariants

#[path = "../common/mod.rs"]
mod common;

mod classification;
mod config;
mod jsonpath;
mod mutation;
mod operators;
mod properties;
mod scenarios;
mod shaping;
