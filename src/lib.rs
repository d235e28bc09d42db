//! Arbgen - Dart localization class generator for Flutter projects
//!
//! Arbgen is a CLI tool and library that reads ARB resource files
//! (`strings_<locale>.arb`) and generates a single Dart source file exposing
//! typed accessors for localized strings: plain getters, parametrized methods,
//! and plural dispatch methods, plus a locale-resolution delegate.
//!
//! ## Module Structure
//!
//! - `arb`: ARB bundle loading (locale discovery, metadata filtering)
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `generator`: Core classification and code-emission engine
//! - `sink`: Output document abstraction (change-gated atomic writes)

pub mod arb;
pub mod cli;
pub mod config;
pub mod generator;
pub mod sink;
