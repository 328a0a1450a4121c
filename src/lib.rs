//! Core library for the `covidash` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, dataset loading, the metrics engine that
//! filters records and derives ratios and rolling averages, and the text,
//! PNG, and terminal renderers. The primary user-facing interface is the
//! `covidash` command-line application.
pub mod args;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod summary;
pub mod ui;
