//! Integration Tests Module
//!
//! End-to-end tests for the survey feedback service. All tests run against
//! in-memory SQLite databases via `Database::new_in_memory()` and a scripted
//! completion provider; no real model calls are made.

// Shared scripted completion provider
mod support;

// Question generation, parsing, and persistence pipeline tests
mod question_pipeline_test;

// Full survey flow: responses, answers, analytics, CSV export
mod survey_flow_test;
