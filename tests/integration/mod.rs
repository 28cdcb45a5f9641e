//! Integration test modules.

mod analytics_integration_test;
mod runs_file_test;
