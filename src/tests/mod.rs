mod registry_tests;
mod validation_tests;
