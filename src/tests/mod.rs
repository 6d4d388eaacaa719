//! Scenario tests for the EDID codec


mod counter_tests;
mod property_tests;
