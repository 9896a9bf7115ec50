//! Unit tests for machine hardware.
