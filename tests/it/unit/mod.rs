//! Unit tests for worldcanvas.

mod types_tests;
