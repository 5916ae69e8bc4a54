//! Executor tests, one file per statement form.

mod compound_tests;
mod expr_tests;
mod harness;
mod return_tests;
