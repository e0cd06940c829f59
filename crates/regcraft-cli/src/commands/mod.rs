pub mod build;
pub mod find;
pub mod helpers;
pub mod input_loader;

#[cfg(test)]
mod build_tests;
