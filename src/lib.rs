pub mod classifiers;
pub mod core;
pub mod error;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
