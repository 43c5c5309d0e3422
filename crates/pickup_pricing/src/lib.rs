pub mod features;
pub mod pricing;
pub mod rides;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
