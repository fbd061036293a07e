//! Email delivery adapters. Implement DeliveryPort.
//!
//! EmailJS REST adapter for production and a mock for tests/offline use.

pub mod emailjs;
pub mod mock;

pub use emailjs::EmailJsDelivery;
pub use mock::MockDelivery;
