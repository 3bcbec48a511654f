//! Ports: extension points implemented by code that consumes states.

pub mod observer;

pub use observer::StateObserver;
