//! Adapters Layer - concrete implementations of application ports

pub mod gateways;
