//! Gateways - port implementations backed by concrete stores

pub mod memory_document_gateway;

pub use memory_document_gateway::MemoryDocumentGateway;
