//! Application Ports - interfaces the hosting environment implements

pub mod document_port;

pub use document_port::{AttrMap, DocumentError, DocumentPort, NodeHandle, NullDocumentPort};
