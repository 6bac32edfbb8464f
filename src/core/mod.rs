pub mod client;
pub mod macros;
pub mod marshaller;
pub mod registry;
pub mod wire;

pub use crate::domain::ports::{PaginatedResponse, Shape, Transport, TransportFailure, WireEnum, WireValue};
pub use crate::utils::error::Result;
pub use client::ServiceClient;
pub use marshaller::{Marshaller, ServiceFault};
pub use registry::ModelRegistry;
