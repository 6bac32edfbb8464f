pub mod config;
pub mod core;
pub mod domain;
pub mod model;
pub mod utils;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{MarshallerConfig, ServiceModelFile};

pub use crate::core::{Marshaller, ModelRegistry, ServiceClient, ServiceFault};
pub use domain::ports::{PaginatedResponse, Shape, Transport, TransportFailure, WireEnum, WireValue};
pub use model::{ssm_registry, SsmClient, SsmServiceError};
pub use utils::error::{ModelError, Result};
