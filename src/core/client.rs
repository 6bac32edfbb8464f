use crate::core::marshaller::Marshaller;
use crate::domain::ports::{Shape, Transport, TransportFailure};
use crate::model::errors::SsmServiceError;
use crate::utils::error::{ModelError, Result};
use tracing::{debug, warn};

/// Drives one request/response exchange: shape check against the operation,
/// encode, send, then decode the result or the service error.
pub struct ServiceClient<T: Transport> {
    transport: T,
    marshaller: Marshaller,
}

impl<T: Transport> ServiceClient<T> {
    pub fn new(transport: T, marshaller: Marshaller) -> Self {
        Self {
            transport,
            marshaller,
        }
    }

    pub fn marshaller(&self) -> &Marshaller {
        &self.marshaller
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn invoke<I: Shape, O: Shape>(&self, operation: &str, input: &I) -> Result<O> {
        let descriptor = self.marshaller.registry().operation(operation)?;
        for (expected, actual) in [
            (descriptor.input(), I::SHAPE_NAME),
            (descriptor.output(), O::SHAPE_NAME),
        ] {
            if expected != actual {
                return Err(ModelError::ShapeMismatch {
                    operation: operation.to_string(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        let payload = self.marshaller.encode(input)?;
        debug!(operation, "sending request");

        match self.transport.send(operation, payload).await {
            Ok(response) => {
                debug!(operation, "received response");
                self.marshaller.decode::<O>(&response)
            }
            Err(TransportFailure::Service { code, payload }) => {
                let fault = self.marshaller.decode_fault(&code, &payload);
                if !descriptor.declares_error(&fault.code) {
                    warn!(operation, code = %fault.code, "service returned an undeclared error");
                }
                Err(ModelError::Service(SsmServiceError::from(fault)))
            }
            Err(TransportFailure::Client { message }) => {
                warn!(operation, %message, "transport failure");
                Err(ModelError::TransportError { message })
            }
        }
    }
}
