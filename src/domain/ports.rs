use crate::domain::schema::{EnumDescriptor, FieldType, ShapeDescriptor};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Conversion between a typed value and its wire payload.
pub trait WireValue: Sized {
    fn field_type() -> FieldType;

    fn to_wire(&self) -> Value;

    /// `path` names the value in error messages.
    fn from_wire(value: &Value, path: &str) -> Result<Self>;

    /// The value as it survives a trip over the wire. Builders store this form so a
    /// decoded shape equals the one that was encoded.
    fn canonical(self) -> Self {
        self
    }
}

/// A request, response or nested structure.
pub trait Shape: WireValue + Clone + PartialEq + Eq + Hash + Debug + Display + Send + Sync {
    const SHAPE_NAME: &'static str;

    fn describe() -> Result<ShapeDescriptor>;
}

/// A closed set of wire strings.
pub trait WireEnum: Sized + Copy + Eq + Display + 'static {
    const ENUM_NAME: &'static str;
    const VALUES: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn from_value(raw: &str) -> Result<Self>;

    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::new(Self::ENUM_NAME, Self::VALUES.iter().copied())
    }
}

/// List-style responses that hand back an opaque continuation token.
pub trait PaginatedResponse {
    fn next_token(&self) -> Option<&str>;

    fn has_more(&self) -> bool {
        self.next_token().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone)]
pub enum TransportFailure {
    /// The service answered with an error code and an error body.
    Service { code: String, payload: Value },
    /// The request never produced a service answer.
    Client { message: String },
}

/// Sends encoded payloads to the service. Signing, retries and the byte-level
/// protocol live behind this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        operation: &str,
        payload: Value,
    ) -> std::result::Result<Value, TransportFailure>;
}
