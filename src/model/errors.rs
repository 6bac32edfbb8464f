//! Service errors returned by SSM, one variant per wire error code.
//!
//! Every variant carries the service message; a handful also carry the diagnostic
//! fields their code defines. Those fields are optional and may be missing even
//! when the service normally sends them.

use crate::core::marshaller::ServiceFault;
use crate::domain::schema::{ErrorDescriptor, FieldDescriptor, FieldType};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SsmServiceError {
    #[error("AssociationAlreadyExists: {message}")]
    AssociationAlreadyExists { message: String },

    #[error("AssociationLimitExceeded: {message}")]
    AssociationLimitExceeded { message: String },

    #[error("IdempotentParameterMismatch: {message}")]
    IdempotentParameterMismatch { message: String },

    #[error("InternalServerError: {message}")]
    InternalServerError { message: String },

    #[error("InvalidAggregatorException: {message}")]
    InvalidAggregator { message: String },

    #[error("InvalidDocument: {message}")]
    InvalidDocument { message: String },

    #[error("InvalidDocumentVersion: {message}")]
    InvalidDocumentVersion { message: String },

    #[error("InvalidFilter: {message}")]
    InvalidFilter { message: String },

    #[error("InvalidFilterKey: {message}")]
    InvalidFilterKey { message: String },

    #[error("InvalidInstanceId: {message}")]
    InvalidInstanceId { message: String },

    #[error("InvalidInstanceInformationFilterValue: {message}")]
    InvalidInstanceInformationFilterValue { message: String },

    #[error("InvalidInventoryGroupException: {message}")]
    InvalidInventoryGroup { message: String },

    #[error("InvalidNextToken: {message}")]
    InvalidNextToken { message: String },

    #[error("InvalidOutputLocation: {message}")]
    InvalidOutputLocation { message: String },

    #[error("InvalidParameters: {message}")]
    InvalidParameters { message: String },

    #[error("InvalidResourceId: {message}")]
    InvalidResourceId { message: String },

    #[error("InvalidResourceType: {message}")]
    InvalidResourceType { message: String },

    #[error("InvalidResultAttributeException: {message}")]
    InvalidResultAttribute { message: String },

    #[error("InvalidSchedule: {message}")]
    InvalidSchedule { message: String },

    #[error("InvalidTarget: {message}")]
    InvalidTarget { message: String },

    #[error("InvalidTypeNameException: {message}")]
    InvalidTypeName { message: String },

    #[error("OpsItemAlreadyExistsException: {message}")]
    OpsItemAlreadyExists {
        message: String,
        ops_item_id: Option<String>,
    },

    #[error("OpsItemInvalidParameterException: {message}")]
    OpsItemInvalidParameter {
        message: String,
        parameter_names: Option<Vec<String>>,
    },

    #[error("OpsItemLimitExceededException: {message}")]
    OpsItemLimitExceeded {
        message: String,
        resource_types: Option<Vec<String>>,
        limit: Option<i32>,
        limit_type: Option<String>,
    },

    #[error("ResourceDataSyncInvalidConfigurationException: {message}")]
    ResourceDataSyncInvalidConfiguration { message: String },

    #[error("ResourceDataSyncNotFoundException: {message}")]
    ResourceDataSyncNotFound {
        message: String,
        sync_name: Option<String>,
        sync_type: Option<String>,
    },

    #[error("ResourceLimitExceededException: {message}")]
    ResourceLimitExceeded { message: String },

    #[error("TooManyTagsError: {message}")]
    TooManyTagsError { message: String },

    #[error("TooManyUpdates: {message}")]
    TooManyUpdates { message: String },

    #[error("UnsupportedPlatformType: {message}")]
    UnsupportedPlatformType { message: String },

    /// A code this crate does not model.
    #[error("{code}: {message}")]
    Unknown { code: String, message: String },
}

/// Wire codes without diagnostic fields.
const PLAIN_CODES: &[&str] = &[
    "AssociationAlreadyExists",
    "AssociationLimitExceeded",
    "IdempotentParameterMismatch",
    "InternalServerError",
    "InvalidAggregatorException",
    "InvalidDocument",
    "InvalidDocumentVersion",
    "InvalidFilter",
    "InvalidFilterKey",
    "InvalidInstanceId",
    "InvalidInstanceInformationFilterValue",
    "InvalidInventoryGroupException",
    "InvalidNextToken",
    "InvalidOutputLocation",
    "InvalidParameters",
    "InvalidResourceId",
    "InvalidResourceType",
    "InvalidResultAttributeException",
    "InvalidSchedule",
    "InvalidTarget",
    "InvalidTypeNameException",
    "ResourceDataSyncInvalidConfigurationException",
    "ResourceLimitExceededException",
    "TooManyTagsError",
    "TooManyUpdates",
    "UnsupportedPlatformType",
];

impl SsmServiceError {
    /// The wire error code.
    pub fn code(&self) -> &str {
        use SsmServiceError::*;
        match self {
            AssociationAlreadyExists { .. } => "AssociationAlreadyExists",
            AssociationLimitExceeded { .. } => "AssociationLimitExceeded",
            IdempotentParameterMismatch { .. } => "IdempotentParameterMismatch",
            InternalServerError { .. } => "InternalServerError",
            InvalidAggregator { .. } => "InvalidAggregatorException",
            InvalidDocument { .. } => "InvalidDocument",
            InvalidDocumentVersion { .. } => "InvalidDocumentVersion",
            InvalidFilter { .. } => "InvalidFilter",
            InvalidFilterKey { .. } => "InvalidFilterKey",
            InvalidInstanceId { .. } => "InvalidInstanceId",
            InvalidInstanceInformationFilterValue { .. } => "InvalidInstanceInformationFilterValue",
            InvalidInventoryGroup { .. } => "InvalidInventoryGroupException",
            InvalidNextToken { .. } => "InvalidNextToken",
            InvalidOutputLocation { .. } => "InvalidOutputLocation",
            InvalidParameters { .. } => "InvalidParameters",
            InvalidResourceId { .. } => "InvalidResourceId",
            InvalidResourceType { .. } => "InvalidResourceType",
            InvalidResultAttribute { .. } => "InvalidResultAttributeException",
            InvalidSchedule { .. } => "InvalidSchedule",
            InvalidTarget { .. } => "InvalidTarget",
            InvalidTypeName { .. } => "InvalidTypeNameException",
            OpsItemAlreadyExists { .. } => "OpsItemAlreadyExistsException",
            OpsItemInvalidParameter { .. } => "OpsItemInvalidParameterException",
            OpsItemLimitExceeded { .. } => "OpsItemLimitExceededException",
            ResourceDataSyncInvalidConfiguration { .. } => {
                "ResourceDataSyncInvalidConfigurationException"
            }
            ResourceDataSyncNotFound { .. } => "ResourceDataSyncNotFoundException",
            ResourceLimitExceeded { .. } => "ResourceLimitExceededException",
            TooManyTagsError { .. } => "TooManyTagsError",
            TooManyUpdates { .. } => "TooManyUpdates",
            UnsupportedPlatformType { .. } => "UnsupportedPlatformType",
            Unknown { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        use SsmServiceError::*;
        match self {
            AssociationAlreadyExists { message }
            | AssociationLimitExceeded { message }
            | IdempotentParameterMismatch { message }
            | InternalServerError { message }
            | InvalidAggregator { message }
            | InvalidDocument { message }
            | InvalidDocumentVersion { message }
            | InvalidFilter { message }
            | InvalidFilterKey { message }
            | InvalidInstanceId { message }
            | InvalidInstanceInformationFilterValue { message }
            | InvalidInventoryGroup { message }
            | InvalidNextToken { message }
            | InvalidOutputLocation { message }
            | InvalidParameters { message }
            | InvalidResourceId { message }
            | InvalidResourceType { message }
            | InvalidResultAttribute { message }
            | InvalidSchedule { message }
            | InvalidTarget { message }
            | InvalidTypeName { message }
            | OpsItemAlreadyExists { message, .. }
            | OpsItemInvalidParameter { message, .. }
            | OpsItemLimitExceeded { message, .. }
            | ResourceDataSyncInvalidConfiguration { message }
            | ResourceDataSyncNotFound { message, .. }
            | ResourceLimitExceeded { message }
            | TooManyTagsError { message }
            | TooManyUpdates { message }
            | UnsupportedPlatformType { message }
            | Unknown { message, .. } => message,
        }
    }

    /// Quota and rate errors; the caller may succeed later with less load.
    pub fn is_throttling_or_limit(&self) -> bool {
        matches!(
            self,
            SsmServiceError::AssociationLimitExceeded { .. }
                | SsmServiceError::OpsItemLimitExceeded { .. }
                | SsmServiceError::ResourceLimitExceeded { .. }
                | SsmServiceError::TooManyTagsError { .. }
                | SsmServiceError::TooManyUpdates { .. }
        )
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SsmServiceError::Unknown { .. })
    }
}

impl From<ServiceFault> for SsmServiceError {
    fn from(fault: ServiceFault) -> Self {
        use SsmServiceError::*;
        let message = fault.message.clone();
        match fault.code.as_str() {
            "AssociationAlreadyExists" => AssociationAlreadyExists { message },
            "AssociationLimitExceeded" => AssociationLimitExceeded { message },
            "IdempotentParameterMismatch" => IdempotentParameterMismatch { message },
            "InternalServerError" => InternalServerError { message },
            "InvalidAggregatorException" => InvalidAggregator { message },
            "InvalidDocument" => InvalidDocument { message },
            "InvalidDocumentVersion" => InvalidDocumentVersion { message },
            "InvalidFilter" => InvalidFilter { message },
            "InvalidFilterKey" => InvalidFilterKey { message },
            "InvalidInstanceId" => InvalidInstanceId { message },
            "InvalidInstanceInformationFilterValue" => {
                InvalidInstanceInformationFilterValue { message }
            }
            "InvalidInventoryGroupException" => InvalidInventoryGroup { message },
            "InvalidNextToken" => InvalidNextToken { message },
            "InvalidOutputLocation" => InvalidOutputLocation { message },
            "InvalidParameters" => InvalidParameters { message },
            "InvalidResourceId" => InvalidResourceId { message },
            "InvalidResourceType" => InvalidResourceType { message },
            "InvalidResultAttributeException" => InvalidResultAttribute { message },
            "InvalidSchedule" => InvalidSchedule { message },
            "InvalidTarget" => InvalidTarget { message },
            "InvalidTypeNameException" => InvalidTypeName { message },
            "OpsItemAlreadyExistsException" => OpsItemAlreadyExists {
                message,
                ops_item_id: fault.string("ops_item_id"),
            },
            "OpsItemInvalidParameterException" => OpsItemInvalidParameter {
                message,
                parameter_names: fault.string_list("parameter_names"),
            },
            "OpsItemLimitExceededException" => OpsItemLimitExceeded {
                message,
                resource_types: fault.string_list("resource_types"),
                limit: fault.integer("limit"),
                limit_type: fault.string("limit_type"),
            },
            "ResourceDataSyncInvalidConfigurationException" => {
                ResourceDataSyncInvalidConfiguration { message }
            }
            "ResourceDataSyncNotFoundException" => ResourceDataSyncNotFound {
                message,
                sync_name: fault.string("sync_name"),
                sync_type: fault.string("sync_type"),
            },
            "ResourceLimitExceededException" => ResourceLimitExceeded { message },
            "TooManyTagsError" => TooManyTagsError { message },
            "TooManyUpdates" => TooManyUpdates { message },
            "UnsupportedPlatformType" => UnsupportedPlatformType { message },
            _ => Unknown {
                code: fault.code,
                message,
            },
        }
    }
}

/// Descriptors for every modelled code, with the diagnostic fields the marshaller
/// should pick out of an error body.
pub fn error_descriptors() -> Vec<ErrorDescriptor> {
    let mut descriptors: Vec<ErrorDescriptor> =
        PLAIN_CODES.iter().map(|code| ErrorDescriptor::new(*code)).collect();

    descriptors.push(
        ErrorDescriptor::new("OpsItemAlreadyExistsException")
            .with_field(FieldDescriptor::new("ops_item_id", "OpsItemId", FieldType::String)),
    );
    descriptors.push(
        ErrorDescriptor::new("OpsItemInvalidParameterException").with_field(FieldDescriptor::new(
            "parameter_names",
            "ParameterNames",
            FieldType::list(FieldType::String),
        )),
    );
    descriptors.push(
        ErrorDescriptor::new("OpsItemLimitExceededException")
            .with_field(FieldDescriptor::new(
                "resource_types",
                "ResourceTypes",
                FieldType::list(FieldType::String),
            ))
            .with_field(FieldDescriptor::new("limit", "Limit", FieldType::Integer))
            .with_field(FieldDescriptor::new("limit_type", "LimitType", FieldType::String)),
    );
    descriptors.push(
        ErrorDescriptor::new("ResourceDataSyncNotFoundException")
            .with_field(FieldDescriptor::new("sync_name", "SyncName", FieldType::String))
            .with_field(FieldDescriptor::new("sync_type", "SyncType", FieldType::String)),
    );

    descriptors
}
