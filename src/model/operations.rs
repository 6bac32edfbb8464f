//! SSM operations: the operation table and a typed client over any [`Transport`].

use crate::config::MarshallerConfig;
use crate::core::client::ServiceClient;
use crate::core::marshaller::Marshaller;
use crate::domain::ports::{Shape, Transport};
use crate::domain::schema::OperationDescriptor;
use crate::model::associations::{CreateAssociationRequest, CreateAssociationResult};
use crate::model::instances::{
    CreateActivationRequest, CreateActivationResult, DeregisterManagedInstanceRequest,
    DeregisterManagedInstanceResult, DescribeInstanceInformationRequest,
    DescribeInstanceInformationResult,
};
use crate::model::inventory::{GetInventoryRequest, GetInventoryResult};
use crate::model::maintenance_windows::{
    CreateMaintenanceWindowRequest, CreateMaintenanceWindowResult,
    DescribeMaintenanceWindowsRequest, DescribeMaintenanceWindowsResult,
};
use crate::model::ops_items::{
    CreateOpsItemRequest, CreateOpsItemResult, DescribeOpsItemsRequest, DescribeOpsItemsResult,
};
use crate::model::patches::{CreatePatchBaselineRequest, CreatePatchBaselineResult};
use crate::model::resource_data_sync::{DeleteResourceDataSyncRequest, DeleteResourceDataSyncResult};
use crate::model::ssm_registry;
use crate::model::tagging::{AddTagsToResourceRequest, AddTagsToResourceResult};
use crate::utils::error::Result;
use std::sync::Arc;

pub const ADD_TAGS_TO_RESOURCE: &str = "AddTagsToResource";
pub const CREATE_ACTIVATION: &str = "CreateActivation";
pub const DEREGISTER_MANAGED_INSTANCE: &str = "DeregisterManagedInstance";
pub const DESCRIBE_INSTANCE_INFORMATION: &str = "DescribeInstanceInformation";
pub const CREATE_ASSOCIATION: &str = "CreateAssociation";
pub const CREATE_PATCH_BASELINE: &str = "CreatePatchBaseline";
pub const GET_INVENTORY: &str = "GetInventory";
pub const CREATE_OPS_ITEM: &str = "CreateOpsItem";
pub const DESCRIBE_OPS_ITEMS: &str = "DescribeOpsItems";
pub const CREATE_MAINTENANCE_WINDOW: &str = "CreateMaintenanceWindow";
pub const DESCRIBE_MAINTENANCE_WINDOWS: &str = "DescribeMaintenanceWindows";
pub const DELETE_RESOURCE_DATA_SYNC: &str = "DeleteResourceDataSync";

fn operation<I: Shape, O: Shape>(name: &str, errors: &[&str]) -> OperationDescriptor {
    OperationDescriptor::new(name, I::SHAPE_NAME, O::SHAPE_NAME).with_errors(errors.iter().copied())
}

pub fn operation_descriptors() -> Vec<OperationDescriptor> {
    vec![
        operation::<AddTagsToResourceRequest, AddTagsToResourceResult>(
            ADD_TAGS_TO_RESOURCE,
            &[
                "InvalidResourceType",
                "InvalidResourceId",
                "InternalServerError",
                "TooManyTagsError",
                "TooManyUpdates",
            ],
        ),
        operation::<CreateActivationRequest, CreateActivationResult>(
            CREATE_ACTIVATION,
            &["InternalServerError"],
        ),
        operation::<DeregisterManagedInstanceRequest, DeregisterManagedInstanceResult>(
            DEREGISTER_MANAGED_INSTANCE,
            &["InvalidInstanceId", "InternalServerError"],
        ),
        operation::<DescribeInstanceInformationRequest, DescribeInstanceInformationResult>(
            DESCRIBE_INSTANCE_INFORMATION,
            &[
                "InternalServerError",
                "InvalidInstanceId",
                "InvalidNextToken",
                "InvalidInstanceInformationFilterValue",
                "InvalidFilterKey",
            ],
        ),
        operation::<CreateAssociationRequest, CreateAssociationResult>(
            CREATE_ASSOCIATION,
            &[
                "AssociationAlreadyExists",
                "AssociationLimitExceeded",
                "InternalServerError",
                "InvalidDocument",
                "InvalidDocumentVersion",
                "InvalidInstanceId",
                "UnsupportedPlatformType",
                "InvalidOutputLocation",
                "InvalidParameters",
                "InvalidTarget",
                "InvalidSchedule",
            ],
        ),
        operation::<CreatePatchBaselineRequest, CreatePatchBaselineResult>(
            CREATE_PATCH_BASELINE,
            &[
                "IdempotentParameterMismatch",
                "ResourceLimitExceededException",
                "InternalServerError",
            ],
        ),
        operation::<GetInventoryRequest, GetInventoryResult>(
            GET_INVENTORY,
            &[
                "InternalServerError",
                "InvalidFilter",
                "InvalidInventoryGroupException",
                "InvalidNextToken",
                "InvalidTypeNameException",
                "InvalidAggregatorException",
                "InvalidResultAttributeException",
            ],
        ),
        operation::<CreateOpsItemRequest, CreateOpsItemResult>(
            CREATE_OPS_ITEM,
            &[
                "InternalServerError",
                "OpsItemAlreadyExistsException",
                "OpsItemLimitExceededException",
                "OpsItemInvalidParameterException",
            ],
        ),
        operation::<DescribeOpsItemsRequest, DescribeOpsItemsResult>(
            DESCRIBE_OPS_ITEMS,
            &["InternalServerError", "OpsItemInvalidParameterException"],
        ),
        operation::<CreateMaintenanceWindowRequest, CreateMaintenanceWindowResult>(
            CREATE_MAINTENANCE_WINDOW,
            &[
                "IdempotentParameterMismatch",
                "ResourceLimitExceededException",
                "InternalServerError",
            ],
        ),
        operation::<DescribeMaintenanceWindowsRequest, DescribeMaintenanceWindowsResult>(
            DESCRIBE_MAINTENANCE_WINDOWS,
            &["InternalServerError"],
        ),
        operation::<DeleteResourceDataSyncRequest, DeleteResourceDataSyncResult>(
            DELETE_RESOURCE_DATA_SYNC,
            &[
                "InternalServerError",
                "ResourceDataSyncNotFoundException",
                "ResourceDataSyncInvalidConfigurationException",
            ],
        ),
    ]
}

/// Typed SSM client. Each method encodes the request, hands it to the transport and
/// decodes the result or raises the service error.
pub struct SsmClient<T: Transport> {
    inner: ServiceClient<T>,
}

impl<T: Transport> SsmClient<T> {
    pub fn new(transport: T) -> Result<Self> {
        Self::with_config(transport, MarshallerConfig::default())
    }

    pub fn with_config(transport: T, config: MarshallerConfig) -> Result<Self> {
        let registry = Arc::new(ssm_registry()?);
        Ok(Self::from_marshaller(transport, Marshaller::new(registry, config)))
    }

    pub fn from_marshaller(transport: T, marshaller: Marshaller) -> Self {
        Self {
            inner: ServiceClient::new(transport, marshaller),
        }
    }

    pub fn service_client(&self) -> &ServiceClient<T> {
        &self.inner
    }

    pub async fn add_tags_to_resource(
        &self,
        request: &AddTagsToResourceRequest,
    ) -> Result<AddTagsToResourceResult> {
        self.inner.invoke(ADD_TAGS_TO_RESOURCE, request).await
    }

    pub async fn create_activation(
        &self,
        request: &CreateActivationRequest,
    ) -> Result<CreateActivationResult> {
        self.inner.invoke(CREATE_ACTIVATION, request).await
    }

    pub async fn deregister_managed_instance(
        &self,
        request: &DeregisterManagedInstanceRequest,
    ) -> Result<DeregisterManagedInstanceResult> {
        self.inner.invoke(DEREGISTER_MANAGED_INSTANCE, request).await
    }

    pub async fn describe_instance_information(
        &self,
        request: &DescribeInstanceInformationRequest,
    ) -> Result<DescribeInstanceInformationResult> {
        self.inner.invoke(DESCRIBE_INSTANCE_INFORMATION, request).await
    }

    pub async fn create_association(
        &self,
        request: &CreateAssociationRequest,
    ) -> Result<CreateAssociationResult> {
        self.inner.invoke(CREATE_ASSOCIATION, request).await
    }

    pub async fn create_patch_baseline(
        &self,
        request: &CreatePatchBaselineRequest,
    ) -> Result<CreatePatchBaselineResult> {
        self.inner.invoke(CREATE_PATCH_BASELINE, request).await
    }

    pub async fn get_inventory(&self, request: &GetInventoryRequest) -> Result<GetInventoryResult> {
        self.inner.invoke(GET_INVENTORY, request).await
    }

    pub async fn create_ops_item(
        &self,
        request: &CreateOpsItemRequest,
    ) -> Result<CreateOpsItemResult> {
        self.inner.invoke(CREATE_OPS_ITEM, request).await
    }

    pub async fn describe_ops_items(
        &self,
        request: &DescribeOpsItemsRequest,
    ) -> Result<DescribeOpsItemsResult> {
        self.inner.invoke(DESCRIBE_OPS_ITEMS, request).await
    }

    pub async fn create_maintenance_window(
        &self,
        request: &CreateMaintenanceWindowRequest,
    ) -> Result<CreateMaintenanceWindowResult> {
        self.inner.invoke(CREATE_MAINTENANCE_WINDOW, request).await
    }

    pub async fn describe_maintenance_windows(
        &self,
        request: &DescribeMaintenanceWindowsRequest,
    ) -> Result<DescribeMaintenanceWindowsResult> {
        self.inner.invoke(DESCRIBE_MAINTENANCE_WINDOWS, request).await
    }

    pub async fn delete_resource_data_sync(
        &self,
        request: &DeleteResourceDataSyncRequest,
    ) -> Result<DeleteResourceDataSyncResult> {
        self.inner.invoke(DELETE_RESOURCE_DATA_SYNC, request).await
    }
}
