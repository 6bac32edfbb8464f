//! Systems Manager request/response shapes, enums and service errors.

pub mod associations;
pub mod enums;
pub mod errors;
pub mod instances;
pub mod inventory;
pub mod maintenance_windows;
pub mod operations;
pub mod ops_items;
pub mod patches;
pub mod resource_data_sync;
pub mod tagging;

pub use associations::*;
pub use enums::*;
pub use errors::SsmServiceError;
pub use instances::*;
pub use inventory::*;
pub use maintenance_windows::*;
pub use operations::SsmClient;
pub use ops_items::*;
pub use patches::*;
pub use resource_data_sync::*;
pub use tagging::*;

use crate::core::registry::ModelRegistry;
use crate::utils::error::Result;

pub const SERVICE_NAME: &str = "SSM";

/// Builds the registry of every SSM shape, enum, error code and operation in this crate.
pub fn ssm_registry() -> Result<ModelRegistry> {
    let mut registry = ModelRegistry::new(SERVICE_NAME);

    registry
        .register_enum::<InstanceInformationFilterKey>()?
        .register_enum::<PingStatus>()?
        .register_enum::<PlatformType>()?
        .register_enum::<ResourceType>()?
        .register_enum::<ResourceTypeForTagging>()?
        .register_enum::<AssociationComplianceSeverity>()?
        .register_enum::<AssociationSyncCompliance>()?
        .register_enum::<AssociationStatusName>()?
        .register_enum::<OperatingSystem>()?
        .register_enum::<PatchFilterKey>()?
        .register_enum::<PatchComplianceLevel>()?
        .register_enum::<PatchAction>()?
        .register_enum::<InventoryQueryOperatorType>()?
        .register_enum::<OpsItemDataType>()?
        .register_enum::<OpsItemFilterKey>()?
        .register_enum::<OpsItemFilterOperator>()?
        .register_enum::<OpsItemStatus>()?;

    registry
        .register_shape::<Tag>()?
        .register_shape::<AddTagsToResourceRequest>()?
        .register_shape::<AddTagsToResourceResult>()?
        // instances
        .register_shape::<InstanceInformationFilter>()?
        .register_shape::<InstanceInformationStringFilter>()?
        .register_shape::<DescribeInstanceInformationRequest>()?
        .register_shape::<InstanceInformation>()?
        .register_shape::<DescribeInstanceInformationResult>()?
        .register_shape::<CreateActivationRequest>()?
        .register_shape::<CreateActivationResult>()?
        .register_shape::<DeregisterManagedInstanceRequest>()?
        .register_shape::<DeregisterManagedInstanceResult>()?
        // associations
        .register_shape::<Target>()?
        .register_shape::<S3OutputLocation>()?
        .register_shape::<InstanceAssociationOutputLocation>()?
        .register_shape::<CreateAssociationRequest>()?
        .register_shape::<AssociationStatus>()?
        .register_shape::<AssociationOverview>()?
        .register_shape::<AssociationDescription>()?
        .register_shape::<CreateAssociationResult>()?
        // patch baselines
        .register_shape::<PatchFilter>()?
        .register_shape::<PatchFilterGroup>()?
        .register_shape::<PatchRule>()?
        .register_shape::<PatchRuleGroup>()?
        .register_shape::<PatchSource>()?
        .register_shape::<CreatePatchBaselineRequest>()?
        .register_shape::<CreatePatchBaselineResult>()?
        // inventory
        .register_shape::<InventoryFilter>()?
        .register_shape::<InventoryGroup>()?
        .register_shape::<InventoryAggregator>()?
        .register_shape::<ResultAttribute>()?
        .register_shape::<GetInventoryRequest>()?
        .register_shape::<InventoryResultItem>()?
        .register_shape::<InventoryResultEntity>()?
        .register_shape::<GetInventoryResult>()?
        // OpsItems
        .register_shape::<OpsItemDataValue>()?
        .register_shape::<OpsItemNotification>()?
        .register_shape::<RelatedOpsItem>()?
        .register_shape::<CreateOpsItemRequest>()?
        .register_shape::<CreateOpsItemResult>()?
        .register_shape::<OpsItemFilter>()?
        .register_shape::<DescribeOpsItemsRequest>()?
        .register_shape::<OpsItemSummary>()?
        .register_shape::<DescribeOpsItemsResult>()?
        // maintenance windows
        .register_shape::<CreateMaintenanceWindowRequest>()?
        .register_shape::<CreateMaintenanceWindowResult>()?
        .register_shape::<MaintenanceWindowFilter>()?
        .register_shape::<DescribeMaintenanceWindowsRequest>()?
        .register_shape::<MaintenanceWindowIdentity>()?
        .register_shape::<DescribeMaintenanceWindowsResult>()?
        // resource data sync
        .register_shape::<DeleteResourceDataSyncRequest>()?
        .register_shape::<DeleteResourceDataSyncResult>()?;

    for descriptor in errors::error_descriptors() {
        registry.add_error(descriptor)?;
    }
    for descriptor in operations::operation_descriptors() {
        registry.add_operation(descriptor)?;
    }

    registry.validate()?;
    tracing::debug!(
        shapes = registry.shapes().count(),
        operations = registry.operations().count(),
        "built SSM model registry"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        let registry = ssm_registry().unwrap();
        assert_eq!(registry.operations().count(), 12);
        assert!(registry.enum_type("PingStatus").is_some());

        let create = registry.operation("CreateOpsItem").unwrap();
        assert_eq!(create.input(), "CreateOpsItemRequest");
        assert_eq!(create.output(), "CreateOpsItemResult");
        assert!(create.declares_error("OpsItemLimitExceededException"));
    }

    #[test]
    fn test_filter_wire_names_differ_from_local_names() {
        let registry = ssm_registry().unwrap();
        let filter = registry.shape("InstanceInformationFilter").unwrap();
        assert_eq!(filter.field("value_set").unwrap().wire_name(), "valueSet");
        assert_eq!(filter.field_by_wire_name("key").unwrap().local_name(), "key");
    }
}
