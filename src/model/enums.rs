use crate::wire_enum;

wire_enum! {
    pub enum InstanceInformationFilterKey {
        InstanceIds => "InstanceIds",
        AgentVersion => "AgentVersion",
        PingStatus => "PingStatus",
        PlatformTypes => "PlatformTypes",
        ActivationIds => "ActivationIds",
        IamRole => "IamRole",
        ResourceType => "ResourceType",
        AssociationStatus => "AssociationStatus",
    }
}

wire_enum! {
    /// Agent connectivity as last reported by the instance.
    pub enum PingStatus {
        Online => "Online",
        ConnectionLost => "ConnectionLost",
        Inactive => "Inactive",
    }
}

wire_enum! {
    pub enum PlatformType {
        Windows => "Windows",
        Linux => "Linux",
        MacOs => "MacOS",
    }
}

wire_enum! {
    pub enum ResourceType {
        ManagedInstance => "ManagedInstance",
        Document => "Document",
        Ec2Instance => "EC2Instance",
    }
}

wire_enum! {
    pub enum ResourceTypeForTagging {
        Document => "Document",
        ManagedInstance => "ManagedInstance",
        MaintenanceWindow => "MaintenanceWindow",
        Parameter => "Parameter",
        PatchBaseline => "PatchBaseline",
        OpsItem => "OpsItem",
        OpsMetadata => "OpsMetadata",
        Automation => "Automation",
        Association => "Association",
    }
}

wire_enum! {
    pub enum AssociationComplianceSeverity {
        Critical => "CRITICAL",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
        Unspecified => "UNSPECIFIED",
    }
}

wire_enum! {
    /// `Auto` lets the association report compliance itself; `Manual` requires
    /// an explicit PutComplianceItems call.
    pub enum AssociationSyncCompliance {
        Auto => "AUTO",
        Manual => "MANUAL",
    }
}

wire_enum! {
    pub enum AssociationStatusName {
        Pending => "Pending",
        Success => "Success",
        Failed => "Failed",
    }
}

wire_enum! {
    pub enum OperatingSystem {
        Windows => "WINDOWS",
        AmazonLinux => "AMAZON_LINUX",
        AmazonLinux2 => "AMAZON_LINUX_2",
        Ubuntu => "UBUNTU",
        RedhatEnterpriseLinux => "REDHAT_ENTERPRISE_LINUX",
        Suse => "SUSE",
        CentOs => "CENTOS",
        OracleLinux => "ORACLE_LINUX",
        Debian => "DEBIAN",
        MacOs => "MACOS",
    }
}

wire_enum! {
    pub enum PatchFilterKey {
        PatchSet => "PATCH_SET",
        Product => "PRODUCT",
        ProductFamily => "PRODUCT_FAMILY",
        Classification => "CLASSIFICATION",
        MsrcSeverity => "MSRC_SEVERITY",
        PatchId => "PATCH_ID",
        Section => "SECTION",
        Priority => "PRIORITY",
        Severity => "SEVERITY",
    }
}

wire_enum! {
    pub enum PatchComplianceLevel {
        Critical => "CRITICAL",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
        Informational => "INFORMATIONAL",
        Unspecified => "UNSPECIFIED",
    }
}

wire_enum! {
    pub enum PatchAction {
        AllowAsDependency => "ALLOW_AS_DEPENDENCY",
        Block => "BLOCK",
    }
}

wire_enum! {
    pub enum InventoryQueryOperatorType {
        Equal => "Equal",
        NotEqual => "NotEqual",
        BeginWith => "BeginWith",
        LessThan => "LessThan",
        GreaterThan => "GreaterThan",
        Exists => "Exists",
    }
}

wire_enum! {
    pub enum OpsItemDataType {
        SearchableString => "SearchableString",
        String => "String",
    }
}

wire_enum! {
    pub enum OpsItemFilterKey {
        Status => "Status",
        CreatedBy => "CreatedBy",
        Source => "Source",
        Priority => "Priority",
        Title => "Title",
        OpsItemId => "OpsItemId",
        CreatedTime => "CreatedTime",
        LastModifiedTime => "LastModifiedTime",
        OperationalData => "OperationalData",
        OperationalDataKey => "OperationalDataKey",
        OperationalDataValue => "OperationalDataValue",
        ResourceId => "ResourceId",
        AutomationId => "AutomationId",
        Category => "Category",
        Severity => "Severity",
    }
}

wire_enum! {
    pub enum OpsItemFilterOperator {
        Equal => "Equal",
        Contains => "Contains",
        GreaterThan => "GreaterThan",
        LessThan => "LessThan",
    }
}

wire_enum! {
    pub enum OpsItemStatus {
        Open => "Open",
        InProgress => "InProgress",
        Resolved => "Resolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::WireEnum;
    use crate::utils::error::ModelError;

    #[test]
    fn test_wire_strings_differ_from_variant_names() {
        assert_eq!(PlatformType::MacOs.as_str(), "MacOS");
        assert_eq!(ResourceType::Ec2Instance.to_string(), "EC2Instance");
        assert_eq!(
            AssociationComplianceSeverity::from_value("CRITICAL").unwrap(),
            AssociationComplianceSeverity::Critical
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(matches!(
            PingStatus::from_value("online"),
            Err(ModelError::InvalidArgument { .. })
        ));
        let err = PingStatus::from_value("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: Value cannot be null or empty!");
    }

    #[test]
    fn test_descriptor_lists_every_value() {
        let descriptor = OpsItemFilterOperator::descriptor();
        assert_eq!(descriptor.name(), "OpsItemFilterOperator");
        assert_eq!(descriptor.values().len(), 4);
        assert!(descriptor.contains("Contains"));
    }
}
