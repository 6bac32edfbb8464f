use crate::model::enums::{AssociationComplianceSeverity, AssociationStatusName, AssociationSyncCompliance};
use crate::shape;
use chrono::{DateTime, Utc};

const DOCUMENT_NAME: &str = r"^[a-zA-Z0-9_\-.:/]{3,128}$";
const DOCUMENT_VERSION: &str = r"([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)";
const INSTANCE_ID: &str = r"(^i-(\w{8}|\w{17})$)|(^mi-\w{17}$)";
const ASSOCIATION_NAME: &str = r"^[a-zA-Z0-9_\-.]{3,128}$";
const MAX_ERRORS: &str = r"^([1-9][0-9]*|[0]|[1-9][0-9]%|[0-9]%|100%)$";
const MAX_CONCURRENCY: &str = r"^([1-9][0-9]*|[1-9][0-9]%|[1-9]%|100%)$";

shape! {
    /// Selects instances by id (`InstanceIds`) or by tag (`tag:<key>`).
    pub struct Target => "Target" {
        key: string(String) = "Key" {
            min_length: 1,
            max_length: 163,
            pattern: r"^[\p{L}\p{Z}\p{N}_.:/=\-@]*$|resource-groups:ResourceTypeFilters|resource-groups:Name",
        },
        values: list(String) = "Values" { max_length: 50 },
    }
}

shape! {
    pub struct S3OutputLocation => "S3OutputLocation" {
        output_s3_region: string(String) = "OutputS3Region" { min_length: 3, max_length: 20 },
        output_s3_bucket_name: string(String) = "OutputS3BucketName" { min_length: 3, max_length: 63 },
        output_s3_key_prefix: string(String) = "OutputS3KeyPrefix" { max_length: 500 },
    }
}

shape! {
    pub struct InstanceAssociationOutputLocation => "InstanceAssociationOutputLocation" {
        s3_location: structure(S3OutputLocation) = "S3Location",
    }
}

shape! {
    pub struct CreateAssociationRequest => "CreateAssociationRequest" {
        /// SSM document name or ARN.
        name: string(String) = "Name" { required: true, pattern: DOCUMENT_NAME },
        document_version: string(String) = "DocumentVersion" { pattern: DOCUMENT_VERSION },
        instance_id: string(String) = "InstanceId" { pattern: INSTANCE_ID },
        /// Document parameters; every parameter takes a list of values.
        parameters: map(Vec<String>) = "Parameters",
        targets: list(Target) = "Targets" { max_length: 5 },
        schedule_expression: string(String) = "ScheduleExpression" { min_length: 1, max_length: 256 },
        output_location: structure(InstanceAssociationOutputLocation) = "OutputLocation",
        association_name: string(String) = "AssociationName" { pattern: ASSOCIATION_NAME },
        automation_target_parameter_name: string(String) = "AutomationTargetParameterName" {
            min_length: 1,
            max_length: 50,
        },
        max_errors: string(String) = "MaxErrors" { min_length: 1, max_length: 7, pattern: MAX_ERRORS },
        max_concurrency: string(String) = "MaxConcurrency" {
            min_length: 1,
            max_length: 7,
            pattern: MAX_CONCURRENCY,
        },
        compliance_severity: enumeration(AssociationComplianceSeverity) = "ComplianceSeverity",
        sync_compliance: enumeration(AssociationSyncCompliance) = "SyncCompliance",
        apply_only_at_cron_interval: scalar(bool) = "ApplyOnlyAtCronInterval",
    }
}

shape! {
    pub struct AssociationStatus => "AssociationStatus" {
        date: scalar(DateTime<Utc>) = "Date" { required: true },
        name: enumeration(AssociationStatusName) = "Name" { required: true },
        message: string(String) = "Message" { required: true, min_length: 1, max_length: 1024 },
        additional_info: string(String) = "AdditionalInfo" { max_length: 1024 },
    }
}

shape! {
    pub struct AssociationOverview => "AssociationOverview" {
        status: string(String) = "Status",
        detailed_status: string(String) = "DetailedStatus",
        /// Instance count per association status.
        association_status_aggregated_count: map(i32) = "AssociationStatusAggregatedCount",
    }
}

shape! {
    pub struct AssociationDescription => "AssociationDescription" {
        name: string(String) = "Name" { pattern: DOCUMENT_NAME },
        instance_id: string(String) = "InstanceId" { pattern: INSTANCE_ID },
        association_version: string(String) = "AssociationVersion",
        date: scalar(DateTime<Utc>) = "Date",
        last_update_association_date: scalar(DateTime<Utc>) = "LastUpdateAssociationDate",
        status: structure(AssociationStatus) = "Status",
        overview: structure(AssociationOverview) = "Overview",
        document_version: string(String) = "DocumentVersion" { pattern: DOCUMENT_VERSION },
        automation_target_parameter_name: string(String) = "AutomationTargetParameterName",
        parameters: map(Vec<String>) = "Parameters",
        association_id: string(String) = "AssociationId" {
            pattern: r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        },
        targets: list(Target) = "Targets" { max_length: 5 },
        schedule_expression: string(String) = "ScheduleExpression",
        output_location: structure(InstanceAssociationOutputLocation) = "OutputLocation",
        last_execution_date: scalar(DateTime<Utc>) = "LastExecutionDate",
        last_successful_execution_date: scalar(DateTime<Utc>) = "LastSuccessfulExecutionDate",
        association_name: string(String) = "AssociationName",
        max_errors: string(String) = "MaxErrors",
        max_concurrency: string(String) = "MaxConcurrency",
        compliance_severity: enumeration(AssociationComplianceSeverity) = "ComplianceSeverity",
        sync_compliance: enumeration(AssociationSyncCompliance) = "SyncCompliance",
        apply_only_at_cron_interval: scalar(bool) = "ApplyOnlyAtCronInterval",
    }
}

shape! {
    pub struct CreateAssociationResult => "CreateAssociationResult" {
        association_description: structure(AssociationDescription) = "AssociationDescription",
    }
}

impl Target {
    /// Targets every instance carrying the tag `key` with one of `values`.
    pub fn tag<I, V>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Target::builder()
            .key(format!("tag:{}", key))
            .extend_values(values)
            .build()
    }
}
