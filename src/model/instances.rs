//! Managed-instance registration and inventory of registered instances.

use crate::domain::ports::PaginatedResponse;
use crate::model::enums::{InstanceInformationFilterKey, PingStatus, PlatformType, ResourceType};
use crate::model::tagging::Tag;
use crate::shape;
use chrono::{DateTime, Utc};

shape! {
    /// Filter for DescribeInstanceInformation. The wire names are lower camel case,
    /// unlike every other SSM shape.
    pub struct InstanceInformationFilter => "InstanceInformationFilter" {
        key: enumeration(InstanceInformationFilterKey) = "key" { required: true },
        value_set: list(String) = "valueSet" { required: true, min_length: 1, max_length: 100 },
    }
}

shape! {
    /// Free-form filter; accepts tag keys (`tag:Name`) besides the predefined keys.
    pub struct InstanceInformationStringFilter => "InstanceInformationStringFilter" {
        key: string(String) = "Key" { required: true, min_length: 1 },
        values: list(String) = "Values" { required: true, min_length: 1, max_length: 100 },
    }
}

shape! {
    pub struct DescribeInstanceInformationRequest => "DescribeInstanceInformationRequest" {
        instance_information_filter_list: list(InstanceInformationFilter) = "InstanceInformationFilterList",
        filters: list(InstanceInformationStringFilter) = "Filters",
        max_results: scalar(i32) = "MaxResults" { min_value: 5, max_value: 50 },
        next_token: string(String) = "NextToken",
    }
}

shape! {
    pub struct InstanceInformation => "InstanceInformation" {
        instance_id: string(String) = "InstanceId" { pattern: r"(^i-(\w{8}|\w{17})$)|(^mi-\w{17}$)" },
        ping_status: enumeration(PingStatus) = "PingStatus",
        last_ping_date_time: scalar(DateTime<Utc>) = "LastPingDateTime",
        agent_version: string(String) = "AgentVersion",
        is_latest_version: scalar(bool) = "IsLatestVersion",
        platform_type: enumeration(PlatformType) = "PlatformType",
        platform_name: string(String) = "PlatformName",
        platform_version: string(String) = "PlatformVersion",
        activation_id: string(String) = "ActivationId",
        iam_role: string(String) = "IamRole" { max_length: 64 },
        registration_date: scalar(DateTime<Utc>) = "RegistrationDate",
        resource_type: enumeration(ResourceType) = "ResourceType",
        name: string(String) = "Name",
        ip_address: string(String) = "IPAddress" { min_length: 1, max_length: 46 },
        computer_name: string(String) = "ComputerName" { min_length: 1, max_length: 255 },
        association_status: string(String) = "AssociationStatus",
        last_association_execution_date: scalar(DateTime<Utc>) = "LastAssociationExecutionDate",
        last_successful_association_execution_date: scalar(DateTime<Utc>) = "LastSuccessfulAssociationExecutionDate",
    }
}

shape! {
    pub struct DescribeInstanceInformationResult => "DescribeInstanceInformationResult" {
        instance_information_list: list(InstanceInformation) = "InstanceInformationList",
        next_token: string(String) = "NextToken",
    }
}

impl PaginatedResponse for DescribeInstanceInformationResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

shape! {
    pub struct CreateActivationRequest => "CreateActivationRequest" {
        description: string(String) = "Description" { max_length: 256 },
        default_instance_name: string(String) = "DefaultInstanceName" {
            max_length: 256,
            pattern: r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$",
        },
        /// IAM service role the managed instances assume.
        iam_role: string(String) = "IamRole" { required: true, max_length: 64 },
        registration_limit: scalar(i32) = "RegistrationLimit" { min_value: 1, max_value: 1000 },
        expiration_date: scalar(DateTime<Utc>) = "ExpirationDate",
        tags: list(Tag) = "Tags" { max_length: 1000 },
    }
}

shape! {
    /// The code is shown only once; the activation id and code together register an instance.
    pub struct CreateActivationResult => "CreateActivationResult" {
        activation_id: string(String) = "ActivationId" {
            pattern: r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        },
        activation_code: string(String) = "ActivationCode" { min_length: 20, max_length: 250 },
    }
}

shape! {
    pub struct DeregisterManagedInstanceRequest => "DeregisterManagedInstanceRequest" {
        instance_id: string(String) = "InstanceId" { required: true, pattern: r"^mi-[0-9a-f]{17}$" },
    }
}

shape! {
    pub struct DeregisterManagedInstanceResult => "DeregisterManagedInstanceResult" {}
}
