use crate::domain::ports::PaginatedResponse;
use crate::model::enums::{OpsItemDataType, OpsItemFilterKey, OpsItemFilterOperator, OpsItemStatus};
use crate::model::tagging::Tag;
use crate::shape;
use chrono::{DateTime, Utc};

shape! {
    /// Operational data value; `SearchableString` values can be used in DescribeOpsItems filters.
    pub struct OpsItemDataValue => "OpsItemDataValue" {
        value: string(String) = "Value",
        data_type: enumeration(OpsItemDataType) = "Type",
    }
}

shape! {
    pub struct OpsItemNotification => "OpsItemNotification" {
        arn: string(String) = "Arn",
    }
}

shape! {
    pub struct RelatedOpsItem => "RelatedOpsItem" {
        ops_item_id: string(String) = "OpsItemId" { required: true },
    }
}

shape! {
    pub struct CreateOpsItemRequest => "CreateOpsItemRequest" {
        description: string(String) = "Description" { required: true, min_length: 1, max_length: 2048 },
        ops_item_type: string(String) = "OpsItemType",
        operational_data: map(OpsItemDataValue) = "OperationalData",
        notifications: list(OpsItemNotification) = "Notifications",
        priority: scalar(i32) = "Priority" { min_value: 1, max_value: 5 },
        related_ops_items: list(RelatedOpsItem) = "RelatedOpsItems",
        source: string(String) = "Source" { required: true, min_length: 1, max_length: 128 },
        title: string(String) = "Title" { required: true, min_length: 1, max_length: 1024 },
        tags: list(Tag) = "Tags" { max_length: 1000 },
        category: string(String) = "Category" { min_length: 1, max_length: 64 },
        severity: string(String) = "Severity" { min_length: 1, max_length: 64 },
    }
}

shape! {
    pub struct CreateOpsItemResult => "CreateOpsItemResult" {
        ops_item_id: string(String) = "OpsItemId",
    }
}

shape! {
    pub struct OpsItemFilter => "OpsItemFilter" {
        key: enumeration(OpsItemFilterKey) = "Key" { required: true },
        values: list(String) = "Values" { required: true },
        operator: enumeration(OpsItemFilterOperator) = "Operator" { required: true },
    }
}

shape! {
    pub struct DescribeOpsItemsRequest => "DescribeOpsItemsRequest" {
        ops_item_filters: list(OpsItemFilter) = "OpsItemFilters",
        max_results: scalar(i32) = "MaxResults" { min_value: 1, max_value: 50 },
        next_token: string(String) = "NextToken",
    }
}

shape! {
    pub struct OpsItemSummary => "OpsItemSummary" {
        created_by: string(String) = "CreatedBy",
        created_time: scalar(DateTime<Utc>) = "CreatedTime",
        last_modified_by: string(String) = "LastModifiedBy",
        last_modified_time: scalar(DateTime<Utc>) = "LastModifiedTime",
        priority: scalar(i32) = "Priority",
        source: string(String) = "Source",
        status: enumeration(OpsItemStatus) = "Status",
        ops_item_id: string(String) = "OpsItemId",
        title: string(String) = "Title",
        operational_data: map(OpsItemDataValue) = "OperationalData",
        category: string(String) = "Category",
        severity: string(String) = "Severity",
    }
}

shape! {
    pub struct DescribeOpsItemsResult => "DescribeOpsItemsResult" {
        next_token: string(String) = "NextToken",
        ops_item_summaries: list(OpsItemSummary) = "OpsItemSummaries",
    }
}

impl PaginatedResponse for DescribeOpsItemsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl OpsItemDataValue {
    pub fn searchable(value: impl Into<String>) -> Self {
        OpsItemDataValue::builder()
            .value(value)
            .data_type(OpsItemDataType::SearchableString)
            .build()
    }
}
