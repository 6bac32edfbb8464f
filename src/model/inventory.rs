use crate::domain::ports::PaginatedResponse;
use crate::model::enums::InventoryQueryOperatorType;
use crate::shape;
use std::collections::BTreeMap;

shape! {
    pub struct InventoryFilter => "InventoryFilter" {
        /// Attribute path such as `AWS:InstanceInformation.InstanceStatus`.
        key: string(String) = "Key" { required: true, min_length: 1, max_length: 200 },
        values: list(String) = "Values" { required: true, min_length: 1, max_length: 40 },
        operator_type: enumeration(InventoryQueryOperatorType) = "Type",
    }
}

shape! {
    pub struct InventoryGroup => "InventoryGroup" {
        name: string(String) = "Name" { required: true, min_length: 1, max_length: 200 },
        filters: list(InventoryFilter) = "Filters" { required: true, min_length: 1, max_length: 5 },
    }
}

shape! {
    /// Aggregators nest: each may carry sub-aggregators over the same result set.
    pub struct InventoryAggregator => "InventoryAggregator" {
        expression: string(String) = "Expression" { min_length: 1, max_length: 1000 },
        aggregators: list(InventoryAggregator) = "Aggregators" { min_length: 1, max_length: 10 },
        groups: list(InventoryGroup) = "Groups" { min_length: 1, max_length: 15 },
    }
}

shape! {
    pub struct ResultAttribute => "ResultAttribute" {
        type_name: string(String) = "TypeName" {
            required: true,
            min_length: 1,
            max_length: 100,
            pattern: r"^(AWS|Custom):.*$",
        },
    }
}

shape! {
    pub struct GetInventoryRequest => "GetInventoryRequest" {
        filters: list(InventoryFilter) = "Filters" { min_length: 1, max_length: 5 },
        aggregators: list(InventoryAggregator) = "Aggregators" { min_length: 1, max_length: 10 },
        result_attributes: list(ResultAttribute) = "ResultAttributes" { min_length: 1, max_length: 1 },
        next_token: string(String) = "NextToken",
        max_results: scalar(i32) = "MaxResults" { min_value: 1, max_value: 50 },
    }
}

shape! {
    pub struct InventoryResultItem => "InventoryResultItem" {
        type_name: string(String) = "TypeName" { required: true, min_length: 1, max_length: 100 },
        schema_version: string(String) = "SchemaVersion" { required: true, pattern: r"^([0-9]{1,6})(\.[0-9]{1,6})$" },
        capture_time: string(String) = "CaptureTime",
        content_hash: string(String) = "ContentHash" { max_length: 256 },
        /// One attribute map per inventory row.
        content: list(BTreeMap<String, String>) = "Content" { required: true, max_length: 10000 },
    }
}

shape! {
    pub struct InventoryResultEntity => "InventoryResultEntity" {
        id: string(String) = "Id",
        data: map(InventoryResultItem) = "Data",
    }
}

shape! {
    pub struct GetInventoryResult => "GetInventoryResult" {
        entities: list(InventoryResultEntity) = "Entities",
        next_token: string(String) = "NextToken",
    }
}

impl PaginatedResponse for GetInventoryResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
