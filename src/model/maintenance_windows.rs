use crate::domain::ports::PaginatedResponse;
use crate::model::tagging::Tag;
use crate::shape;

const WINDOW_NAME: &str = r"^[a-zA-Z0-9_\-.]{3,128}$";

shape! {
    pub struct CreateMaintenanceWindowRequest => "CreateMaintenanceWindowRequest" {
        name: string(String) = "Name" { required: true, min_length: 3, max_length: 128, pattern: WINDOW_NAME },
        description: string(String) = "Description" { min_length: 1, max_length: 128 },
        /// ISO-8601 date/time string, not an epoch timestamp.
        start_date: string(String) = "StartDate",
        end_date: string(String) = "EndDate",
        /// `cron(...)` or `rate(...)` expression.
        schedule: string(String) = "Schedule" { required: true, min_length: 1, max_length: 256 },
        schedule_timezone: string(String) = "ScheduleTimezone",
        schedule_offset: scalar(i32) = "ScheduleOffset" { min_value: 1, max_value: 6 },
        duration: scalar(i32) = "Duration" { required: true, min_value: 1, max_value: 24 },
        cutoff: scalar(i32) = "Cutoff" { required: true, min_value: 0, max_value: 23 },
        allow_unassociated_targets: scalar(bool) = "AllowUnassociatedTargets" { required: true },
        client_token: string(String) = "ClientToken" { min_length: 1, max_length: 64 },
        tags: list(Tag) = "Tags" { max_length: 1000 },
    }
}

shape! {
    pub struct CreateMaintenanceWindowResult => "CreateMaintenanceWindowResult" {
        window_id: string(String) = "WindowId" {
            min_length: 20,
            max_length: 20,
            pattern: r"^mw-[0-9a-f]{17}$",
        },
    }
}

shape! {
    pub struct MaintenanceWindowFilter => "MaintenanceWindowFilter" {
        key: string(String) = "Key" { min_length: 1, max_length: 128 },
        values: list(String) = "Values",
    }
}

shape! {
    pub struct DescribeMaintenanceWindowsRequest => "DescribeMaintenanceWindowsRequest" {
        filters: list(MaintenanceWindowFilter) = "Filters" { max_length: 5 },
        max_results: scalar(i32) = "MaxResults" { min_value: 10, max_value: 100 },
        next_token: string(String) = "NextToken",
    }
}

shape! {
    pub struct MaintenanceWindowIdentity => "MaintenanceWindowIdentity" {
        window_id: string(String) = "WindowId",
        name: string(String) = "Name",
        description: string(String) = "Description",
        enabled: scalar(bool) = "Enabled",
        duration: scalar(i32) = "Duration",
        cutoff: scalar(i32) = "Cutoff",
        schedule: string(String) = "Schedule",
        schedule_timezone: string(String) = "ScheduleTimezone",
        schedule_offset: scalar(i32) = "ScheduleOffset",
        end_date: string(String) = "EndDate",
        start_date: string(String) = "StartDate",
        next_execution_time: string(String) = "NextExecutionTime",
    }
}

shape! {
    pub struct DescribeMaintenanceWindowsResult => "DescribeMaintenanceWindowsResult" {
        window_identities: list(MaintenanceWindowIdentity) = "WindowIdentities",
        next_token: string(String) = "NextToken",
    }
}

impl PaginatedResponse for DescribeMaintenanceWindowsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
