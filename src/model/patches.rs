use crate::model::enums::{OperatingSystem, PatchAction, PatchComplianceLevel, PatchFilterKey};
use crate::model::tagging::Tag;
use crate::shape;

shape! {
    pub struct PatchFilter => "PatchFilter" {
        key: enumeration(PatchFilterKey) = "Key" { required: true },
        values: list(String) = "Values" { required: true, min_length: 1, max_length: 20 },
    }
}

shape! {
    pub struct PatchFilterGroup => "PatchFilterGroup" {
        patch_filters: list(PatchFilter) = "PatchFilters" { required: true, max_length: 4 },
    }
}

shape! {
    /// Approves patches matching the filter group, either after a delay or up to a cutoff date.
    pub struct PatchRule => "PatchRule" {
        patch_filter_group: structure(PatchFilterGroup) = "PatchFilterGroup" { required: true },
        compliance_level: enumeration(PatchComplianceLevel) = "ComplianceLevel",
        approve_after_days: scalar(i32) = "ApproveAfterDays" { min_value: 0, max_value: 360 },
        approve_until_date: string(String) = "ApproveUntilDate" { min_length: 1, max_length: 10 },
        enable_non_security: scalar(bool) = "EnableNonSecurity",
    }
}

shape! {
    pub struct PatchRuleGroup => "PatchRuleGroup" {
        patch_rules: list(PatchRule) = "PatchRules" { required: true, max_length: 10 },
    }
}

shape! {
    /// Alternate package repository for Linux instances.
    pub struct PatchSource => "PatchSource" {
        name: string(String) = "Name" { required: true, pattern: r"^[a-zA-Z0-9_\-.]{3,50}$" },
        products: list(String) = "Products" { required: true, min_length: 1, max_length: 20 },
        configuration: string(String) = "Configuration" {
            required: true,
            min_length: 1,
            max_length: 1024,
        },
    }
}

shape! {
    pub struct CreatePatchBaselineRequest => "CreatePatchBaselineRequest" {
        operating_system: enumeration(OperatingSystem) = "OperatingSystem",
        name: string(String) = "Name" {
            required: true,
            min_length: 3,
            max_length: 128,
            pattern: r"^[a-zA-Z0-9_\-.]{3,128}$",
        },
        global_filters: structure(PatchFilterGroup) = "GlobalFilters",
        approval_rules: structure(PatchRuleGroup) = "ApprovalRules",
        approved_patches: list(String) = "ApprovedPatches" { max_length: 50 },
        approved_patches_compliance_level: enumeration(PatchComplianceLevel) = "ApprovedPatchesComplianceLevel",
        approved_patches_enable_non_security: scalar(bool) = "ApprovedPatchesEnableNonSecurity",
        rejected_patches: list(String) = "RejectedPatches" { max_length: 50 },
        rejected_patches_action: enumeration(PatchAction) = "RejectedPatchesAction",
        description: string(String) = "Description" { min_length: 1, max_length: 1024 },
        sources: list(PatchSource) = "Sources" { max_length: 20 },
        /// Idempotency token; a retry with the same token returns the first baseline.
        client_token: string(String) = "ClientToken" { min_length: 1, max_length: 64 },
        tags: list(Tag) = "Tags" { max_length: 1000 },
    }
}

shape! {
    pub struct CreatePatchBaselineResult => "CreatePatchBaselineResult" {
        baseline_id: string(String) = "BaselineId" {
            min_length: 20,
            max_length: 128,
            pattern: r"^[a-zA-Z0-9_\-:/]{20,128}$",
        },
    }
}
