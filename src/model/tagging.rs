use crate::model::enums::ResourceTypeForTagging;
use crate::shape;

shape! {
    /// A key/value label attached to an SSM resource.
    pub struct Tag => "Tag" {
        key: string(String) = "Key" {
            required: true,
            min_length: 1,
            max_length: 128,
            pattern: r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$",
        },
        value: string(String) = "Value" { required: true, max_length: 256 },
    }
}

shape! {
    pub struct AddTagsToResourceRequest => "AddTagsToResourceRequest" {
        /// Resource type as a `ResourceTypeForTagging` wire string.
        resource_type: enumeration(ResourceTypeForTagging) = "ResourceType" { required: true },
        resource_id: string(String) = "ResourceId" { required: true },
        tags: list(Tag) = "Tags" { required: true, max_length: 1000 },
    }
}

shape! {
    pub struct AddTagsToResourceResult => "AddTagsToResourceResult" {}
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag::builder().key(key).value(value).build()
    }
}
