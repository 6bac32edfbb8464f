use crate::shape;

shape! {
    pub struct DeleteResourceDataSyncRequest => "DeleteResourceDataSyncRequest" {
        sync_name: string(String) = "SyncName" { required: true, min_length: 1, max_length: 64 },
        /// `SyncToDestination` or `SyncFromSource`; omitted means `SyncToDestination`.
        sync_type: string(String) = "SyncType" { min_length: 1, max_length: 64 },
    }
}

shape! {
    pub struct DeleteResourceDataSyncResult => "DeleteResourceDataSyncResult" {}
}
