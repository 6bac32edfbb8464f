use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use ssm_model::model::{
    AddTagsToResourceRequest, CreateOpsItemRequest, DeleteResourceDataSyncRequest,
    DescribeInstanceInformationRequest, DescribeInstanceInformationResult,
    InstanceInformationFilter, InstanceInformationFilterKey, PingStatus, ResourceTypeForTagging,
    Tag,
};
use ssm_model::{
    MarshallerConfig, ModelError, PaginatedResponse, SsmClient, SsmServiceError, Transport,
    TransportFailure,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned replies and records what was sent.
#[derive(Default)]
struct InMemoryTransport {
    replies: Mutex<VecDeque<std::result::Result<Value, TransportFailure>>>,
    sent: Mutex<Vec<(String, Value)>>,
}

impl InMemoryTransport {
    fn replying(reply: std::result::Result<Value, TransportFailure>) -> Self {
        let transport = Self::default();
        transport.push(reply);
        transport
    }

    fn push(&self, reply: std::result::Result<Value, TransportFailure>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    fn sent(&self) -> Vec<(String, Value)> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(
        &self,
        operation: &str,
        payload: Value,
    ) -> std::result::Result<Value, TransportFailure> {
        self.sent
            .lock()
            .map_err(|e| TransportFailure::Client { message: e.to_string() })?
            .push((operation.to_string(), payload));
        self.replies
            .lock()
            .map_err(|e| TransportFailure::Client { message: e.to_string() })?
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

fn service_failure(code: &str, body: Value) -> std::result::Result<Value, TransportFailure> {
    Err(TransportFailure::Service {
        code: code.to_string(),
        payload: body,
    })
}

#[tokio::test]
async fn test_describe_instance_information_end_to_end() -> Result<()> {
    let transport = InMemoryTransport::replying(Ok(json!({
        "InstanceInformationList": [
            {
                "InstanceId": "i-0123456789abcdef0",
                "PingStatus": "Online",
                "LastPingDateTime": 1700000000.5,
                "PlatformType": "Linux",
                "UnmodelledField": {"ignored": true}
            }
        ],
        "NextToken": "page-2"
    })));
    let client = SsmClient::new(transport)?;

    let request = DescribeInstanceInformationRequest::builder()
        .instance_information_filter_list(
            InstanceInformationFilter::builder()
                .key(InstanceInformationFilterKey::PingStatus)
                .value_set(PingStatus::Online)
                .build(),
        )
        .max_results(10)
        .build();

    let result: DescribeInstanceInformationResult =
        client.describe_instance_information(&request).await?;

    // Verify the request went out keyed by wire names
    let sent = client.service_client().transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "DescribeInstanceInformation");
    assert_eq!(
        sent[0].1,
        json!({
            "InstanceInformationFilterList": [{"key": "PingStatus", "valueSet": ["Online"]}],
            "MaxResults": 10
        })
    );

    // Verify the response decoded
    let instances = result.instance_information_list().unwrap_or_default();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].ping_status(), Some("Online"));
    assert_eq!(
        instances[0].last_ping_date_time().map(|t| t.timestamp_millis()),
        Some(1_700_000_000_500)
    );
    assert_eq!(result.next_token(), Some("page-2"));
    assert!(result.has_more());
    Ok(())
}

#[tokio::test]
async fn test_service_error_with_diagnostics() -> Result<()> {
    let transport = InMemoryTransport::replying(service_failure(
        "OpsItemLimitExceededException",
        json!({
            "Message": "Too many open OpsItems",
            "ResourceTypes": ["AWS::EC2::Instance"],
            "Limit": 500,
            "LimitType": "OpsItem"
        }),
    ));
    let client = SsmClient::new(transport)?;
    let request = CreateOpsItemRequest::builder()
        .title("Disk full")
        .source("ec2")
        .description("Root volume at 98%")
        .build();

    let err = client.create_ops_item(&request).await.unwrap_err();
    match err {
        ModelError::Service(SsmServiceError::OpsItemLimitExceeded {
            message,
            resource_types,
            limit,
            limit_type,
        }) => {
            assert_eq!(message, "Too many open OpsItems");
            assert_eq!(resource_types, Some(vec!["AWS::EC2::Instance".to_string()]));
            assert_eq!(limit, Some(500));
            assert_eq!(limit_type.as_deref(), Some("OpsItem"));
        }
        other => panic!("expected OpsItemLimitExceeded, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_message_and_ill_typed_diagnostic() -> Result<()> {
    let transport = InMemoryTransport::replying(service_failure(
        "com.amazonaws.ssm#ResourceDataSyncNotFoundException",
        json!({"SyncName": 42, "SyncType": "SyncToDestination"}),
    ));
    let client = SsmClient::new(transport)?;
    let request = DeleteResourceDataSyncRequest::builder()
        .sync_name("inventory-sync")
        .build();

    let err = client.delete_resource_data_sync(&request).await.unwrap_err();
    match err {
        ModelError::Service(error) => {
            assert_eq!(error.code(), "ResourceDataSyncNotFoundException");
            assert_eq!(error.message(), "");
            match error {
                SsmServiceError::ResourceDataSyncNotFound {
                    sync_name,
                    sync_type,
                    ..
                } => {
                    assert_eq!(sync_name, None);
                    assert_eq!(sync_type.as_deref(), Some("SyncToDestination"));
                }
                other => panic!("expected ResourceDataSyncNotFound, got {:?}", other),
            }
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_code_maps_to_unknown_variant() -> Result<()> {
    let transport = InMemoryTransport::replying(service_failure(
        "ThrottlingException",
        json!({"message": "Rate exceeded"}),
    ));
    let client = SsmClient::new(transport)?;
    let request = AddTagsToResourceRequest::builder()
        .resource_type(ResourceTypeForTagging::ManagedInstance)
        .resource_id("mi-0123456789abcdef0")
        .tags(Tag::new("Team", "ops"))
        .build();

    let err = client.add_tags_to_resource(&request).await.unwrap_err();
    match err {
        ModelError::Service(error) => {
            assert!(!error.is_known());
            assert_eq!(error.code(), "ThrottlingException");
            assert_eq!(error.to_string(), "ThrottlingException: Rate exceeded");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_not_a_service_error() -> Result<()> {
    let transport = InMemoryTransport::replying(Err(TransportFailure::Client {
        message: "connection reset".to_string(),
    }));
    let client = SsmClient::new(transport)?;

    let err = client
        .describe_instance_information(&DescribeInstanceInformationRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::TransportError { message } if message == "connection reset"));
    Ok(())
}

#[tokio::test]
async fn test_client_side_validation_stops_bad_requests() -> Result<()> {
    let client = SsmClient::with_config(
        InMemoryTransport::default(),
        MarshallerConfig::default().with_client_side_validation(true),
    )?;

    // Title is required
    let request = CreateOpsItemRequest::builder()
        .source("ec2")
        .description("Root volume at 98%")
        .priority(9)
        .build();

    let err = client.create_ops_item(&request).await.unwrap_err();
    assert!(matches!(err, ModelError::ValidationError { .. }));
    assert!(client.service_client().transport().sent().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_operation_shape_mismatch_is_rejected() -> Result<()> {
    let client = SsmClient::new(InMemoryTransport::default())?;
    let request = DeleteResourceDataSyncRequest::builder().sync_name("x").build();

    let err = client
        .service_client()
        .invoke::<_, DescribeInstanceInformationResult>("DeleteResourceDataSync", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::ShapeMismatch { .. }));

    let err = client
        .service_client()
        .invoke::<_, DescribeInstanceInformationResult>("PutParameter", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownOperation(_)));
    Ok(())
}

#[test]
fn test_client_usable_from_blocking_code() -> Result<()> {
    let client = SsmClient::new(InMemoryTransport::replying(Ok(json!(null))))?;
    let request = DeleteResourceDataSyncRequest::builder()
        .sync_name("inventory-sync")
        .build();

    let result = tokio_test::block_on(client.delete_resource_data_sync(&request))?;
    assert_eq!(result, Default::default());
    Ok(())
}
