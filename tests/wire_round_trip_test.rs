use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use ssm_model::model::{
    CreateAssociationRequest, DescribeInstanceInformationResult, InstanceAssociationOutputLocation,
    InstanceInformation, InstanceInformationStringFilter, PingStatus, PlatformType, ResourceType,
    S3OutputLocation, Target,
};
use ssm_model::{ssm_registry, Marshaller, MarshallerConfig, ModelError, PaginatedResponse, WireValue};
use std::sync::Arc;

fn marshaller(config: MarshallerConfig) -> Result<Marshaller> {
    Ok(Marshaller::new(Arc::new(ssm_registry()?), config))
}

fn timestamp(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
}

fn full_instance() -> InstanceInformation {
    InstanceInformation::builder()
        .instance_id("i-0123456789abcdef0")
        .ping_status(PingStatus::Online)
        .last_ping_date_time(timestamp(1_700_000_000_123))
        .agent_version("3.2.1")
        .is_latest_version(true)
        .platform_type(PlatformType::Linux)
        .platform_name("Amazon Linux")
        .platform_version("2023")
        .activation_id("a1b2c3d4-0000-1111-2222-333344445555")
        .iam_role("SSMServiceRole")
        .registration_date(timestamp(1_690_000_000_000))
        .resource_type(ResourceType::Ec2Instance)
        .name("web-1")
        .ip_address("10.0.0.12")
        .computer_name("ip-10-0-0-12")
        .association_status("Success")
        .last_association_execution_date(timestamp(1_700_000_100_000))
        .last_successful_association_execution_date(timestamp(1_700_000_100_500))
        .build()
}

#[test]
fn test_filter_round_trips_to_equal_value() -> Result<()> {
    let filter = InstanceInformationStringFilter::builder()
        .key("InstanceId")
        .values("i-0123456789abcdef0")
        .build();

    let wire = filter.to_wire();
    assert_eq!(wire, json!({"Key": "InstanceId", "Values": ["i-0123456789abcdef0"]}));

    let decoded = InstanceInformationStringFilter::from_wire(&wire, "InstanceInformationStringFilter")?;
    assert_eq!(decoded, filter);
    Ok(())
}

#[test]
fn test_fully_populated_shape_round_trips() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default().with_client_side_validation(true))?;
    let result = DescribeInstanceInformationResult::builder()
        .instance_information_list(full_instance())
        .next_token("AAEAAQ==")
        .build();

    let payload = marshaller.encode(&result)?;
    assert_eq!(payload["InstanceInformationList"][0]["PingStatus"], "Online");
    assert_eq!(payload["InstanceInformationList"][0]["LastPingDateTime"], json!(1_700_000_000.123));
    assert_eq!(payload["InstanceInformationList"][0]["RegistrationDate"], json!(1_690_000_000));

    let decoded: DescribeInstanceInformationResult = marshaller.decode(&payload)?;
    assert_eq!(decoded, result);
    assert!(decoded.has_more());
    Ok(())
}

#[test]
fn test_all_absent_shape_round_trips() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let empty = InstanceInformation::builder().build();

    let payload = marshaller.encode(&empty)?;
    assert_eq!(payload, json!({}));
    assert_eq!(marshaller.decode::<InstanceInformation>(&payload)?, empty);

    let result: DescribeInstanceInformationResult = marshaller.decode(&json!(null))?;
    assert_eq!(result.next_token(), None);
    assert!(!result.has_more());
    Ok(())
}

#[test]
fn test_nested_maps_and_structures_round_trip() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default().with_client_side_validation(true))?;
    let request = CreateAssociationRequest::builder()
        .name("AWS-RunShellScript")
        .add_parameters_entry("commands", vec!["uptime".to_string(), "df -h".to_string()])?
        .add_parameters_entry("executionTimeout", vec!["3600".to_string()])?
        .targets(Target::tag("Environment", ["prod", "staging"]))
        .output_location(
            InstanceAssociationOutputLocation::builder()
                .s3_location(
                    S3OutputLocation::builder()
                        .output_s3_bucket_name("ssm-output")
                        .output_s3_key_prefix("associations/")
                        .build(),
                )
                .build(),
        )
        .max_concurrency("10%")
        .max_errors("1")
        .apply_only_at_cron_interval(false)
        .build();

    let payload = marshaller.encode(&request)?;
    assert_eq!(payload["Parameters"]["commands"], json!(["uptime", "df -h"]));
    assert_eq!(payload["Targets"][0]["Key"], "tag:Environment");
    assert_eq!(
        payload["OutputLocation"]["S3Location"]["OutputS3BucketName"],
        "ssm-output"
    );

    let decoded: CreateAssociationRequest = marshaller.decode(&payload)?;
    assert_eq!(decoded, request);
    Ok(())
}

#[test]
fn test_null_and_missing_both_decode_as_absent() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let with_null: InstanceInformation =
        marshaller.decode(&json!({"InstanceId": "i-0123456789abcdef0", "PingStatus": null}))?;
    let without: InstanceInformation =
        marshaller.decode(&json!({"InstanceId": "i-0123456789abcdef0"}))?;

    assert_eq!(with_null, without);
    assert_eq!(with_null.ping_status(), None);
    Ok(())
}

#[test]
fn test_empty_list_survives_round_trip() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let target = Target::builder()
        .key("InstanceIds")
        .extend_values(Vec::<String>::new())
        .build();

    let payload = marshaller.encode(&target)?;
    assert_eq!(payload, json!({"Key": "InstanceIds", "Values": []}));
    assert_eq!(marshaller.decode::<Target>(&payload)?, target);
    Ok(())
}

#[test]
fn test_type_mismatch_reports_path() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let payload = json!({
        "InstanceInformationList": [
            {"InstanceId": "i-0123456789abcdef0", "PingStatus": 7}
        ]
    });

    let err = marshaller
        .decode::<DescribeInstanceInformationResult>(&payload)
        .unwrap_err();
    match err {
        ModelError::MarshallingError { path, .. } => {
            assert_eq!(
                path,
                "DescribeInstanceInformationResult.InstanceInformationList[0].PingStatus"
            );
        }
        other => panic!("expected MarshallingError, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unknown_fields_skipped_unless_strict() -> Result<()> {
    let payload = json!({"Key": "Name", "Value": "web", "Extra": true});

    let lenient = marshaller(MarshallerConfig::default())?;
    assert_eq!(lenient.decode::<ssm_model::model::Tag>(&payload)?.key(), Some("Name"));

    let strict = marshaller(MarshallerConfig::default().with_reject_unknown_fields(true))?;
    assert!(matches!(
        strict.decode::<ssm_model::model::Tag>(&payload),
        Err(ModelError::MarshallingError { .. })
    ));
    Ok(())
}

#[test]
fn test_sub_millisecond_timestamps_round_trip() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let precise = Utc
        .timestamp_opt(1_700_000_000, 123_456_789)
        .single()
        .unwrap_or_default();

    let original = InstanceInformation::builder()
        .registration_date(precise)
        .last_ping_date_time(Utc::now())
        .build();
    assert_eq!(
        original.registration_date().map(|t| t.timestamp_subsec_nanos()),
        Some(123_000_000)
    );

    let payload = marshaller.encode(&original)?;
    assert_eq!(payload["RegistrationDate"], json!(1_700_000_000.123));

    let decoded: InstanceInformation = marshaller.decode(&payload)?;
    assert_eq!(decoded, original);

    // The in-place setter stores the same form
    let mut builder = InstanceInformation::builder();
    builder.set_registration_date(Some(precise));
    assert_eq!(builder.build().registration_date(), original.registration_date());
    Ok(())
}

#[test]
fn test_rfc3339_timestamps_are_accepted() -> Result<()> {
    let marshaller = marshaller(MarshallerConfig::default())?;
    let decoded: InstanceInformation =
        marshaller.decode(&json!({"RegistrationDate": "2023-07-22T04:26:40Z"}))?;

    assert_eq!(decoded.registration_date(), Some(timestamp(1_690_000_000_000)));
    Ok(())
}
