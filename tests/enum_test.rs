use ssm_model::model::{
    AssociationComplianceSeverity, InstanceInformationFilterKey, OpsItemStatus, PatchAction,
    PingStatus, PlatformType, ResourceType, ResourceTypeForTagging,
};
use ssm_model::{ModelError, WireEnum};
use std::str::FromStr;

fn assert_members_round_trip<E>()
where
    E: WireEnum + std::fmt::Display + std::fmt::Debug,
{
    for raw in E::VALUES {
        let parsed = E::from_value(raw).unwrap();
        assert_eq!(parsed.to_string(), *raw);
    }
}

#[test]
fn test_every_member_round_trips_through_its_wire_string() {
    assert_members_round_trip::<InstanceInformationFilterKey>();
    assert_members_round_trip::<PingStatus>();
    assert_members_round_trip::<PlatformType>();
    assert_members_round_trip::<ResourceType>();
    assert_members_round_trip::<ResourceTypeForTagging>();
    assert_members_round_trip::<AssociationComplianceSeverity>();
    assert_members_round_trip::<PatchAction>();
    assert_members_round_trip::<OpsItemStatus>();
}

#[test]
fn test_wire_strings_are_not_variant_names() {
    assert_eq!(PlatformType::MacOs.as_str(), "MacOS");
    assert_eq!(ResourceType::Ec2Instance.to_string(), "EC2Instance");
    assert_eq!(AssociationComplianceSeverity::Critical.as_str(), "CRITICAL");
}

#[test]
fn test_empty_and_unknown_strings_are_rejected() {
    for raw in ["", "online", "Offline", " Online"] {
        match PingStatus::from_value(raw) {
            Err(ModelError::InvalidArgument { message }) => assert!(!message.is_empty()),
            other => panic!("expected InvalidArgument for {:?}, got {:?}", raw, other),
        }
    }
}

#[test]
fn test_from_str_and_try_from_agree_with_from_value() {
    assert_eq!(PingStatus::from_str("ConnectionLost").ok(), Some(PingStatus::ConnectionLost));
    assert_eq!(PingStatus::try_from("Inactive").ok(), Some(PingStatus::Inactive));
    assert!("linux".parse::<PlatformType>().is_err());
}

#[test]
fn test_descriptor_lists_wire_values() {
    let descriptor = PingStatus::descriptor();
    assert_eq!(descriptor.name(), "PingStatus");
    assert!(descriptor.contains("Online"));
    assert!(!descriptor.contains("online"));
    assert_eq!(PingStatus::values().len(), 3);
}

#[test]
fn test_enum_into_string() {
    let value: String = PlatformType::Windows.into();
    assert_eq!(value, "Windows");
}
