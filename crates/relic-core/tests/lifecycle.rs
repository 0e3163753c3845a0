//! Artifact lifecycle tests: the blessing scenarios and transition properties

use std::time::Duration;

use proptest::prelude::*;
use relic_core::{
    Altar, Artifact, ArtifactError, ArtifactKind, InstantDelay, RelicOptions, Transition,
};

fn altar() -> Altar<InstantDelay> {
    Altar::with_delay(InstantDelay::new(), RelicOptions::default())
}

#[test]
fn test_grenade_blessed_twice() {
    let mut altar = altar();
    let unholy = Artifact::unholy("Grenade", 1000).unwrap();

    let normal = altar.bless(&unholy).unwrap();
    assert_eq!(normal, Artifact::normal("Grenade", 1000).unwrap());

    let blessed = altar.bless(&normal).unwrap();
    assert_eq!(blessed, Artifact::blessed("Grenade", 1000).unwrap());

    // the original is untouched
    assert_eq!(unholy.kind(), ArtifactKind::Unholy);
    assert_eq!(altar.delay().pauses(), &[Duration::from_secs(1); 2]);
}

#[test]
fn test_radiant_staff_blessed() {
    let mut altar = altar();
    let staff = Artifact::normal("Staff", 50).unwrap();

    let radiant = altar.make_radiant(&staff).unwrap();
    assert_eq!(radiant, Artifact::radiant_normal("Staff", 50, 50).unwrap());

    let blessed = altar.bless(&radiant).unwrap();
    assert_eq!(blessed, Artifact::radiant_blessed("Staff", 50, 50).unwrap());
}

#[test]
fn test_blessed_staff_made_radiant() {
    let mut altar = altar();
    let staff = Artifact::blessed("Staff", 50).unwrap();
    let radiant = altar.make_radiant(&staff).unwrap();
    assert_eq!(radiant.kind(), ArtifactKind::RadiantBlessed);
    assert_eq!(radiant.healing_power(), Some(100));
}

#[test]
fn test_blessing_blessed_fails() {
    let mut altar = altar();
    let staff = Artifact::blessed("Staff", 50).unwrap();
    let err = altar.bless(&staff).unwrap_err();
    assert_eq!(
        err,
        ArtifactError::InvalidStateTransition {
            current: ArtifactKind::Blessed,
            operation: Transition::Bless,
        }
    );
}

#[test]
fn test_holy_hand_grenade_demo() {
    let mut altar = altar();
    let unholy = Artifact::unholy("Holy Hand Grenade of Antioch", 1000).unwrap();
    let normal = altar.bless(&unholy).unwrap();
    let blessed = altar.bless(&normal).unwrap();
    let radiant = altar.make_radiant(&blessed).unwrap();
    altar.use_artifact(&radiant);

    assert!(altar.bless(&radiant).is_err());
    assert_eq!(
        altar.messages().last().map(String::as_str),
        Some("Using radiant blessed Holy Hand Grenade of Antioch (power: 1000, healing: 2000)")
    );
}

#[test]
fn test_json_shape() {
    let staff = Artifact::radiant_blessed("Staff", 50, 100).unwrap();
    let json = serde_json::to_value(&staff).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "state": "radiant_blessed",
            "name": "Staff",
            "power": 50,
            "area_of_effect": 5,
            "healing_power": 100,
        })
    );
    let back: Artifact = serde_json::from_value(json).unwrap();
    assert_eq!(back, staff);
}

#[test]
fn test_json_validates_name() {
    let json = r#"{"state": "normal", "name": "", "power": 3}"#;
    assert!(serde_json::from_str::<Artifact>(json).is_err());

    let json = r#"{"state": "unholy", "name": "Grenade", "power": 3}"#;
    let grenade: Artifact = serde_json::from_str(json).unwrap();
    assert_eq!(grenade.area_of_effect(), 5);
}

fn plain_kind() -> impl Strategy<Value = ArtifactKind> {
    prop_oneof![
        Just(ArtifactKind::Unholy),
        Just(ArtifactKind::Normal),
        Just(ArtifactKind::Blessed),
    ]
}

fn any_artifact() -> impl Strategy<Value = Artifact> {
    (
        prop_oneof![
            plain_kind(),
            Just(ArtifactKind::RadiantNormal),
            Just(ArtifactKind::RadiantBlessed),
        ],
        "[A-Za-z][A-Za-z ]{0,20}",
        any::<u32>(),
        any::<u64>(),
    )
        .prop_map(|(kind, name, power, healing)| {
            Artifact::radiant(kind, name, power, healing).unwrap()
        })
}

proptest! {
    #[test]
    fn bless_raises_one_tier(artifact in any_artifact()) {
        let mut altar = altar();
        match artifact.kind() {
            ArtifactKind::Unholy | ArtifactKind::Normal | ArtifactKind::RadiantNormal => {
                let blessed = altar.bless(&artifact).unwrap();
                prop_assert_eq!(Some(blessed.kind()), artifact.kind().next(Transition::Bless));
                prop_assert!(blessed.holiness() > artifact.holiness());
                prop_assert_eq!(blessed.name(), artifact.name());
                prop_assert_eq!(blessed.power(), artifact.power());
                prop_assert_eq!(blessed.healing_power(), artifact.healing_power());
                prop_assert_eq!(altar.delay().pauses().len(), 1);
            }
            ArtifactKind::Blessed | ArtifactKind::RadiantBlessed => {
                let err = altar.bless(&artifact).unwrap_err();
                prop_assert_eq!(err.current(), Some(artifact.kind()));
            }
        }
    }

    #[test]
    fn make_radiant_heals_by_tier(artifact in any_artifact()) {
        let result = relic_core::make_radiant(&artifact);
        match artifact.kind() {
            ArtifactKind::Normal => {
                prop_assert_eq!(result.unwrap().healing_power(), Some(u64::from(artifact.power())));
            }
            ArtifactKind::Blessed => {
                prop_assert_eq!(result.unwrap().healing_power(), Some(u64::from(artifact.power()) * 2));
            }
            _ => {
                prop_assert_eq!(
                    result,
                    Err(ArtifactError::InvalidStateTransition {
                        current: artifact.kind(),
                        operation: Transition::MakeRadiant,
                    })
                );
            }
        }
    }

    #[test]
    fn bless_is_not_idempotent(kind in plain_kind(), power in any::<u32>()) {
        let mut altar = altar();
        let artifact = Artifact::new(kind, "Relic", power).unwrap();
        if let Ok(once) = altar.bless(&artifact) {
            prop_assert_ne!(&once, &artifact);
            if let Ok(twice) = altar.bless(&once) {
                prop_assert_ne!(twice.kind(), once.kind());
            }
        }
    }

    #[test]
    fn describe_mentions_healing_only_when_radiant(artifact in any_artifact()) {
        let text = relic_core::describe(&artifact);
        prop_assert!(text.starts_with(&artifact.kind().to_string()));
        prop_assert_eq!(text.contains(", healing: "), artifact.is_radiant());
    }
}
