//! Artifact naming and descriptions

use core::fmt;

use super::Artifact;

/// Human-readable description of an artifact's state and attributes.
///
/// Healing is only shown for radiant artifacts:
/// `radiant blessed Staff (power: 50, healing: 100)`.
pub fn describe(artifact: &Artifact) -> String {
    match artifact.healing_power() {
        Some(healing) => format!(
            "{} {} (power: {}, healing: {})",
            artifact.kind(),
            artifact.name(),
            artifact.power(),
            healing
        ),
        None => format!(
            "{} {} (power: {})",
            artifact.kind(),
            artifact.name(),
            artifact.power()
        ),
    }
}

/// Message shown when an artifact is used
pub fn use_message(artifact: &Artifact) -> String {
    format!("Using {}", describe(artifact))
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_plain() {
        let grenade = Artifact::unholy("Grenade", 1000).unwrap();
        assert_eq!(describe(&grenade), "unholy Grenade (power: 1000)");
        assert_eq!(grenade.to_string(), "unholy Grenade (power: 1000)");
    }

    #[test]
    fn test_describe_radiant() {
        let staff = Artifact::radiant_blessed("Staff", 50, 100).unwrap();
        assert_eq!(describe(&staff), "radiant blessed Staff (power: 50, healing: 100)");
        let staff = Artifact::radiant_normal("Staff", 50, 50).unwrap();
        assert_eq!(describe(&staff), "radiant normal Staff (power: 50, healing: 50)");
    }

    #[test]
    fn test_use_message() {
        let grenade = Artifact::blessed("Holy Hand Grenade of Antioch", 1000).unwrap();
        assert_eq!(
            use_message(&grenade),
            "Using blessed Holy Hand Grenade of Antioch (power: 1000)"
        );
    }
}
