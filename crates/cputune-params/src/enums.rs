//! Enum-valued tuning knobs and their JSON names.

use std::fmt::{self, Display};

/// An enum that can be resolved from a JSON string.
///
/// The first entry of [`TuneEnum::MAPPINGS`] is the fallback for names that
/// are not recognized.
pub trait TuneEnum: Copy + PartialEq + 'static {
    const MAPPINGS: &'static [(&'static str, Self)];

    fn from_name(name: &str) -> Option<Self> {
        Self::MAPPINGS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    fn fallback() -> (&'static str, Self) {
        Self::MAPPINGS[0]
    }

    fn name(self) -> &'static str {
        Self::MAPPINGS
            .iter()
            .find(|(_, value)| *value == self)
            .map_or(Self::MAPPINGS[0].0, |(name, _)| name)
    }
}

/// Hardware autoprefetcher model used by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoprefetchModel {
    #[default]
    Off,
    Weak,
    Strong,
}

impl TuneEnum for AutoprefetchModel {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("AUTOPREFETCHER_OFF", AutoprefetchModel::Off),
        ("AUTOPREFETCHER_WEAK", AutoprefetchModel::Weak),
        ("AUTOPREFETCHER_STRONG", AutoprefetchModel::Strong),
    ];
}

/// Policy for forming load/store pair instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LdpStpPolicy {
    #[default]
    Default,
    Aligned,
    Always,
    Never,
}

impl TuneEnum for LdpStpPolicy {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("AARCH64_LDP_STP_POLICY_DEFAULT", LdpStpPolicy::Default),
        ("AARCH64_LDP_STP_POLICY_ALIGNED", LdpStpPolicy::Aligned),
        ("AARCH64_LDP_STP_POLICY_ALWAYS", LdpStpPolicy::Always),
        ("AARCH64_LDP_STP_POLICY_NEVER", LdpStpPolicy::Never),
    ];
}

impl Display for AutoprefetchModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for LdpStpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(
            AutoprefetchModel::from_name("AUTOPREFETCHER_WEAK"),
            Some(AutoprefetchModel::Weak)
        );
        assert_eq!(AutoprefetchModel::from_name("autoprefetcher_weak"), None);
        assert_eq!(LdpStpPolicy::from_name("null"), None);
    }

    #[test]
    fn test_fallback_is_first_entry() {
        assert_eq!(
            LdpStpPolicy::fallback(),
            ("AARCH64_LDP_STP_POLICY_DEFAULT", LdpStpPolicy::Default)
        );
        assert_eq!(AutoprefetchModel::fallback().1, AutoprefetchModel::default());
    }

    #[test]
    fn test_names_round_trip_through_display() {
        assert_eq!(LdpStpPolicy::Never.to_string(), "AARCH64_LDP_STP_POLICY_NEVER");
        assert_eq!(AutoprefetchModel::Strong.name(), "AUTOPREFETCHER_STRONG");
    }
}
