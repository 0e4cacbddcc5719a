//! Strategy mode selection.

use serde::{Deserialize, Serialize};

/// The enrichment strategy applied to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    /// Trim and fill only.
    Basic,
    /// Statistical-model-assisted cleaning (currently identical to basic).
    #[default]
    Statistical,
    /// Generative-model-assisted enrichment, row by row.
    Generative,
}

impl StrategyMode {
    /// Canonical tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyMode::Basic => "basic",
            StrategyMode::Statistical => "statistical",
            StrategyMode::Generative => "generative",
        }
    }
}

impl std::str::FromStr for StrategyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(StrategyMode::Basic),
            "statistical" => Ok(StrategyMode::Statistical),
            "generative" => Ok(StrategyMode::Generative),
            _ => Err(format!(
                "Unknown mode: {}. Use: basic, statistical, or generative.",
                s
            )),
        }
    }
}

impl std::fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a requested mode string was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSelection {
    /// No mode given; the default strategy applies.
    Default,
    /// A recognized tag.
    Known {
        requested: String,
        mode: StrategyMode,
    },
    /// An unrecognized tag. Echoed back as-is and handled as the default.
    Unrecognized { requested: String },
}

impl ModeSelection {
    /// Resolve an optional mode string. Never fails.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            None => ModeSelection::Default,
            Some(raw) => match raw.parse::<StrategyMode>() {
                Ok(mode) => ModeSelection::Known {
                    requested: raw.to_string(),
                    mode,
                },
                Err(_) => ModeSelection::Unrecognized {
                    requested: raw.to_string(),
                },
            },
        }
    }

    /// The strategy that will actually run.
    pub fn strategy(&self) -> StrategyMode {
        match self {
            ModeSelection::Known { mode, .. } => *mode,
            ModeSelection::Default | ModeSelection::Unrecognized { .. } => StrategyMode::default(),
        }
    }

    /// The label reported back to the caller in `usedAI`.
    pub fn label(&self) -> &str {
        match self {
            ModeSelection::Default => StrategyMode::default().as_str(),
            ModeSelection::Known { requested, .. } | ModeSelection::Unrecognized { requested } => {
                requested
            }
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ModeSelection::Unrecognized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_statistical() {
        let selection = ModeSelection::resolve(None);
        assert_eq!(selection.strategy(), StrategyMode::Statistical);
        assert_eq!(selection.label(), "statistical");
        assert!(selection.is_recognized());
    }

    #[test]
    fn test_known_modes() {
        for (raw, mode) in [
            ("basic", StrategyMode::Basic),
            ("statistical", StrategyMode::Statistical),
            ("generative", StrategyMode::Generative),
        ] {
            let selection = ModeSelection::resolve(Some(raw));
            assert_eq!(selection.strategy(), mode);
            assert_eq!(selection.label(), raw);
        }
    }

    #[test]
    fn test_unrecognized_mode_is_lenient() {
        let selection = ModeSelection::resolve(Some("quantum"));
        assert!(!selection.is_recognized());
        assert_eq!(selection.strategy(), StrategyMode::Statistical);
        assert_eq!(selection.label(), "quantum");
    }

    #[test]
    fn test_tags_match_exactly() {
        for raw in ["Generative", " generative ", "BASIC", "statistical\n"] {
            let selection = ModeSelection::resolve(Some(raw));
            assert!(!selection.is_recognized());
            assert_eq!(selection.strategy(), StrategyMode::Statistical);
            assert_eq!(selection.label(), raw);
        }
    }

    #[test]
    fn test_empty_string_is_unrecognized() {
        let selection = ModeSelection::resolve(Some(""));
        assert!(!selection.is_recognized());
        assert_eq!(selection.label(), "");
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(StrategyMode::Generative.to_string(), "generative");
        assert_eq!("basic".parse::<StrategyMode>().unwrap(), StrategyMode::Basic);
        assert!("BASIC".parse::<StrategyMode>().is_err());
    }
}
