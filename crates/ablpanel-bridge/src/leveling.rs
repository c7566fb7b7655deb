/// Automatic bed-leveling mode as exposed by the SmartABL plugin.
///
/// On the wire this is the boolean `abl_always` field: `true` maps to
/// [`LevelingMode::Always`], `false` to [`LevelingMode::Restricted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelingMode {
    /// Leveling runs only when the server-side policy decides it is due
    /// (too many prints, too many days, temperature change, ...).
    Restricted,
    /// Leveling runs unconditionally before every print.
    Always,
}

impl LevelingMode {
    /// Wire representation of the mode (`abl_always` value).
    pub fn as_always(self) -> bool {
        matches!(self, LevelingMode::Always)
    }

    /// Builds a mode from the wire representation.
    pub fn from_always(always: bool) -> Self {
        if always {
            LevelingMode::Always
        } else {
            LevelingMode::Restricted
        }
    }

    /// Human-readable label used by the panel buttons.
    pub fn label(self) -> &'static str {
        match self {
            LevelingMode::Restricted => "ABL Restricted",
            LevelingMode::Always => "ABL Always",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LevelingMode;

    #[test]
    fn wire_round_trip() {
        assert_eq!(LevelingMode::from_always(true), LevelingMode::Always);
        assert_eq!(LevelingMode::from_always(false), LevelingMode::Restricted);
        assert!(LevelingMode::Always.as_always());
        assert!(!LevelingMode::Restricted.as_always());
    }
}
