use crate::store::ModeStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    const DARK_MARKER: &'static str = "dark";
    const LIGHT_MARKER: &'static str = "light";

    /// Only the exact dark marker selects `Dark`; absent or unknown values fall back to `Light`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(Self::DARK_MARKER) => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => Self::DARK_MARKER,
            Self::Light => Self::LIGHT_MARKER,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn derived(store: &impl ModeStore, key: &str) -> Self {
        let stored = store.load(key);
        let mode = Self::from_stored(stored.as_deref());
        tracing::debug!(?stored, ?mode, "mode derived from storage");
        mode
    }

    pub fn remember(self, store: &impl ModeStore, key: &str) {
        if let Err(e) = store.save(key, self.stored_value()) {
            tracing::warn!(error = %e, mode = ?self, "failed to persist mode");
        }
    }
}
