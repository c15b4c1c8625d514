// Page configuration definitions, functions and tests
//
// Every struct is `#[serde(default)]`, so a page only spells out what differs
// from the notes app markup.

use serde::Deserialize;

use crate::auth_panel::Panel;
use crate::error::ConfError;
use crate::mode::Mode;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PageConf {
    pub mode: ToggleConf,
    pub auth: AuthConf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToggleConf {
    pub storage_key: String,
    pub body_class: String,
    pub toggle_id: String,
    pub icon_id: String,
    pub widget_root_id: String,
    /// Suppress the click's default action, for both the markup toggle and the widget button.
    pub prevent_default: bool,
    pub icon: IconConf,
    pub dependents: Vec<DependentConf>,
}

/// Icon looks keyed by the action they offer, not by the active mode.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IconConf {
    pub to_light: IconLook,
    pub to_dark: IconLook,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IconLook {
    pub src: String,
    pub alt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DependentConf {
    pub id: String,
    pub light_src: String,
    pub dark_src: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConf {
    pub container_selector: String,
    pub classes: Vec<String>,
    pub triggers: Vec<TriggerConf>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TriggerConf {
    pub id: String,
    pub panel: Panel,
    #[serde(default)]
    pub prevent_default: bool,
}

impl PageConf {
    pub const ELEMENT_ID: &'static str = "mode-toggle-conf";

    pub fn from_json(raw: &str) -> Result<Self, ConfError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Falls back to defaults when the page carries no configuration or a broken one.
    pub fn derive(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(conf) => conf,
            Err(e) => {
                tracing::warn!(error = %e, "using default page configuration");
                Self::default()
            }
        }
    }
}

impl Default for ToggleConf {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            body_class: "dark-mode".into(),
            toggle_id: "darkModeToggle".into(),
            icon_id: "darkModeIcon".into(),
            widget_root_id: "modeToggleRoot".into(),
            prevent_default: true,
            icon: IconConf::default(),
            dependents: vec![
                DependentConf::new("signinImage", "/static/img/log.svg", "/static/img/log_dark.svg"),
                DependentConf::new(
                    "signupImage",
                    "/static/img/register.svg",
                    "/static/img/register_dark.svg",
                ),
            ],
        }
    }
}

impl Default for IconConf {
    fn default() -> Self {
        Self {
            to_light: IconLook::new("/static/img/light_mode.svg", "Light Mode"),
            to_dark: IconLook::new("/static/img/dark_mode.svg", "Dark Mode"),
        }
    }
}

impl IconConf {
    pub fn look(&self, active: Mode) -> &IconLook {
        match active {
            Mode::Dark => &self.to_light,
            Mode::Light => &self.to_dark,
        }
    }
}

impl IconLook {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_owned(),
            alt: alt.to_owned(),
        }
    }
}

impl DependentConf {
    pub fn new(id: &str, light_src: &str, dark_src: &str) -> Self {
        Self {
            id: id.to_owned(),
            light_src: light_src.to_owned(),
            dark_src: dark_src.to_owned(),
        }
    }

    pub fn source(&self, mode: Mode) -> &str {
        match mode {
            Mode::Dark => &self.dark_src,
            Mode::Light => &self.light_src,
        }
    }
}

impl Default for AuthConf {
    fn default() -> Self {
        Self {
            container_selector: ".container".into(),
            classes: vec!["sign-up-mode".into(), "signup-mode2".into()],
            triggers: vec![
                TriggerConf::new("signin_btn", Panel::SignIn, false),
                TriggerConf::new("signup_btn", Panel::SignUp, false),
                TriggerConf::new("signin_btn2", Panel::SignIn, true),
                TriggerConf::new("signup_btn2", Panel::SignUp, true),
            ],
        }
    }
}

impl TriggerConf {
    pub fn new(id: &str, panel: Panel, prevent_default: bool) -> Self {
        Self {
            id: id.to_owned(),
            panel,
            prevent_default,
        }
    }
}
