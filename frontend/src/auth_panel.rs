use serde::Deserialize;

use crate::conf::AuthConf;
use crate::error::MountError;
use crate::page::{PageElement, PageLookup};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    SignIn,
    SignUp,
}

pub struct Trigger<E> {
    pub element: E,
    pub panel: Panel,
    pub prevent_default: bool,
}

/// Login container switching between the sign-in and sign-up presentation.
pub struct AuthPanel<E> {
    container: E,
    classes: Vec<String>,
    panel: Panel,
}

impl<E: PageElement> AuthPanel<E> {
    pub fn new(container: E, classes: Vec<String>) -> Self {
        let panel = match classes.first() {
            Some(class) if container.has_class(class) => Panel::SignUp,
            _ => Panel::SignIn,
        };

        Self {
            container,
            classes,
            panel,
        }
    }

    /// Triggers absent from the page are left out.
    pub fn locate<L>(page: &L, conf: &AuthConf) -> Result<(Self, Vec<Trigger<E>>), MountError>
    where
        L: PageLookup<Element = E>,
    {
        let container = page
            .by_selector(&conf.container_selector)
            .ok_or_else(|| MountError::MissingElement(conf.container_selector.clone()))?;

        let triggers = conf
            .triggers
            .iter()
            .filter_map(|trigger| match page.by_id(&trigger.id) {
                Some(element) => Some(Trigger {
                    element,
                    panel: trigger.panel,
                    prevent_default: trigger.prevent_default,
                }),
                None => {
                    tracing::debug!(id = %trigger.id, "auth panel trigger not on page");
                    None
                }
            })
            .collect();

        Ok((Self::new(container, conf.classes.clone()), triggers))
    }

    pub fn show(&mut self, panel: Panel) {
        let sign_up = panel == Panel::SignUp;
        for class in &self.classes {
            self.container.set_class(class, sign_up);
        }
        self.panel = panel;
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }
}
