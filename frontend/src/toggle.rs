use crate::conf::{DependentConf, IconConf, ToggleConf};
use crate::error::MountError;
use crate::mode::Mode;
use crate::page::{PageElement, PageLookup};
use crate::store::ModeStore;

/// Image whose source tracks the mode. Pages without it keep working.
#[derive(Clone, Debug)]
pub struct DependentImage<E> {
    element: Option<E>,
    sources: DependentConf,
}

impl<E: PageElement> DependentImage<E> {
    pub fn new(element: Option<E>, sources: DependentConf) -> Self {
        Self { element, sources }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_some()
    }

    pub fn apply_if_present(&self, mode: Mode) {
        if let Some(element) = &self.element {
            element.set_source(self.sources.source(mode));
        }
    }
}

/// Page-wide marks of the active mode: the body class and dependent images.
#[derive(Clone, Debug)]
pub struct ModeMarks<E> {
    body: E,
    body_class: String,
    dependents: Vec<DependentImage<E>>,
}

impl<E: PageElement> ModeMarks<E> {
    pub fn locate<L>(page: &L, conf: &ToggleConf) -> Result<Self, MountError>
    where
        L: PageLookup<Element = E>,
    {
        let body = page.body().ok_or(MountError::MissingBody)?;

        let dependents = conf
            .dependents
            .iter()
            .map(|dependent| DependentImage::new(page.by_id(&dependent.id), dependent.clone()))
            .collect::<Vec<_>>();

        tracing::debug!(
            present = dependents.iter().filter(|d| d.is_present()).count(),
            registered = dependents.len(),
            "dependent images located"
        );

        Ok(Self {
            body,
            body_class: conf.body_class.clone(),
            dependents,
        })
    }

    pub fn apply(&self, mode: Mode) {
        self.body.set_class(&self.body_class, mode.is_dark());
        for dependent in &self.dependents {
            dependent.apply_if_present(mode);
        }
    }
}

pub struct ToggleParts<E> {
    pub control: E,
    pub icon: E,
    pub marks: ModeMarks<E>,
}

impl<E: PageElement> ToggleParts<E> {
    pub fn locate<L>(page: &L, conf: &ToggleConf) -> Result<Self, MountError>
    where
        L: PageLookup<Element = E>,
    {
        let required =
            |id: &str| page.by_id(id).ok_or_else(|| MountError::MissingElement(id.to_owned()));

        Ok(Self {
            control: required(&conf.toggle_id)?,
            icon: required(&conf.icon_id)?,
            marks: ModeMarks::locate(page, conf)?,
        })
    }
}

/// Single owner of the page mode, shared by the markup toggle and the yew widget.
///
/// The mode is read once when the owner is created and only changes through
/// [`ModeOwner::toggle`], which writes it back to the store right away.
pub struct ModeOwner<E, S> {
    mode: Mode,
    marks: Option<ModeMarks<E>>,
    store: S,
    storage_key: String,
}

impl<E: PageElement, S: ModeStore> ModeOwner<E, S> {
    /// Reads the stored mode and applies it to the marks. Storage is not written.
    pub fn initialize(marks: Option<ModeMarks<E>>, store: S, storage_key: &str) -> Self {
        let owner = Self {
            mode: Mode::derived(&store, storage_key),
            marks,
            store,
            storage_key: storage_key.to_owned(),
        };
        owner.apply();
        owner
    }

    /// Like [`ModeOwner::initialize`], but a page without a body keeps the
    /// mode without marking it anywhere.
    pub fn attach<L>(page: &L, store: S, conf: &ToggleConf) -> Self
    where
        L: PageLookup<Element = E>,
    {
        let marks = match ModeMarks::locate(page, conf) {
            Ok(marks) => Some(marks),
            Err(e) => {
                tracing::warn!(error = %e, "page marks unavailable, only the toggle follows the mode");
                None
            }
        };
        Self::initialize(marks, store, &conf.storage_key)
    }

    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.inverted();
        self.apply();
        self.mode.remember(&self.store, &self.storage_key);
        tracing::debug!(mode = ?self.mode, "mode toggled");
        self.mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn apply(&self) {
        if let Some(marks) = &self.marks {
            marks.apply(self.mode);
        }
    }
}

/// Mode toggle attached to server-rendered markup.
pub struct ThemeToggle<E, S> {
    owner: ModeOwner<E, S>,
    control: E,
    icon: E,
    icon_conf: IconConf,
}

impl<E: PageElement, S: ModeStore> ThemeToggle<E, S> {
    /// Reads the stored mode and brings the page in line with it. Storage is not written.
    pub fn initialize(parts: ToggleParts<E>, store: S, conf: &ToggleConf) -> Self {
        let toggle = Self {
            owner: ModeOwner::initialize(Some(parts.marks), store, &conf.storage_key),
            control: parts.control,
            icon: parts.icon,
            icon_conf: conf.icon.clone(),
        };
        toggle.apply_icon();
        toggle
    }

    pub fn locate<L>(page: &L, store: S, conf: &ToggleConf) -> Result<Self, MountError>
    where
        L: PageLookup<Element = E>,
    {
        let parts = ToggleParts::locate(page, conf)?;
        Ok(Self::initialize(parts, store, conf))
    }

    pub fn on_toggle_clicked(&mut self) -> Mode {
        self.owner.toggle();
        self.apply_icon();
        self.owner.mode()
    }

    pub fn mode(&self) -> Mode {
        self.owner.mode()
    }

    pub fn control(&self) -> &E {
        &self.control
    }

    fn apply_icon(&self) {
        let look = self.icon_conf.look(self.owner.mode());
        self.icon.set_source(&look.src);
        self.icon.set_label(&look.alt);
    }
}
