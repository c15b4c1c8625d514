use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::conf::{IconLook, ToggleConf};
use crate::mode::Mode;
use crate::store::BrowserStore;
use crate::toggle::ModeOwner;

#[derive(Clone, Debug, PartialEq)]
pub struct ModeState {
    pub mode: Mode,
    pub icon: IconLook,
    pub prevent_default: bool,
    toggle: Callback<()>,
}

impl ModeState {
    pub fn new(mode: Mode, conf: &ToggleConf, toggle: Callback<()>) -> Self {
        Self {
            mode,
            icon: conf.icon.look(mode).clone(),
            prevent_default: conf.prevent_default,
            toggle,
        }
    }

    pub fn toggle(&self) {
        self.toggle.emit(());
    }
}

pub type ModeCtx = Rc<ModeState>;

pub struct ModeCtxSub {
    ctx: ModeCtx,
    // keep handle for component rerender after the mode changes
    _ctx_handle: ContextHandle<ModeCtx>,
}

impl AsRef<ModeState> for ModeCtxSub {
    fn as_ref(&self) -> &ModeState {
        &self.ctx
    }
}

impl ModeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ModeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Mode context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ModeCtx) {
        self.ctx = ctx;
    }

    /// Asks the owning [`WithMode`] to invert the mode.
    pub fn toggle(&self) {
        self.ctx.toggle();
    }
}

/// Owns the page mode when the toggle is rendered by yew.
///
/// The body class and the dependent images around the widget are kept in line
/// the same way as on server-rendered pages.
pub struct WithMode {
    owner: ModeOwner<Element, BrowserStore>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub conf: Rc<ToggleConf>,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ToggleMode,
}

impl Component for WithMode {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            owner: ModeOwner::attach(&gloo_utils::document(), BrowserStore, &ctx.props().conf),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ModeState::new(
            self.owner.mode(),
            &ctx.props().conf,
            ctx.link().callback(|()| Msg::ToggleMode),
        );

        html! {
            <ContextProvider<ModeCtx> context={ Rc::new(state) }>
                { ctx.props().children.clone() }
            </ContextProvider<ModeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToggleMode => {
                self.owner.toggle();
                true
            }
        }
    }
}
