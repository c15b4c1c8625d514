pub mod mode_ctx;
pub mod toggle;

pub use mode_ctx::{ModeCtx, ModeCtxSub, ModeState, WithMode};
pub use toggle::ModeToggle;

use std::rc::Rc;

use yew::prelude::*;

use crate::conf::ToggleConf;

#[derive(Properties, PartialEq)]
pub struct ModeWidgetProps {
    pub conf: Rc<ToggleConf>,
}

#[function_component(ModeWidget)]
pub fn mode_widget(props: &ModeWidgetProps) -> Html {
    html! {
        <WithMode conf={ props.conf.clone() }>
            <ModeToggle/>
        </WithMode>
    }
}

pub fn render_widget(root: web_sys::Element, conf: ToggleConf) {
    tracing::debug!(root_id = %conf.widget_root_id, "rendering mode widget");
    yew::Renderer::<ModeWidget>::with_root_and_props(root, ModeWidgetProps { conf: Rc::new(conf) })
        .render();
}
