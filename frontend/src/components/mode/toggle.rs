use stylist::css;
use yew::prelude::*;

use super::mode_ctx::{ModeCtx, ModeCtxSub};

// Round button in the right corner with absolute position
pub struct ModeToggle {
    mode_ctx: ModeCtxSub,
}

pub enum ModeToggleMsg {
    ModeContextUpdate(ModeCtx),
    ToggleMode,
}

impl Component for ModeToggle {
    type Message = ModeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            mode_ctx: ModeCtxSub::subscribe(ctx, Self::Message::ModeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.mode_ctx.as_ref();
        let prevent_default = state.prevent_default;
        let onclick = ctx.link().callback(move |event: MouseEvent| {
            if prevent_default {
                event.prevent_default();
            }
            Self::Message::ToggleMode
        });

        let icon = &state.icon;
        let toggle_style = css!(
            "
                user-select: none;
                position: absolute; right: 15px; top: 15px;
                height: 2em; width: 2em;
                padding: 0;
                border: none;
                border-radius: 100%;
                background: transparent;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }

                img {
                    height: 100%; width: 100%;
                }
            "
        );

        html! {
            <button type="button" {onclick} class={ toggle_style } title={ icon.alt.clone() }>
                <img src={ icon.src.clone() } alt={ icon.alt.clone() }/>
            </button>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ModeContextUpdate(mode_ctx) => {
                self.mode_ctx.set(mode_ctx);
                true
            }
            Self::Message::ToggleMode => {
                self.mode_ctx.toggle();
                false
            }
        }
    }
}
