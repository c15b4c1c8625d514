pub mod mode;

pub use mode::{ModeCtx, ModeCtxSub, ModeToggle, ModeWidget, WithMode};
