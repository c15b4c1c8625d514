mod theme_toggle;
mod widget;
