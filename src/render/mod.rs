pub mod hero_paint;
pub mod html;
pub mod reveal;
pub mod section;
pub mod theme;
pub mod widgets;
