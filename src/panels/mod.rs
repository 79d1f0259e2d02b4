mod central_panel;
mod color_panel;
mod toolbar;

pub use central_panel::central_panel;
pub use color_panel::color_panel;
pub use toolbar::toolbar;
