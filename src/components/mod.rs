mod app;
mod atoms;
mod molecules;

pub use app::App;
