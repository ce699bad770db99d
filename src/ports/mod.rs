// src/ports/mod.rs
pub mod list_view;

pub use list_view::ListPresenter;
