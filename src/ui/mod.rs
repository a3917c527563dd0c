//! UI module - reusable widgets shared by the pages

pub mod components;
pub mod pagination;
