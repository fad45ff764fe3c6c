pub mod app;
pub mod cards;
pub mod nav;
pub mod pages;
pub mod theme;
pub mod window;
