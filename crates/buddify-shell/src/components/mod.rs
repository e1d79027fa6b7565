pub mod app;
pub mod avatar_menu;
pub mod logo;
pub mod menu_toggle;
pub mod nav_bar;
pub mod nav_link;
pub mod page;
