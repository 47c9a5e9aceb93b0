mod header;
mod mobile_menu;
mod post_card;
mod theme_toggle;

pub use header::{ SiteHeader, NAV_LINKS, SITE_NAME };
pub use mobile_menu::MobileMenu;
pub use post_card::{ CardLayout, PostCard, TagPill, TagTone };
pub use theme_toggle::ThemeToggle;
