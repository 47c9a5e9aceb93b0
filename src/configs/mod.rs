pub mod env_validate;

pub use env_validate::{ get_content_base_url, get_revalidate_secs };
