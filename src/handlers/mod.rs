pub mod root;
pub mod list;
pub mod redirect;
pub mod create;
pub mod delete;

pub use root::root_handler;
pub use list::list_handler;
pub use redirect::{entry_slug_redirect_handler, redirect_handler};
pub use create::create_handler;
pub use delete::delete_handler;
