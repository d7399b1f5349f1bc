pub mod category;
pub mod item;

pub use category::Category;
pub use item::{Item, ItemType};
