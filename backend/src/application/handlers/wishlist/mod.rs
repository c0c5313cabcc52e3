//! Wishlist handlers: sessions a user wants to attend.

mod add_to_wishlist;
mod list_wishlist;

pub use add_to_wishlist::{AddToWishlistCommand, AddToWishlistHandler};
pub use list_wishlist::{ListWishlistHandler, ListWishlistQuery};
