//! Card components for the three record kinds.

mod book_card;
mod photo_card;
mod staff_card;

pub use book_card::BookCard;
pub use photo_card::PhotoCard;
pub use staff_card::StaffCard;
