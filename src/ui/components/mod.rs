pub mod add_book_dialog;
pub mod book_card;
pub mod carousel;
pub mod condition_stars;
pub mod image_list;
pub mod kpi_card;
pub mod owned_item_dialog;
pub mod toast;
