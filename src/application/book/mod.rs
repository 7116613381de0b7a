mod book_service;
mod errors;

pub use book_service::{
    ServiceDependencies, add_book, delete_book, find_all_books, find_books_by_published,
    get_book_by_id, update_book, update_book_name, update_book_name_and_price, update_book_price,
};
pub use errors::{BookError, Result};
