pub mod book_detail;
pub mod browse;
pub mod make_offer;
pub mod messages;
pub mod profile;

pub use book_detail::BookDetailPage;
pub use browse::BrowsePage;
pub use make_offer::MakeOfferPage;
pub use messages::MessagesPage;
pub use profile::ProfilePage;
