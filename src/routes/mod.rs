pub mod announcements;

pub mod applications;

pub mod auth;

pub mod batches;

pub mod categories;

pub mod files;

pub mod ranking;

pub mod users;

pub use announcements::configure_announcement_routes;
pub use applications::configure_application_routes;
pub use auth::configure_auth_routes;
pub use batches::configure_batch_routes;
pub use categories::configure_category_routes;
pub use files::configure_file_routes;
pub use ranking::configure_ranking_routes;
pub use users::configure_user_routes;
