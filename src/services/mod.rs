pub mod announcements;
pub mod applications;
pub mod auth;
pub mod batches;
pub mod categories;
pub mod files;
pub mod ranking;
pub mod users;

pub use announcements::AnnouncementService;
pub use applications::ApplicationService;
pub use auth::AuthService;
pub use batches::BatchService;
pub use categories::CategoryService;
pub use files::FileService;
pub use ranking::RankingService;
pub use users::UserService;
