pub use super::announcements::Entity as Announcements;
pub use super::application_materials::Entity as ApplicationMaterials;
pub use super::applications::Entity as Applications;
pub use super::batches::Entity as Batches;
pub use super::categories::Entity as Categories;
pub use super::item_scores::Entity as ItemScores;
pub use super::items::Entity as Items;
pub use super::uploaded_files::Entity as UploadedFiles;
pub use super::users::Entity as Users;
