//! UI Components
//!
//! Leptos views over the task, profile and auth logic.

mod route_guard;
mod layout;
mod nav_bar;
mod task_card;
mod task_list_page;
mod task_details_page;
mod photo_drop_zone;
mod profile_page;
mod edit_profile_page;
mod sign_in_page;
mod sign_up_page;

pub use route_guard::{RequireAnonymous, RequireAuth};
pub use layout::Layout;
pub use nav_bar::NavBar;
pub use task_card::TaskCard;
pub use task_list_page::TaskListPage;
pub use task_details_page::TaskDetailsPage;
pub use photo_drop_zone::PhotoDropZone;
pub use profile_page::ProfilePage;
pub use edit_profile_page::EditProfilePage;
pub use sign_in_page::SignInPage;
pub use sign_up_page::SignUpPage;
