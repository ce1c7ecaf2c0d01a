//! Page Components

mod about;
mod agents;
mod contact;
mod home;
mod not_found;
mod submit;

pub use about::AboutPage;
pub use agents::AgentsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use submit::SubmitPage;
