//! Page Components

mod about;
mod home;
mod portfolio;
mod team;

pub use about::AboutPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;
pub use team::TeamPage;
