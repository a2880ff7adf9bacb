//! Marketing site pages

mod home;
mod products;
mod contact;

pub use home::HomePage;
pub use products::ProductsPage;
pub use contact::ContactPage;
