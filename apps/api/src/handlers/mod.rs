pub mod health;
pub mod home;
pub mod recommend;
pub mod test_search;

pub use health::health_check;
pub use home::home_page;
pub use recommend::recommend_config;
pub use test_search::test_recommendation;
