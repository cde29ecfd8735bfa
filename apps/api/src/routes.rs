use actix_web::web;

use crate::handlers::{health_check, home_page, recommend_config, test_recommendation};

/// Configure all routes for the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home_page)
        .service(health_check)
        .service(test_recommendation)
        .configure(recommend_config);
}
