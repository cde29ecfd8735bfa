use crate::{
    config::Config,
    error::Result,
    routes,
    services::{BookSource, GoogleBooksClient, SearchAdapter},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use std::{net::TcpListener, sync::Arc};

pub struct Application {
    port: u16,
    host: String,
    search: SearchAdapter,
}

impl Application {
    /// Create a new application instance backed by the configured upstream API
    pub fn new(config: &Config) -> Self {
        let source = Arc::new(GoogleBooksClient::new(&config.books_api_url));
        Self::with_source(config, source)
    }

    /// Create an application instance that searches through `source`
    pub fn with_source(config: &Config, source: Arc<dyn BookSource>) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            search: SearchAdapter::new(source),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        let bind_address = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&bind_address)
            .with_context(|| format!("Failed to bind {}", bind_address))?;

        info!("Starting Book Recommender at http://{}", bind_address);
        info!("Try: http://{}/test?book=Harry+Potter", bind_address);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let search = web::Data::new(self.search.clone());

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(search.clone())
                .configure(routes::configure)
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
