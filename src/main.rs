#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use allevapp::server;

/// Largest request body accepted, sized for multi-file attachment and document uploads
#[cfg(feature = "server")]
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::extract::DefaultBodyLimit;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, model::app::AppState, scheduler::Scheduler, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let functions = startup::build_functions_client(&config)?;
        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let storage = startup::open_blob_store(&config).await?;

        startup::bootstrap_admin(&db, &config).await?;

        Scheduler::new(db.clone(), functions.clone())
            .await?
            .start()
            .await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState {
                db,
                functions,
                storage,
            })
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
