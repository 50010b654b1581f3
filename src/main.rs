#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use roomstay::{config::Config, services::geocode::Geocoder, state::AppState, App};
    use std::sync::Arc;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = roomstay::logger::setup_logger(config.log_level) {
        eprintln!("Error setting up logger: {e}");
        std::process::exit(1);
    }

    // Initialize database
    let db = roomstay::db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    roomstay::db::run_migrations(&db)
        .await
        .expect("Failed to run migrations");

    if config.google_map_api_key.is_empty() {
        log::warn!("GOOGLE_MAP_API_KEY is not set, location lookups will fail");
    }
    let geocoder = Geocoder::new(
        config.google_map_api_key.clone(),
        config.geocode_language.clone(),
    )
    .expect("Failed to build geocoder");

    let state = AppState {
        db,
        geocoder: Arc::new(geocoder),
    };

    // Session store
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.production)
        .with_same_site(tower_sessions::cookie::SameSite::Lax);

    // Leptos config
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // Build router
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(state))
        .layer(session_layer)
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use roomstay::App;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
