#[cfg(feature = "csr")]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    // logging is best effort in the browser
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}

// `csr` takes precedence so a build with every feature still has one entry point
#[cfg(all(feature = "serve", not(feature = "csr")))]
#[tokio::main]
async fn main() {
    use axum::Router;
    use http::{header, HeaderValue};
    use leptos::prelude::get_configuration;
    use tower::ServiceBuilder;
    use tower_http::{
        services::{ServeDir, ServeFile},
        set_header::SetResponseHeaderLayer,
        trace::TraceLayer,
    };
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Should be able to read site config");
    let addr = conf.leptos_options.site_addr;
    let site_root = conf.leptos_options.site_root.to_string();

    // the bundle is a single page, so unknown paths get index.html
    let index = ServeFile::new(format!("{site_root}/index.html"));
    let app = Router::new()
        .fallback_service(ServeDir::new(&site_root).not_found_service(index))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                )),
        );

    tracing::info!(%addr, %site_root, "serving portfolio bundle");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Should be able to serve site");
}

#[cfg(not(any(feature = "csr", feature = "serve")))]
pub fn main() {
    // nothing to run without a target feature
    // build with `csr` (Trunk) for the site or `serve` for the preview server
}
