use omd_maintenance::{flags::ConfigFlags, routes, settings::Settings, tls};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().expect("failed to read settings");

    let site_flags = match &settings.site_conf {
        Some(path) => ConfigFlags::load_site_conf(path)
            .await
            .expect("failed to load site.conf"),
        None => ConfigFlags::new(),
    };
    let flags = site_flags.merge(ConfigFlags::from_env());
    if flags.is_empty() {
        warn!("no CONFIG_* flags found, every service notice will be skipped");
    }
    info!(flags = flags.len(), "configuration flags loaded");

    let app = routes::build_router(routes::AppState::new(flags));

    if settings.tls_enabled {
        let cert_path = settings.cert_path();
        let key_path = settings.key_path();
        tls::ensure_tls_cert(&cert_path, &key_path, &settings.tls_names)
            .await
            .expect("failed to prepare TLS certificates");
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .expect("failed to load TLS certificates");

        info!("maintenance page listening on https://{}", settings.bind);
        axum_server::bind_rustls(settings.bind, tls_config)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    } else {
        info!("maintenance page listening on http://{}", settings.bind);
        axum_server::bind(settings.bind)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    }
}
