use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod appointment {
        pub mod dto;
        pub mod routes;
    }
    pub mod auth {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod barber {
        pub mod dto;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod promotion {
        pub mod dto;
        pub mod routes;
    }
    pub mod review {
        pub mod dto;
        pub mod routes;
    }
    pub mod service {
        pub mod dto;
        pub mod routes;
    }
    pub mod suggestion {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod firebase_config;
    pub mod gemini_config;
    pub mod server_config;
}
mod i18n {
    pub mod messages;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP
/// server. The content store is optional at startup: reads degrade to the
/// static catalogs when it is empty or unreachable.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database (lazy pool + best-effort migrations)
    let pool = database_config::init_database().await?;

    // 5. Seed the locale catalogs once, if the store is reachable and empty
    if let Err(err) = persistence::seed::seed_locale_catalogs(&pool).await {
        tracing::warn!("Seeding skipped ({}), content reads will fall back", err);
    }

    // 6. Wire dependencies
    let container = DependencyContainer::new(pool)?;

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
