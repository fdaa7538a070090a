use std::process;

use actix_web::HttpServer;
use pushkind_trivia::db::{establish_connection_pool, run_migrations};
use pushkind_trivia::models::config::ServerConfig;
use pushkind_trivia::repository::DieselRepository;
use pushkind_trivia::routes::build_app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = run_migrations(&mut conn) {
                log::error!("Failed to run database migrations: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting trivia server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || build_app(repo.clone()))
        .bind(bind_address)?
        .run()
        .await
}
