use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use innhouse::config::Config;
use innhouse::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    log::info!("Initializing schema...");
    db::init_schema(&pool).await.map_err(std::io::Error::other)?;

    if std::env::args().any(|arg| arg == "--init-db") {
        println!("Initialized the database at {}", config.database_url);
        return Ok(());
    }

    log::info!("Starting server at http://{}", config.bind_addr);

    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config.clone());
    let session_key = config.session_key.clone();
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(handlers::public::index))
            .route("/rooms", web::get().to(handlers::public::rooms))
            .route("/book", web::post().to(handlers::public::book))
            .route("/bookings", web::get().to(handlers::public::bookings))
            .service(
                web::scope("/admin")
                    .route("", web::get().to(handlers::admin::index))
                    .route("/login", web::get().to(handlers::auth::login_form))
                    .route("/login", web::post().to(handlers::auth::login))
                    .route("/logout", web::get().to(handlers::auth::logout))
                    .route("/rooms", web::get().to(handlers::admin::rooms_list))
                    .route("/rooms/new", web::get().to(handlers::admin::new_room_form))
                    .route("/rooms/new", web::post().to(handlers::admin::create_room))
                    .route(
                        "/rooms/{id}/edit",
                        web::get().to(handlers::admin::edit_room_form),
                    )
                    .route(
                        "/rooms/{id}/edit",
                        web::post().to(handlers::admin::update_room),
                    )
                    .route(
                        "/rooms/{id}/delete",
                        web::post().to(handlers::admin::delete_room),
                    )
                    .route("/bookings", web::get().to(handlers::admin::bookings_list))
                    .route(
                        "/bookings/{id}",
                        web::get().to(handlers::admin::booking_detail),
                    )
                    .route(
                        "/bookings/{id}",
                        web::post().to(handlers::admin::update_booking_status),
                    )
                    .route(
                        "/bookings/{id}/delete",
                        web::post().to(handlers::admin::delete_booking),
                    ),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
