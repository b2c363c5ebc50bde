use std::sync::Arc;
use warp::Filter;

use crate::store::WordStore;

pub mod config;
pub mod store;

pub fn create_routes(
    store: Arc<WordStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map({
        let store = store.clone();
        move || store.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Full word list, fetched once per session by the game client
    let words = warp::path!("api" / "words")
        .and(warp::get())
        .and(store_filter.clone())
        .map(|store: Arc<WordStore>| warp::reply::json(&store.all()));

    // Word list filtered by difficulty level
    let words_by_difficulty = warp::path!("api" / "words" / "difficulty" / String)
        .and(warp::get())
        .and(store_filter)
        .and_then(handle_words_by_difficulty);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    health
        .or(words_by_difficulty)
        .or(words)
        .with(cors)
        .with(warp::log("palabra_server"))
}

async fn handle_words_by_difficulty(
    level: String,
    store: Arc<WordStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let difficulty: u32 = match level.parse() {
        Ok(value) => value,
        Err(_) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Invalid difficulty level"
                })),
                warp::http::StatusCode::BAD_REQUEST,
            ));
        }
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&store.by_difficulty(difficulty)),
        warp::http::StatusCode::OK,
    ))
}
