use super::request::ApplyAction;
use super::response::ApiAction;
use super::response::ApiResult;
use super::response::ApiState;
use crate::gameplay::engine::Engine;
use crate::gameplay::state::State;
use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::web;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use std::sync::Mutex;

/// one engine and its single live hand. the server runs one worker and
/// takes the mutex per request, so browser calls are strictly serialized.
pub struct Session {
    engine: Engine,
    state: State,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        let mut engine = Engine::new(seed);
        let state = engine.new_hand(crate::STACK, crate::S_BLIND, crate::B_BLIND);
        Self { engine, state }
    }
}

type Shared = web::Data<Mutex<Session>>;

pub struct Server;

impl Server {
    pub async fn run(bind: &str, seed: u64) -> Result<(), std::io::Error> {
        let session = web::Data::new(Mutex::new(Session::new(seed)));
        log::info!("engine api listening on http://{}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(session.clone())
                .app_data(web::JsonConfig::default().error_handler(|err, _| {
                    let body = serde_json::json!({ "error": err.to_string() });
                    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
                }))
                .service(
                    web::resource("/new_hand")
                        .route(web::post().to(new_hand))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/state")
                        .route(web::get().to(state))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/legal_actions")
                        .route(web::get().to(legal_actions))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/apply_action")
                        .route(web::post().to(apply_action))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/apply_random_action")
                        .route(web::post().to(apply_random_action))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/terminal_result")
                        .route(web::get().to(terminal_result))
                        .default_service(web::route().to(not_allowed)),
                )
                .service(
                    web::resource("/health")
                        .route(web::get().to(health))
                        .default_service(web::route().to(not_allowed)),
                )
                .default_service(web::route().to(not_found))
        })
        .workers(1)
        .bind(bind)?
        .run()
        .await
    }
}

// route handlers; each one holds the session for its whole request

async fn new_hand(session: Shared) -> impl Responder {
    let mut guard = session.lock().expect("session lock");
    let session = &mut *guard;
    session.state = session
        .engine
        .new_hand(crate::STACK, crate::S_BLIND, crate::B_BLIND);
    HttpResponse::Ok().json(ApiState::from(&session.state))
}

async fn state(session: Shared) -> impl Responder {
    let guard = session.lock().expect("session lock");
    HttpResponse::Ok().json(ApiState::from(&guard.state))
}

async fn legal_actions(session: Shared) -> impl Responder {
    let guard = session.lock().expect("session lock");
    let menu = guard
        .engine
        .legal_actions(&guard.state)
        .iter()
        .map(ApiAction::from)
        .collect::<Vec<ApiAction>>();
    HttpResponse::Ok().json(menu)
}

async fn apply_action(session: Shared, body: web::Json<ApplyAction>) -> impl Responder {
    let mut guard = session.lock().expect("session lock");
    let session = &mut *guard;
    let menu = session.engine.legal_actions(&session.state);
    let index = body.index;
    if index < 0 || index as usize >= menu.len() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "ok": false, "error": "invalid index" }));
    }
    let ok = session
        .engine
        .apply_action(&mut session.state, &menu[index as usize]);
    HttpResponse::Ok().json(serde_json::json!({ "ok": ok }))
}

async fn apply_random_action(session: Shared) -> impl Responder {
    let mut guard = session.lock().expect("session lock");
    let session = &mut *guard;
    match session.engine.random_legal_action(&session.state) {
        None => HttpResponse::BadRequest()
            .json(serde_json::json!({ "ok": false, "error": "no legal actions" })),
        Some(action) => {
            let ok = session.engine.apply_action(&mut session.state, &action);
            HttpResponse::Ok().json(serde_json::json!({ "ok": ok }))
        }
    }
}

async fn terminal_result(session: Shared) -> impl Responder {
    let guard = session.lock().expect("session lock");
    let result = guard.engine.terminal_payoff(&guard.state);
    HttpResponse::Ok().json(ApiResult::from(&result))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "not found" }))
}

async fn not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "error": "method not allowed" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_opens_with_a_live_hand() {
        let session = Session::new(crate::SEED);
        assert!(!session.state.is_terminal());
        assert!(session.state.pot() == 15);
    }

    #[test]
    fn session_seed_is_reproducible() {
        let a = Session::new(99);
        let b = Session::new(99);
        assert!(a.state.hole_cards() == b.state.hole_cards());
    }
}
