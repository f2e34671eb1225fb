//! Admin API
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /admin/login | GET | Session status | none |
//! | /admin/login | POST | Log in, sets the session cookie | none |
//! | /admin/logout | GET | Clear the session cookie | none |
//! | /admin/dashboard | GET | Counts and item listing | admin |
//! | /admin/categories | GET, POST | List / create categories | admin |
//! | /admin/items | POST | Create a food item | admin |
//! | /admin/items/{id} | GET, PUT, DELETE | Read / update / delete a food item | admin |
//!
//! Protected routes redirect to `/admin/login` without a valid session.

mod categories;
mod dashboard;
mod items;
mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", get(session::status).post(session::login))
        .route("/logout", get(session::logout))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/items", post(items::create))
        .route(
            "/items/{id}",
            get(items::get_by_id)
                .put(items::update)
                .delete(items::delete),
        )
}
