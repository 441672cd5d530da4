use crate::{
    routes::students::{
        get_delete_student, get_edit_student_form, get_new_student_form, get_students,
        post_new_student, post_update_student,
    },
    state::RosterState,
};
use axum::{Router, routing::{get, post}};
use tower_http::trace::TraceLayer;

pub mod students;

pub fn roster_router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_students))
        .route("/students", get(get_students).post(post_new_student))
        .route("/students/new", get(get_new_student_form))
        .route("/students/edit/{id}", get(get_edit_student_form))
        .route("/students/{id}", post(post_update_student))
        .route("/students-delete/{id}", get(get_delete_student))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
