#![allow(dead_code)]

use axum_test::TestServer;
use course_store::prelude::*;
use course_store::routes::router;
use std::sync::Arc;

pub fn create_test_repository() -> Arc<InMemoryCourseRepository> {
    Arc::new(InMemoryCourseRepository::new(Arc::new(
        SequentialIdGenerator::default(),
    )))
}

pub fn create_test_state() -> AppState {
    let repository = create_test_repository();
    AppState::new(Arc::new(CourseService::new(repository)))
}

pub async fn create_test_course(state: &AppState, title: &str) -> Course {
    state
        .course_service
        .create_course(Some(title.to_string()))
        .await
        .unwrap()
}

/// Server over the full router, test routes included, with an empty store.
pub fn make_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(router(state.clone(), true)).unwrap();
    (server, state)
}
