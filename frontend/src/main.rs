//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        let pool = backend::db_utils::sqlite_utils::browse_pool()
            .await
            .expect("opening the roommate database failed");
        backend::db_utils::seed_data::seed_if_empty(pool)
            .await
            .expect("seeding the roommate database failed");

        Ok(dioxus::server::router(App)
            // the data routes the UI talks to live next to the page router
            .merge(backend::server_extra::rest_router(pool.clone()))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    // println!("Request: {} {}", request.method(), request.uri().path());
                    let res = next.run(request).await;
                    // println!("Response: {}", res.status());
                    res
                },
            )))
    });
}
