//! Serves the pre-built static site for every path outside `/api`.
//!
//! Directory requests resolve to their `index.html`. Paths with no matching
//! file get the site's own `404.html` when it exists, or a plain-text body.

use crate::config::Config;
use actix_files::{Files, NamedFile};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

const INDEX_PAGE: &str = "index.html";
const NOT_FOUND_PAGE: &str = "404.html";

pub fn files(config: &Config) -> Files {
    Files::new("/", &config.site_dir)
        .index_file(INDEX_PAGE)
        .default_handler(web::route().to(not_found))
}

async fn not_found(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    debug!("No static file for {}", req.path());
    match NamedFile::open_async(config.site_dir.join(NOT_FOUND_PAGE)).await {
        Ok(page) => {
            let mut resp = page.into_response(&req);
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        }
        Err(_) => HttpResponse::NotFound().body("Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentMode;
    use actix_web::{test, App};
    use std::fs;
    use tempfile::TempDir;

    fn config(site_dir: &TempDir) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            content_dir: "content".into(),
            site_dir: site_dir.path().to_path_buf(),
            mode: EnvironmentMode::Production,
        }
    }

    #[actix_web::test]
    async fn serves_index_and_custom_not_found_page() {
        let site = TempDir::new().unwrap();
        fs::write(site.path().join("index.html"), "<h1>home</h1>").unwrap();
        fs::write(site.path().join("404.html"), "<h1>lost</h1>").unwrap();
        let config = config(&site);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(files(&config)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "<h1>home</h1>");

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "<h1>lost</h1>");
    }

    #[actix_web::test]
    async fn plain_not_found_without_custom_page() {
        let site = TempDir::new().unwrap();
        let config = config(&site);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(files(&config)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/nope.html").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await, "Not Found");
    }
}
