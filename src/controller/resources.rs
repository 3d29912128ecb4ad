use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResourceCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

/// Resource library categories shown on the marketing site
pub static CATEGORIES: [ResourceCategory; 4] = [
    ResourceCategory {
        id: "blog",
        name: "Blog",
        count: 27,
    },
    ResourceCategory {
        id: "case-studies",
        name: "Case Studies",
        count: 12,
    },
    ResourceCategory {
        id: "whitepapers",
        name: "Whitepapers",
        count: 8,
    },
    ResourceCategory {
        id: "guides",
        name: "Guides",
        count: 15,
    },
];

#[derive(Debug, Serialize)]
struct Catalog {
    success: bool,
    message: &'static str,
    categories: &'static [ResourceCategory],
}

#[tracing::instrument(name = "List resource categories")]
#[get("")]
async fn list() -> impl Responder {
    HttpResponse::Ok().json(Catalog {
        success: true,
        message: "Resource categories",
        categories: &CATEGORIES,
    })
}

/// Resource library API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/resources").service(list)
}
