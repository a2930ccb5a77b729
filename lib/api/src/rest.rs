use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use fundnet_core::{enumerate_paths, Error, Graph, NetworkFilter, PathSummary, DEFAULT_MAX_DEPTH};
use fundnet_store::DatasetStore;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Deserialize)]
struct NetworkQuery {
    node_type: Option<String>,
    region: Option<String>,
    sector: Option<String>,
    funding_type: Option<String>,
    time_period: Option<String>,
    search: Option<String>,
    /// Path of an alternate dataset file, read for this request only.
    dataset: Option<String>,
}

impl NetworkQuery {
    fn filter(&self) -> NetworkFilter {
        NetworkFilter {
            node_type: self.node_type.clone(),
            region: self.region.clone(),
            sector: self.sector.clone(),
            funding_type: self.funding_type.clone(),
            time_period: self.time_period.clone(),
            search: self.search.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PathwaysRequest {
    source_id: Option<String>,
    target_id: Option<String>,
    max_depth: Option<usize>,
}

pub struct RestApi;

impl RestApi {
    /// Binds and runs the HTTP server. Failure to bind is the only fatal
    /// condition; every request-time error becomes an envelope response.
    pub async fn start(store: Arc<DatasetStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health))
        .route("/api/network", web::get().to(network))
        .route("/api/analysis/pathways", web::post().to(pathways))
        .route("/api/analysis/centrality", web::post().to(centrality))
        .route("/api/analysis/communities", web::post().to(communities))
        .route("/api/admin/reload", web::post().to(reload))
        .default_service(web::route().to(not_found));
}

fn ok_body(data: impl serde::Serialize) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true, "data": data }))
}

fn error_body(err: &Error) -> HttpResponse {
    let body = json!({ "ok": false, "error": err.to_string() });
    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        error!("Request failed: {}", err);
        HttpResponse::InternalServerError().json(body)
    }
}

/// Liveness probe, independent of dataset load state.
async fn health() -> ActixResult<HttpResponse> {
    Ok(ok_body(json!({ "status": "ok" })))
}

fn request_graph(
    store: &DatasetStore,
    dataset: Option<&str>,
) -> Result<Arc<Graph>, Error> {
    match dataset {
        Some(path) if !path.trim().is_empty() => store.load_alternate(path.trim()),
        _ => store.graph(),
    }
}

async fn network(
    store: web::Data<Arc<DatasetStore>>,
    query: web::Query<NetworkQuery>,
) -> ActixResult<HttpResponse> {
    let graph = match request_graph(&store, query.dataset.as_deref()) {
        Ok(graph) => graph,
        Err(e) => return Ok(error_body(&e)),
    };

    let filtered = query.filter().apply(&graph);
    Ok(ok_body(json!({
        "nodes": filtered.nodes(),
        "edges": filtered.edges(),
    })))
}

async fn pathways(
    store: web::Data<Arc<DatasetStore>>,
    req: web::Json<PathwaysRequest>,
) -> ActixResult<HttpResponse> {
    let source = req.source_id.as_deref().map(str::trim).unwrap_or("");
    let target = req.target_id.as_deref().map(str::trim).unwrap_or("");
    if source.is_empty() || target.is_empty() {
        let err = Error::MissingParameter("source_id and target_id required".to_string());
        return Ok(error_body(&err));
    }

    let graph = match store.graph() {
        Ok(graph) => graph,
        Err(e) => return Ok(error_body(&e)),
    };

    let max_depth = req.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    let paths = enumerate_paths(&graph, source, target, max_depth);
    Ok(ok_body(PathSummary::from_paths(paths)))
}

async fn centrality(store: web::Data<Arc<DatasetStore>>) -> ActixResult<HttpResponse> {
    match store.graph() {
        Ok(graph) => Ok(ok_body(fundnet_core::centrality(&graph))),
        Err(e) => Ok(error_body(&e)),
    }
}

async fn communities(store: web::Data<Arc<DatasetStore>>) -> ActixResult<HttpResponse> {
    match store.graph() {
        Ok(graph) => Ok(ok_body(fundnet_core::communities(&graph))),
        Err(e) => Ok(error_body(&e)),
    }
}

async fn reload(store: web::Data<Arc<DatasetStore>>) -> ActixResult<HttpResponse> {
    match store.reload() {
        Ok(()) => {
            let graph = store.graph().map_err(actix_web::error::ErrorInternalServerError)?;
            Ok(ok_body(json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            })))
        }
        Err(e) => Ok(error_body(&e)),
    }
}

async fn not_found() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::NotFound().json(json!({
        "ok": false,
        "error": "API endpoint not found",
    })))
}
