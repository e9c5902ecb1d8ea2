use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use common::types::Health;
use service::{
    registry::{AprendizDetail, InstructorDetail},
    resource::Patch,
    resources::{aprendiz::AprendizDto, instructor::InstructorDto},
    CrudService, Resource, Services,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors::ApiError;

type IdPath = Result<Path<i32>, PathRejection>;
type Body<T> = Result<Json<T>, JsonRejection>;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> Result<impl IntoResponse, ApiError> {
    let body = service::metrics::encode()
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

async fn list<R: Resource>(State(svc): State<CrudService<R>>) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(svc.get_all().await?))
}

async fn get_one<R: Resource>(State(svc): State<CrudService<R>>, id: IdPath) -> Result<Json<R>, ApiError> {
    let Path(id) = id?;
    Ok(Json(svc.get_by_id(id).await?))
}

async fn create<R: Resource>(State(svc): State<CrudService<R>>, body: Body<R>) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = body?;
    let created = svc.create(dto).await?;
    let location = format!("/api/{}/{}", R::NAME, created.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn replace<R: Resource>(
    State(svc): State<CrudService<R>>,
    id: IdPath,
    body: Body<R>,
) -> Result<Json<R>, ApiError> {
    let Path(id) = id?;
    let Json(dto) = body?;
    if dto.id() != id {
        return Err(ApiError::bad_request(format!("route id {} does not match body id {}", id, dto.id())));
    }
    Ok(Json(svc.update(id, dto).await?))
}

async fn patch<R: Resource>(
    State(svc): State<CrudService<R>>,
    id: IdPath,
    body: Body<R::Patch>,
) -> Result<Json<R>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    if let Some(body_id) = patch.id() {
        if body_id != id {
            return Err(ApiError::bad_request(format!("route id {id} does not match body id {body_id}")));
        }
    }
    Ok(Json(svc.patch(id, patch).await?))
}

async fn remove<R: Resource>(State(svc): State<CrudService<R>>, id: IdPath) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn soft_delete<R: Resource>(State(svc): State<CrudService<R>>, id: IdPath) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    svc.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn instructor_detail(State(services): State<Services>, id: IdPath) -> Result<Json<InstructorDetail>, ApiError> {
    let Path(id) = id?;
    Ok(Json(services.instructor_detail(id).await?))
}

async fn aprendiz_detail(State(services): State<Services>, id: IdPath) -> Result<Json<AprendizDetail>, ApiError> {
    let Path(id) = id?;
    Ok(Json(services.aprendiz_detail(id).await?))
}

/// The seven CRUD endpoints of one entity, relative to its `/api/{Name}` prefix.
pub fn resource_routes<R: Resource>(svc: CrudService<R>) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:id",
            get(get_one::<R>).put(replace::<R>).patch(patch::<R>).delete(remove::<R>),
        )
        .route("/:id/soft", delete(soft_delete::<R>))
        .with_state(svc)
}

fn prefix<R: Resource>() -> String {
    format!("/api/{}", R::NAME)
}

fn mount<R: Resource>(router: Router, svc: &CrudService<R>) -> Router {
    router.nest(&prefix::<R>(), resource_routes(svc.clone()))
}

/// Build the full application router: health, metrics and every entity.
pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    let s = &services;

    // detail lookups share the entity prefix
    let instructor = resource_routes(s.instructor.clone())
        .merge(Router::new().route("/:id/detail", get(instructor_detail)).with_state(services.clone()));
    let aprendiz = resource_routes(s.aprendiz.clone())
        .merge(Router::new().route("/:id/detail", get(aprendiz_detail)).with_state(services.clone()));

    let mut api = Router::new()
        .nest(&prefix::<InstructorDto>(), instructor)
        .nest(&prefix::<AprendizDto>(), aprendiz);
    api = mount(api, &s.person);
    api = mount(api, &s.user);
    api = mount(api, &s.rol);
    api = mount(api, &s.user_rol);
    api = mount(api, &s.form);
    api = mount(api, &s.module);
    api = mount(api, &s.form_module);
    api = mount(api, &s.rol_form);
    api = mount(api, &s.regional);
    api = mount(api, &s.center);
    api = mount(api, &s.sede);
    api = mount(api, &s.program);
    api = mount(api, &s.enterprise);
    api = mount(api, &s.process);
    api = mount(api, &s.type_modality);
    api = mount(api, &s.state);
    api = mount(api, &s.aprendiz_program);
    api = mount(api, &s.instructor_program);
    api = mount(api, &s.aprendiz_process_instructor);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
