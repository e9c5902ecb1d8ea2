use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::Services;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn serve(services: Services) -> anyhow::Result<TestApp> {
    let app = server::app(services);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

async fn start_memory_server() -> anyhow::Result<TestApp> {
    serve(Services::in_memory()).await
}

/// Server over PostgreSQL, or `None` when no database is configured.
async fn start_db_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("DATABASE_URL").is_err() || std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("DATABASE_URL missing; skip db e2e tests");
        return Ok(None);
    }
    let mut cfg = configs::AppConfig::default();
    cfg.database.url = std::env::var("DATABASE_URL")?;
    cfg.database.min_connections = 1;
    let services = match server::build_services(&cfg).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("skip db e2e tests: {}", e);
            return Ok(None);
        }
    };
    Ok(Some(serve(services).await?))
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create(app: &TestApp, route: &str, body: Value) -> anyhow::Result<Value> {
    let res = client().post(app.url(&format!("/api/{route}"))).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED, "create {route}");
    Ok(res.json().await?)
}

#[tokio::test]
async fn e2e_health_and_metrics() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"status": "ok"}));

    // generate at least one sample
    client().get(app.url("/api/State")).send().await?;
    let res = client().get(app.url("/metrics")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("autogestion_operations_total"));
    Ok(())
}

#[tokio::test]
async fn e2e_center_lifecycle_with_soft_delete() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    let res = c
        .post(app.url("/api/Center"))
        .json(&json!({"name": "North", "codeCenter": 101, "regionalId": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location.as_deref(), Some(format!("/api/Center/{id}").as_str()));
    assert_eq!(created["active"], true);
    assert!(created["createDate"].is_string());

    let res = c.get(app.url(&format!("/api/Center/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["name"], "North");
    assert_eq!(fetched["codeCenter"], 101);
    assert_eq!(fetched["regionalId"], 1);
    assert!(fetched["address"].is_null());

    let res = c.delete(app.url(&format!("/api/Center/{id}/soft"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let fetched: Value = c.get(app.url(&format!("/api/Center/{id}"))).send().await?.json().await?;
    assert_eq!(fetched["active"], false);
    assert!(fetched["deleteDate"].is_string());

    // second soft delete is a no-op
    let res = c.delete(app.url(&format!("/api/Center/{id}/soft"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let again: Value = c.get(app.url(&format!("/api/Center/{id}"))).send().await?.json().await?;
    assert_eq!(again["deleteDate"], fetched["deleteDate"]);

    let list: Vec<Value> = c.get(app.url("/api/Center")).send().await?.json().await?;
    assert_eq!(list.len(), 1);

    let res = c.delete(app.url(&format!("/api/Center/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(app.url(&format!("/api/Center/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_bad_requests_are_400() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    let res = c.get(app.url("/api/Center/0")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["message"].is_string());

    let res = c.get(app.url("/api/Center/abc")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(app.url("/api/Center"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/api/Center")).json(&json!({"codeCenter": 1, "regionalId": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("name"));

    let created = create(&app, "Center", json!({"name": "North", "codeCenter": 101, "regionalId": 1})).await?;
    let id = created["id"].as_i64().unwrap();
    let mut body = created.clone();
    body["id"] = json!(id + 1);
    let res = c.put(app.url(&format!("/api/Center/{id}"))).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.patch(app.url(&format!("/api/Center/{id}"))).json(&json!({"id": id + 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_missing_rows_are_404() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();
    assert_eq!(c.get(app.url("/api/Program/999")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(c.delete(app.url("/api/Program/999")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(c.delete(app.url("/api/Program/999/soft")).send().await?.status(), HttpStatusCode::NOT_FOUND);
    let res = c.patch(app.url("/api/Program/999")).json(&json!({"name": "ADSO"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_put_and_patch() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();
    let created = create(
        &app,
        "Program",
        json!({"codeProgram": 228106, "name": "ADSO", "typeProgram": "Tecnólogo", "description": "Software"}),
    )
    .await?;
    let id = created["id"].as_i64().unwrap();

    // empty patch returns the row untouched
    let res = c.patch(app.url(&format!("/api/Program/{id}"))).json(&json!({})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let same: Value = res.json().await?;
    assert_eq!(same, created);
    assert!(same["updateDate"].is_null());

    let res = c
        .patch(app.url(&format!("/api/Program/{id}")))
        .json(&json!({"name": "ADSO II", "description": null}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let patched: Value = res.json().await?;
    assert_eq!(patched["name"], "ADSO II");
    assert!(patched["description"].is_null());
    assert_eq!(patched["codeProgram"], 228106);
    assert!(patched["updateDate"].is_string());

    let mut body = patched.clone();
    body["typeProgram"] = json!("Técnico");
    let res = c.put(app.url(&format!("/api/Program/{id}"))).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let replaced: Value = res.json().await?;
    assert_eq!(replaced["typeProgram"], "Técnico");
    assert_eq!(replaced["createDate"], created["createDate"]);
    Ok(())
}

#[tokio::test]
async fn e2e_instructor_and_aprendiz_detail() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();
    let person = create(
        &app,
        "Person",
        json!({
            "firstName": "Ana",
            "firstLastName": "Gómez",
            "email": "ana@example.com",
            "typeIdentification": "CC",
            "numberIdentification": "1020304050"
        }),
    )
    .await?;
    let instructor =
        create(&app, "Instructor", json!({"personId": person["id"], "contractType": "Planta"})).await?;
    let user = create(
        &app,
        "User",
        json!({"username": "ana.gomez", "email": "ana@example.com", "personId": person["id"]}),
    )
    .await?;
    let aprendiz = create(&app, "Aprendiz", json!({"userId": user["id"]})).await?;

    let res = c.get(app.url(&format!("/api/Instructor/{}/detail", instructor["id"]))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let detail: Value = res.json().await?;
    assert_eq!(detail["instructor"], instructor);
    assert_eq!(detail["person"], person);

    let res = c.get(app.url(&format!("/api/Aprendiz/{}/detail", aprendiz["id"]))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let detail: Value = res.json().await?;
    assert_eq!(detail["user"]["username"], "ana.gomez");

    let res = c.get(app.url("/api/Instructor/999/detail")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

/// (route, every field on create, a new value for every field on patch)
fn entity_bodies() -> Vec<(&'static str, Value, Value)> {
    vec![
        (
            "Person",
            json!({
                "firstName": "Person firstName",
                "secondName": "secondName value",
                "firstLastName": "Person firstLastName",
                "secondLastName": "secondLastName value",
                "phoneNumber": "phoneNumber value",
                "email": "ana@example.com",
                "typeIdentification": "Person typeIdentification",
                "numberIdentification": "Person numberIdentification",
            }),
            json!({
                "firstName": "Person firstName v2",
                "secondName": "secondName changed",
                "firstLastName": "Person firstLastName v2",
                "secondLastName": "secondLastName changed",
                "phoneNumber": "phoneNumber changed",
                "email": "ana.gomez@example.com",
                "typeIdentification": "Person typeIdentification v2",
                "numberIdentification": "Person numberIdentification v2",
            }),
        ),
        (
            "User",
            json!({"username": "User username", "email": "ana@example.com", "personId": 3}),
            json!({
                "username": "User username v2",
                "email": "ana.gomez@example.com",
                "personId": 13,
            }),
        ),
        (
            "Rol",
            json!({"typeRol": "Rol typeRol", "description": "Rol description"}),
            json!({"typeRol": "Rol typeRol v2", "description": "Rol description v2"}),
        ),
        (
            "UserRol",
            json!({"userId": 1, "rolId": 2}),
            json!({"userId": 11, "rolId": 12}),
        ),
        (
            "Form",
            json!({"name": "Form name", "description": "Form description", "path": "Form path"}),
            json!({
                "name": "Form name v2",
                "description": "Form description v2",
                "path": "Form path v2",
            }),
        ),
        (
            "Module",
            json!({"name": "Module name", "description": "Module description"}),
            json!({"name": "Module name v2", "description": "Module description v2"}),
        ),
        (
            "FormModule",
            json!({"formId": 1, "moduleId": 2}),
            json!({"formId": 11, "moduleId": 12}),
        ),
        (
            "RolForm",
            json!({"rolId": 1, "formId": 2, "permission": "RolForm permission"}),
            json!({"rolId": 11, "formId": 12, "permission": "RolForm permission v2"}),
        ),
        (
            "Regional",
            json!({
                "name": "Regional name",
                "codeRegional": 108,
                "address": "Regional address",
                "description": "description value",
            }),
            json!({
                "name": "Regional name v2",
                "codeRegional": 208,
                "address": "Regional address v2",
                "description": "description changed",
            }),
        ),
        (
            "Center",
            json!({
                "name": "Center name",
                "codeCenter": 109,
                "regionalId": 3,
                "address": "address value",
            }),
            json!({
                "name": "Center name v2",
                "codeCenter": 209,
                "regionalId": 13,
                "address": "address changed",
            }),
        ),
        (
            "Sede",
            json!({
                "name": "Sede name",
                "codeSede": 110,
                "address": "Sede address",
                "centerId": 4,
                "phoneSede": "phoneSede value",
                "emailContact": "sede@example.com",
            }),
            json!({
                "name": "Sede name v2",
                "codeSede": 210,
                "address": "Sede address v2",
                "centerId": 14,
                "phoneSede": "phoneSede changed",
                "emailContact": "info@example.com",
            }),
        ),
        (
            "Program",
            json!({
                "codeProgram": 111,
                "name": "Program name",
                "typeProgram": "Program typeProgram",
                "description": "description value",
            }),
            json!({
                "codeProgram": 211,
                "name": "Program name v2",
                "typeProgram": "Program typeProgram v2",
                "description": "description changed",
            }),
        ),
        (
            "Aprendiz",
            json!({"userId": 1, "previousProgram": "previousProgram value"}),
            json!({"userId": 11, "previousProgram": "previousProgram changed"}),
        ),
        (
            "Instructor",
            json!({
                "personId": 1,
                "contractType": "Instructor contractType",
                "knowledgeArea": "knowledgeArea value",
            }),
            json!({
                "personId": 11,
                "contractType": "Instructor contractType v2",
                "knowledgeArea": "knowledgeArea changed",
            }),
        ),
        (
            "Enterprise",
            json!({
                "nameEnterprise": "Enterprise nameEnterprise",
                "nitEnterprise": "Enterprise nitEnterprise",
                "phoneEnterprise": "phoneEnterprise value",
                "locate": "locate value",
                "emailEnterprise": "sede@example.com",
                "observation": "observation value",
            }),
            json!({
                "nameEnterprise": "Enterprise nameEnterprise v2",
                "nitEnterprise": "Enterprise nitEnterprise v2",
                "phoneEnterprise": "phoneEnterprise changed",
                "locate": "locate changed",
                "emailEnterprise": "info@example.com",
                "observation": "observation changed",
            }),
        ),
        (
            "Process",
            json!({
                "typeProcess": "Process typeProcess",
                "startAprendiz": "Process startAprendiz",
                "observation": "observation value",
            }),
            json!({
                "typeProcess": "Process typeProcess v2",
                "startAprendiz": "Process startAprendiz v2",
                "observation": "observation changed",
            }),
        ),
        (
            "TypeModality",
            json!({"name": "TypeModality name", "description": "description value"}),
            json!({"name": "TypeModality name v2", "description": "description changed"}),
        ),
        (
            "State",
            json!({"typeState": "State typeState", "description": "description value"}),
            json!({"typeState": "State typeState v2", "description": "description changed"}),
        ),
        (
            "AprendizProgram",
            json!({"aprendizId": 1, "programId": 2}),
            json!({"aprendizId": 11, "programId": 12}),
        ),
        (
            "InstructorProgram",
            json!({"instructorId": 1, "programId": 2}),
            json!({"instructorId": 11, "programId": 12}),
        ),
        (
            "AprendizProcessInstructor",
            json!({
                "aprendizId": 1,
                "instructorId": 2,
                "processId": 3,
                "enterpriseId": 4,
                "typeModalityId": 5,
                "stateId": 6,
            }),
            json!({
                "aprendizId": 11,
                "instructorId": 12,
                "processId": 13,
                "enterpriseId": 14,
                "typeModalityId": 15,
                "stateId": 16,
            }),
        ),
    ]
}

fn assert_fields(route: &str, step: &str, actual: &Value, expected: &Value) {
    for (key, value) in expected.as_object().into_iter().flatten() {
        assert_eq!(&actual[key], value, "{route} {step}: field {key}");
    }
}

#[tokio::test]
async fn e2e_every_entity_round_trips() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();
    for (route, full, changed) in entity_bodies() {
        let created = create(&app, route, full.clone()).await?;
        assert_fields(route, "create", &created, &full);
        let id = created["id"].as_i64().unwrap_or_default();
        assert!(id > 0, "{route} id");
        let item = app.url(&format!("/api/{route}/{id}"));

        let fetched: Value = c.get(&item).send().await?.json().await?;
        assert_eq!(fetched, created, "{route} get");

        let res = c.patch(&item).json(&changed).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "{route} patch");
        let patched: Value = res.json().await?;
        assert_fields(route, "patch", &patched, &changed);
        assert!(patched["updateDate"].is_string(), "{route} patch stamps updateDate");

        // replace puts the create values back
        let res = c.put(&item).json(&created).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "{route} put");
        let replaced: Value = res.json().await?;
        assert_fields(route, "put", &replaced, &full);
        assert_eq!(replaced["createDate"], created["createDate"], "{route} put keeps createDate");

        let res = c.delete(format!("{item}/soft")).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NO_CONTENT, "{route} soft delete");
        let fetched: Value = c.get(&item).send().await?.json().await?;
        assert_eq!(fetched["active"], false, "{route} soft delete");
        assert!(fetched["deleteDate"].is_string(), "{route} soft delete");
        assert_fields(route, "soft delete", &fetched, &full);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_put_is_a_full_replace_of_active() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();
    let created = create(&app, "State", json!({"typeState": "Pending"})).await?;
    let id = created["id"].as_i64().unwrap_or_default();
    let item = app.url(&format!("/api/State/{id}"));
    c.delete(format!("{item}/soft")).send().await?;

    // a replace that keeps the row inactive must say so
    let res = c.put(&item).json(&json!({"id": id, "typeState": "Pending", "active": false})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let kept: Value = res.json().await?;
    assert_eq!(kept["active"], false);
    assert!(kept["deleteDate"].is_string());

    // an omitted flag takes the create default
    let res = c.put(&item).json(&json!({"id": id, "typeState": "Pending"})).send().await?;
    let revived: Value = res.json().await?;
    assert_eq!(revived["active"], true);
    assert!(revived["deleteDate"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_db_restrict_delete_is_500() -> anyhow::Result<()> {
    let Some(app) = start_db_server().await? else { return Ok(()) };
    let c = client();
    let regional = create(
        &app,
        "Regional",
        json!({"name": "Antioquia", "codeRegional": 5, "address": "Calle 51 # 57-70"}),
    )
    .await?;
    let center = create(
        &app,
        "Center",
        json!({"name": "CTMA", "codeCenter": 9203, "regionalId": regional["id"]}),
    )
    .await?;

    let res = c.delete(app.url(&format!("/api/Regional/{}", regional["id"]))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("constraint violation"));
    // the regional is still there
    let res = c.get(app.url(&format!("/api/Regional/{}", regional["id"]))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // unknown foreign key on create
    let res = c
        .post(app.url("/api/Center"))
        .json(&json!({"name": "Ghost", "codeCenter": 1, "regionalId": i32::MAX}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);

    c.delete(app.url(&format!("/api/Center/{}", center["id"]))).send().await?;
    c.delete(app.url(&format!("/api/Regional/{}", regional["id"]))).send().await?;
    Ok(())
}
