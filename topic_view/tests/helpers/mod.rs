use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use topic_view::client::EfakClient;
use topic_view::connection_settings::EfakConnectionSettings;

/// Topic whose endpoints answer with a server error.
pub const BROKEN_TOPIC: &str = "broken";
/// Topic whose producer chart and metric endpoints answer `null`.
pub const QUIET_TOPIC: &str = "quiet";
/// Topic whose meta page carries string totals and extra keys.
pub const LOOSE_TOPIC: &str = "loose";
/// Topic whose producer chart answers after several seconds.
pub const SLOW_TOPIC: &str = "slow";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Recorder {
    fn record(&self, path: String, query: HashMap<String, String>, headers: HeaderMap, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path,
            query,
            headers,
            body,
        });
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|x| x.path == path)
            .cloned()
            .collect()
    }
}

type Shared = State<Arc<Recorder>>;
type Params = Query<HashMap<String, String>>;

pub async fn start_fake_efak() -> (EfakClient, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let app = Router::new()
        .route("/topic/meta/{topic}/ajax", get(meta))
        .route("/topic/message/{topic}/ajax", get(messages))
        .route("/topic/consumer/group/{topic}/ajax", get(consumer_groups))
        .route("/topic/meta/mbean/{topic}/ajax", get(mbean))
        .route("/topic/meta/jmx/{topic}/ajax", get(jmx))
        .route("/topic/producer/chart/ajax", get(producer_chart))
        .route("/topic/meta/preview/msg/ajax", get(preview))
        .route("/topic/reset/offset/type/list/ajax", get(reset_types))
        .route("/topic/reset/offsets/execute/result/ajax", post(reset_execute))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let settings = EfakConnectionSettings::new(format!("http://{address}"));
    (EfakClient::try_from(&settings).unwrap(), recorder)
}

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn meta(State(recorder): Shared, Path(topic): Path<String>, Query(query): Params, headers: HeaderMap) -> Response {
    recorder.record(format!("/topic/meta/{topic}/ajax"), query, headers, None);
    match topic.as_str() {
        BROKEN_TOPIC => return failure(),
        LOOSE_TOPIC => {
            return Json(json!({
                "sEcho": 1,
                "iTotalRecords": "3",
                "iTotalDisplayRecords": "3",
                "cluster": "cluster1",
                "aaData": [{"partition": 2}, {"partition": "0"}, {"partition": 1}]
            }))
            .into_response()
        }
        QUIET_TOPIC => {
            return Json(json!({"sEcho": 1, "iTotalRecords": 0, "aaData": null})).into_response()
        }
        _ => {}
    }
    Json(json!({
        "sEcho": 1,
        "iTotalRecords": 4,
        "iTotalDisplayRecords": 4,
        "aaData": [
            {"topic": topic, "partition": 2, "logsize": 10, "leader": 0},
            {"topic": topic, "partition": 0, "logsize": 12, "leader": 1},
            {"topic": topic, "partition": 2, "logsize": 10, "leader": 0},
            {"topic": topic, "partition": 1, "logsize": 9, "leader": 2}
        ]
    }))
    .into_response()
}

async fn messages(State(recorder): Shared, Path(topic): Path<String>, Query(query): Params, headers: HeaderMap) -> Response {
    recorder.record(format!("/topic/message/{topic}/ajax"), query, headers, None);
    match topic.as_str() {
        BROKEN_TOPIC => failure(),
        QUIET_TOPIC => "this is not json".into_response(),
        _ => {
            let payload = json!({
                "total": 2,
                "message": [
                    {"partition": 0, "offset": 1, "msg": "first", "timespan": 10, "date": "2024-01-15 09:30:00"},
                    {"partition": 0, "offset": 2, "msg": "second", "timespan": 11, "date": "2024-01-15 09:31:00"}
                ]
            });
            // double encoded, as some servers send it
            Json(Value::String(payload.to_string())).into_response()
        }
    }
}

async fn consumer_groups(State(recorder): Shared, Path(topic): Path<String>, Query(query): Params, headers: HeaderMap) -> Response {
    recorder.record(format!("/topic/consumer/group/{topic}/ajax"), query, headers, None);
    Json(json!({
        "sEcho": 3,
        "iTotalRecords": 1,
        "iTotalDisplayRecords": 1,
        "aaData": [{"group": "billing", "topic": topic, "lag": 42, "status": "<span>Running</span>"}]
    }))
    .into_response()
}

async fn mbean(State(recorder): Shared, Path(topic): Path<String>, headers: HeaderMap) -> Response {
    recorder.record(format!("/topic/meta/mbean/{topic}/ajax"), HashMap::new(), headers, None);
    if topic == QUIET_TOPIC {
        return Json(Value::Null).into_response();
    }
    let sample = |value: &str| json!({"meanRate": value, "oneMinute": value, "fiveMinute": value, "fifteenMinute": value});
    Json(json!({
        "msg": sample("5.00B/s"),
        "ins": sample("1.20KB/s"),
        "produce": sample("0.00B/s")
    }))
    .into_response()
}

async fn jmx(State(recorder): Shared, Path(topic): Path<String>, headers: HeaderMap) -> Response {
    recorder.record(format!("/topic/meta/jmx/{topic}/ajax"), HashMap::new(), headers, None);
    Json(json!({"logsize": 31, "topicsize": "2.4", "sizetype": "MB"})).into_response()
}

async fn producer_chart(State(recorder): Shared, Query(query): Params, headers: HeaderMap) -> Response {
    let topic = query.get("topic").cloned().unwrap_or_default();
    recorder.record("/topic/producer/chart/ajax".to_owned(), query, headers, None);
    match topic.as_str() {
        QUIET_TOPIC => return Json(Value::Null).into_response(),
        SLOW_TOPIC => tokio::time::sleep(std::time::Duration::from_secs(5)).await,
        _ => {}
    }
    Json(json!([
        {"x": "2024-01-15 09:00", "y": 3},
        {"x": "2024-01-15 09:05", "y": 8}
    ]))
    .into_response()
}

async fn preview(State(recorder): Shared, Query(query): Params, headers: HeaderMap) -> Response {
    recorder.record("/topic/meta/preview/msg/ajax".to_owned(), query, headers, None);
    Json(json!({"partition": 1, "offset": 99})).into_response()
}

async fn reset_types(State(recorder): Shared, Query(query): Params, headers: HeaderMap) -> Response {
    recorder.record("/topic/reset/offset/type/list/ajax".to_owned(), query, headers, None);
    Json(json!({
        "items": [{"text": "--to-earliest"}, {"text": "--to-latest"}, {"text": "--shift-by"}],
        "total": 14
    }))
    .into_response()
}

async fn reset_execute(State(recorder): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    recorder.record(
        "/topic/reset/offsets/execute/result/ajax".to_owned(),
        HashMap::new(),
        headers,
        Some(body),
    );
    Json(json!({"success": true, "result": "reset done"})).into_response()
}
