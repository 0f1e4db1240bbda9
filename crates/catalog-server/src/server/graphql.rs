use async_graphql::ServerError;
use async_graphql_axum::GraphQLRequest;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::state::ServerState;

const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

pub(super) async fn execute(State(state): State<ServerState>, request: GraphQLRequest) -> Json<Value> {
    let response = state.schema().execute(request.into_inner()).await;

    Json(format_response(response))
}

/// Outward shape of a GraphQL response: data untouched, every error reduced
/// to `{message, code}`.
fn format_response(response: async_graphql::Response) -> Value {
    let mut payload = json!({ "data": response.data });

    if !response.errors.is_empty() {
        payload["errors"] = Value::Array(response.errors.iter().map(format_error).collect());
    }

    payload
}

fn format_error(error: &ServerError) -> Value {
    let code = error
        .extensions
        .as_ref()
        .and_then(|extensions| serde_json::to_value(extensions).ok())
        .and_then(|extensions| extensions.get("code").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_owned());

    json!({ "message": error.message, "code": code })
}
