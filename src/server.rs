use async_graphql::http::{
    ALL_WEBSOCKET_PROTOCOLS, GraphQLPlaygroundConfig, WebSocketProtocols, WsMessage,
    playground_source,
};
use axum::{
    Json, Router,
    extract::{State, WebSocketUpgrade},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use futures::{SinkExt, StreamExt};

use crate::catalog::CallerIdentity;
use crate::graphql::CatalogSchema;

/// Routes: `POST /graphql` for queries and mutations, `GET /graphql`
/// for the playground, `GET /graphql/ws` for subscriptions.
pub fn router(schema: CatalogSchema) -> Router {
    Router::new()
        .route("/graphql", get(playground_handler).post(graphql_handler))
        .route("/graphql/ws", get(graphql_ws_handler))
        .with_state(schema)
}

/// Identity stub: any non-empty Authorization header counts as an
/// authenticated caller. The token itself is opaque to the catalog.
fn caller_identity(headers: &HeaderMap) -> Option<CallerIdentity> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return None;
    }
    Some(CallerIdentity(token.to_string()))
}

async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    headers: HeaderMap,
    Json(request): Json<async_graphql::Request>,
) -> Response {
    let mut request = request;
    if let Some(identity) = caller_identity(&headers) {
        request = request.data(identity);
    }

    let response = schema.execute(request).await;
    let body = serde_json::to_string(&response).unwrap_or_default();
    (StatusCode::OK, [("content-type", "application/json")], body).into_response()
}

async fn playground_handler() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new("/graphql").subscription_endpoint("/graphql/ws"),
    ))
}

/// Bridge axum's WebSocket to async-graphql's subscription executor.
async fn graphql_ws_handler(State(schema): State<CatalogSchema>, ws: WebSocketUpgrade) -> Response {
    let protocol = WebSocketProtocols::GraphQLWS;

    ws.protocols(ALL_WEBSOCKET_PROTOCOLS)
        .on_upgrade(move |socket| async move {
            let (mut sink, stream) = socket.split();

            let input = stream.filter_map(|msg| async move {
                match msg {
                    Ok(axum::extract::ws::Message::Text(text)) => Some(text.to_string()),
                    _ => None,
                }
            });

            let mut gql_stream = Box::pin(
                async_graphql::http::WebSocket::new(schema.clone(), input, protocol)
                    .keepalive_timeout(std::time::Duration::from_secs(30)),
            );

            while let Some(ws_msg) = gql_stream.next().await {
                let axum_msg = match ws_msg {
                    WsMessage::Text(text) => axum::extract::ws::Message::Text(text.into()),
                    WsMessage::Close(code, reason) => {
                        axum::extract::ws::Message::Close(Some(axum::extract::ws::CloseFrame {
                            code,
                            reason: reason.into(),
                        }))
                    }
                };
                if sink.send(axum_msg).await.is_err() {
                    break;
                }
            }
        })
}
