//! Application provides API for interacting with the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod api;
pub mod args;
pub mod config;
mod context;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::WebSocketUpgrade,
    response::{IntoResponse, Response},
    routing::{get, on, MethodFilter},
    Extension, Json, Router,
};
use derive_more::Debug;
use juniper::{http::GraphQLBatchResponse, DefaultScalarValue, ScalarValue};
use juniper_axum::{extract::JuniperRequest, subscriptions};
use juniper_graphql_ws::ConnectionConfig;
// Used in binary.
use axum_client_ip as _;
use tower_http as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    context::Context,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Memory>;

/// Builds the [`Router`] serving the GraphQL API of the provided [`Service`].
///
/// Routes:
/// - `/graphql` for queries and mutations (`GET` and `POST`);
/// - `/subscriptions` for subscriptions over WebSocket.
pub fn router(service: Service) -> Router {
    let schema =
        api::Schema::new(api::Query, api::Mutation, api::Subscription);

    Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .route("/subscriptions", get(subscriptions))
        .layer(Extension(Arc::new(schema)))
        .layer(Extension(service))
}

/// [`juniper`] GraphQL response.
#[derive(Debug)]
pub struct JuniperResponse<S = DefaultScalarValue>
where
    S: ScalarValue,
{
    /// Status code of the response.
    pub status_code: http::StatusCode,

    /// Underlying GraphQL response.
    #[debug(skip)]
    pub response: GraphQLBatchResponse<S>,
}

impl<S> IntoResponse for JuniperResponse<S>
where
    S: ScalarValue,
{
    fn into_response(self) -> Response {
        let Self {
            status_code,
            response,
        } = self;

        if response.is_ok() {
            Json(response).into_response()
        } else {
            (status_code, Json(response)).into_response()
        }
    }
}

/// GraphQL queries and mutations handler.
///
/// Status code is read after the execution, as resolvers set it on failure.
async fn graphql(
    Extension(schema): Extension<Arc<api::Schema>>,
    context: Context,
    JuniperRequest(gql_request): JuniperRequest,
) -> JuniperResponse {
    let response = gql_request.execute(&*schema, &context).await;
    JuniperResponse {
        status_code: context.error_status_code(),
        response,
    }
}

/// GraphQL subscriptions handler over WebSocket.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
async fn subscriptions(
    Extension(schema): Extension<Arc<api::Schema>>,
    context: Context,
    ws: WebSocketUpgrade,
) -> Response {
    ws.protocols(["graphql-transport-ws", "graphql-ws"])
        .max_frame_size(1024)
        .max_message_size(1024)
        .write_buffer_size(512)
        .max_write_buffer_size(1024)
        .on_upgrade(move |socket| {
            subscriptions::serve_ws(socket, schema, move |_| async move {
                Ok::<_, Error>(
                    ConnectionConfig::new(context)
                        .with_max_in_flight_operations(10),
                )
            })
        })
}

#[cfg(test)]
mod spec {
    use juniper::{
        graphql_value, DefaultScalarValue, ExecutionError, Variables,
    };
    use service::infra::Memory;

    use crate::{api, Context};

    fn context() -> Context {
        let config = crate::Config::default().service.into();
        let (service, _) = crate::Service::new(config, Memory::new());
        Context::new(service)
    }

    fn schema() -> api::Schema {
        api::Schema::new(api::Query, api::Mutation, api::Subscription)
    }

    fn code(err: &ExecutionError<DefaultScalarValue>) -> Option<&str> {
        err.error()
            .extensions()
            .as_object_value()
            .and_then(|o| o.get_field_value("code"))
            .and_then(|v| v.as_string_value())
    }

    #[tokio::test]
    async fn computes_leave_balance_without_employee() {
        let ctx = context();

        let (res, errs) = juniper::execute(
            r#"{
                computeLeaveBalance(
                    contractStart: "2024-01-15"
                    contractEnd: "2024-12-31"
                    usedDays: 2
                    on: "2024-06-15"
                ) {
                    earnedDays
                    usedDays
                    availableDays
                    isExpired
                    hasExtension
                    effectiveEndDate
                }
            }"#,
            None,
            &schema(),
            &Variables::new(),
            &ctx,
        )
        .await
        .unwrap();

        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            res,
            graphql_value!({"computeLeaveBalance": {
                "earnedDays": 6,
                "usedDays": 2,
                "availableDays": 4,
                "isExpired": false,
                "hasExtension": false,
                "effectiveEndDate": "2024-12-31",
            }}),
        );
    }

    #[tokio::test]
    async fn rejects_negative_used_days() {
        let ctx = context();

        let (res, errs) = juniper::execute(
            r#"{
                computeLeaveBalance(
                    contractStart: "2024-01-15"
                    contractEnd: "2024-12-31"
                    usedDays: -1
                ) {
                    availableDays
                }
            }"#,
            None,
            &schema(),
            &Variables::new(),
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(res, graphql_value!(null));
        assert_eq!(errs.len(), 1);
        assert_eq!(code(&errs[0]), Some("INVALID_INPUT"));
        assert_eq!(ctx.error_status_code(), http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reports_missing_employee() {
        let ctx = context();

        let (_, errs) = juniper::execute(
            r#"{
                employee(id: "0b6ea4a3-8c4a-4c1e-9d5c-6f1f43b1b0a2") {
                    name
                }
            }"#,
            None,
            &schema(),
            &Variables::new(),
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(errs.len(), 1);
        assert_eq!(code(&errs[0]), Some("EMPLOYEE_NOT_EXISTS"));
        assert_eq!(ctx.error_status_code(), http::StatusCode::NOT_FOUND);
    }
}
