// Executor adapter
// Runs a decoded request against the GraphQL engine and returns its JSON result

use async_graphql::{ObjectType, Request, Schema, SubscriptionType, Variables};
use async_trait::async_trait;
use serde_json::Value;

use crate::api::types::GraphQLRequestBody;
use crate::{GatewayError, Result};

/// Something that can execute a GraphQL request
///
/// Implementations must not turn GraphQL-level errors (unknown fields,
/// resolver failures, bad variables) into `Err`. Those belong inside the
/// returned result, which the gateway answers with 200. `Err` is reserved
/// for failures of the executor itself.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, request: GraphQLRequestBody) -> Result<Value>;
}

#[async_trait]
impl<Query, Mutation, Subscription> QueryExecutor for Schema<Query, Mutation, Subscription>
where
    Query: ObjectType + 'static,
    Mutation: ObjectType + 'static,
    Subscription: SubscriptionType + 'static,
{
    async fn execute(&self, request: GraphQLRequestBody) -> Result<Value> {
        let mut gql_request = Request::new(request.query);
        if let Some(variables) = request.variables {
            gql_request = gql_request.variables(Variables::from_json(variables));
        }
        if let Some(operation_name) = request.operation_name {
            gql_request = gql_request.operation_name(operation_name);
        }

        let response = Schema::execute(self, gql_request).await;
        serde_json::to_value(&response).map_err(|e| GatewayError::Internal(e.into()))
    }
}
