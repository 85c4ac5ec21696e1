// GraphQL schema served by the gateway
//
//   type Query {
//     message: String!
//   }

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

pub type GatewaySchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Root resolver context, shared read-only by every request
#[derive(Debug, Clone)]
pub struct RootValue {
    pub message: String,
}

impl RootValue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RootValue {
    fn default() -> Self {
        Self::new("Hello World!")
    }
}

pub struct Query;

#[Object]
impl Query {
    /// Greeting from the root value
    async fn message(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        let root = ctx.data::<RootValue>()?;
        Ok(root.message.clone())
    }
}

/// Build the schema once at startup
pub fn create_schema(root: RootValue) -> GatewaySchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(root)
        .finish()
}
