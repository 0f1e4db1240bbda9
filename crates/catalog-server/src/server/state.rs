use std::sync::Arc;

use track_schema::CatalogSchema;

struct ServerStateInner {
    schema: CatalogSchema,
}

#[derive(Clone)]
pub(super) struct ServerState {
    inner: Arc<ServerStateInner>,
}

impl ServerState {
    pub(super) fn new(schema: CatalogSchema) -> Self {
        Self {
            inner: Arc::new(ServerStateInner { schema }),
        }
    }

    pub(super) fn schema(&self) -> &CatalogSchema {
        &self.inner.schema
    }
}
