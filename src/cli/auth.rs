use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthState};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthState>>>) {
    spotify::auth::auth(shared_state).await;
}
