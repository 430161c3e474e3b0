use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::CallbackParams;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackParams>>>>,
) -> Html<&'static str> {
    let captured = CallbackParams {
        code: params.get("code").cloned(),
        state: params.get("state").cloned(),
        error: params.get("error").cloned(),
    };

    let denied = captured.error.is_some() || captured.code.is_none();

    // Hand the raw parameters to the waiting auth command; the session
    // manager decides whether they are acceptable.
    let mut slot = shared_state.lock().await;
    *slot = Some(captured);

    if denied {
        Html("<h4>Authorization failed.</h4><p>You can close this window.</p>")
    } else {
        Html("<h2>Authorization received.</h2><p>Return to your terminal. You can close this window.</p>")
    }
}
