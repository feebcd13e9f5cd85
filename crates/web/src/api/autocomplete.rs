use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::WebState;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(autocomplete))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteQuery {
    #[serde(default)]
    query: String,
}

async fn autocomplete(
    State(state): State<WebState>,
    Query(params): Query<AutocompleteQuery>,
) -> Json<Vec<String>> {
    if state.provider.is_none() {
        log::warn!("autocomplete requested while no directions credential is configured");
    }
    Json(suggestions(&params.query))
}

// TODO: back this with a real places lookup instead of canned suffixes.
fn suggestions(query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    vec![
        format!("{query} Central"),
        format!("{query} Park"),
        format!("{query} Station"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_no_suggestions() {
        assert!(suggestions("").is_empty());
    }

    #[test]
    fn suggestions_append_canned_suffixes() {
        assert_eq!(
            suggestions("Gandhipuram"),
            vec![
                "Gandhipuram Central".to_owned(),
                "Gandhipuram Park".to_owned(),
                "Gandhipuram Station".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn handler_returns_json_suggestions() {
        use crate::api::test_support::state_without_provider;

        let Json(result) = autocomplete(
            State(state_without_provider()),
            Query(AutocompleteQuery {
                query: "Ukkadam".to_owned(),
            }),
        )
        .await;
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "Ukkadam Central");
    }
}
