use std::time::Instant;
use tracing::{error, info};

use super::gemini::GeminiClient;
use super::normalize::normalize;
use crate::error::AnalysisError;
use crate::state::data::AnalysisRequest;

/// Run one analysis: prompt + photo to the model, normalized text back.
///
/// Takes ownership of the client handle and request so the future can be
/// handed to the UI runtime.
pub async fn analyze(
    client: GeminiClient,
    request: AnalysisRequest,
) -> Result<String, AnalysisError> {
    let started = Instant::now();
    let prompt = request.prompt();

    let raw = client
        .generate(&prompt, &request.image.mime_type, &request.image.bytes)
        .await
        .map_err(|err| {
            error!("Analysis of {} failed: {}", request.image.name, err);
            err
        })?;

    let text = normalize(&raw);
    info!(
        "Analysis of {} finished in {:.1}s ({} lines)",
        request.image.name,
        started.elapsed().as_secs_f32(),
        text.lines().count()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;
    use crate::state::data::{PreviewPixels, SelectedImage};
    use crate::state::preview::PreviewStore;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Arc;

    fn request(extra: &str) -> AnalysisRequest {
        let mut previews = PreviewStore::new();
        let preview = previews.create(PreviewPixels {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        });
        AnalysisRequest {
            image: SelectedImage {
                name: "selfie.png".to_string(),
                mime_type: "image/png".to_string(),
                bytes: Arc::from(vec![0x89u8, b'P', b'N', b'G']),
                width: 1,
                height: 1,
                preview,
            },
            extra: extra.to_string(),
        }
    }

    fn client(url: String) -> GeminiClient {
        GeminiClient::new(&GeminiConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-1.5-flash".to_string(),
            base_url: url,
        })
    }

    #[tokio::test]
    async fn test_analyze_normalizes_model_output() {
        let mut server = Server::new_async().await;
        let raw = "**Skin Health Analysis**\n\n- Mild dryness\n\n\n**Warning:** check the mole";
        let mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_body(Matcher::Regex("Focus on the chin".to_string()))
            .with_status(200)
            .with_body(json!({ "candidates": [{ "content": { "parts": [{ "text": raw }] } }] }).to_string())
            .create_async()
            .await;

        let text = analyze(client(server.url()), request("Focus on the chin"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            text,
            "Skin Health Analysis\nMild dryness\nWarning: check the mole"
        );
    }

    #[tokio::test]
    async fn test_analyze_propagates_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(500)
            .with_body("internal")
            .create_async()
            .await;

        let err = analyze(client(server.url()), request("")).await.unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Api {
                status: 500,
                message: "internal".to_string()
            }
        );
    }
}
