//! Vision provider call — send an image to a multimodal LLM, get raw text back.
//!
//! One request in flight per submitted image; no retry, no timeout of its
//! own. The reply text is returned verbatim for the analysis pipeline to
//! make sense of.

use anyhow::{bail, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

/// Supported vision providers.
pub enum VisionProvider {
    Gemini { api_key: String, model: String },
    OpenAI { api_key: String, model: String },
}

impl VisionProvider {
    pub fn gemini(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::Gemini { api_key: api_key.into(), model: model.into() }
    }
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::OpenAI { api_key: api_key.into(), model: "gpt-4o".to_string() }
    }
}

/// Send raw image bytes to a vision LLM and return its reply text.
pub async fn analyze_image(
    provider: &VisionProvider,
    image_bytes: &[u8],
    mime_type: &str,
    prompt: &str,
) -> Result<String> {
    let b64 = STANDARD.encode(image_bytes);
    match provider {
        VisionProvider::Gemini { api_key, model } => {
            analyze_via_gemini(api_key, model, &b64, mime_type, prompt).await
        }
        VisionProvider::OpenAI { api_key, model } => {
            analyze_via_openai(api_key, model, &b64, mime_type, prompt).await
        }
    }
}

async fn analyze_via_gemini(
    api_key: &str, model: &str, b64: &str, mime_type: &str, prompt: &str,
) -> Result<String> {
    info!("[Vision] Analyzing image via Gemini {}", model);
    let client = reqwest::Client::new();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, api_key
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}]
    });
    let resp = client.post(&url).json(&body).send().await?;
    if !resp.status().is_success() {
        bail!("Gemini vision error: {}", resp.text().await.unwrap_or_default());
    }
    let json: serde_json::Value = resp.json().await?;
    Ok(json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("")
        .to_string())
}

async fn analyze_via_openai(
    api_key: &str, model: &str, b64: &str, mime_type: &str, prompt: &str,
) -> Result<String> {
    info!("[Vision] Analyzing image via OpenAI {}", model);
    let client = reqwest::Client::new();
    let body = serde_json::json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": prompt },
                { "type": "image_url",
                  "image_url": { "url": format!("data:{};base64,{}", mime_type, b64) } }
            ]
        }],
        "max_tokens": 1024
    });
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;
    if !resp.status().is_success() {
        bail!("OpenAI vision error: {}", resp.text().await.unwrap_or_default());
    }
    let json: serde_json::Value = resp.json().await?;
    Ok(json["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string())
}
