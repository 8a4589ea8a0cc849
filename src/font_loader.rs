use kubefont_core::Font;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and parse a typeface JSON font.
pub async fn load_font(url: &str) -> anyhow::Result<Font> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let body = response
        .text()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("{}: body is not text", url))?;
    let font = Font::from_json(&body)?;
    log::info!(
        "[font] {} ({} glyphs) from {}",
        font.family_name,
        font.glyph_count(),
        url
    );
    Ok(font)
}
