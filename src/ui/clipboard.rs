use dioxus::prelude::*;

/// Best-effort clipboard write through the webview. Resolves to `true` only
/// when the text actually landed on the clipboard; never panics.
pub async fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let payload = match serde_json::to_string(text) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("failed to encode clipboard payload: {err}");
            return false;
        }
    };

    let script = format!(
        r#"const data = {payload};
        try {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                await navigator.clipboard.writeText(data);
                return true;
            }}
        }} catch (_err) {{
            // fall through to the textarea copy
        }}
        try {{
            const textarea = document.createElement('textarea');
            textarea.value = data;
            textarea.style.position = 'fixed';
            textarea.style.opacity = '0';
            document.body.appendChild(textarea);
            textarea.focus();
            textarea.select();
            const ok = document.execCommand('copy');
            document.body.removeChild(textarea);
            return ok;
        }} catch (_err) {{
            return false;
        }}"#
    );

    match document::eval(&script).await {
        Ok(serde_json::Value::Bool(copied)) => copied,
        Ok(other) => {
            tracing::debug!("unexpected clipboard result: {other}");
            false
        }
        Err(err) => {
            tracing::warn!("clipboard write failed: {err:?}");
            false
        }
    }
}
