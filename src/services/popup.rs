//! HTML page that ends the federated sign-in popup.
//!
//! The page carries one [`PopupMessage`] as inert JSON, posts its text to
//! `window.opener` restricted to the site origin, then closes itself. When
//! there is no opener (the link was opened directly) the page stays up with
//! a short note instead of a blank window.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use site::config::escape_script_json;
use site::net::popup::PopupMessage;

const RESULT_ELEMENT_ID: &str = "auth-result";

/// Render the popup result page for `message`, posting only to `origin`.
#[must_use]
pub fn render_result_page(message: &PopupMessage, origin: &str) -> String {
    let payload = escape_script_json(&serde_json::to_string(message).unwrap_or_else(|_| "{}".to_owned()));
    let target = escape_script_json(&serde_json::to_string(origin).unwrap_or_else(|_| "\"\"".to_owned()));
    let note = if message.ok { "Signed in. You can close this window." } else { "Sign-in did not complete. You can close this window." };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Signing in</title></head>
<body>
<p>{note}</p>
<script id="{RESULT_ELEMENT_ID}" type="application/json">{payload}</script>
<script>
(function () {{
  var raw = document.getElementById("{RESULT_ELEMENT_ID}").textContent;
  if (window.opener) {{
    window.opener.postMessage(raw, {target});
    window.close();
  }}
}})();
</script>
</body>
</html>
"#
    )
}
