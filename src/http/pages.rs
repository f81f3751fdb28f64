//! Branded substitute pages served when no origin payload can be relayed.
//!
//! Both pages are self-contained HTML documents: inline styles, no script,
//! no external assets, so they render even when everything else is down.

/// Shared inline stylesheet. Kept out of the templates so the CSS braces
/// never meet the `format!` parser.
const PAGE_STYLE: &str = "\
:root{color-scheme:light dark}\
body{margin:0;font-family:system-ui,sans-serif;display:grid;min-height:100vh;place-items:center;background:#10141a;color:#e6e9ef}\
main{max-width:34rem;padding:2rem;text-align:center}\
.badge{font-size:0.9rem;letter-spacing:0.2em;color:#8a93a3}\
h1{font-size:1.6rem;margin:0.4rem 0 1rem}\
code{background:#1d2430;border-radius:4px;padding:0.15rem 0.4rem;word-break:break-all}\
nav{margin-top:1.5rem;display:flex;gap:1rem;justify-content:center}\
a{color:#6ea8fe;text-decoration:none}\
a:hover{text-decoration:underline}";

/// Escape a string for safe embedding in HTML text or attribute content.
///
/// Ampersands go first so already-produced entities are never re-escaped.
pub fn html_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// The page shown when the origin says the article does not exist.
///
/// The requested path is reflected for orientation, escaped so it can only
/// ever render as text.
pub fn not_found_page(requested_path: &str) -> String {
    let path = html_escape(requested_path);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Article not found</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
<main>
<p class="badge">404</p>
<h1>Article not found</h1>
<p>We looked, but <code>{path}</code> does not match any article we publish. It may have moved or never existed.</p>
<nav><a href="/articles">Browse all articles</a><a href="/">Front page</a></nav>
</main>
</body>
</html>
"#
    )
}

/// The page shown when the origin cannot be reached at all.
///
/// Deliberately says nothing about what went wrong internally.
pub fn unavailable_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Articles are briefly unavailable</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
<main>
<p class="badge">503</p>
<h1>Articles are taking a short break</h1>
<p>The article service is not answering right now. Nothing is lost; please try again in a minute.</p>
<nav><a href="/articles">Browse all articles</a><a href="/">Front page</a></nav>
</main>
</body>
</html>
"#
    )
}
