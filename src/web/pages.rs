//! Embedded HTML pages.

use crate::encoding::Dimension;

/// Render the prediction form, optionally with a result banner.
pub fn ipl_page(prediction_text: Option<&str>) -> String {
    let banner = match prediction_text {
        Some(text) => format!(r#"<div class="result">{}</div>"#, escape_html(text)),
        None => String::new(),
    };
    IPL_HTML
        .replace("{{style}}", STYLE)
        .replace("{{nav}}", NAV)
        .replace("{{team1_options}}", &options(Dimension::Team))
        .replace("{{team2_options}}", &options(Dimension::Team))
        .replace("{{toss_winner_options}}", &options(Dimension::Team))
        .replace("{{venue_options}}", &options(Dimension::Venue))
        .replace("{{city_options}}", &options(Dimension::City))
        .replace("{{toss_decision_options}}", &options(Dimension::TossDecision))
        .replace("{{prediction}}", &banner)
}

fn options(dimension: Dimension) -> String {
    dimension
        .table()
        .labels()
        .map(|label| {
            let label = escape_html(label);
            format!(r#"<option value="{label}">{label}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"<style>
  :root { --bg: #0f1117; --card: #1a1d27; --border: #2a2d3a; --accent: #6c63ff; --text: #e0e0e0; --muted: #8888aa; }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  header a { color: var(--muted); text-decoration: none; }
  main { padding: 1.5rem 2rem; max-width: 720px; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  label { display: block; color: var(--muted); font-size: .8rem; text-transform: uppercase; margin: .9rem 0 .3rem; }
  select { width: 100%; padding: .5rem; background: var(--bg); color: var(--text); border: 1px solid var(--border); border-radius: 6px; }
  button { margin-top: 1.2rem; padding: .6rem 1.4rem; background: var(--accent); color: #fff; border: none; border-radius: 6px; font-weight: 600; cursor: pointer; }
  .result { margin-bottom: 1rem; padding: .9rem 1.2rem; border-radius: 10px; background: rgba(0,200,150,.15); color: #00c896; font-weight: 700; }
  p { line-height: 1.6; margin-bottom: .8rem; }
</style>"#;

const NAV: &str = r#"<header>
  <h1>IPL Predictor</h1>
  <a href="/">Home</a>
  <a href="/ipl">Predict</a>
  <a href="/about">About</a>
</header>"#;

pub fn home_page() -> String {
    HOME_HTML.replace("{{style}}", STYLE).replace("{{nav}}", NAV)
}

pub fn about_page() -> String {
    ABOUT_HTML.replace("{{style}}", STYLE).replace("{{nav}}", NAV)
}

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>IPL Predictor</title>
{{style}}
</head>
<body>
{{nav}}
<main>
  <div class="panel">
    <p>Predict the winner of an IPL match from the two teams, the venue, the city and the toss.</p>
    <p><a href="/ipl">Open the prediction form &rarr;</a></p>
  </div>
</main>
</body>
</html>"#;

const ABOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>About - IPL Predictor</title>
{{style}}
</head>
<body>
{{nav}}
<main>
  <div class="panel">
    <p>Each match attribute is encoded with the same category tables the model was trained on and passed to a pre-trained tree-ensemble classifier.</p>
    <p>The JSON API lives under <code>/api/predict</code>, <code>/api/tables</code> and <code>/api/health</code>.</p>
  </div>
</main>
</body>
</html>"#;

const IPL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Match Prediction - IPL Predictor</title>
{{style}}
</head>
<body>
{{nav}}
<main>
  {{prediction}}
  <form class="panel" method="post" action="/ipl/predict">
    <label for="team1">Team 1</label>
    <select id="team1" name="team1" required>
        {{team1_options}}
    </select>
    <label for="team2">Team 2</label>
    <select id="team2" name="team2" required>
        {{team2_options}}
    </select>
    <label for="venue">Venue</label>
    <select id="venue" name="venue" required>
        {{venue_options}}
    </select>
    <label for="city">City</label>
    <select id="city" name="city" required>
        {{city_options}}
    </select>
    <label for="toss_winner">Toss winner</label>
    <select id="toss_winner" name="toss_winner" required>
        {{toss_winner_options}}
    </select>
    <label for="toss_decision">Toss decision</label>
    <select id="toss_decision" name="toss_decision" required>
        {{toss_decision_options}}
    </select>
    <button type="submit">Predict winner</button>
  </form>
</main>
</body>
</html>"#;
