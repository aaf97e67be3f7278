//! Server-rendered HTML pages
//!
//! One page: a title selector and, after submission, either a grid of up to
//! two rows of five recommendation cards or a warning.

use crate::{
    data::Catalog,
    models::RecommendedMovie,
    services::recommendations::{NOT_FOUND_MESSAGE, RECOMMENDATION_COUNT},
};

const CARDS_PER_ROW: usize = 5;

/// Page with only the selector
pub fn index_page(catalog: &Catalog, selected: Option<&str>) -> String {
    layout(&selector(catalog, selected), "")
}

/// Page with the selector followed by results for `title`
///
/// `recommendations` is `None` when the title was not found.
pub fn results_page(
    catalog: &Catalog,
    title: &str,
    recommendations: Option<&[RecommendedMovie]>,
) -> String {
    let results = match recommendations {
        None => format!(
            r#"<div class="warning" role="alert">{}</div>"#,
            escape_html(NOT_FOUND_MESSAGE)
        ),
        Some(movies) => results_grid(title, movies),
    };

    layout(&selector(catalog, Some(title)), &results)
}

fn layout(selector: &str, results: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Movie Recommendation Engine</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>🎬 Movie Recommendation Engine</h1>
        <h3>Find your next favorite movie! 🍿</h3>
    </header>
    <main>
{selector}
{results}
    </main>
</body>
</html>"#,
        css = CSS,
        selector = selector,
        results = results,
    )
}

fn selector(catalog: &Catalog, selected: Option<&str>) -> String {
    let mut options = String::new();
    let mut marked = false;

    for title in catalog.titles() {
        // Only the first of several identical titles gets marked
        let is_selected = !marked && selected == Some(title);
        marked |= is_selected;

        options.push_str(&format!(
            r#"            <option value="{value}"{sel}>{value}</option>
"#,
            value = escape_html(title),
            sel = if is_selected { " selected" } else { "" },
        ));
    }

    format!(
        r#"        <form class="selector" method="get" action="/recommend">
            <label for="title"><strong>🎥 Select a movie:</strong></label>
            <select id="title" name="title">
{options}            </select>
            <button type="submit">✨ Get Recommendations</button>
        </form>"#,
        options = options,
    )
}

fn results_grid(title: &str, movies: &[RecommendedMovie]) -> String {
    let mut rows = String::new();

    for row in movies
        .iter()
        .take(RECOMMENDATION_COUNT)
        .collect::<Vec<_>>()
        .chunks(CARDS_PER_ROW)
    {
        rows.push_str("            <div class=\"row\">\n");
        for movie in row {
            rows.push_str(&card(movie));
        }
        rows.push_str("            </div>\n");
    }

    format!(
        r#"        <section class="results">
            <h2>Top 10 recommendations for <strong>{title}</strong>:</h2>
{rows}        </section>"#,
        title = escape_html(title),
        rows = rows,
    )
}

fn card(movie: &RecommendedMovie) -> String {
    let title = escape_html(&movie.title);
    format!(
        r#"                <figure class="card">
                    <h4>{title}</h4>
                    <img src="{src}" alt="{title}">
                    <figcaption>{title}</figcaption>
                </figure>
"#,
        title = title,
        src = escape_html(&movie.poster_url),
    )
}

/// Escapes text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const CSS: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 1200px; padding: 1rem; }
header h1 { text-align: center; color: #FF4B4B; }
header h3 { text-align: center; color: #555; }
.selector { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 1.5rem; }
.selector select { flex: 1; padding: 0.4rem; }
.results h2 { text-align: center; color: #FF914D; }
.row { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; margin-bottom: 1rem; }
.card { margin: 0; text-align: center; }
.card img { width: 100%; height: auto; }
.warning { background: #fff3cd; border: 1px solid #ffe08a; padding: 0.75rem 1rem; border-radius: 4px; }
"#;
