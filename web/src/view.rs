//! HTML rendering of the entity list.

use simplesite_core::entity::EntitySummary;

pub fn render_entity_list(entities: &[EntitySummary]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Entities</title>\n</head>\n<body>\n<h1>Entities</h1>\n",
    );

    if entities.is_empty() {
        html.push_str("<p class=\"empty\">No entities found.</p>\n");
    } else {
        html.push_str("<ul class=\"entities\">\n");
        for entity in entities {
            html.push_str(&format!(
                "<li>\n<h2>{}</h2>\n<p>{}</p>\n</li>\n",
                escape(&entity.title),
                escape(&entity.description)
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
