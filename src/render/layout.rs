//! Page shell: document head, header and footer.

use crate::render::escape;

/// Wrap `body` in the shared document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{header}
{body}
{footer}
</body>
</html>"#,
        title = escape(title),
        css = CSS,
        header = header(title),
        body = body,
        footer = footer(),
    )
}

pub fn header(title: &str) -> String {
    format!(
        r#"<header class="header"><a href="/" class="header__link"><h1 class="header__title">{}</h1></a></header>"#,
        escape(title)
    )
}

pub fn footer() -> String {
    format!(
        r#"<footer class="footer"><p class="footer__text">character-browser v{}</p></footer>"#,
        env!("CARGO_PKG_VERSION")
    )
}

const CSS: &str = r#"
        * { box-sizing: border-box; }
        body { margin: 0; font-family: system-ui, sans-serif; background: #f4f4f4; color: #202329; }
        .header { background: #202329; padding: 1rem 2rem; }
        .header__link { color: #97ce4c; text-decoration: none; }
        .header__title { margin: 0; font-size: 1.6rem; }
        .main { padding: 1.5rem 2rem; }
        .form-section { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-end; margin-bottom: 1rem; }
        .form-section__container { border: none; padding: 0; margin: 0; }
        .form-section__label { display: block; font-weight: 600; margin-bottom: .25rem; }
        .form-section__input, .form-section__select { padding: .4rem .6rem; font-size: 1rem; }
        .status-filter { display: flex; gap: .5rem; flex-wrap: wrap; margin-bottom: 1rem; }
        .status-filter__option { padding: .2rem .7rem; border: 1px solid #202329; border-radius: 1rem; color: inherit; text-decoration: none; }
        .status-filter__option--active { background: #202329; color: #fff; }
        .cards { list-style: none; padding: 0; display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
        .card { background: #fff; border-radius: .5rem; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,.2); }
        .card a { color: inherit; text-decoration: none; }
        .card__image { width: 100%; display: block; }
        .card__name { font-size: 1rem; margin: .5rem; }
        .card__species { margin: 0 .5rem .5rem; color: #555; }
        .loader, .load-error, .empty { padding: 1rem; border-radius: .5rem; }
        .loader { background: #e6f4d7; }
        .load-error { background: #fbe0e0; }
        .detail { display: flex; gap: 2rem; flex-wrap: wrap; background: #fff; padding: 1.5rem; border-radius: .5rem; }
        .detail__image { border-radius: .5rem; }
        .notFound-container { padding: 2rem; text-align: center; }
        .footer { padding: 1rem 2rem; color: #777; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_title() {
        let html = page("<Rick>", "<main></main>");
        assert!(html.contains("<title>&lt;Rick&gt;</title>"));
        assert!(html.contains("<main></main>"));
        assert!(html.contains("header__link"));
    }
}
