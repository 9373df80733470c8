//! Detail and not-found views.

use crate::catalog::Character;
use crate::render::{escape, layout};

/// Shown when a detail id does not resolve.
pub const NOT_FOUND_MESSAGE: &str =
    "Oooops, sorry, there is no character in this universe that matches your search!";

/// Render one character's full record.
pub fn detail_page(title: &str, character: &Character) -> String {
    let name = escape(&character.name);
    let episodes = character.episode.len();

    let body = format!(
        r#"<main class="main">
<a href="/" class="detail__back">&larr; Back</a>
<article class="detail">
    <img src="{image}" alt="Image from {name}" title="Image from {name}" class="detail__image">
    <div class="detail__info">
        <h2 class="detail__name">{name}</h2>
        <dl>
            <dt>Status</dt><dd class="detail__status">{status}</dd>
            <dt>Species</dt><dd class="detail__species">{species}</dd>
            <dt>Gender</dt><dd>{gender}</dd>
            <dt>Origin</dt><dd>{origin}</dd>
            <dt>Episodes</dt><dd>{episodes}</dd>
        </dl>
    </div>
</article>
</main>"#,
        image = escape(&character.image),
        name = name,
        status = escape(&character.status),
        species = escape(&character.species),
        gender = or_unknown(&character.gender),
        origin = or_unknown(&character.origin.name),
        episodes = episodes,
    );

    layout::page(&format!("{} | {}", character.name, title), &body)
}

/// Fixed not-found view with a link back to the list.
pub fn not_found_page(title: &str) -> String {
    let body = format!(
        r#"<main class="main">
<div class="notFound-container">
    <p class="notFound-container__text">{message}</p>
    <a href="/" class="header__link">Try again</a>
</div>
</main>"#,
        message = escape(NOT_FOUND_MESSAGE),
    );

    layout::page(title, &body)
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "unknown".to_string()
    } else {
        escape(value)
    }
}
