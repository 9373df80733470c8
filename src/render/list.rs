//! List view: filter controls, status toggles and character cards.

use crate::catalog::{apply, distinct, Character, FilterState, ALL_SPECIES};
use crate::render::{escape, layout};
use crate::routing::Route;
use crate::state::LoadState;

/// Render the list view for the current load state and filters.
pub fn list_page(title: &str, state: &LoadState, filters: &FilterState) -> String {
    let characters = state.characters();
    let filtered = apply(characters, filters);

    let body = format!(
        r#"<main class="main">
{form}
{statuses}
{content}
</main>"#,
        form = filter_form(characters, filters),
        statuses = status_toggles(characters, filters),
        content = content(state, filters, &filtered, characters.len()),
    );

    layout::page(title, &body)
}

fn filter_form(characters: &[Character], filters: &FilterState) -> String {
    let mut species = distinct(characters, |c| c.species.as_str());
    if filters.species_filter() != ALL_SPECIES && !species.iter().any(|s| s == filters.species_filter()) {
        species.push(filters.species_filter().to_string());
    }

    let options: String = std::iter::once(ALL_SPECIES.to_string())
        .chain(species)
        .map(|s| {
            let selected = if s == filters.species_filter() { " selected" } else { "" };
            format!(r#"<option value="{v}"{selected}>{v}</option>"#, v = escape(&s), selected = selected)
        })
        .collect();

    let hidden: String = filters
        .statuses()
        .map(|s| format!(r#"<input type="hidden" name="status" value="{}">"#, escape(s)))
        .collect();

    format!(
        r#"<section class="form-section">
    <form method="get" action="/" class="form-section">
        <fieldset class="form-section__container">
            <label for="character" class="form-section__label">Name</label>
            <input type="text" id="character" name="name" value="{name}" placeholder="Search your favorite character" class="form-section__input">
        </fieldset>
        <fieldset class="form-section__container">
            <label for="species" class="form-section__label">Species</label>
            <select id="species" name="species" class="form-section__select">{options}</select>
        </fieldset>
        {hidden}
        <button type="submit">Filter</button>
        <a href="/" class="form-section__reset">Reset</a>
    </form>
</section>"#,
        name = escape(filters.name_query()),
        options = options,
        hidden = hidden,
    )
}

fn status_toggles(characters: &[Character], filters: &FilterState) -> String {
    let links: String = distinct(characters, |c| c.status.as_str())
        .iter()
        .map(|status| {
            let class = if filters.has_status(status) {
                "status-filter__option status-filter__option--active"
            } else {
                "status-filter__option"
            };
            format!(
                r#"<a class="{class}" href="{href}">{label}</a>"#,
                class = class,
                href = escape(&filters.with_status_toggled(status).href()),
                label = escape(status),
            )
        })
        .collect();

    format!(r#"<nav class="status-filter" aria-label="Status">{}</nav>"#, links)
}

fn content(state: &LoadState, filters: &FilterState, filtered: &[&Character], total: usize) -> String {
    match state {
        LoadState::Loading => {
            r#"<div class="loader" role="status">Loading characters…</div>"#.to_string()
        }
        LoadState::LoadError(reason) => format!(
            r#"<div class="load-error" role="alert">Could not load characters: {}</div>"#,
            escape(reason)
        ),
        LoadState::Loaded(_) if filtered.is_empty() => {
            format!(r#"<p class="empty">{}</p>"#, empty_message(filters, total))
        }
        LoadState::Loaded(_) => {
            let cards: String = filtered.iter().map(|c| card(c)).collect();
            format!(
                r#"<p class="count">Showing {shown} of {total} characters</p>
<ul class="cards">{cards}</ul>"#,
                shown = filtered.len(),
                total = total,
                cards = cards,
            )
        }
    }
}

fn empty_message(filters: &FilterState, total: usize) -> String {
    if total == 0 {
        "There are no characters to show.".to_string()
    } else if !filters.name_query().is_empty() {
        format!(
            r#"There is no character that matches "{}"."#,
            escape(filters.name_query())
        )
    } else {
        "No characters match these filters.".to_string()
    }
}

fn card(character: &Character) -> String {
    let name = escape(&character.name);
    format!(
        r#"<li class="card"><a href="{href}"><article>
    <img src="{image}" alt="Image from {name}" title="Image from {name}" class="card__image">
    <h2 class="card__name">{name}</h2>
    <p class="card__species">{species}</p>
</article></a></li>"#,
        href = Route::Detail(character.id).path(),
        image = escape(&character.image),
        name = name,
        species = escape(&character.species),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> LoadState {
        LoadState::Loaded(
            vec![
                Character::new(1, "Rick Sanchez", "Human", "Alive"),
                Character::new(2, "Morty Smith", "Human", "Dead"),
                Character::new(3, "Bird Person", "Alien", "Dead"),
            ]
            .into(),
        )
    }

    #[test]
    fn test_loading_shows_loader_and_controls() {
        let html = list_page("Title", &LoadState::Loading, &FilterState::default());
        assert!(html.contains("Loading characters"));
        assert!(html.contains(r#"name="name""#));
        assert!(!html.contains("class=\"cards\""));
    }

    #[test]
    fn test_load_error_shows_banner() {
        let state = LoadState::LoadError("upstream returned status 502".into());
        let html = list_page("Title", &state, &FilterState::default());
        assert!(html.contains("load-error"));
        assert!(html.contains("upstream returned status 502"));
        assert!(!html.contains("Loading characters"));
    }

    #[test]
    fn test_filtered_cards() {
        let filters = FilterState::from_query("species=Human&status=Dead");
        let html = list_page("Title", &loaded(), &filters);

        assert!(html.contains(r#"href="/character/2""#));
        assert!(!html.contains(r#"href="/character/1""#));
        assert!(!html.contains(r#"href="/character/3""#));
        assert!(html.contains("Showing 1 of 3 characters"));
        assert!(html.contains(r#"<option value="Human" selected>"#));
    }

    #[test]
    fn test_status_toggle_links() {
        let filters = FilterState::from_query("status=Dead");
        let html = list_page("Title", &loaded(), &filters);

        // active toggle links back to the unfiltered list
        assert!(html.contains(r#"status-filter__option--active" href="/">Dead</a>"#));
        assert!(html.contains(r#"href="/?status=Alive&amp;status=Dead">Alive</a>"#));
    }

    #[test]
    fn test_no_match_message() {
        let filters = FilterState::from_query("name=Squanchy");
        let html = list_page("Title", &loaded(), &filters);
        assert!(html.contains(r#"There is no character that matches "Squanchy"."#));
    }

    #[test]
    fn test_no_match_without_name_query() {
        let filters = FilterState::from_query("species=Alien&status=Alive");
        let html = list_page("Title", &loaded(), &filters);
        assert!(html.contains("No characters match these filters."));
        assert!(!html.contains("matches \"\""));
    }

    #[test]
    fn test_empty_collection_message() {
        let state = LoadState::Loaded(Vec::<Character>::new().into());
        let html = list_page("Title", &state, &FilterState::default());
        assert!(html.contains("There are no characters to show."));
        assert!(!html.contains("matches"));
    }
}
