//! HTML page rendering.
//!
//! No template engine: pages are small enough that each view is a function
//! building the markup around a shared layout. All interpolated text goes
//! through [`escape`].

use pokedex_core::Pokemon;

/// Minimal HTML entity escaping for interpolated text.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Shared page shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Pokédex</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<h1><a href="/">Pokédex</a></h1>
<nav><a href="/pokemones">Mis Pokémon</a></nav>
</header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Landing page with the capture form.
pub fn index_page() -> String {
    layout(
        "Inicio",
        r#"<section class="hero">
<h2>¡Atrápalos ya!</h2>
<p>Escribe el número o nombre de un Pokémon para capturarlo.</p>
<form id="capture-form">
<input id="species" name="species" placeholder="25 o pikachu" required>
<button type="submit">Capturar</button>
</form>
<script>
document.getElementById("capture-form").addEventListener("submit", function (event) {
  event.preventDefault();
  var species = document.getElementById("species").value.trim();
  if (!species) return;
  fetch("/capturar/" + encodeURIComponent(species), { method: "POST" })
    .then(function (response) { return response.text().then(function (html) {
      document.open(); document.write(html); document.close();
      history.pushState({}, "", response.url);
    }); });
});
</script>
</section>"#,
    )
}

/// Card markup for a single record, shared by the detail and list pages.
fn pokemon_card(pokemon: &Pokemon, link_detail: bool) -> String {
    let name = escape(&pokemon.name);
    let title = if link_detail {
        format!(r#"<a href="/pokemon/{}">{}</a>"#, pokemon.id, name)
    } else {
        name
    };
    format!(
        r#"<article class="pokemon-card">
<img src="{image}" alt="{alt}">
<h3>{title}</h3>
<dl>
<dt>Tipo</dt><dd>{type_name}</dd>
<dt>Altura</dt><dd>{height} m</dd>
<dt>Peso</dt><dd>{weight} kg</dd>
<dt>Pokédex №</dt><dd>{species_id}</dd>
<dt>Capturado</dt><dd>{captured_at}</dd>
</dl>
<a class="release" href="/eliminar/{id}">Liberar</a>
</article>"#,
        image = escape(&pokemon.image),
        alt = escape(&pokemon.name),
        title = title,
        type_name = escape(&pokemon.type_name),
        height = pokemon.height,
        weight = pokemon.weight,
        species_id = pokemon.species_id,
        captured_at = pokemon.captured_at_utc.format("%Y-%m-%d %H:%M UTC"),
        id = pokemon.id,
    )
}

/// Detail page for one captured record.
pub fn pokemon_page(pokemon: &Pokemon) -> String {
    layout(&pokemon.name, &pokemon_card(pokemon, false))
}

/// Collection listing in capture order.
pub fn collection_page(records: &[Pokemon]) -> String {
    if records.is_empty() {
        return layout(
            "Mis Pokémon",
            r#"<p class="empty">Todavía no has capturado ningún Pokémon.</p>"#,
        );
    }
    let cards: String = records
        .iter()
        .map(|pokemon| pokemon_card(pokemon, true))
        .collect();
    layout(
        "Mis Pokémon",
        &format!(r#"<section class="collection">{}</section>"#, cards),
    )
}

/// Themed message page (release confirmations, not-found, faults).
pub fn message_page(message: &str) -> String {
    layout(
        "Mensaje",
        &format!(r#"<p class="message">{}</p>"#, escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{normalize_measure, SpeciesProfile};

    fn sample() -> Pokemon {
        Pokemon::new(SpeciesProfile {
            species_id: 25,
            name: "pikachu".to_string(),
            type_name: "Eléctrico".to_string(),
            height: normalize_measure(4),
            weight: normalize_measure(60),
            image: "https://img.example/25.png".to_string(),
        })
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape(r#"a"b'c&d"#), "a&quot;b&#39;c&amp;d");
    }

    #[test]
    fn test_pokemon_page_shows_normalized_units() {
        let page = pokemon_page(&sample());
        assert!(page.contains("pikachu"));
        assert!(page.contains("0.4 m"));
        assert!(page.contains("6 kg"));
        assert!(page.contains("Eléctrico"));
    }

    #[test]
    fn test_collection_page_links_each_record() {
        let records = vec![sample(), sample()];
        let page = collection_page(&records);
        for pokemon in &records {
            assert!(page.contains(&format!("/pokemon/{}", pokemon.id)));
            assert!(page.contains(&format!("/eliminar/{}", pokemon.id)));
        }
    }

    #[test]
    fn test_collection_page_empty_state() {
        let page = collection_page(&[]);
        assert!(page.contains("Todavía no has capturado"));
    }

    #[test]
    fn test_message_page_escapes_content() {
        let page = message_page("<b>hola</b>");
        assert!(page.contains("&lt;b&gt;hola&lt;/b&gt;"));
    }
}
