use std::io::{self, Write};

use catalog_core::{
    view::{self, ProductRow, NO_MATCHING_MESSAGE},
    EnrichedProduct, FilterState, User,
};

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Writes the filter controls followed by the product table, or the
/// no-match message when nothing is visible.
pub fn render<W: Write>(
    out: &mut W,
    users: &[User],
    state: &FilterState,
    visible: &[EnrichedProduct<'_>],
) -> io::Result<()> {
    render_filters(out, users, state)?;
    writeln!(out)?;

    if visible.is_empty() {
        return writeln!(out, "{}", NO_MATCHING_MESSAGE);
    }
    render_table(out, &view::rows(visible))
}

fn render_filters<W: Write>(out: &mut W, users: &[User], state: &FilterState) -> io::Result<()> {
    let tabs: Vec<_> = users
        .iter()
        .map(|user| {
            if state.is_user_selected(user.id) {
                format!("[{}:{}]", user.id, user.name)
            } else {
                format!("{}:{}", user.id, user.name)
            }
        })
        .collect();
    writeln!(out, "Users: {}", tabs.join("  "))?;

    if state.has_search() {
        writeln!(out, "Search: {:?}", state.search)?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, rows: &[ProductRow<'_>]) -> io::Result<()> {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [row.id.to_string(), row.name.to_string(), row.category_label(), row.user_name.to_string()]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    let rule: Vec<_> = widths.iter().map(|&width| "-".repeat(width)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &cells {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 4], widths: &[usize; 4]) -> io::Result<()> {
    let padded: Vec<_> =
        cells.iter().zip(widths).map(|(cell, &width)| format!("{:<width$}", cell)).collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

#[cfg(test)]
mod test {
    use catalog_core::{Catalog, FilterAction, UserId};

    use super::*;

    fn scenario() -> Catalog {
        Catalog::from_json(
            r#"[{ "id": 1, "name": "Max", "sex": "m" }]"#,
            r#"[{ "id": 1, "title": "Drinks", "icon": "🍸", "ownerId": 1 }]"#,
            r#"[{ "id": 1, "name": "Cola", "categoryId": 1 }, { "id": 2, "name": "Water", "categoryId": 99 }]"#,
        )
        .unwrap()
    }

    fn render_to_string(catalog: &Catalog, state: &FilterState) -> String {
        let enriched = catalog.enriched_products();
        let visible = state.filter(&enriched);
        let mut out = Vec::new();
        render(&mut out, catalog.users(), state, &visible).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_all_rows_with_fallbacks() {
        let output = render_to_string(&scenario(), &FilterState::new());

        assert!(output.starts_with("Users: 1:Max\n"));
        assert!(output.contains("ID | Product | Category"));
        assert!(output.contains("1  | Cola    | 🍸 - Drinks"));
        assert!(output.contains("🛒 - Unknown Category | Unknown User"));
        assert!(!output.contains("Search:"));
    }

    #[test]
    fn marks_selected_user_and_search() {
        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(1)))
            .apply(FilterAction::EditSearch("co".to_string()));
        let output = render_to_string(&scenario(), &state);

        assert!(output.contains("[1:Max]"));
        assert!(output.contains("Search: \"co\""));
        assert!(output.contains("Cola"));
        assert!(!output.contains("Water"));
    }

    #[test]
    fn empty_result_shows_message() {
        let state = FilterState::new().apply(FilterAction::EditSearch("juice".to_string()));
        let output = render_to_string(&scenario(), &state);

        assert!(output.contains(NO_MATCHING_MESSAGE));
        assert!(!output.contains("Product"));
    }
}
