use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::parser::rows::RawRow;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("div#myTabContent table"));
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static EMPHASIS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("td b"));
static HEADER_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static DATA_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static WINNER_NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("p.text-success b"));
static STORE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("p.text-primary"));
static BOLD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("b"));
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("th, td"));

/// Every `tr` of the jackpot tables, in document order.
pub fn table_rows(html: &str) -> Vec<RawRow> {
    let doc = Html::parse_document(html);
    doc.select(&TABLE_SELECTOR)
        .flat_map(|table| table.select(&ROW_SELECTOR))
        .map(raw_row)
        .collect()
}

fn raw_row(tr: ElementRef) -> RawRow {
    let store = tr.select(&STORE_SELECTOR).next();

    RawRow {
        classes: tr.value().classes().map(str::to_string).collect(),
        emphasized: tr
            .select(&EMPHASIS_SELECTOR)
            .map(|b| text_of(b).trim().to_string())
            .collect(),
        header_cells: tr.select(&HEADER_CELL_SELECTOR).count(),
        data_cells: tr.select(&DATA_CELL_SELECTOR).count(),
        winner_name: tr.select(&WINNER_NAME_SELECTOR).next().map(text_of),
        store_name: store
            .and_then(|p| p.select(&BOLD_SELECTOR).next())
            .map(text_of),
        store_block: store.map(text_of),
        text: row_text(tr),
    }
}

/// Cell texts joined by a space, so adjacent cells stay readable in diagnostics.
fn row_text(tr: ElementRef) -> String {
    let cells: Vec<String> = tr.select(&CELL_SELECTOR).map(text_of).collect();
    if cells.is_empty() {
        return normalize_ws(&text_of(tr));
    }
    normalize_ws(&cells.join(" "))
}

fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rows::{classify, RowRole};

    #[test]
    fn reads_summary_row() {
        let html = r#"<div id="myTabContent"><table>
            <tr class="bg-light">
              <td><b> August 23, 2023 </b></td><td><b>$94.8 Million</b></td>
              <td><b>12 - 03 - 45 - 6 - 09 / 11 / 2</b></td>
            </tr></table></div>"#;
        let rows = table_rows(html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].classes, ["bg-light"]);
        assert_eq!(rows[0].emphasized, ["August 23, 2023", "$94.8 Million", "12 - 03 - 45 - 6 - 09 / 11 / 2"]);
        assert_eq!(rows[0].data_cells, 3);
        assert_eq!(rows[0].text, "August 23, 2023 $94.8 Million 12 - 03 - 45 - 6 - 09 / 11 / 2");
        assert_eq!(classify(&rows[0]), RowRole::Summary);
    }

    #[test]
    fn reads_winner_row() {
        let html = r#"<div id="myTabContent"><table><tr><td>
              <p class="text-success"><b>Jane Doe</b> of Ohio</p>
              <p class="text-primary"><b>Quick Stop</b>, 12 Main St, Springfield, OH</p>
            </td></tr></table></div>"#;
        let rows = table_rows(html);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.winner_name.as_deref(), Some("Jane Doe"));
        assert_eq!(row.store_name.as_deref(), Some("Quick Stop"));
        assert_eq!(row.store_block.as_deref(), Some("Quick Stop, 12 Main St, Springfield, OH"));
        assert_eq!(row.text, "Jane Doe of Ohio Quick Stop, 12 Main St, Springfield, OH");
        assert_eq!(classify(row), RowRole::Detail);
    }

    #[test]
    fn header_row_counts_cells() {
        let html = r#"<div id="myTabContent"><table><tr><th>Winner</th><th>Store</th></tr></table></div>"#;
        let rows = table_rows(html);
        assert_eq!(rows[0].header_cells, 2);
        assert!(rows[0].is_header_only());
        assert_eq!(rows[0].text, "Winner Store");
    }

    #[test]
    fn ignores_tables_outside_tab_content() {
        let html = r#"<table><tr class="bg-light"><td><b>x</b></td></tr></table>
            <div id="myTabContent"><table><tr class="bg-dark"><td></td></tr></table></div>"#;
        let rows = table_rows(html);
        assert_eq!(rows.len(), 1);
        assert_eq!(classify(&rows[0]), RowRole::Divider);
    }
}
