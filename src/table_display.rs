use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use account_cli::config::config::Config;
use account_cli::data::account_view::AccountView;
use account_cli::data::pager::{PageItem, PageView};

/// Render one page as a table, with a range summary and pagination bar.
pub fn display_page(page: &PageView, page_size: usize, search: &str, config: &Config) {
    if !search.trim().is_empty() {
        println!("{}", format!("Filter: {:?}", search).cyan());
    }

    if page.total_items == 0 {
        println!("{}", "No matching accounts.".yellow());
        println!("{}", pagination_bar(page));
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header_names = vec!["ID", "Name", "Email", "Age", "Gender", "Address"];
    if config.display.show_row_numbers {
        header_names.insert(0, "#");
    }
    let headers: Vec<Cell> = header_names
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    let start = (page.current_page - 1) * page_size;
    for (offset, account) in page.items.iter().enumerate() {
        let mut row = vec![
            account.id.to_string(),
            account.name.clone(),
            account.email.clone(),
            account.age.to_string(),
            display_gender(&account.gender),
            account.address.clone(),
        ];
        if config.display.show_row_numbers {
            row.insert(0, (start + offset + 1).to_string());
        }
        table.add_row(row);
    }

    println!("{table}");
    println!(
        "{}",
        format!(
            "Showing {}-{} of {} accounts (page {}/{})",
            start + 1,
            start + page.items.len(),
            page.total_items,
            page.current_page,
            page.total_pages
        )
        .green()
    );
    println!("{}", pagination_bar(page));
}

/// Print the page as pretty JSON for scripting.
pub fn display_page_json(page: &PageView) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(page)?);
    Ok(())
}

/// Export the whole filtered set (not just the current page) to a CSV
/// file. Returns the number of exported rows.
pub fn export_to_csv(view: &AccountView, filename: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(filename)?;

    wtr.write_record(["id", "name", "email", "age", "gender", "address"])?;

    let mut count = 0;
    for account in view.accounts() {
        wtr.write_record([
            account.id.to_string(),
            account.name.clone(),
            account.email.clone(),
            account.age.to_string(),
            account.gender.clone(),
            account.address.clone(),
        ])?;
        count += 1;
    }

    wtr.flush()?;
    Ok(count)
}

fn pagination_bar(page: &PageView) -> String {
    let mut parts: Vec<String> = Vec::new();
    for item in &page.page_items {
        match item {
            PageItem::Page(n) if *n == page.current_page => parts.push(format!("[{}]", n)),
            PageItem::Page(n) => parts.push(n.to_string()),
            PageItem::Gap { .. } => parts.push("…".to_string()),
        }
    }
    format!("Pages: {}", parts.join(" "))
}

/// Gender values come from hand-edited data in several spellings; fold
/// the known ones into a single display form. Unknown values pass
/// through, empty renders as a dash.
fn display_gender(raw: &str) -> String {
    if raw.is_empty() {
        return "—".to_string();
    }
    let v = raw.to_lowercase();
    if v == "male" || raw == "男" || raw == "男性" {
        "男性".to_string()
    } else if v == "female" || raw == "女" || raw == "女性" {
        "女性".to_string()
    } else if v == "other" || raw == "その他" {
        "その他".to_string()
    } else {
        raw.to_string()
    }
}
