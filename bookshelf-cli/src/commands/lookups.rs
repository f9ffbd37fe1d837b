//! Lookup table commands

use super::fetch_failed;
use anyhow::Result;
use bookshelf_core::{ApiClient, LookupTable, SortOrder};
use serde::Serialize;

#[derive(Serialize)]
struct Entry<'a> {
    id: i64,
    name: &'a str,
}

/// Print every file type
pub async fn file_types(client: &ApiClient, json: bool) -> Result<()> {
    let table = client
        .all_file_types()
        .await
        .map_err(|e| fetch_failed("File types fetch error", e))?;
    print_table(&table, json)
}

/// Print every publisher
pub async fn publishers(client: &ApiClient, json: bool) -> Result<()> {
    let table = client
        .all_publishers()
        .await
        .map_err(|e| fetch_failed("Publishers fetch error", e))?;
    print_table(&table, json)
}

fn print_table(table: &LookupTable, json: bool) -> Result<()> {
    let entries: Vec<Entry<'_>> = table
        .sorted_by_name()
        .into_iter()
        .map(|(id, name)| Entry { id, name })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{:>6}  {}", entry.id, entry.name);
        }
    }
    Ok(())
}

/// Print the sort orders accepted by `list --sort`
pub fn sorts() {
    for order in SortOrder::ALL {
        println!("{:<18} {}", order.as_query(), order.label());
    }
}
