use anyhow::Context;
use bizfind_core::NormalizedBusinessRecord;
use serde::Serialize;

/// Shown for any field the upstream listing did not carry.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// `$` repeated once per price tier; tier 0 is shown as `Free`.
pub(crate) fn format_price_level(level: Option<u8>) -> String {
    match level {
        Some(0) => "Free".to_string(),
        Some(n) => "$".repeat(usize::from(n)),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub(crate) fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| NOT_AVAILABLE.to_string(), |r| format!("{r:.1}"))
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max - 3).collect::<String>())
    } else {
        value.to_string()
    }
}

/// One table row, without a trailing newline.
pub(crate) fn table_row(record: &NormalizedBusinessRecord) -> String {
    format!(
        "{:<30}{:<24}{:<8}{:<9}{:<7}{:<18}{:<42}{}",
        truncate(text(record.name.as_deref()), 28),
        truncate(text(record.category.as_deref()), 22),
        format_rating(record.rating),
        record
            .rating_count
            .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
        format_price_level(record.price_level),
        text(record.phone.as_deref()),
        truncate(text(record.address.as_deref()), 40),
        text(record.website.as_deref()),
    )
}

pub(crate) fn print_table(records: &[NormalizedBusinessRecord]) {
    if records.is_empty() {
        println!("no businesses matched");
        return;
    }

    println!(
        "{:<30}{:<24}{:<8}{:<9}{:<7}{:<18}{:<42}WEBSITE",
        "NAME", "CATEGORY", "RATING", "REVIEWS", "PRICE", "PHONE", "ADDRESS"
    );
    for record in records {
        println!("{}", table_row(record));
    }
    println!();
    println!("{} business(es) found", records.len());
}

/// Column names of [`CsvRow`], in field order.
const CSV_HEADER: [&str; 8] = [
    "name",
    "category",
    "rating",
    "user_ratings_total",
    "address",
    "website",
    "phone",
    "price_level",
];

/// One CSV line. Every cell is text so absent fields read `N/A`, as in the table.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct CsvRow {
    name: String,
    category: String,
    rating: String,
    user_ratings_total: String,
    address: String,
    website: String,
    phone: String,
    price_level: String,
}

pub(crate) fn csv_row(record: &NormalizedBusinessRecord) -> CsvRow {
    let owned = |value: Option<&str>| text(value).to_string();
    CsvRow {
        name: owned(record.name.as_deref()),
        category: owned(record.category.as_deref()),
        rating: record
            .rating
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string()),
        user_ratings_total: record
            .rating_count
            .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
        address: owned(record.address.as_deref()),
        website: owned(record.website.as_deref()),
        phone: owned(record.phone.as_deref()),
        price_level: format_price_level(record.price_level),
    }
}

/// Writes a header line and one row per record.
///
/// An empty result still gets the header.
pub(crate) fn write_csv<W: std::io::Write>(
    writer: W,
    records: &[NormalizedBusinessRecord],
) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv_writer
            .write_record(CSV_HEADER)
            .context("failed to write csv header")?;
    }
    for record in records {
        csv_writer
            .serialize(csv_row(record))
            .with_context(|| format!("failed to write csv row for {}", record.place_id))?;
    }
    csv_writer.flush().context("failed to flush csv output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NormalizedBusinessRecord {
        NormalizedBusinessRecord {
            place_id: "p1".to_owned(),
            name: Some("Joe's Pizza".to_owned()),
            category: Some("restaurant, food".to_owned()),
            rating: Some(4.5),
            rating_count: Some(1_234),
            address: None,
            website: None,
            phone: Some("(212) 555-0100".to_owned()),
            price_level: Some(2),
        }
    }

    #[test]
    fn price_level_renders_as_dollar_signs() {
        assert_eq!(format_price_level(Some(1)), "$");
        assert_eq!(format_price_level(Some(4)), "$$$$");
        assert_eq!(format_price_level(Some(0)), "Free");
        assert_eq!(format_price_level(None), "N/A");
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(Some(4.0)), "4.0");
        assert_eq!(format_rating(Some(4.26)), "4.3");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn row_shows_sentinel_for_missing_fields() {
        let row = table_row(&record());
        assert!(row.starts_with("Joe's Pizza"));
        assert!(row.contains("restaurant, food"));
        assert!(row.contains("$$ "));
        assert!(row.trim_end().ends_with("N/A"), "website should be N/A: {row}");
    }

    #[test]
    fn csv_row_uses_sentinel_and_dollar_signs() {
        let row = csv_row(&record());
        assert_eq!(row.name, "Joe's Pizza");
        assert_eq!(row.rating, "4.5");
        assert_eq!(row.user_ratings_total, "1234");
        assert_eq!(row.address, "N/A");
        assert_eq!(row.website, "N/A");
        assert_eq!(row.price_level, "$$");
    }

    #[test]
    fn write_csv_emits_header_and_quoted_rows() {
        let mut out = Vec::new();
        write_csv(&mut out, &[record()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("name,category,rating,user_ratings_total,address,website,phone,price_level")
        );
        assert_eq!(
            lines.next(),
            Some(r#"Joe's Pizza,"restaurant, food",4.5,1234,N/A,N/A,(212) 555-0100,$$"#)
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn write_csv_with_no_records_is_header_only() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,category,rating,user_ratings_total,address,website,phone,price_level\n"
        );
    }

    #[test]
    fn long_values_are_truncated() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
