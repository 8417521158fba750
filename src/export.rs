//! CSV export of report detail tables.
//!
//! One header line, one line per row, comma-joined. Fields containing a
//! comma, double quote, or newline are wrapped in double quotes with
//! embedded quotes doubled, so any standard CSV parser round-trips them.

use crate::report::DetailTable;

pub fn to_csv(table: &DetailTable) -> String {
    let mut out = String::new();
    write_line(&mut out, &table.headers);
    for row in &table.rows {
        write_line(&mut out, row);
    }
    out
}

fn write_line(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(field));
    }
    out.push('\n');
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal RFC-4180 reader used only to prove exported fields
    /// round-trip through a standard parser.
    fn parse_csv(input: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            if quoted {
                match ch {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => quoted = false,
                    _ => field.push(ch),
                }
            } else {
                match ch {
                    '"' => quoted = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => field.push(ch),
                }
            }
        }
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }
        rows
    }

    fn table(rows: Vec<Vec<&str>>) -> DetailTable {
        DetailTable {
            headers: vec!["Name".into(), "Category".into(), "Amount".into()],
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn plain_fields_are_joined_with_commas() {
        let csv = to_csv(&table(vec![vec!["Cement", "Pojiva", "120,00 Kč"]]));
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Category,Amount"));
        assert_eq!(lines.next(), Some("Cement,Pojiva,\"120,00 Kč\""));
    }

    #[test]
    fn embedded_comma_round_trips_through_a_standard_parser() {
        let original = "Materiál, recyklovaný";
        let csv = to_csv(&table(vec![vec![original, "Sypké", "80"]]));
        let parsed = parse_csv(&csv);
        assert_eq!(parsed[1][0], original);
    }

    #[test]
    fn embedded_quotes_are_doubled_and_recovered() {
        let original = "Trám \"dub\" 4m";
        let csv = to_csv(&table(vec![vec![original, "Dřevo", "55"]]));
        assert!(csv.contains("\"Trám \"\"dub\"\" 4m\""));
        let parsed = parse_csv(&csv);
        assert_eq!(parsed[1][0], original);
    }

    #[test]
    fn embedded_newline_stays_inside_one_field() {
        let original = "řádek 1\nřádek 2";
        let csv = to_csv(&table(vec![vec![original, "Poznámky", "0"]]));
        let parsed = parse_csv(&csv);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1][0], original);
    }
}
