use crate::model::{WinningRecord, WinningRow};

/// Splits a raw producer field on commas and trims every name.
/// Empty pieces survive as `""`; no other normalization is applied.
pub fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}

pub fn normalize_all(rows: &[WinningRow]) -> Vec<WinningRecord> {
    rows.iter().map(normalize_row).collect()
}

fn normalize_row(row: &WinningRow) -> WinningRecord {
    WinningRecord {
        year: row.year,
        recipients: split_recipients(&row.recipients),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_each_name() {
        assert_eq!(
            split_recipients("  Allan Carr ,Jerry Weintraub,   Bo Derek"),
            vec!["Allan Carr", "Jerry Weintraub", "Bo Derek"]
        );
    }

    #[test]
    fn keeps_empty_pieces_as_literal_names() {
        assert_eq!(split_recipients("A,, B ,"), vec!["A", "", "B", ""]);
        assert_eq!(split_recipients(""), vec![""]);
    }

    #[test]
    fn does_not_fold_case() {
        assert_eq!(
            split_recipients("producer x, Producer X"),
            vec!["producer x", "Producer X"]
        );
    }

    #[test]
    fn keeps_duplicate_names_on_one_record() {
        assert_eq!(split_recipients("A, A"), vec!["A", "A"]);
    }

    #[test]
    fn normalize_all_keeps_year_and_order() {
        let rows = vec![
            WinningRow {
                year: 1990,
                recipients: "B, A".into(),
            },
            WinningRow {
                year: 1985,
                recipients: "C".into(),
            },
        ];
        let records = normalize_all(&rows);
        assert_eq!(
            records[0],
            WinningRecord {
                year: 1990,
                recipients: vec!["B".into(), "A".into()],
            }
        );
        assert_eq!(
            records[1],
            WinningRecord {
                year: 1985,
                recipients: vec!["C".into()],
            }
        );
    }
}
