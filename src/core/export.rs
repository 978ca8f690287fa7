use crate::domain::model::{ElectionType, ResultRow};
use crate::utils::error::{HarvestError, Result};

pub fn csv_filename(year: &str, valgtype: ElectionType) -> String {
    format!("valg_{}_{}.csv", year, valgtype.code())
}

/// UTF-8 CSV with a header line; column order follows the `ResultRow` field
/// order, `None` fields become empty cells.
pub fn csv_bytes(rows: &[ResultRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| HarvestError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(kommune_navn: Option<&str>, stemmer: Option<i64>) -> ResultRow {
        ResultRow {
            timestamp_utc: Utc::now(),
            aar: "2021".to_string(),
            valtype: ElectionType::St,
            fylke_id: "11".to_string(),
            kommune_id: "1103".to_string(),
            kommune_navn: kommune_navn.map(str::to_string),
            partikode: Some("SP".to_string()),
            partinavn: Some("Senterpartiet".to_string()),
            stemmer,
            prosent: Some(13.5),
        }
    }

    #[test]
    fn test_filename_pattern() {
        assert_eq!(csv_filename("2021", ElectionType::St), "valg_2021_st.csv");
        assert_eq!(csv_filename("2025", ElectionType::Kv), "valg_2025_kv.csv");
    }

    #[test]
    fn test_header_and_column_order() {
        let bytes = csv_bytes(&[row(Some("Stavanger"), Some(9000))]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();

        assert_eq!(
            header,
            "timestamp_utc,aar,valtype,fylke_id,kommune_id,kommune_navn,partikode,partinavn,stemmer,prosent"
        );
    }

    #[test]
    fn test_none_fields_are_empty_cells() {
        let bytes = csv_bytes(&[row(None, None)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let line = text.lines().nth(1).unwrap();

        assert!(line.contains(",2021,st,11,1103,,SP,Senterpartiet,,13.5"));
    }

    #[test]
    fn test_norwegian_names_survive_round_trip() {
        let bytes = csv_bytes(&[row(Some("Røros"), Some(120))]).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let parsed: Vec<ResultRow> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].kommune_navn.as_deref(), Some("Røros"));
        assert_eq!(parsed[0].valtype, ElectionType::St);
        assert_eq!(parsed[0].stemmer, Some(120));
    }
}
