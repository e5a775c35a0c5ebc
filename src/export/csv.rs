use crate::errors::{AppError, AppResult};
use crate::export::model::{ChoreExport, HEADERS, chore_to_row};
use csv::{Reader, Writer};

/// Serialize rows to CSV (UTF-8, header always present, even with no rows).
pub fn to_csv_bytes(rows: &[ChoreExport]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(chore_to_row(row))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))
}

/// Parse a CSV produced by `to_csv_bytes`. Empty `time` fields become `None`.
pub fn read_csv(bytes: &[u8]) -> AppResult<Vec<ChoreExport>> {
    let mut rdr = Reader::from_reader(bytes);

    let mut out = Vec::new();
    for row in rdr.deserialize::<ChoreExport>() {
        out.push(row?);
    }
    Ok(out)
}
