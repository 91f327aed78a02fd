//! CSV serialisation of generated records.

use std::io::Write;

use crate::error::ExportError;
use crate::record::PersonRecord;

/// Column titles, in output order.
pub const CSV_HEADERS: [&str; 5] = ["Number", "ID", "Full Name", "Address", "Phone Number"];

/// Writes a header row then one row per record and returns the sink.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a row cannot be written and
/// [`ExportError::Flush`] if buffered output cannot reach the sink.
pub fn write_csv<W: Write>(records: &[PersonRecord], sink: W) -> Result<W, ExportError> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(CSV_HEADERS)?;

    for record in records {
        let number = record.number.to_string();
        let id = record.id.to_string();
        writer.write_record([
            number.as_str(),
            id.as_str(),
            record.full_name.as_str(),
            record.address.as_str(),
            record.phone_number.as_str(),
        ])?;
    }

    writer.flush().map_err(|err| ExportError::Flush {
        message: err.to_string(),
    })?;
    writer.into_inner().map_err(|err| ExportError::Flush {
        message: err.error().to_string(),
    })
}

/// Serialises records to an in-memory CSV document.
///
/// # Errors
///
/// Propagates [`write_csv`] failures.
///
/// # Example
///
/// ```
/// use synthetic_records::{ErrorBudget, PageRequest, Region, generate_page, to_csv_bytes};
///
/// let request = PageRequest::new(Region::De, 1, ErrorBudget::NONE, 1, 5).expect("valid");
/// let bytes = to_csv_bytes(&generate_page(&request)).expect("csv");
/// let text = String::from_utf8(bytes).expect("utf-8");
///
/// assert!(text.starts_with("Number,ID,Full Name,Address,Phone Number\n"));
/// ```
pub fn to_csv_bytes(records: &[PersonRecord]) -> Result<Vec<u8>, ExportError> {
    write_csv(records, Vec::new())
}
