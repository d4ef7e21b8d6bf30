//! Workbook file codecs.
//!
//! This is the only place where `A1` string addresses appear; the model itself is keyed by
//! numeric coordinates.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::address::{CellAddress, CellRange};
use crate::cell::{CellType, CellValue, format_date, parse_date};
use crate::error::GridError;
use crate::viewport::SizeOverrides;
use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

/// Reads and writes a workbook in one on-disk format.
pub trait WorkbookCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, GridError>;
    fn encode(&self, workbook: &Workbook) -> Result<Vec<u8>, GridError>;
}

/// Pick a codec from the file extension. Anything that is not JSON is treated as delimited
/// text.
pub fn codec_for_path(path: &Path) -> Box<dyn WorkbookCodec> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Box::new(SheetJsonCodec),
        Some("tsv") => Box::new(CsvCodec::new(b'\t')),
        _ => Box::new(CsvCodec::default()),
    }
}

/// Single-sheet delimited text.
#[derive(Debug, Clone, Copy)]
pub struct CsvCodec {
    delimiter: u8,
}

impl CsvCodec {
    pub const SHEET_NAME: &'static str = Workbook::DEFAULT_SHEET_NAME;

    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl WorkbookCodec for CsvCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, GridError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut sheet = Worksheet::new(Self::SHEET_NAME);
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for (column, field) in record.iter().enumerate() {
                if let Some(value) = CellValue::from_input(field) {
                    sheet.set(CellAddress::new(row as u32, column as u32), value);
                }
            }
        }

        let mut workbook = Workbook::new();
        workbook.push(sheet);
        Ok(workbook)
    }

    fn encode(&self, workbook: &Workbook) -> Result<Vec<u8>, GridError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_writer(Vec::new());

        if let Some(sheet) = workbook.first()
            && let Some(used) = sheet.used_range()
        {
            for row in 0..=used.end.row {
                let record: Vec<String> = (0..=used.end.column)
                    .map(|column| {
                        sheet
                            .value(CellAddress::new(row, column))
                            .map(CellValue::display)
                            .unwrap_or_default()
                    })
                    .collect();
                writer.write_record(&record)?;
            }
        }

        writer
            .into_inner()
            .map_err(|err| GridError::Codec(err.to_string()))
    }
}

/// The spreadsheet interchange shape: `SheetNames` plus one object per sheet holding `!ref`,
/// optional `!cols`/`!rows` size arrays and `{t, v}` cells keyed by `A1` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetJsonCodec;

#[derive(Debug, Serialize, Deserialize)]
struct JsonCell {
    t: CellType,
    v: Value,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ColumnInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    wpx: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RowInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    hpx: Option<f64>,
}

fn decode_cell(key: &str, raw: &Value) -> Result<CellValue, GridError> {
    let cell: JsonCell = serde_json::from_value(raw.clone())?;
    let tag = cell.t.tag();
    let mismatch = || GridError::Codec(format!("cell {key}: value does not match type `{tag}`"));
    match cell.t {
        CellType::String => cell
            .v
            .as_str()
            .map(|s| CellValue::String(s.to_string()))
            .ok_or_else(mismatch),
        CellType::Number => cell.v.as_f64().ok_or_else(mismatch).and_then(CellValue::number),
        CellType::Boolean => cell.v.as_bool().map(CellValue::Boolean).ok_or_else(mismatch),
        CellType::Date => cell
            .v
            .as_str()
            .and_then(parse_date)
            .map(CellValue::Date)
            .ok_or_else(mismatch),
    }
}

fn encode_cell(value: &CellValue) -> Value {
    let v = match value {
        CellValue::String(s) => json!(s),
        CellValue::Number(n) => json!(n),
        CellValue::Boolean(b) => json!(b),
        CellValue::Date(d) => json!(format_date(d)),
    };
    json!({ "t": value.cell_type().tag(), "v": v })
}

fn decode_sizes(raw: Option<&Value>, sizes: &mut SizeOverrides, pick: fn(&Value) -> Option<f64>) {
    let Some(Value::Array(entries)) = raw else {
        return;
    };
    for (index, entry) in entries.iter().enumerate() {
        if let Some(size) = pick(entry) {
            sizes.set(index as u32, size);
        }
    }
}

fn encode_sizes(sizes: &SizeOverrides, key: &str) -> Option<Value> {
    let (&last, _) = sizes.overrides.last_key_value()?;
    let entries = (0..=last)
        .map(|index| match sizes.overrides.get(&index) {
            Some(size) => json!({ key: size }),
            None => Value::Null,
        })
        .collect();
    Some(Value::Array(entries))
}

impl SheetJsonCodec {
    fn decode_sheet(name: &str, raw: &Map<String, Value>) -> Result<Worksheet, GridError> {
        let mut sheet = Worksheet::new(name);
        for (key, value) in raw {
            if key.starts_with('!') {
                continue;
            }
            let address = CellAddress::decode(key)?;
            sheet.set(address, decode_cell(key, value)?);
        }
        if let Some(reference) = raw.get("!ref").and_then(Value::as_str) {
            sheet.include_range(CellRange::decode(reference)?);
        }
        decode_sizes(raw.get("!cols"), &mut sheet.columns, |entry| {
            serde_json::from_value::<ColumnInfo>(entry.clone()).ok()?.wpx
        });
        decode_sizes(raw.get("!rows"), &mut sheet.rows, |entry| {
            serde_json::from_value::<RowInfo>(entry.clone()).ok()?.hpx
        });
        Ok(sheet)
    }

    fn encode_sheet(sheet: &Worksheet) -> Value {
        let mut out = Map::new();
        if let Some(range) = sheet.used_range() {
            out.insert("!ref".to_string(), json!(range.encode()));
        }
        if let Some(cols) = encode_sizes(&sheet.columns, "wpx") {
            out.insert("!cols".to_string(), cols);
        }
        if let Some(rows) = encode_sizes(&sheet.rows, "hpx") {
            out.insert("!rows".to_string(), rows);
        }
        for (address, cell) in sheet.sorted_cells() {
            out.insert(address.encode(), encode_cell(cell.value()));
        }
        Value::Object(out)
    }
}

impl WorkbookCodec for SheetJsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, GridError> {
        let root: Value = serde_json::from_slice(bytes)?;
        let names = root
            .get("SheetNames")
            .and_then(Value::as_array)
            .ok_or_else(|| GridError::Codec("missing `SheetNames`".to_string()))?;

        let mut workbook = Workbook::new();
        for name in names {
            let name = name
                .as_str()
                .ok_or_else(|| GridError::Codec("sheet names must be strings".to_string()))?;
            let raw = root
                .get("Sheets")
                .and_then(|sheets| sheets.get(name))
                .and_then(Value::as_object)
                .ok_or_else(|| GridError::Codec(format!("missing sheet `{name}`")))?;
            workbook.push(Self::decode_sheet(name, raw)?);
        }
        Ok(workbook)
    }

    fn encode(&self, workbook: &Workbook) -> Result<Vec<u8>, GridError> {
        let sheets: Map<String, Value> = workbook
            .sheets()
            .iter()
            .map(|sheet| (sheet.name().to_string(), Self::encode_sheet(sheet)))
            .collect();
        let root = json!({
            "SheetNames": workbook.sheet_names().collect::<Vec<_>>(),
            "Sheets": sheets,
        });
        Ok(serde_json::to_vec_pretty(&root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_infers_types_and_keeps_positions() {
        let workbook = CsvCodec::default()
            .decode(b"name,value\nporo,0.3\n,TRUE\n")
            .unwrap();
        let sheet = workbook.sheet(CsvCodec::SHEET_NAME).unwrap();
        assert_eq!(
            sheet.value(CellAddress::new(1, 1)),
            Some(&CellValue::Number(0.3))
        );
        assert_eq!(
            sheet.value(CellAddress::new(2, 1)),
            Some(&CellValue::Boolean(true))
        );
        assert_eq!(sheet.value(CellAddress::new(2, 0)), None);

        let encoded = CsvCodec::default().encode(&workbook).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            "name,value\nporo,0.3\n,TRUE\n"
        );
    }

    #[test]
    fn test_sheet_json_shape() {
        let mut sheet = Worksheet::new("Priors");
        sheet.set(CellAddress::new(0, 0), CellValue::String("x".into()));
        sheet.set(CellAddress::new(1, 1), CellValue::Number(2.0));
        sheet.columns.set(1, 150.0);

        let mut workbook = Workbook::new();
        workbook.push(sheet);
        let bytes = SheetJsonCodec.encode(&workbook).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["SheetNames"], json!(["Priors"]));
        assert_eq!(value["Sheets"]["Priors"]["!ref"], "A1:B2");
        assert_eq!(value["Sheets"]["Priors"]["!cols"], json!([null, { "wpx": 150.0 }]));
        assert_eq!(value["Sheets"]["Priors"]["B2"], json!({ "t": "n", "v": 2.0 }));

        assert_eq!(SheetJsonCodec.decode(&bytes).unwrap(), workbook);
    }

    #[test]
    fn test_sheet_json_rejects_mismatched_cells() {
        let bytes = br#"{"SheetNames":["S"],"Sheets":{"S":{"A1":{"t":"n","v":"x"}}}}"#;
        assert!(matches!(
            SheetJsonCodec.decode(bytes),
            Err(GridError::Codec(_))
        ));
        let bytes = br#"{"SheetNames":["S"],"Sheets":{"S":{"1A":{"t":"s","v":"x"}}}}"#;
        assert!(matches!(
            SheetJsonCodec.decode(bytes),
            Err(GridError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_codec_for_path() {
        let workbook = codec_for_path(Path::new("a.TSV"))
            .decode(b"1\t2\n")
            .unwrap();
        assert_eq!(workbook.first().unwrap().len(), 2);
    }
}
