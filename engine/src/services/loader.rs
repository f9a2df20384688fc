//! CSV stock ledger loader
//!
//! Parses the ledger export into normalized `TransactionFact` rows.
//! Expected CSV columns (any order, matched by header):
//!   date, DLP, DLPC, name, code, color, category, store,
//!   total_quantity, total_inventory
//!
//! Dates are converted from the Jalali calendar while loading. A single
//! malformed date fails the whole load.

use std::io::Read;
use std::path::Path;

use shared::{RawTransaction, TransactionFact};

use crate::error::{AppError, AppResult};

/// Load and normalize ledger rows from a CSV reader
pub fn load_ledger<R: Read>(reader: R) -> AppResult<Vec<TransactionFact>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| AppError::Csv { line: 1, source })?
        .clone();

    let mut facts = Vec::new();
    let mut undated = 0usize;
    for result in csv_reader.records() {
        let record = result.map_err(|source| AppError::Csv {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        let line = record.position().map_or(0, |p| p.line());

        let raw: RawTransaction = record
            .deserialize(Some(&headers))
            .map_err(|source| AppError::Csv { line, source })?;
        let fact = raw
            .normalize()
            .map_err(|source| AppError::MalformedDate { line, source })?;

        if fact.date.is_unknown() {
            undated += 1;
        }
        facts.push(fact);
    }

    tracing::info!(
        rows = facts.len(),
        undated_rows = undated,
        "Loaded stock ledger"
    );
    Ok(facts)
}

/// Load ledger rows from a CSV file path
pub fn load_ledger_file(path: impl AsRef<Path>) -> AppResult<Vec<TransactionFact>> {
    let path = path.as_ref();
    tracing::info!("Reading stock ledger from {}", path.display());

    let file = std::fs::File::open(path).map_err(|source| AppError::LedgerUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    load_ledger(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const SAMPLE_CSV: &str = "\
date,DLP,DLPC,name,code,color,category,store,total_quantity,total_inventory
1403/05/10,101,10,Canvas Tote,CT-01,Red,Bags,North,3,40
1403/05/11,101,10,Canvas Tote,CT-01,Red,Bags,North,-1,41
,101,10,Canvas Tote,CT-01,Red,Bags,South,,25
1403/05/11,202,20,Trail Shoe,TS-02,Black,Shoes,South,2.5,nan
";

    #[test]
    fn load_sample_csv() {
        let facts = load_ledger(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(facts.len(), 4);
        assert_eq!(facts[0].dimension.product_id, "101");
        assert_eq!(facts[0].store, "North");
        assert_eq!(facts[1].total_quantity, Some(Decimal::from(-1)));
        assert!(facts[2].date.is_unknown());
        assert_eq!(facts[2].total_quantity, None);
        assert_eq!(facts[3].total_quantity, Some(Decimal::new(25, 1)));
        assert_eq!(facts[3].total_inventory, None);
    }

    #[test]
    fn columns_bind_by_header() {
        let csv_data = "\
store,category,color,code,name,DLPC,DLP,total_inventory,total_quantity,date,extra
North,Bags,Red,CT-01,Canvas Tote,10,101,40,3,1403/05/10,ignored
";
        let facts = load_ledger(csv_data.as_bytes()).unwrap();
        assert_eq!(facts[0].dimension.category, "Bags");
        assert_eq!(facts[0].total_inventory, Some(Decimal::from(40)));
    }

    #[test]
    fn malformed_date_fails_whole_load() {
        let csv_data = "\
date,DLP,DLPC,name,code,color,category,store,total_quantity,total_inventory
1403/05/10,101,10,Canvas Tote,CT-01,Red,Bags,North,3,40
1403-05-11,101,10,Canvas Tote,CT-01,Red,Bags,North,1,39
";
        match load_ledger(csv_data.as_bytes()) {
            Err(AppError::MalformedDate { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected MalformedDate, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn non_numeric_quantity_is_csv_error() {
        let csv_data = "\
date,DLP,DLPC,name,code,color,category,store,total_quantity,total_inventory
1403/05/10,101,10,Canvas Tote,CT-01,Red,Bags,North,many,40
";
        assert!(matches!(
            load_ledger(csv_data.as_bytes()),
            Err(AppError::Csv { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_ledger_file("does/not/exist.csv").unwrap_err();
        assert_eq!(err.code(), "LEDGER_UNAVAILABLE");
    }
}
