use crate::core::engine::InterestEngine;
use crate::core::{InterestForm, InterestKind};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    pub kind: String,
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub kind: String,
    pub principal: String,
    pub rate: String,
    pub time: String,
    pub frequency: String,
    pub interest: Option<f64>,
    pub total: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.rows - self.failed
    }
}

pub fn process_row(engine: &InterestEngine, row: BatchRow) -> BatchRecord {
    let outcome = row.kind.parse::<InterestKind>().and_then(|kind| {
        let form = InterestForm::new(&*row.principal, &*row.rate, &*row.time)
            .with_frequency(&*row.frequency);
        engine.calculate(kind, &form)
    });

    let (interest, total, error) = match outcome {
        Ok(calculation) => (
            Some(calculation.result.interest),
            Some(calculation.result.total),
            None,
        ),
        Err(e) => (None, None, Some(e.to_string())),
    };

    BatchRecord {
        kind: row.kind,
        principal: row.principal,
        rate: row.rate,
        time: row.time,
        frequency: row.frequency,
        interest,
        total,
        error,
    }
}

/// 逐列計算 `input`，每一列輸入寫出一列結果
///
/// 單列失敗只寫入 `error` 欄位；只有 CSV 無法讀取或寫入失敗才會中止
pub fn run_batch<R: Read, W: Write>(
    engine: &InterestEngine,
    input: R,
    output: W,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (index, row) in reader.deserialize::<BatchRow>().enumerate() {
        let record = process_row(engine, row?);
        summary.rows += 1;

        if let Some(error) = &record.error {
            summary.failed += 1;
            tracing::warn!("Row {} failed: {}", index + 1, error);
        }

        writer.serialize(&record)?;
    }

    writer.flush()?;
    tracing::info!(
        "Batch finished: {} rows, {} failed",
        summary.rows,
        summary.failed
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationPolicy;

    fn run(input: &str, policy: ValidationPolicy) -> (BatchSummary, String) {
        let engine = InterestEngine::new(policy);
        let mut output = Vec::new();
        let summary = run_batch(&engine, input.as_bytes(), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_batch_computes_each_row() {
        let input = "kind,principal,rate,time,frequency\n\
                     simple,1000,10,2,\n\
                     compound,1000,0,3,4\n";

        let (summary, output) = run(input, ValidationPolicy::RequireAll);
        assert_eq!(summary, BatchSummary { rows: 2, failed: 0 });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "kind,principal,rate,time,frequency,interest,total,error");
        assert_eq!(lines[1], "simple,1000,10,2,,200.0,1200.0,");
        assert_eq!(lines[2], "compound,1000,0,3,4,0.0,1000.0,");
    }

    #[test]
    fn test_batch_reports_row_errors_without_aborting() {
        let input = "kind,principal,rate,time,frequency\n\
                     simple,,10,2,\n\
                     weekly,1000,10,2,\n\
                     simple,500,10,1,\n";

        let (summary, output) = run(input, ValidationPolicy::RequireAll);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.succeeded(), 1);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "simple,,10,2,,,,Missing required fields: principal");
        assert_eq!(lines[2], "weekly,1000,10,2,,,,Unknown calculation kind: weekly");
        assert_eq!(lines[3], "simple,500,10,1,,50.0,550.0,");
    }

    #[test]
    fn test_lenient_batch_computes_blank_rows() {
        let input = "kind,principal,rate,time,frequency\ncompound,1000,5,2,\n";

        let (summary, output) = run(input, ValidationPolicy::Lenient);
        assert_eq!(summary.failed, 0);
        let columns: Vec<&str> = output.lines().nth(1).unwrap().split(',').collect();
        let interest: f64 = columns[5].parse().unwrap();
        assert!((interest - 102.5).abs() < 1e-9);
        assert_eq!(columns[7], "");
    }

    #[test]
    fn test_malformed_csv_is_an_error() {
        let engine = InterestEngine::default();
        let input = "kind,principal,rate,time,frequency\nsimple,1,2,3,4,5,6\n";
        let result = run_batch(&engine, input.as_bytes(), Vec::new());
        assert!(result.is_err());
    }
}
