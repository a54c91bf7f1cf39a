use std::cmp::Ordering;

use super::entities::StockRecord;
use super::value_objects::SortKey;

/// Reorder records descending by the field named by `key`, in place.
///
/// The sort is stable: ties keep their original order. `Momentum` is not
/// wired to any field and leaves the sequence untouched.
pub fn sort_records(records: &mut [StockRecord], key: SortKey) {
    match key {
        SortKey::LatestPrice => sort_f64_desc(records, |r| r.price),
        SortKey::ChangePercent => sort_f64_desc(records, |r| r.change_percent),
        SortKey::Change => sort_f64_desc(records, |r| r.change),
        SortKey::Volume => sort_i64_desc(records, |r| r.volume),
        SortKey::CurrentVolume => sort_i64_desc(records, |r| r.current_volume),
        SortKey::Amount => sort_f64_desc(records, |r| r.amount),
        SortKey::VolumeRatio => sort_f64_desc(records, |r| r.volume_ratio),
        SortKey::High => sort_f64_desc(records, |r| r.high),
        SortKey::Low => sort_f64_desc(records, |r| r.low),
        SortKey::Amplitude => sort_f64_desc(records, |r| r.amplitude),
        SortKey::TurnoverRate => sort_f64_desc(records, |r| r.turnover_rate),
        SortKey::Momentum => {}
    }
}

fn sort_f64_desc(records: &mut [StockRecord], field: impl Fn(&StockRecord) -> f64) {
    records.sort_by(|a, b| field(b).partial_cmp(&field(a)).unwrap_or(Ordering::Equal));
}

fn sort_i64_desc(records: &mut [StockRecord], field: impl Fn(&StockRecord) -> i64) {
    records.sort_by(|a, b| field(b).cmp(&field(a)));
}

/// Domain service reporting records that violate snapshot coherence.
/// Violations are reported, never enforced: the data source supplies the
/// constants and nothing downstream relies on them agreeing.
#[derive(Clone)]
pub struct RecordValidationService;

impl RecordValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_record(&self, record: &StockRecord) -> Result<(), String> {
        if !record.price_range_valid() {
            return Err(format!(
                "{}: high {} is below low {}",
                record.code.value(),
                record.high,
                record.low
            ));
        }
        if record.volume < 0 || record.current_volume < 0 {
            return Err(format!("{}: negative volume", record.code.value()));
        }
        if !record.change_sign_consistent() {
            return Err(format!(
                "{}: change {} disagrees in sign with change percent {}",
                record.code.value(),
                record.change,
                record.change_percent
            ));
        }
        Ok(())
    }

    /// Collect every violation in a batch, with the offending index.
    pub fn validate_records(&self, records: &[StockRecord]) -> Vec<(usize, String)> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| self.validate_record(record).err().map(|e| (i, e)))
            .collect()
    }
}
