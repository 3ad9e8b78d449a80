//! Battery cycle segmentation
//!
//! Images of one category are ordered by time of day and split into cycles
//! wherever two neighbouring captures are at least [`CYCLE_GAP_SECS`] apart. Each
//! gap is measured against the immediate predecessor, not against the start of
//! the running cycle.

use chrono::{NaiveTime, TimeDelta};
use crate::error::DataError;
use crate::record::{Category, CycleLabel, ImageRecord};

/// Minimum gap between neighbouring captures that closes a cycle, in seconds
pub const CYCLE_GAP_SECS: i64 = 60;

#[derive(Debug, Clone)]
pub struct Segmentation {
    pub category: Category,
    /// Records sorted by time of day, closing records labelled
    pub records: Vec<ImageRecord>,
    /// Sum of every recorded cycle duration
    pub total_cycle_duration: TimeDelta,
    /// Final value of the cycle counter (starts at 1, +1 per closing gap)
    pub cycle_count: u32,
    /// Span between the first and last capture, regardless of cycles
    pub total_time_difference: TimeDelta,
}

impl Segmentation {
    pub fn first_time(&self) -> NaiveTime {
        self.records[0].time
    }

    pub fn last_time(&self) -> NaiveTime {
        self.records[self.records.len() - 1].time
    }

    /// Durations in the order their cycles were closed
    pub fn cycle_durations(&self) -> Vec<TimeDelta> {
        self.records.iter().filter_map(|r| r.cycle_duration).collect()
    }
}

pub struct CycleSegmenter;

impl CycleSegmenter {
    /// Sort, label and total a category's records
    pub fn segment(category: Category, mut records: Vec<ImageRecord>) -> Result<Segmentation, DataError> {
        if records.len() < 2 {
            return Err(DataError::InsufficientImages {
                category,
                found: records.len(),
            });
        }

        // Stable: equal times keep their enumeration order
        records.sort_by_key(|r| r.time);
        for record in &mut records {
            record.clear_cycle();
        }

        let mut cycle_count: u32 = 1;
        let mut cycle_start: Option<NaiveTime> = None;
        let mut total_cycle_duration = TimeDelta::zero();

        for i in 1..records.len() {
            let previous = records[i - 1].time;
            let gap = records[i].time.signed_duration_since(previous);

            if gap.num_seconds() >= CYCLE_GAP_SECS {
                let closing = &mut records[i - 1];
                closing.cycle_label = Some(CycleLabel(cycle_count));
                if let Some(start) = cycle_start.take() {
                    let duration = previous.signed_duration_since(start);
                    closing.cycle_duration = Some(duration);
                    total_cycle_duration += duration;
                }
                cycle_count += 1;
            } else if cycle_start.is_none() {
                cycle_start = Some(previous);
            }
        }

        // Sequence ended mid-cycle: the last capture closes it
        if let Some(start) = cycle_start {
            let last = records.len() - 1;
            let duration = records[last].time.signed_duration_since(start);
            records[last].cycle_label = Some(CycleLabel(cycle_count));
            records[last].cycle_duration = Some(duration);
            total_cycle_duration += duration;
        }

        let total_time_difference = records[records.len() - 1]
            .time
            .signed_duration_since(records[0].time);

        Ok(Segmentation {
            category,
            records,
            total_cycle_duration,
            cycle_count,
            total_time_difference,
        })
    }
}
