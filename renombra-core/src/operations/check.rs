use crate::month::MonthTable;
use crate::naming::plan_name;
use crate::normalize::normalize_name;
use crate::output::{CheckEntry, CheckResult};
use crate::timestamp::TimestampParser;
use crate::Result;

/// Show what a run would do with each of `names`, without a directory.
///
/// Names go through the same normalizer, pattern table and date chain as a
/// real run; collisions are not considered.
pub fn check_operation(names: &[String], months: &MonthTable) -> Result<CheckResult> {
    let timestamps = TimestampParser::new(months.clone())?;

    let entries = names
        .iter()
        .map(|input| {
            let normalized = normalize_name(input);
            let plan = plan_name(&normalized, &timestamps);
            CheckEntry {
                input: input.clone(),
                target: plan.target_name(),
                normalized,
                pattern: plan.pattern,
                date: plan.date,
            }
        })
        .collect();

    Ok(CheckResult { entries })
}
