use crate::measurement::Value;
use crate::rule::Classified;
use crate::verdict::Verdict;

/// Reduces classified results to one overall verdict and one summary line.
///
/// The overall verdict is the worst one by the aggregation precedence
/// `OK < WARNING < UNKNOWN < CRITICAL`, ties broken by the first result
/// encountered. When everything is OK and more than one result exists (the
/// multi-queue case), the summary compresses to a count plus min/avg/max so
/// the report stays on one line regardless of fleet size; otherwise it is
/// the worst result's description verbatim.
#[must_use]
pub fn aggregate(results: &[Classified]) -> (Verdict, String) {
    let Some(first) = results.first() else {
        return (Verdict::Unknown, "no measurements produced".to_string());
    };

    let mut worst = first;
    for result in &results[1..] {
        if result.verdict > worst.verdict {
            worst = result;
        }
    }

    if worst.verdict == Verdict::Ok && results.len() > 1 {
        if let Some(summary) = fleet_summary(results) {
            return (Verdict::Ok, summary);
        }
    }
    (worst.verdict, worst.description.clone())
}

/// The average is the truncating integer quotient of the sum by the count.
fn fleet_summary(results: &[Classified]) -> Option<String> {
    let mut counts = Vec::with_capacity(results.len());
    for result in results {
        match result.measurement.value {
            Value::Count(n) => counts.push(n),
            Value::Flag(_) | Value::Status(_) => return None,
        }
    }
    let min = counts.iter().min()?;
    let max = counts.iter().max()?;
    let avg = counts.iter().sum::<i64>() / counts.len() as i64;
    Some(format!(
        "Checked {} queues with lengths min/avg/max = {min}/{avg}/{max}",
        counts.len()
    ))
}
