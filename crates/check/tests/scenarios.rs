//! Pipeline-level scenarios: probe → classify → aggregate → report.

use amqcheck_check::{
    CheckGroup, CheckRunner, ClassificationRule, Measurement, Probe, ThresholdRule, Verdict,
};
use futures::StreamExt;
use futures::stream::BoxStream;

struct FixedProbe(Vec<Measurement>);

impl Probe for FixedProbe {
    fn probe(&self) -> BoxStream<'_, Measurement> {
        futures::stream::iter(self.0.clone()).boxed()
    }
}

fn size_runner() -> CheckRunner {
    CheckRunner::new(
        CheckGroup::Size,
        ClassificationRule::Threshold(ThresholdRule::new(10, 100)),
    )
}

fn sizes(values: &[i64]) -> FixedProbe {
    FixedProbe(
        values
            .iter()
            .map(|&n| {
                Measurement::count(format!("Queue Size of q{n}"), n, CheckGroup::Size)
                    .with_floor(0)
            })
            .collect(),
    )
}

#[tokio::test]
async fn mid_range_value_warns_and_names_value_and_bound() {
    let report = size_runner().run(&sizes(&[50])).await;
    assert_eq!(report.verdict, Verdict::Warning);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.line, "WARNING size: Queue Size of q50 is 50 (greater than 10)");
}

#[tokio::test]
async fn worst_queue_decides_and_speaks_for_the_fleet() {
    let report = size_runner().run(&sizes(&[5, 15, 200])).await;
    assert_eq!(report.verdict, Verdict::Critical);
    assert_eq!(report.exit_code(), 2);
    assert_eq!(
        report.line,
        "CRITICAL size: Queue Size of q200 is 200 (greater than 100)"
    );
}

#[tokio::test]
async fn healthy_fleet_compresses_to_one_line() {
    let report = size_runner().run(&sizes(&[5, 10, 15])).await;
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        report.line,
        "OK size: Checked 3 queues with lengths min/avg/max = 5/10/15"
    );
}

#[tokio::test]
async fn verdict_survives_any_probe_order() {
    let forward = size_runner().run(&sizes(&[5, 15, 200, 7])).await;
    let backward = size_runner().run(&sizes(&[7, 200, 15, 5])).await;
    assert_eq!(forward.verdict, backward.verdict);

    let ok_forward = size_runner().run(&sizes(&[3, 6, 9])).await;
    let ok_backward = size_runner().run(&sizes(&[9, 6, 3])).await;
    assert_eq!(ok_forward.line, ok_backward.line);
}

#[tokio::test]
async fn rerunning_an_unchanged_probe_reproduces_the_report() {
    let probe = sizes(&[5, 15]);
    let runner = size_runner();
    let first = runner.run(&probe).await;
    let second = runner.run(&probe).await;
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.line, second.line);
}
