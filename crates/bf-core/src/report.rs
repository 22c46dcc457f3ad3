//! Issue breakdowns by status and by priority.
//!
//! Pure functions over a snapshot of issues. Every enum value gets exactly one
//! entry, in declaration order, whether or not any issue carries it.

use serde::Serialize;

use crate::entities::Issue;
use crate::enums::{IssueStatus, Priority};

/// One row of a breakdown: how many issues carry `key`, and what share of the
/// total that is, as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStat<K> {
    pub key: K,
    pub count: usize,
    pub percent: u32,
}

/// Both breakdowns over the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueReport {
    pub total: usize,
    pub by_status: Vec<ReportStat<IssueStatus>>,
    pub by_priority: Vec<ReportStat<Priority>>,
}

impl IssueReport {
    #[must_use]
    pub fn build(issues: &[Issue]) -> Self {
        Self {
            total: issues.len(),
            by_status: status_stats(issues),
            by_priority: priority_stats(issues),
        }
    }
}

#[must_use]
pub fn status_stats(issues: &[Issue]) -> Vec<ReportStat<IssueStatus>> {
    breakdown(issues, &IssueStatus::ALL, |issue| issue.status)
}

#[must_use]
pub fn priority_stats(issues: &[Issue]) -> Vec<ReportStat<Priority>> {
    breakdown(issues, &Priority::ALL, |issue| issue.priority)
}

fn breakdown<K, F>(issues: &[Issue], keys: &[K], key_of: F) -> Vec<ReportStat<K>>
where
    K: Copy + PartialEq,
    F: Fn(&Issue) -> K,
{
    let total = issues.len();
    keys.iter()
        .map(|&key| {
            let count = issues.iter().filter(|issue| key_of(issue) == key).count();
            ReportStat {
                key,
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

/// `round(100 * count / total)`, ties to even; `0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn issue(status: IssueStatus, priority: Priority) -> Issue {
        Issue {
            status,
            priority,
            ..Issue::new("snapshot", 1)
        }
    }

    fn stat<K>(key: K, count: usize, percent: u32) -> ReportStat<K> {
        ReportStat {
            key,
            count,
            percent,
        }
    }

    #[test]
    fn status_stats_cover_every_status() {
        let issues = vec![
            issue(IssueStatus::ToDo, Priority::Low),
            issue(IssueStatus::InProgress, Priority::Medium),
            issue(IssueStatus::InProgress, Priority::High),
            issue(IssueStatus::Done, Priority::High),
        ];

        assert_eq!(
            status_stats(&issues),
            vec![
                stat(IssueStatus::ToDo, 1, 25),
                stat(IssueStatus::InProgress, 2, 50),
                stat(IssueStatus::Review, 0, 0),
                stat(IssueStatus::Done, 1, 25),
            ]
        );
    }

    #[test]
    fn priority_stats_round_two_thirds_up() {
        let issues = vec![
            issue(IssueStatus::ToDo, Priority::Low),
            issue(IssueStatus::Done, Priority::High),
            issue(IssueStatus::InProgress, Priority::High),
        ];

        assert_eq!(
            priority_stats(&issues),
            vec![
                stat(Priority::Low, 1, 33),
                stat(Priority::Medium, 0, 0),
                stat(Priority::High, 2, 67),
            ]
        );
    }

    #[test]
    fn empty_snapshot_yields_zero_rows_for_every_value() {
        let by_status = status_stats(&[]);
        let by_priority = priority_stats(&[]);

        assert_eq!(by_status.len(), 4);
        assert!(by_status.iter().all(|s| s.count == 0 && s.percent == 0));
        assert_eq!(by_priority.len(), 3);
        assert!(by_priority.iter().all(|s| s.count == 0 && s.percent == 0));
    }

    #[test]
    fn single_issue_is_one_hundred_percent() {
        let issues = vec![issue(IssueStatus::Done, Priority::High)];

        let by_status = status_stats(&issues);
        assert_eq!(by_status[3], stat(IssueStatus::Done, 1, 100));
        assert_eq!(by_status[0].percent, 0);

        let by_priority = priority_stats(&issues);
        assert_eq!(by_priority[2], stat(Priority::High, 1, 100));
        assert_eq!(by_priority[0].percent, 0);
    }

    #[test]
    fn ordering_is_independent_of_input_order() {
        let forward = vec![
            issue(IssueStatus::Done, Priority::High),
            issue(IssueStatus::ToDo, Priority::Low),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(status_stats(&forward), status_stats(&backward));
        assert_eq!(priority_stats(&forward), priority_stats(&backward));
    }

    #[test]
    fn report_bundles_both_breakdowns() {
        let issues = vec![issue(IssueStatus::Review, Priority::Medium)];
        let report = IssueReport::build(&issues);
        assert_eq!(report.total, 1);
        assert_eq!(report.by_status[2], stat(IssueStatus::Review, 1, 100));
        assert_eq!(report.by_priority[1], stat(Priority::Medium, 1, 100));
    }

    #[rstest]
    #[case(2, 3, 67)]
    #[case(1, 3, 33)]
    #[case(1, 2, 50)]
    #[case(1, 8, 12)]
    #[case(3, 8, 38)]
    #[case(0, 5, 0)]
    #[case(5, 5, 100)]
    #[case(3, 0, 0)]
    fn percent_rounding(#[case] count: usize, #[case] total: usize, #[case] expected: u32) {
        assert_eq!(percent(count, total), expected);
    }
}
