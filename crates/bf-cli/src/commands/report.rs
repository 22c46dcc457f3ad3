use bf_core::presentation::Presentation;
use bf_core::report::{IssueReport, ReportStat};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// One line of the flattened report used for table output.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ReportRow {
    breakdown: &'static str,
    value: &'static str,
    count: usize,
    percent: u32,
}

/// Handle `bugflow report`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issues = ctx.db.list_issues().await?;
    let report = IssueReport::build(&issues);

    if flags.format == OutputFormat::Table {
        return output(&flatten(&report), flags.format);
    }
    output(&report, flags.format)
}

fn flatten(report: &IssueReport) -> Vec<ReportRow> {
    let mut rows = rows_for("status", &report.by_status);
    rows.extend(rows_for("priority", &report.by_priority));
    rows
}

fn rows_for<K: Presentation>(breakdown: &'static str, stats: &[ReportStat<K>]) -> Vec<ReportRow> {
    stats
        .iter()
        .map(|stat| ReportRow {
            breakdown,
            value: stat.key.label(),
            count: stat.count,
            percent: stat.percent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use bf_core::entities::Issue;
    use bf_core::enums::{IssueStatus, Priority};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flattened_report_lists_every_value_once() {
        let issues = vec![
            Issue {
                status: IssueStatus::Done,
                priority: Priority::High,
                ..Issue::new("a", 1)
            },
            Issue::new("b", 1),
        ];
        let rows = flatten(&IssueReport::build(&issues));

        assert_eq!(rows.len(), IssueStatus::ALL.len() + Priority::ALL.len());
        assert_eq!(
            rows[3],
            ReportRow {
                breakdown: "status",
                value: "Done",
                count: 1,
                percent: 50,
            }
        );
        assert_eq!(rows[5].value, "Medium");
        assert_eq!(rows[5].percent, 50);
    }
}
