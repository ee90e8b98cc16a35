use crate::record::ScoreRecord;
use crate::stats::RegionStatistics;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    /// Dotted document path of the bucket, e.g. `Local.Easy.Clean`.
    pub path: String,
    pub problem: String,
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.problem)
    }
}

pub fn audit(record: &ScoreRecord) -> Vec<AuditFinding> {
    let mut findings = audit_region(record.remote(), "Server");
    findings.extend(audit_region(record.local(), "Local"));
    findings
}

pub fn audit_region(region: &RegionStatistics, scope: &str) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for level in region.levels() {
        for (bucket, times) in [("Hint", level.hint()), ("Clean", level.clean())] {
            for problem in times.inconsistencies() {
                findings.push(AuditFinding {
                    path: format!("{}.{}.{}", scope, level.level(), bucket),
                    problem,
                });
            }
        }
    }

    findings
}
