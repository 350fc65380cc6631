//! Leaf factors: one pure function per named signal.
//!
//! Every factor maps `(facts, config, now) -> RiskNode`. Missing facts and
//! empty collections contribute nothing; the node comes back untouched and
//! the merge layer de-weights the branch naturally.

pub mod activity;
pub mod backup;
pub mod core_team;
pub mod engagement;
pub mod licensing;
pub mod marking;
pub mod network;
pub mod participation;
pub mod popularity;
pub mod prestige;
pub mod processing;
pub mod quality;
pub mod recentness;
pub mod rivalry;
pub mod vulnerabilities;

pub use activity::activity;
pub use backup::organizational_backup;
pub use core_team::core_team;
pub use engagement::engagement;
pub use licensing::licensing;
pub use marking::deprecation_marking;
pub use network::network;
pub use participation::third_party_participation;
pub use popularity::popularity;
pub use prestige::contributor_prestige;
pub use processing::processing;
pub use quality::project_quality;
pub use recentness::recentness;
pub use rivalry::rivalry;
pub use vulnerabilities::vulnerabilities;

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::facts::{
        Commit, Contributor, Facts, Issue, IssueComment, IssueState, Release, Repository,
    };
    use crate::stats::MonthKey;

    pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    pub fn now(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month)
    }

    pub fn commit(author: &str, year: i32, month: u32, day: u32) -> Commit {
        Commit {
            author: author.to_string(),
            timestamp: ts(year, month, day),
        }
    }

    pub fn release(version: &str, year: i32, month: u32, day: u32) -> Release {
        Release {
            version: version.to_string(),
            date: ts(year, month, day),
        }
    }

    pub fn open_issue(year: i32, month: u32, comments: usize) -> Issue {
        Issue {
            number: 0,
            state: IssueState::Open,
            created_at: ts(year, month, 1),
            closed_at: None,
            comments: (0..comments)
                .map(|_| IssueComment {
                    author: String::new(),
                    timestamp: ts(year, month, 2),
                })
                .collect(),
        }
    }

    pub fn closed_issue(
        opened: (i32, u32),
        closed: (i32, u32),
        comments: usize,
    ) -> Issue {
        Issue {
            number: 0,
            state: IssueState::Closed,
            created_at: ts(opened.0, opened.1, 1),
            closed_at: Some(ts(closed.0, closed.1, 1)),
            comments: (0..comments)
                .map(|_| IssueComment {
                    author: String::new(),
                    timestamp: ts(opened.0, opened.1, 2),
                })
                .collect(),
        }
    }

    pub fn contributor(name: &str, contributions: u32) -> Contributor {
        Contributor {
            name: name.to_string(),
            contributions,
            ..Contributor::default()
        }
    }

    pub fn facts_with(repository: Repository) -> Facts {
        Facts {
            repository: Some(repository),
            ..Facts::default()
        }
    }
}
