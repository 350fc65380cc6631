//! Fact model: everything decaymap knows about one dependency.
//!
//! Instances are materialized by external extraction tooling and consumed
//! read-only by the scoring engine. Any of the three top-level facts may be
//! absent; factors treat absence as "no evidence", never as an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::Timestamped;

/// A dependency coordinate as it appears in a manifest or SBOM.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Package URL, when the manifest carries one (pkg:maven/..., pkg:cargo/...).
    #[serde(default)]
    pub purl: Option<String>,
}

/// One entry of a facts snapshot file: a dependency plus whatever was
/// gathered about it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DependencySnapshot {
    pub dependency: Dependency,
    #[serde(default)]
    pub facts: Facts,
}

/// The complete, possibly partial, set of gathered data for one dependency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Facts {
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub distribution: Option<Distribution>,
    #[serde(default)]
    pub vulnerabilities: Option<VulnerabilityReport>,
}

impl Facts {
    /// True when there is nothing to score at all.
    pub fn is_empty(&self) -> bool {
        self.repository.is_none() && self.distribution.is_none()
    }
}

/// Source-repository facts (typically extracted from a forge like GitHub).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub allows_forking: bool,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub watchers: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

/// The organization owning the repository, when there is one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub owned_private_repos: u32,
    #[serde(default)]
    pub collaborators: u32,
    #[serde(default)]
    pub followers: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub version: String,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub number: u32,
    pub state: IssueState,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments: Vec<IssueComment>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssueComment {
    #[serde(default)]
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub contributions: u32,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub sponsors: u32,
    #[serde(default)]
    pub organizations: u32,
    #[serde(default)]
    pub repositories: u32,
    #[serde(default)]
    pub first_contribution: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_contribution: Option<DateTime<Utc>>,
}

/// Package-registry facts: one published artifact plus registry-wide
/// library metadata.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(default)]
    pub artifact: Option<Artifact>,
    #[serde(default)]
    pub library: Option<Library>,
}

/// A specific published version of the dependency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Registry-wide metadata about the library across all versions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub latest_version: String,
    #[serde(default)]
    pub latest_release: String,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<String>,
}

/// Known-vulnerability tally for the resolved package coordinate.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    #[serde(default)]
    pub total: u32,
}

impl Timestamped for Commit {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Timestamped for Release {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Timestamped for Issue {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for IssueComment {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
