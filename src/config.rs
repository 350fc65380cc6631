//! Configuration: every threshold, percentile, keyword list, and merge
//! weight the engine reads. All values default so a bare `Config::default()`
//! is fully usable; a config file only needs to name what it overrides.
//!
//! The engine treats the configuration as immutable per evaluation. A zero
//! weight means "this factor never influences its parent"; zero thresholds
//! are legal and guarded at the intake layer.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub activity: ActivityConfig,
    pub recentness: RecentnessConfig,
    pub core_team: CoreTeamConfig,
    pub processing: ProcessingConfig,
    pub engagement: EngagementConfig,
    pub backup: BackupConfig,
    pub participation: ParticipationConfig,
    pub prestige: PrestigeConfig,
    pub network: NetworkConfig,
    pub popularity: PopularityConfig,
    pub rivalry: RivalryConfig,
    pub licensing: LicensingConfig,
    pub quality: QualityConfig,
    pub marking: MarkingConfig,
    pub vulnerabilities: VulnerabilitiesConfig,
    pub aggregation: AggregationConfig,
}

impl Config {
    /// Load configuration from a TOML or JSON file, by extension.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("invalid TOML config {}", path.display())),
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON config {}", path.display())),
            other => bail!(
                "unsupported config extension {:?} for {} (expected .toml or .json)",
                other,
                path.display()
            ),
        }
    }
}

/// Commit/release/issue/comment pace trends.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Percentile used to window each activity series.
    pub percentile: f64,
    pub commit_weight: f64,
    pub release_weight: f64,
    pub issue_weight: f64,
    pub comment_weight: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            percentile: 20.0,
            commit_weight: 3.0,
            release_weight: 3.0,
            issue_weight: 2.0,
            comment_weight: 1.0,
        }
    }
}

/// Months-since-last-commit/release limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentnessConfig {
    /// Months without a commit at which the signal saturates.
    pub commit_limit_months: f64,
    /// Months without a release at which the signal saturates.
    pub release_limit_months: f64,
    /// Percentile selecting the recent-commit window for the blended average.
    pub commit_percentile: f64,
    pub release_percentile: f64,
    pub commit_weight: f64,
    pub release_weight: f64,
}

impl Default for RecentnessConfig {
    fn default() -> Self {
        Self {
            commit_limit_months: 12.0,
            release_limit_months: 24.0,
            commit_percentile: 20.0,
            release_percentile: 20.0,
            commit_weight: 1.0,
            release_weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreTeamConfig {
    /// Core-team share of all contributors (percent) considered healthy.
    pub strength_threshold_percent: f64,
    /// Percentile selecting the recent-commit window for the active ratio.
    pub active_percentile: f64,
    pub strength_weight: f64,
    pub active_weight: f64,
}

impl Default for CoreTeamConfig {
    fn default() -> Self {
        Self {
            strength_threshold_percent: 40.0,
            active_percentile: 20.0,
            strength_weight: 1.0,
            active_weight: 2.0,
        }
    }
}

/// Issue closing time and monthly burn.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Average months-to-close at which the signal saturates.
    pub closing_time_limit_months: f64,
    pub percentile: f64,
    pub closing_time_weight: f64,
    pub burn_weight: f64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            closing_time_limit_months: 6.0,
            percentile: 20.0,
            closing_time_weight: 2.0,
            burn_weight: 2.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Comments per issue, in percent (200 = two comments per issue).
    pub comment_ratio_threshold_percent: f64,
    pub weight: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            comment_ratio_threshold_percent: 200.0,
            weight: 1.0,
        }
    }
}

/// Organizational backup behind the contributor base.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub company_threshold: f64,
    pub sponsor_threshold: f64,
    pub organization_threshold: f64,
    pub company_weight: f64,
    pub sponsor_weight: f64,
    pub organization_weight: f64,
    /// Weight of the owning-organization presence check.
    pub hosting_org_weight: f64,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            company_threshold: 5.0,
            sponsor_threshold: 10.0,
            organization_threshold: 50.0,
            company_weight: 2.0,
            sponsor_weight: 1.0,
            organization_weight: 1.0,
            hosting_org_weight: 3.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipationConfig {
    /// Contribution count at or below which a contributor counts as
    /// third-party (drive-by).
    pub contribution_limit: u32,
    /// Healthy third-party share of all contributors, as a fraction.
    pub share_threshold: f64,
    pub weight: f64,
}

impl Default for ParticipationConfig {
    fn default() -> Self {
        Self {
            contribution_limit: 2,
            share_threshold: 0.5,
            weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PrestigeConfig {
    pub weight: f64,
}

impl Default for PrestigeConfig {
    fn default() -> Self {
        Self { weight: 1.0 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Structural network size considered healthy.
    pub size_threshold: f64,
    pub weight: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            size_threshold: 2000.0,
            weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularityConfig {
    /// Stars + watchers + forks considered healthy.
    pub size_threshold: f64,
    pub weight: f64,
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            size_threshold: 5000.0,
            weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalryConfig {
    pub latest_version_weight: f64,
}

impl Default for RivalryConfig {
    fn default() -> Self {
        Self {
            latest_version_weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingConfig {
    pub repository_weight: f64,
    pub artifact_weight: f64,
    pub library_weight: f64,
}

impl Default for LicensingConfig {
    fn default() -> Self {
        Self {
            repository_weight: 2.0,
            artifact_weight: 1.0,
            library_weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Weight of each individual hygiene check (readme, license, about,
    /// forking allowed).
    pub weight: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self { weight: 1.0 }
    }
}

/// Explicit deprecation marks: archive flag and keyword hits.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingConfig {
    pub readme_keywords: Vec<String>,
    pub about_keywords: Vec<String>,
    pub description_keywords: Vec<String>,
    pub archived_weight: f64,
    pub readme_weight: f64,
    pub about_weight: f64,
    pub description_weight: f64,
}

fn default_marking_keywords() -> Vec<String> {
    [
        "deprecated",
        "end-of-life",
        "end of life",
        "abandoned",
        "unmaintained",
        "no longer maintained",
    ]
    .map(str::to_string)
    .to_vec()
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            readme_keywords: default_marking_keywords(),
            about_keywords: default_marking_keywords(),
            description_keywords: default_marking_keywords(),
            archived_weight: 2.0,
            readme_weight: 1.0,
            about_weight: 1.0,
            description_weight: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilitiesConfig {
    pub weight: f64,
}

impl Default for VulnerabilitiesConfig {
    fn default() -> Self {
        Self { weight: 1.0 }
    }
}

/// Per-edge merge weights of the aggregation tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub effort: EffortWeights,
    pub support: SupportWeights,
    pub community: CommunityWeights,
    pub interconnectedness: InterconnectednessWeights,
    pub circumstances: CircumstancesWeights,
    pub deity_given: DeityGivenWeights,
    pub root: RootWeights,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EffortWeights {
    pub recentness: f64,
    pub activity: f64,
    pub core_team: f64,
}

impl Default for EffortWeights {
    fn default() -> Self {
        Self {
            recentness: 5.0,
            activity: 2.0,
            core_team: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportWeights {
    pub processing: f64,
    pub engagement: f64,
}

impl Default for SupportWeights {
    fn default() -> Self {
        Self {
            processing: 2.0,
            engagement: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityWeights {
    pub backup: f64,
    pub participation: f64,
    pub prestige: f64,
}

impl Default for CommunityWeights {
    fn default() -> Self {
        Self {
            backup: 3.0,
            participation: 1.0,
            prestige: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct InterconnectednessWeights {
    pub network: f64,
    pub popularity: f64,
}

impl Default for InterconnectednessWeights {
    fn default() -> Self {
        Self {
            network: 1.0,
            popularity: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CircumstancesWeights {
    pub rivalry: f64,
    pub licensing: f64,
    pub quality: f64,
}

impl Default for CircumstancesWeights {
    fn default() -> Self {
        Self {
            rivalry: 1.0,
            licensing: 1.0,
            quality: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DeityGivenWeights {
    pub marking: f64,
    pub vulnerabilities: f64,
}

impl Default for DeityGivenWeights {
    fn default() -> Self {
        Self {
            marking: 1.0,
            vulnerabilities: 1.0,
        }
    }
}

/// Root merge weights. The deity-given branch is deliberately two orders
/// of magnitude above the soft aggregators: an unambiguous deprecation
/// mark must dominate every heuristic.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RootWeights {
    pub deity_given: f64,
    pub effort: f64,
    pub support: f64,
    pub community: f64,
    pub interconnectedness: f64,
    pub circumstances: f64,
}

impl Default for RootWeights {
    fn default() -> Self {
        Self {
            deity_given: 100.0,
            effort: 1.0,
            support: 1.0,
            community: 1.0,
            interconnectedness: 1.0,
            circumstances: 1.0,
        }
    }
}
