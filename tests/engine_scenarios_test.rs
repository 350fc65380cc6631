//! End-to-end scenarios through the public evaluation API.

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use decaymap::config::Config;
use decaymap::engine::evaluate;
use decaymap::facts::{
    Artifact, Commit, Contributor, Dependency, Distribution, Facts, Issue, IssueComment,
    IssueState, Library, Organization, Release, Repository, VulnerabilityReport,
};
use decaymap::risk::Recommendation;

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn dependency(name: &str, version: &str) -> Dependency {
    Dependency {
        name: name.to_string(),
        version: version.to_string(),
        purl: None,
    }
}

fn monthly_commits(author_a: &str, author_b: &str, from_year: i32, to_year: i32) -> Vec<Commit> {
    let mut commits = Vec::new();
    for year in from_year..=to_year {
        for month in 1..=12 {
            commits.push(Commit {
                author: if month % 2 == 0 { author_a } else { author_b }.to_string(),
                timestamp: ts(year, month, 3),
            });
        }
    }
    commits
}

#[test]
fn archived_end_of_life_project_is_decision_making_despite_strong_signals() {
    // Strong activity and popularity, but the project says it is done.
    let facts = Facts {
        repository: Some(Repository {
            archived: true,
            readme: "NOTE: this project reached end-of-life in 2023.".to_string(),
            stars: 6000,
            watchers: 800,
            forks: 1200,
            commits: monthly_commits("ann", "bob", 2023, 2023),
            ..Repository::default()
        }),
        ..Facts::default()
    };

    let result = evaluate(
        &dependency("old-faithful", "9.1.0"),
        &facts,
        &Config::default(),
        ts(2023, 12, 15),
    );

    assert_eq!(result.recommendation, Recommendation::DecisionMaking);
    assert!(result.distribution.decision_making > 0.99);
}

#[test]
fn empty_fact_model_is_inconclusive() {
    let result = evaluate(
        &dependency("ghost", "0.0.1"),
        &Facts::default(),
        &Config::default(),
        ts(2023, 12, 15),
    );

    assert_eq!(result.recommendation, Recommendation::Inconclusive);
    assert_eq!(result.node.total(), 0.0);

    let sum: f64 = result.distribution.iter().map(|(_, p)| p).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn healthy_active_project_is_no_concerns() {
    let contributors = vec![
        Contributor {
            name: "ann".to_string(),
            contributions: 300,
            company: "Acme".to_string(),
            sponsors: 5,
            organizations: 20,
            repositories: 100,
            first_contribution: Some(ts(2022, 1, 1)),
            last_contribution: Some(ts(2023, 12, 1)),
        },
        Contributor {
            name: "bob".to_string(),
            contributions: 280,
            company: "Beta".to_string(),
            sponsors: 5,
            organizations: 10,
            repositories: 50,
            first_contribution: Some(ts(2022, 1, 1)),
            last_contribution: Some(ts(2023, 12, 1)),
        },
        Contributor {
            name: "cat".to_string(),
            contributions: 50,
            company: "Cats Inc".to_string(),
            sponsors: 0,
            organizations: 5,
            repositories: 30,
            first_contribution: Some(ts(2022, 6, 1)),
            last_contribution: Some(ts(2023, 11, 1)),
        },
        Contributor {
            name: "dee".to_string(),
            contributions: 1,
            ..Contributor::default()
        },
        Contributor {
            name: "eve".to_string(),
            contributions: 1,
            ..Contributor::default()
        },
    ];

    let issues: Vec<Issue> = (1..=12)
        .map(|month| Issue {
            number: month,
            state: IssueState::Closed,
            created_at: ts(2023, month, 2),
            closed_at: Some(ts(2023, month, 20)),
            comments: vec![
                IssueComment {
                    author: "ann".to_string(),
                    timestamp: ts(2023, month, 3),
                },
                IssueComment {
                    author: "bob".to_string(),
                    timestamp: ts(2023, month, 4),
                },
            ],
        })
        .collect();

    let releases: Vec<Release> = (0i32..8)
        .map(|i| Release {
            version: format!("1.{i}.0"),
            date: ts(2022 + i / 4, ((i % 4) * 3 + 3) as u32, 1),
        })
        .collect();

    let facts = Facts {
        repository: Some(Repository {
            name: "healthy".to_string(),
            readme: "# healthy\nA well maintained library.".to_string(),
            about: "does one thing well".to_string(),
            license: "MIT".to_string(),
            allows_forking: true,
            stars: 4000,
            watchers: 400,
            forks: 900,
            organization: Some(Organization {
                name: "healthy-org".to_string(),
                public_repos: 1500,
                owned_private_repos: 0,
                collaborators: 0,
                followers: 800,
            }),
            commits: monthly_commits("ann", "bob", 2022, 2023),
            releases,
            issues,
            contributors,
            created_at: Some(ts(2022, 1, 1)),
            ..Repository::default()
        }),
        distribution: Some(Distribution {
            artifact: Some(Artifact {
                version: "2.0.0".to_string(),
                date: Some(ts(2023, 12, 1)),
                licenses: vec!["MIT".to_string()],
                dependencies: vec![],
                description: "a well maintained library".to_string(),
            }),
            library: Some(Library {
                latest_version: "2.0.0".to_string(),
                latest_release: "2.0.0".to_string(),
                last_updated: Some(ts(2023, 12, 1)),
                versions: (0..20).map(|i| format!("1.{i}.0")).collect(),
                licenses: vec!["MIT".to_string()],
            }),
        }),
        vulnerabilities: Some(VulnerabilityReport { total: 0 }),
    };

    let result = evaluate(
        &dependency("healthy", "2.0.0"),
        &facts,
        &Config::default(),
        ts(2023, 12, 15),
    );

    assert_eq!(result.recommendation, Recommendation::NoConcerns);
    assert!(result.distribution.no_concerns > 0.75);
}

#[test]
fn known_vulnerabilities_pull_an_otherwise_quiet_project_down() {
    let facts = Facts {
        repository: Some(Repository {
            readme: "minimal".to_string(),
            commits: monthly_commits("ann", "bob", 2023, 2023),
            ..Repository::default()
        }),
        vulnerabilities: Some(VulnerabilityReport { total: 2 }),
        ..Facts::default()
    };

    let result = evaluate(
        &dependency("cursed", "1.0.0"),
        &facts,
        &Config::default(),
        ts(2023, 12, 15),
    );

    assert_eq!(result.recommendation, Recommendation::DecisionMaking);
}

#[test]
fn distribution_sums_to_one_across_scenarios() {
    let scenarios = vec![
        Facts::default(),
        Facts {
            repository: Some(Repository {
                archived: true,
                ..Repository::default()
            }),
            ..Facts::default()
        },
        Facts {
            repository: Some(Repository {
                commits: monthly_commits("ann", "bob", 2023, 2023),
                ..Repository::default()
            }),
            ..Facts::default()
        },
    ];

    for facts in scenarios {
        let result = evaluate(
            &dependency("any", "1.0.0"),
            &facts,
            &Config::default(),
            ts(2023, 12, 15),
        );

        let sum: f64 = result.distribution.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for (_, probability) in result.distribution.iter() {
            assert!(probability > 0.0 && probability < 1.0);
        }
    }
}
