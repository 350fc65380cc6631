//! Licensing: permissive licenses reassure, copyleft warrants a look, and
//! anything unrecognized is silently ignored.

use crate::config::LicensingConfig;
use crate::facts::Facts;
use crate::risk::{Band, RiskNode, Signal};

const PERMISSIVE: [&str; 5] = ["mit", "apache", "isc", "wtfpl", "bsd"];
const RESTRICTIVE: [&str; 1] = ["gpl"];

pub fn licensing(facts: &Facts, config: &LicensingConfig) -> RiskNode {
    let mut node = RiskNode::new(Signal::Licensing);

    if let Some(repository) = &facts.repository {
        intake_license(&mut node, &repository.license, config.repository_weight);
    }

    if let Some(distribution) = &facts.distribution {
        if let Some(artifact) = &distribution.artifact {
            for license in &artifact.licenses {
                intake_license(&mut node, license, config.artifact_weight);
            }
        }

        if let Some(library) = &distribution.library {
            for license in &library.licenses {
                intake_license(&mut node, license, config.library_weight);
            }
        }
    }

    node
}

fn intake_license(node: &mut RiskNode, license: &str, weight: f64) {
    let license = license.to_lowercase();

    for keyword in PERMISSIVE {
        if license.contains(keyword) {
            node.intake(Band::NoConcerns.score(), weight);
        }
    }

    for keyword in RESTRICTIVE {
        if license.contains(keyword) {
            node.intake(Band::Watchlist.score(), weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::testutil::facts_with;
    use crate::facts::{Artifact, Distribution, Facts, Library, Repository};

    fn repo_license(license: &str) -> Facts {
        facts_with(Repository {
            license: license.to_string(),
            ..Repository::default()
        })
    }

    #[test]
    fn permissive_repository_license_reassures_at_repository_weight() {
        let node = licensing(&repo_license("MIT License"), &LicensingConfig::default());
        assert_eq!(node.no_concerns, 2.0);
    }

    #[test]
    fn copyleft_license_lands_on_the_watchlist() {
        let node = licensing(&repo_license("GPL-3.0"), &LicensingConfig::default());
        assert_eq!(node.watchlist, 2.0);
    }

    #[test]
    fn unknown_license_is_ignored() {
        let node = licensing(&repo_license("Proprietary EULA"), &LicensingConfig::default());
        assert_eq!(node.total(), 0.0);
    }

    #[test]
    fn artifact_and_library_licenses_use_their_own_weights() {
        let facts = Facts {
            distribution: Some(Distribution {
                artifact: Some(Artifact {
                    licenses: vec!["Apache-2.0".to_string()],
                    ..Artifact::default()
                }),
                library: Some(Library {
                    licenses: vec!["BSD-3-Clause".to_string(), "mystery".to_string()],
                    ..Library::default()
                }),
            }),
            ..Facts::default()
        };

        let node = licensing(&facts, &LicensingConfig::default());

        assert_eq!(node.no_concerns, 2.0);
    }
}
