//! Portfolio data source.
//!
//! The site has no database: content comes from a fixture document, either the
//! one compiled into the binary or one pointed to by `PORTFOLIO_DATA_PATH`.
//! Detail lookups sleep for a fixed delay to mimic a remote fetch.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{PortfolioSnapshot, Project, Skill};

const EMBEDDED_FIXTURES: &str = include_str!("../data/portfolio.json");

/// Read access to portfolio content. Carried in `AppState` as `Arc<dyn PortfolioSource>`.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// The full current snapshot.
    async fn snapshot(&self) -> Result<Arc<PortfolioSnapshot>, AppError>;

    async fn fetch_skill(&self, id: &str) -> Result<Option<Skill>, AppError>;

    async fn fetch_project(&self, id: &str) -> Result<Option<Project>, AppError>;
}

/// In-memory snapshot loaded once at startup.
pub struct FixtureSource {
    snapshot: Arc<PortfolioSnapshot>,
    fetch_delay: Duration,
}

impl FixtureSource {
    pub fn new(snapshot: PortfolioSnapshot, fetch_delay: Duration) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            fetch_delay,
        }
    }

    /// Fixtures bundled with the binary.
    pub fn embedded(fetch_delay: Duration) -> Result<Self, AppError> {
        let snapshot = parse_snapshot(EMBEDDED_FIXTURES, "embedded fixtures")?;
        Ok(Self::new(snapshot, fetch_delay))
    }

    pub fn from_path(path: &Path, fetch_delay: Duration) -> Result<Self, AppError> {
        info!("Loading portfolio fixtures from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Fixture(format!("cannot read {}: {e}", path.display())))?;
        let snapshot = parse_snapshot(&raw, &path.display().to_string())?;
        Ok(Self::new(snapshot, fetch_delay))
    }

    async fn simulate_latency(&self) {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
    }
}

#[async_trait]
impl PortfolioSource for FixtureSource {
    async fn snapshot(&self) -> Result<Arc<PortfolioSnapshot>, AppError> {
        Ok(Arc::clone(&self.snapshot))
    }

    async fn fetch_skill(&self, id: &str) -> Result<Option<Skill>, AppError> {
        self.simulate_latency().await;
        debug!("Fetching skill {id}");
        Ok(self.snapshot.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn fetch_project(&self, id: &str) -> Result<Option<Project>, AppError> {
        self.simulate_latency().await;
        debug!("Fetching project {id}");
        Ok(self.snapshot.projects.iter().find(|p| p.id == id).cloned())
    }
}

fn parse_snapshot(raw: &str, origin: &str) -> Result<PortfolioSnapshot, AppError> {
    let snapshot: PortfolioSnapshot = serde_json::from_str(raw)
        .map_err(|e| AppError::Fixture(format!("invalid fixture document ({origin}): {e}")))?;

    let roleless = snapshot.projects.iter().filter(|p| p.roles.is_empty()).count();
    if roleless > 0 {
        // Kept, but they never show up in role-scoped views or activity feeds.
        debug!("{roleless} project(s) in {origin} have no roles");
    }

    info!(
        "Loaded {} projects, {} skills, {} experience and {} education entries from {origin}",
        snapshot.projects.len(),
        snapshot.skills.len(),
        snapshot.experience.len(),
        snapshot.education.len(),
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_fixtures_parse() {
        let source = FixtureSource::embedded(Duration::ZERO).unwrap();
        assert!(!source.snapshot.projects.is_empty());
        assert!(!source.snapshot.skills.is_empty());
    }

    #[test]
    fn test_from_path_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skills": [{{"id": "s1", "title": "Rust", "type": "Hard"}}]}}"#
        )
        .unwrap();

        let source = FixtureSource::from_path(file.path(), Duration::ZERO).unwrap();
        assert_eq!(source.snapshot.skills.len(), 1);
        assert!(source.snapshot.projects.is_empty());
    }

    #[test]
    fn test_from_path_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = FixtureSource::from_path(file.path(), Duration::ZERO).err().unwrap();
        assert!(matches!(err, AppError::Fixture(_)));
    }

    #[test]
    fn test_missing_file_is_fixture_error() {
        let err = FixtureSource::from_path(Path::new("/nonexistent/portfolio.json"), Duration::ZERO)
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Fixture(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_configured_delay() {
        let source = FixtureSource::embedded(Duration::from_millis(500)).unwrap();
        let id = source.snapshot.skills[0].id.clone();

        let start = tokio::time::Instant::now();
        let skill = source.fetch_skill(&id).await.unwrap();
        assert!(skill.is_some());
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_none() {
        let source = FixtureSource::embedded(Duration::ZERO).unwrap();
        assert!(source.fetch_project("does-not-exist").await.unwrap().is_none());
        assert!(source.fetch_skill("does-not-exist").await.unwrap().is_none());
    }
}
