//! In-memory project store with a unique name index.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::IdSequence;
use crate::planning::{
    domain::{Project, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
    sequence: Arc<IdSequence>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    name_index: HashMap<ProjectName, ProjectId>,
    order: Vec<ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository with its own identifier sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository drawing identifiers from `sequence`.
    #[must_use]
    pub fn with_sequence(sequence: Arc<IdSequence>) -> Self {
        Self {
            state: Arc::default(),
            sequence,
        }
    }

    /// Returns the number of stored projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn len(&self) -> ProjectRepositoryResult<usize> {
        Ok(self.read()?.projects.len())
    }

    /// Returns whether the store holds no projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn is_empty(&self) -> ProjectRepositoryResult<bool> {
        Ok(self.read()?.projects.is_empty())
    }

    /// Removes every project. Issued identifiers are not reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn clear(&self) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        state.projects.clear();
        state.name_index.clear();
        state.order.clear();
        Ok(())
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn next_id(&self) -> ProjectRepositoryResult<ProjectId> {
        let raw = self
            .sequence
            .next_value()
            .ok_or(ProjectRepositoryError::SequenceExhausted)?;
        ProjectId::new(raw.to_string()).map_err(ProjectRepositoryError::persistence)
    }

    fn save(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let mut state = self.write()?;

        if let Some(owner) = state.name_index.get(project.name())
            && owner != project.id()
        {
            return Err(ProjectRepositoryError::DuplicateName(project.name().clone()));
        }

        let previous_name = state
            .projects
            .get(project.id())
            .map(|stored| stored.name().clone());
        match previous_name {
            Some(old_name) if old_name != *project.name() => {
                state.name_index.remove(&old_name);
            }
            Some(_) => {}
            None => state.order.push(project.id().clone()),
        }

        state
            .name_index
            .insert(project.name().clone(), project.id().clone());
        state.projects.insert(project.id().clone(), project.clone());
        Ok(project.clone())
    }

    fn find_by_id(&self, id: &ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        Ok(self.read()?.projects.get(id).cloned())
    }

    fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state
            .name_index
            .get(name)
            .and_then(|id| state.projects.get(id))
            .cloned())
    }

    fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.projects.get(id))
            .cloned()
            .collect())
    }

    fn exists_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<bool> {
        Ok(self.read()?.name_index.contains_key(name))
    }
}
