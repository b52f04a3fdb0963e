//! In-memory task store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::IdSequence;
use crate::planning::{
    domain::{ProjectId, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
    sequence: Arc<IdSequence>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn ordered(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }
}

impl InMemoryTaskRepository {
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

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns whether the store holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.tasks.is_empty())
    }

    /// Returns the number of tasks owned by a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn count_by_project_id(&self, project_id: &ProjectId) -> TaskRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .count())
    }

    /// Returns whether the project already has a task with this description.
    ///
    /// The description is trimmed before comparison; a blank description
    /// never matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn exists_by_project_id_and_description(
        &self,
        project_id: &ProjectId,
        description: &str,
    ) -> TaskRepositoryResult<bool> {
        let wanted = description.trim();
        if wanted.is_empty() {
            return Ok(false);
        }
        let state = self.read()?;
        Ok(state.tasks.values().any(|task| {
            task.project_id() == project_id && task.description().as_str() == wanted
        }))
    }

    /// Removes every task. Issued identifiers are not reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn clear(&self) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.clear();
        state.order.clear();
        Ok(())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        let raw = self
            .sequence
            .next_value()
            .ok_or(TaskRepositoryError::SequenceExhausted)?;
        let signed = i64::try_from(raw).map_err(|_| TaskRepositoryError::SequenceExhausted)?;
        TaskId::new(signed).map_err(TaskRepositoryError::persistence)
    }

    fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        if let Some(stored) = state.tasks.get(&task.id())
            && stored.project_id() != task.project_id()
        {
            return Err(TaskRepositoryError::OwnerChanged {
                task_id: task.id(),
                owner: stored.project_id().clone(),
                requested: task.project_id().clone(),
            });
        }

        if state.tasks.insert(task.id(), task.clone()).is_none() {
            state.order.push(task.id());
        }
        Ok(task.clone())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    fn find_by_project_id(&self, project_id: &ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .ordered()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.ordered().cloned().collect())
    }

    fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Ok(false);
        }
        state.order.retain(|stored| *stored != id);
        Ok(true)
    }
}
