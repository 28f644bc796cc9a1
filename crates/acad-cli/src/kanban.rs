use crate::{BoardScope, Client, ClientResult};

use acad_core::{BoardLane, MoveDecision, Task, TaskFilter, group_by_column, plan_move};

use log::{debug, info};

/// Client-side Kanban board over the task list
pub struct KanbanBoard {
    client: Client,
    scope: BoardScope,
    tasks: Vec<Task>,
}

impl KanbanBoard {
    /// Fetch the tasks for `scope` and build the board
    pub async fn load(client: Client, scope: BoardScope) -> ClientResult<Self> {
        let tasks = client.list_tasks(scope).await?;
        debug!("Loaded {} tasks ({:?} board)", tasks.len(), scope);
        Ok(Self {
            client,
            scope,
            tasks,
        })
    }

    /// Re-fetch from the server. On failure the previous tasks stay in place.
    pub async fn reload(&mut self) -> ClientResult<()> {
        self.tasks = self.client.list_tasks(self.scope).await?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn scope(&self) -> BoardScope {
        self.scope
    }

    /// The five lanes after applying `filter`
    pub fn lanes(&self, filter: &TaskFilter) -> Vec<BoardLane<'_>> {
        group_by_column(filter.apply(&self.tasks))
    }

    /// Drop `task_id` over `over` (a column name or another card's id).
    ///
    /// A real column change is persisted with one update call and followed by
    /// one reload; anything else leaves the board and the server untouched.
    /// If the update fails the error is returned and the board keeps its
    /// current state.
    pub async fn move_task(
        &mut self,
        task_id: &str,
        over: Option<&str>,
    ) -> ClientResult<MoveDecision> {
        let decision = plan_move(&self.tasks, task_id, over)?;

        match decision {
            MoveDecision::Move(ref update) => {
                self.client.update_board_position(update).await?;
                info!("Moved task {} to {}", task_id, update.board_column);
                self.reload().await?;
            }
            MoveDecision::SameColumn => debug!("Task {} dropped on its own column", task_id),
            MoveDecision::NoTarget => debug!("Task {} dropped outside the board", task_id),
        }

        Ok(decision)
    }
}
