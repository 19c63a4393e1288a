//! Drag session controller.
//!
//! Translates a pointer drag gesture (start, repeated over, end) into store
//! mutations. Tasks settle live: every drag-over tick reorders or regroups
//! the dragged task in the canonical store, so the board reflows while the
//! pointer moves. Columns settle once, on release.
//!
//! The controller keeps no copy of the board order. It only remembers which
//! entity is lifted; the presentation layer resolves that through
//! [`DragSession::lifted`] to draw the detached ghost.
//!
//! Releasing outside any drop target does not roll anything back: the store
//! stays exactly as the last drag-over tick left it.

use crate::store::BoardStore;
use crate::types::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// The entity being dragged, or the entity under the pointer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DragSubject {
    Column(ColumnId),
    Task(TaskId),
}

impl DragSubject {
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }
}

/// Where the controller is within a gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(ColumnId),
    DraggingTask(TaskId),
}

/// The lifted entity, resolved against the current store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifted<'a> {
    Column(&'a Column),
    Task(&'a Task),
}

/// Store change caused by a single drag event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    /// The event left the store untouched
    None,
    /// Task moved inside its own column
    TaskReordered { task: TaskId, from: usize, to: usize },
    /// Task joined another column
    TaskReassigned {
        task: TaskId,
        column: ColumnId,
        from: usize,
        to: usize,
    },
    /// Column moved on release
    ColumnMoved { column: ColumnId, from: usize, to: usize },
}

impl DragEffect {
    /// True when the store was mutated
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// State machine for one pointer drag gesture at a time
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// The subject picked up by the current gesture
    pub fn active(&self) -> Option<DragSubject> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingColumn(id) => Some(DragSubject::Column(id.clone())),
            DragState::DraggingTask(id) => Some(DragSubject::Task(id.clone())),
        }
    }

    /// Resolve the lifted entity for rendering the drag ghost.
    ///
    /// Returns `None` when idle or when the entity was deleted mid-drag.
    pub fn lifted<'a>(&self, store: &'a BoardStore) -> Option<Lifted<'a>> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingColumn(id) => store.column(id).map(Lifted::Column),
            DragState::DraggingTask(id) => store.task(id).map(Lifted::Task),
        }
    }

    /// Pick up a column or task.
    ///
    /// Starting while a gesture is already active replaces the lifted
    /// subject. An id the store does not know leaves the session idle.
    pub fn drag_start(&mut self, store: &BoardStore, subject: DragSubject) -> bool {
        let next = match subject {
            DragSubject::Column(id) if store.column(&id).is_some() => DragState::DraggingColumn(id),
            DragSubject::Task(id) if store.task(&id).is_some() => DragState::DraggingTask(id),
            stale => {
                debug!(subject = ?stale, "drag start on unknown subject");
                self.state = DragState::Idle;
                return false;
            }
        };

        trace!(state = ?next, "drag started");
        self.state = next;
        true
    }

    /// Handle the pointer hovering `over`.
    ///
    /// Only task drags react: same-column hovers reorder, hovers over a task
    /// in another column or over a column regroup the dragged task.
    pub fn drag_over(&mut self, store: &mut BoardStore, over: Option<&DragSubject>) -> DragEffect {
        let active = match &self.state {
            DragState::DraggingTask(id) => id.clone(),
            DragState::DraggingColumn(_) | DragState::Idle => return DragEffect::None,
        };
        let Some(over) = over else {
            return DragEffect::None;
        };

        let effect = match over {
            DragSubject::Task(over_id) if *over_id == active => DragEffect::None,
            DragSubject::Task(over_id) => task_over_task(store, &active, over_id),
            DragSubject::Column(column_id) => task_over_column(store, &active, column_id),
        };

        if effect.is_change() {
            trace!(effect = ?effect, "drag over applied");
        }
        effect
    }

    /// Release the dragged subject over `over` and return to idle.
    ///
    /// A column dropped on another column moves exactly once here. Task
    /// placement already happened during drag-over, so a task release only
    /// clears the lifted marker.
    pub fn drag_end(&mut self, store: &mut BoardStore, over: Option<&DragSubject>) -> DragEffect {
        let state = std::mem::take(&mut self.state);

        let DragState::DraggingColumn(active) = state else {
            return DragEffect::None;
        };
        let Some(DragSubject::Column(over_id)) = over else {
            return DragEffect::None;
        };
        if *over_id == active {
            return DragEffect::None;
        }

        let (from, to) = match (store.try_column_index(&active), store.try_column_index(over_id)) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(e), _) | (_, Err(e)) => {
                debug!(error = %e, "column drop on stale reference");
                return DragEffect::None;
            }
        };

        if !store.move_column(from, to) {
            return DragEffect::None;
        }
        info!(column = %active, from, to, "column moved");
        DragEffect::ColumnMoved {
            column: active,
            from,
            to,
        }
    }

    /// Abandon the gesture without a drop target
    pub fn cancel(&mut self, store: &mut BoardStore) -> DragEffect {
        self.drag_end(store, None)
    }
}

fn task_over_task(store: &mut BoardStore, active: &TaskId, over: &TaskId) -> DragEffect {
    let (from, over_index) = match (store.try_task_index(active), store.try_task_index(over)) {
        (Ok(from), Ok(over_index)) => (from, over_index),
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "task hover on stale reference");
            return DragEffect::None;
        }
    };

    // Both indices resolved, so both tasks exist.
    let (Some(active_task), Some(over_task)) = (store.task_at(from), store.task_at(over_index))
    else {
        return DragEffect::None;
    };

    if active_task.column_id == over_task.column_id {
        if !store.move_task(from, over_index) {
            return DragEffect::None;
        }
        return DragEffect::TaskReordered {
            task: active.clone(),
            from,
            to: over_index,
        };
    }

    // Land just before the hovered card; hovering index 0 saturates to 0.
    let column = over_task.column_id.clone();
    let to = over_index.saturating_sub(1);
    reassign(store, active, column, from, to)
}

fn task_over_column(store: &mut BoardStore, active: &TaskId, column: &ColumnId) -> DragEffect {
    let from = match store.try_task_index(active) {
        Ok(from) => from,
        Err(e) => {
            debug!(error = %e, "column hover on stale reference");
            return DragEffect::None;
        }
    };
    reassign(store, active, column.clone(), from, from)
}

fn reassign(
    store: &mut BoardStore,
    task: &TaskId,
    column: ColumnId,
    from: usize,
    to: usize,
) -> DragEffect {
    if !store.reassign_and_move_task(from, &column, to) {
        return DragEffect::None;
    }
    DragEffect::TaskReassigned {
        task: task.clone(),
        column,
        from,
        to,
    }
}
