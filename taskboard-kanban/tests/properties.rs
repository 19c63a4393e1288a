//! Property-based tests for ordering invariants using proptest.

use proptest::prelude::*;
use std::collections::HashSet;
use taskboard_kanban::{BoardStore, ColumnId, DragSession, DragSubject, NewTask, TaskId};

const COLUMNS: [&str; 3] = ["todo", "in-progress", "done"];

/// One input the board can receive. Index ranges exceed the board sizes so
/// stale and out-of-range values occur.
#[derive(Debug, Clone)]
enum Step {
    MoveTask(usize, usize),
    MoveColumn(usize, usize),
    Reassign(usize, usize, usize),
    DragTaskOverTask(usize, usize),
    DragTaskOverColumn(usize, usize),
    DragColumn(usize, usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..12, 0usize..12).prop_map(|(a, b)| Step::MoveTask(a, b)),
        (0usize..5, 0usize..5).prop_map(|(a, b)| Step::MoveColumn(a, b)),
        (0usize..12, 0usize..4, 0usize..12).prop_map(|(a, c, b)| Step::Reassign(a, c, b)),
        (0usize..12, 0usize..12).prop_map(|(a, b)| Step::DragTaskOverTask(a, b)),
        (0usize..12, 0usize..4).prop_map(|(a, c)| Step::DragTaskOverColumn(a, c)),
        (0usize..4, 0usize..4).prop_map(|(a, b)| Step::DragColumn(a, b)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..COLUMNS.len(), 0..10)
}

fn seeded(layout: &[usize]) -> BoardStore {
    let mut store = BoardStore::with_default_columns();
    for (n, column) in layout.iter().enumerate() {
        store
            .insert_task(NewTask::new(COLUMNS[*column], format!("task {n}")))
            .unwrap();
    }
    store
}

fn task_id(store: &BoardStore, index: usize) -> TaskId {
    store
        .task_at(index)
        .map(|t| t.id.clone())
        .unwrap_or_else(|| TaskId::from("stale-task"))
}

fn column_id(store: &BoardStore, index: usize) -> ColumnId {
    store
        .column_at(index)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| ColumnId::from("stale-column"))
}

fn apply(store: &mut BoardStore, step: &Step) {
    let mut session = DragSession::new();
    match *step {
        Step::MoveTask(from, to) => {
            store.move_task(from, to);
        }
        Step::MoveColumn(from, to) => {
            store.move_column(from, to);
        }
        Step::Reassign(task, column, dest) => {
            let column = column_id(store, column);
            store.reassign_and_move_task(task, &column, dest);
        }
        Step::DragTaskOverTask(active, over) => {
            session.drag_start(store, DragSubject::Task(task_id(store, active)));
            let over = DragSubject::Task(task_id(store, over));
            session.drag_over(store, Some(&over));
            session.drag_end(store, Some(&over));
        }
        Step::DragTaskOverColumn(active, over) => {
            session.drag_start(store, DragSubject::Task(task_id(store, active)));
            let over = DragSubject::Column(column_id(store, over));
            session.drag_over(store, Some(&over));
            session.drag_end(store, Some(&over));
        }
        Step::DragColumn(active, over) => {
            session.drag_start(store, DragSubject::Column(column_id(store, active)));
            let over = DragSubject::Column(column_id(store, over));
            session.drag_over(store, Some(&over));
            session.drag_end(store, Some(&over));
        }
    }
}

fn task_ids(store: &BoardStore) -> Vec<TaskId> {
    store.tasks().map(|t| t.id.clone()).collect()
}

fn column_ids(store: &BoardStore) -> Vec<ColumnId> {
    store.columns().map(|c| c.id.clone()).collect()
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}

proptest! {
    #[test]
    fn test_any_step_sequence_is_a_permutation(
        layout in board_strategy(),
        steps in prop::collection::vec(step_strategy(), 0..25),
    ) {
        let mut store = seeded(&layout);
        let tasks_before = sorted(&task_ids(&store));
        let columns_before = sorted(&column_ids(&store));

        for step in &steps {
            apply(&mut store, step);

            let tasks_now = task_ids(&store);
            let unique: HashSet<_> = tasks_now.iter().collect();
            prop_assert_eq!(unique.len(), tasks_now.len());
            prop_assert_eq!(sorted(&tasks_now), tasks_before.clone());
            prop_assert_eq!(sorted(&column_ids(&store)), columns_before.clone());
            prop_assert!(store.tasks().all(|t| store.column(&t.column_id).is_some()));
        }
    }

    #[test]
    fn test_move_task_keeps_other_tasks_in_order(
        layout in board_strategy(),
        from in 0usize..12,
        to in 0usize..12,
    ) {
        let mut store = seeded(&layout);
        let moved = store.task_at(from).map(|t| t.id.clone());
        let before = store.snapshot();

        store.move_task(from, to);

        for column in COLUMNS {
            let column = ColumnId::from(column);
            let others = |tasks: Vec<&TaskId>| -> Vec<TaskId> {
                tasks.into_iter().filter(|id| Some(*id) != moved.as_ref()).cloned().collect()
            };
            let old = others(
                before
                    .tasks
                    .iter()
                    .filter(|t| t.column_id == column)
                    .map(|t| &t.id)
                    .collect(),
            );
            let new = others(store.tasks_in_column(&column).map(|t| &t.id).collect());
            prop_assert_eq!(old, new);
        }
        // A plain move never regroups.
        for task in store.tasks() {
            let original = before.tasks.iter().find(|t| t.id == task.id).map(|t| &t.column_id);
            prop_assert_eq!(original, Some(&task.column_id));
        }
    }

    #[test]
    fn test_hover_over_self_never_changes_state(
        layout in board_strategy(),
        pick in 0usize..10,
    ) {
        let mut store = seeded(&layout);
        let before = store.snapshot();
        let rev = store.revision();
        let mut session = DragSession::new();

        let subject = if store.task_count() == 0 {
            DragSubject::Column(column_id(&store, pick % COLUMNS.len()))
        } else {
            DragSubject::Task(task_id(&store, pick % store.task_count()))
        };
        session.drag_start(&store, subject.clone());
        for _ in 0..3 {
            session.drag_over(&mut store, Some(&subject));
        }
        session.drag_end(&mut store, Some(&subject));

        prop_assert_eq!(store.snapshot(), before);
        prop_assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_indices_up_to_length_never_panic(
        layout in board_strategy(),
        a in 0usize..=11,
        b in 0usize..=11,
        column in 0usize..3,
    ) {
        let mut store = seeded(&layout);
        let len = store.task_count();
        let (a, b) = (a.min(len), b.min(len));
        let target = ColumnId::from(COLUMNS[column]);
        let before = sorted(&task_ids(&store));

        store.move_task(a, b);
        store.move_column(a.min(3), b.min(3));
        store.reassign_and_move_task(a, &target, b);
        // The drag offset rule on the first card computes 0 - 1, saturated.
        store.reassign_and_move_task(a, &target, 0usize.saturating_sub(1));

        prop_assert_eq!(sorted(&task_ids(&store)), before);
        prop_assert_eq!(store.column_count(), 3);
    }
}
