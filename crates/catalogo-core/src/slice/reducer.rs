use catalogo_api::Resource;
use tracing::{debug, warn};

use super::{
    FetchPayload, Lifecycle, MutationPayload, Operation, SliceAction, SliceState, Status, messages,
};

/// Slice reducer: folds one lifecycle action into the slice state.
pub fn reduce<R: Resource>(state: &mut SliceState<R>, action: SliceAction<R>) {
    let op = action.operation();
    match action {
        SliceAction::FetchAll(lifecycle) => reduce_fetch_all(state, lifecycle),
        SliceAction::Add(lifecycle) => reduce_mutation(state, op, lifecycle, append::<R>),
        SliceAction::Update(lifecycle) => reduce_mutation(state, op, lifecycle, replace::<R>),
        SliceAction::Remove(lifecycle) => reduce_mutation(state, op, lifecycle, drop_code::<R>),
    }
}

fn reduce_fetch_all<R: Resource>(state: &mut SliceState<R>, lifecycle: Lifecycle<FetchPayload<R>>) {
    match lifecycle {
        Lifecycle::Pending => {
            state.status = Status::Pending;
            state.message = messages::pending::<R>(Operation::Fetch);
        }
        Lifecycle::Fulfilled(payload) if payload.status => {
            state.status = Status::Idle;
            state.message = payload.message;
            state.items = payload.items;
        }
        Lifecycle::Fulfilled(payload) => {
            state.status = Status::Error;
            state.message = payload.message;
        }
        Lifecycle::Rejected(err) => {
            state.status = Status::Error;
            state.message = messages::rejected::<R>(Operation::Fetch, &err.to_string());
        }
    }
}

/// Shared shape of add/update/remove: only the fulfilled list edit differs.
///
/// The edit runs whatever the backend's reported flag was.
fn reduce_mutation<R: Resource>(
    state: &mut SliceState<R>,
    op: Operation,
    lifecycle: Lifecycle<MutationPayload<R>>,
    apply: fn(&mut Vec<R>, R),
) {
    match lifecycle {
        Lifecycle::Pending => {
            state.status = Status::Pending;
            state.message = messages::pending::<R>(op);
        }
        Lifecycle::Fulfilled(payload) => {
            state.status = Status::Idle;
            state.message = payload.message;
            apply(&mut state.items, payload.record);
        }
        Lifecycle::Rejected(err) => {
            state.status = Status::Error;
            state.message = messages::rejected::<R>(op, &err.to_string());
        }
    }
}

fn append<R: Resource>(items: &mut Vec<R>, record: R) {
    items.push(record);
}

/// Overwrite the entry with the record's code. Unknown codes leave the
/// list untouched.
fn replace<R: Resource>(items: &mut Vec<R>, record: R) {
    match items.iter_mut().find(|item| item.code() == record.code()) {
        Some(slot) => *slot = record,
        None => warn!(
            resource = R::SINGULAR,
            code = %record.code(),
            "update for a code not in the list, ignoring"
        ),
    }
}

fn drop_code<R: Resource>(items: &mut Vec<R>, record: R) {
    let before = items.len();
    items.retain(|item| item.code() != record.code());
    debug!(
        resource = R::SINGULAR,
        code = %record.code(),
        removed = before - items.len(),
        "removed from list"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use catalogo_api::Product;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn product(code: i64, name: &str) -> Product {
        serde_json::from_value(json!({ "codigo": code, "nome": name })).unwrap()
    }

    fn loaded(items: Vec<Product>) -> SliceState<Product> {
        SliceState {
            status: Status::Idle,
            message: String::new(),
            items,
        }
    }

    fn fulfilled(status: bool, message: &str, record: Product) -> Lifecycle<MutationPayload<Product>> {
        Lifecycle::Fulfilled(MutationPayload {
            status,
            message: message.into(),
            record,
        })
    }

    // ── Fetch-all ────────────────────────────────────────────────────

    #[test]
    fn fetch_pending_sets_pending_message() {
        let mut state = SliceState::<Product>::default();
        reduce(&mut state, SliceAction::FetchAll(Lifecycle::Pending));
        assert_eq!(state.status, Status::Pending);
        assert_eq!(state.message, "Fetching products...");
    }

    #[test]
    fn fetch_success_replaces_items_wholesale() {
        let mut state = loaded(vec![product(9, "old")]);
        reduce(
            &mut state,
            SliceAction::FetchAll(Lifecycle::Fulfilled(FetchPayload {
                status: true,
                items: vec![product(1, "A")],
                message: String::new(),
            })),
        );
        assert_eq!(state, loaded(vec![product(1, "A")]));
    }

    #[test]
    fn fetch_failure_keeps_previous_items() {
        let mut state = loaded(vec![product(1, "A")]);
        reduce(
            &mut state,
            SliceAction::FetchAll(Lifecycle::Fulfilled(FetchPayload {
                status: false,
                items: Vec::new(),
                message: "Failed to retrieve products from the database.".into(),
            })),
        );
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.message, "Failed to retrieve products from the database.");
        assert_eq!(state.items, vec![product(1, "A")]);
    }

    #[test]
    fn fetch_rejected_uses_bare_error_text() {
        let mut state = loaded(vec![product(1, "A")]);
        reduce(
            &mut state,
            SliceAction::FetchAll(Lifecycle::Rejected(CoreError::Internal("boom".into()))),
        );
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.message, "Internal error: boom");
        assert_eq!(state.items.len(), 1);
    }

    // ── Add ──────────────────────────────────────────────────────────

    #[test]
    fn add_appends_at_the_end() {
        let mut state = loaded(vec![product(1, "A")]);
        reduce(&mut state, SliceAction::Add(fulfilled(true, "ok", product(2, "B"))));
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.message, "ok");
        assert_eq!(state.items, vec![product(1, "A"), product(2, "B")]);
    }

    #[test]
    fn add_appends_even_when_backend_reports_failure() {
        let mut state = loaded(Vec::new());
        reduce(
            &mut state,
            SliceAction::Add(fulfilled(false, "Failed to add product.", product(2, "B"))),
        );
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.message, "Failed to add product.");
        assert_eq!(state.items, vec![product(2, "B")]);
    }

    #[test]
    fn add_rejected_prefixes_message() {
        let mut state = loaded(Vec::new());
        reduce(&mut state, SliceAction::Add(Lifecycle::Pending));
        assert_eq!(state.message, "Adding product...");

        reduce(
            &mut state,
            SliceAction::Add(Lifecycle::Rejected(CoreError::Timeout {
                url: "http://localhost:4000/produto".into(),
            })),
        );
        assert_eq!(state.status, Status::Error);
        assert_eq!(
            state.message,
            "Error adding product: Request to http://localhost:4000/produto timed out"
        );
        assert!(state.items.is_empty());
    }

    // ── Update ───────────────────────────────────────────────────────

    #[test]
    fn update_overwrites_matching_code_in_place() {
        let mut state = loaded(vec![product(1, "A"), product(2, "B"), product(3, "C")]);
        reduce(&mut state, SliceAction::Update(fulfilled(true, "ok", product(2, "B2"))));
        assert_eq!(
            state.items,
            vec![product(1, "A"), product(2, "B2"), product(3, "C")]
        );
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn update_with_unknown_code_leaves_items_untouched() {
        let before = vec![product(1, "A"), product(2, "B")];
        let mut state = loaded(before.clone());
        reduce(&mut state, SliceAction::Update(fulfilled(true, "ok", product(99, "Z"))));
        assert_eq!(state.items, before);
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.message, "ok");
    }

    #[test]
    fn update_on_empty_list_is_fenced() {
        let mut state = loaded(Vec::new());
        reduce(&mut state, SliceAction::Update(fulfilled(true, "ok", product(1, "A"))));
        assert!(state.items.is_empty());
    }

    #[test]
    fn update_pending_and_rejected_messages() {
        let mut state = loaded(Vec::new());
        reduce(&mut state, SliceAction::Update(Lifecycle::Pending));
        assert_eq!(state.message, "Updating product...");
        reduce(
            &mut state,
            SliceAction::Update(Lifecycle::Rejected(CoreError::Internal("x".into()))),
        );
        assert_eq!(state.message, "Error updating product: Internal error: x");
    }

    // ── Remove ───────────────────────────────────────────────────────

    #[test]
    fn remove_drops_exactly_the_matching_code() {
        let mut state = loaded(vec![product(1, "A"), product(2, "B"), product(3, "C")]);
        reduce(&mut state, SliceAction::Remove(fulfilled(true, "gone", product(2, "B"))));
        assert_eq!(state.items, vec![product(1, "A"), product(3, "C")]);
        assert_eq!(state.message, "gone");
    }

    #[test]
    fn remove_matches_by_code_not_by_content() {
        let mut state = loaded(vec![product(1, "A")]);
        reduce(&mut state, SliceAction::Remove(fulfilled(true, "", product(1, "stale"))));
        assert!(state.items.is_empty());
    }

    #[test]
    fn remove_unknown_code_is_a_no_op() {
        let before = vec![product(1, "A")];
        let mut state = loaded(before.clone());
        reduce(&mut state, SliceAction::Remove(fulfilled(true, "", product(7, "G"))));
        assert_eq!(state.items, before);
    }

    #[test]
    fn remove_rejected_keeps_items() {
        let mut state = loaded(vec![product(1, "A")]);
        reduce(&mut state, SliceAction::Remove(Lifecycle::Pending));
        assert_eq!(state.status, Status::Pending);
        assert_eq!(state.message, "Removing product...");
        reduce(
            &mut state,
            SliceAction::Remove(Lifecycle::Rejected(CoreError::Internal("x".into()))),
        );
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.items.len(), 1);
    }

    // ── Interleaving ─────────────────────────────────────────────────

    #[test]
    fn last_settled_operation_wins_status() {
        let mut state = loaded(Vec::new());
        reduce(&mut state, SliceAction::FetchAll(Lifecycle::Pending));
        reduce(&mut state, SliceAction::Add(Lifecycle::Pending));
        reduce(&mut state, SliceAction::Add(fulfilled(true, "added", product(1, "A"))));
        assert_eq!(state.status, Status::Idle);

        reduce(
            &mut state,
            SliceAction::FetchAll(Lifecycle::Rejected(CoreError::Internal("late".into()))),
        );
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.message, "Internal error: late");
        assert_eq!(state.items, vec![product(1, "A")]);
    }
}
