// Status messages shown to the user while and after an operation runs.

use catalogo_api::Resource;

use super::Operation;

/// Message set when an operation is issued, e.g. "Adding product...".
pub fn pending<R: Resource>(op: Operation) -> String {
    match op {
        Operation::Fetch => format!("Fetching {}...", R::PLURAL),
        Operation::Add => format!("Adding {}...", R::SINGULAR),
        Operation::Update => format!("Updating {}...", R::SINGULAR),
        Operation::Remove => format!("Removing {}...", R::SINGULAR),
    }
}

/// Generic message for a failure the backend reported without detail.
pub fn failed<R: Resource>(op: Operation) -> String {
    match op {
        Operation::Fetch => format!("Failed to retrieve {} from the database.", R::PLURAL),
        _ => format!("Failed to {op} {}.", R::SINGULAR),
    }
}

/// Fetch failure that carries the underlying error text.
pub fn failed_with<R: Resource>(op: Operation, detail: &str) -> String {
    let base = failed::<R>(op);
    let base = base.strip_suffix('.').unwrap_or(&base);
    format!("{base}: {detail}")
}

/// Message for an operation that settled as rejected.
///
/// Fetch reports the bare error text; mutations name what they were doing.
pub fn rejected<R: Resource>(op: Operation, detail: &str) -> String {
    match op {
        Operation::Fetch => detail.to_owned(),
        Operation::Add => format!("Error adding {}: {detail}", R::SINGULAR),
        Operation::Update => format!("Error updating {}: {detail}", R::SINGULAR),
        Operation::Remove => format!("Error removing {}: {detail}", R::SINGULAR),
    }
}
