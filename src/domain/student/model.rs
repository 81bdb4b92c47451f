use serde::{Deserialize, Serialize};

/// Student record.
///
/// `id == 0` means the record has never been persisted; storage assigns
/// the identifier on create and it is immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}
