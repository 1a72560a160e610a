use serde::{Deserialize, Serialize};

/// Reference to another entity, serialized as `{"id": n}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: i64,
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

pub fn entity_ref(id: Option<i64>) -> Option<EntityRef> {
    id.map(EntityRef::from)
}
