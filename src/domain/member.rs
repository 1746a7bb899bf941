use serde::Serialize;

use super::{MemberName, Role};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct MemberId(i32);

impl MemberId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for MemberId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

/// A member that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMember {
    pub name: MemberName,
    pub role: Role,
}

impl NewMember {
    pub fn new(name: MemberName, role: Role) -> Self {
        Self { name, role }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
    pub role: Role,
}

impl Member {
    pub fn new(id: MemberId, member: NewMember) -> Self {
        Self {
            id,
            name: member.name,
            role: member.role,
        }
    }
}
