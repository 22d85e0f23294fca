use roster_domain::entity::Entity;
use roster_macros::{entity, entity_id};
use std::collections::HashSet;

#[entity_id]
#[derive(Copy)]
struct MemberId(i32);

#[entity(id = MemberId, debug = false)]
struct Member {
    name: String,
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Member({})", self.id)
    }
}

fn main() {
    let a = Member {
        id: MemberId::new(1),
        name: "Anna".into(),
    };
    let b = Member {
        id: MemberId::new(1),
        name: "Anne".into(),
    };
    // 同一标识即同一实体
    assert_eq!(a, b);

    let set: HashSet<Member> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(format!("{:?}", a), "Member(1)");
    assert_eq!(a.id(), &MemberId::new(1));
}
