use roster_domain::entity::Entity;
use roster_macros::entity;

#[entity]
struct Member {
    name: String,
}

fn main() {
    let m = Member::new(1);
    assert_eq!(*m.id(), 1);
    assert!(m.name.is_empty());
}
