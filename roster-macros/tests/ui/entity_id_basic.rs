use roster_macros::entity_id;

#[entity_id]
#[derive(Copy)]
struct StudentId(i32);

fn main() {
    let id = StudentId::new(7);
    let _ = format!("{:?}", id);
    assert_eq!(id.to_string(), "7");

    let parsed: StudentId = "7".parse().unwrap();
    assert_eq!(parsed, id);

    let raw: i32 = id.into();
    assert_eq!(raw, 7);
    assert!(StudentId::from(3) < id);
}
